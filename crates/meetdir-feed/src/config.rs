//! Directory configuration.

use meetdir_core::VideoService;

/// Static configuration for one directory load.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Fixed day-name vocabulary, in display order.
    pub days: Vec<String>,
    /// Default page size for the meeting list.
    pub page_size: usize,
    /// Video-service recognition table; first match wins.
    pub services: Vec<VideoService>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            days: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]
            .iter()
            .map(|day| day.to_string())
            .collect(),
            page_size: 10,
            services: default_services(),
        }
    }
}

impl DirectoryConfig {
    /// Builder: set the day vocabulary.
    pub fn with_days(mut self, days: Vec<String>) -> Self {
        self.days = days;
        self
    }

    /// Builder: set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Builder: set the video-service table.
    pub fn with_services(mut self, services: Vec<VideoService>) -> Self {
        self.services = services;
        self
    }
}

/// Built-in video-service recognition table.
///
/// Matching is by hostname suffix, so subdomains ("us04web.zoom.us") are
/// recognized.
pub fn default_services() -> Vec<VideoService> {
    vec![
        VideoService::new("Zoom", &["zoom.us", "zoomgov.com"]),
        VideoService::new("Google Meet", &["meet.google.com"]),
        VideoService::new("Microsoft Teams", &["teams.microsoft.com", "teams.live.com"]),
        VideoService::new("Jitsi", &["meet.jit.si"]),
        VideoService::new("Webex", &["webex.com"]),
        VideoService::new("Skype", &["skype.com"]),
        VideoService::new("BlueJeans", &["bluejeans.com"]),
        VideoService::new("GoToMeeting", &["gotomeeting.com"]),
    ]
}
