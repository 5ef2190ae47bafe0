//! Core types: meetings, contact buttons, tags, filters, search

pub mod contact;
pub mod meeting;
pub mod query;
pub mod search;
pub mod state;
pub mod tags;
pub mod tracing;

pub use contact::{ContactError, VideoService, email_button, phone_button, url_button};
pub use meeting::{ActionButton, ButtonAction, ButtonIcon, Meeting};
pub use query::parse_query;
pub use search::search_index;
pub use state::State;
pub use tags::{Filters, Tag, TagVocabulary, fixed_tags, split_tokens};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
