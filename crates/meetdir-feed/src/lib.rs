//! Feed extraction and transformation pipeline for the meeting directory

pub mod config;
pub mod error;
pub mod pipeline;
pub mod raw_row;
pub mod times;

pub use config::{DirectoryConfig, default_services};
pub use error::{FieldKind, RowError, Warning};
pub use pipeline::{LoadOutcome, load_state};
pub use raw_row::RawRow;
pub use times::{Expansion, WeeklyTime, expand, next_occurrence, parse_weekly};
