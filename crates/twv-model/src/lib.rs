//! Data model for twat-video: the configuration record, input items,
//! the processing report and the error types shared by the workspace.

pub mod config;
pub mod error;
pub mod item;
pub mod report;

pub use config::{Config, DEFAULT_CONFIG_NAME, UPPERCASE_OPTION};
pub use error::{ConfigError, ProcessError, Result};
pub use item::Item;
pub use report::{ProcessReport, ProcessStatus};
