//! CLI library components for twat-video.
//!
//! Re-exports the configuration record, the transformation function and the
//! version string alongside the demo entry point and logging setup.

pub mod demo;
pub mod logging;

pub use demo::run_demo;
pub use twv_model::{Config, Item, ProcessError, ProcessReport};
pub use twv_transform::{VERSION, process_data, process_report};
