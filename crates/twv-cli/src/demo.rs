//! Fixed demonstration run used by `twat-video demo`.

use tracing::{error, info, info_span};

use twv_model::{Config, Item, ProcessReport, Result};
use twv_transform::{VERSION, process_report};

/// Configuration used by [`run_demo`].
pub fn demo_config() -> Config {
    Config::new("example_run_config", 123).with_option("feature_x", true)
}

/// Items used by [`run_demo`].
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::from("item1"),
        Item::from("item2"),
        Item::from(42),
        Item::from(3.5),
    ]
}

/// Run the demonstration sequence and log its result.
///
/// # Errors
///
/// Propagates the processing error after logging it.
pub fn run_demo() -> Result<ProcessReport> {
    let span = info_span!("demo");
    let _guard = span.enter();
    info!("Starting twat-video (version {VERSION})");

    let config = demo_config();
    info!(?config, "using configuration");
    let items = demo_items();
    info!(item_count = items.len(), "prepared sample data");

    match process_report(&items, &config, true) {
        Ok(report) => {
            info!(output = ?report.output, "Processing completed");
            info!("twat-video finished");
            Ok(report)
        }
        Err(err) => {
            error!(error = %err, "demo run failed");
            Err(err)
        }
    }
}
