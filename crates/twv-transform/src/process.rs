//! The item transformation entry points.

use tracing::{debug, error, info, info_span, trace};

use twv_model::{Config, Item, ProcessError, ProcessReport, ProcessStatus, Result};

use crate::normalization::render_item;

/// Render every item as text, preserving order.
///
/// Numbers are formatted in fixed-point with two decimals; text is
/// upper-cased when the config's `uppercase` option is set. With
/// `debug_mode` set, a debug event records the input size.
///
/// # Errors
///
/// Returns [`ProcessError::EmptyInput`] when `items` is empty.
pub fn process_data(items: &[Item], config: &Config, debug_mode: bool) -> Result<Vec<String>> {
    let span = info_span!("process_data", config = %config.name(), debug = debug_mode);
    let _guard = span.enter();

    if debug_mode {
        debug!(item_count = items.len(), "received {} input items", items.len());
    }
    if items.is_empty() {
        error!("input data cannot be empty");
        return Err(ProcessError::EmptyInput);
    }

    info!(config = %config.name(), "processing data");
    let output: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            trace!(index, kind = item.kind(), "rendering item");
            render_item(item, config)
        })
        .collect();
    info!(item_count = output.len(), "data processing complete");
    if debug_mode {
        debug!(?output, "process_data result");
    }
    Ok(output)
}

/// Run [`process_data`] and summarize the run.
///
/// # Errors
///
/// Returns [`ProcessError::EmptyInput`] when `items` is empty.
pub fn process_report(items: &[Item], config: &Config, debug_mode: bool) -> Result<ProcessReport> {
    let output = process_data(items, config, debug_mode)?;
    Ok(ProcessReport {
        status: ProcessStatus::Processed,
        item_count: items.len(),
        config_name: config.name().to_string(),
        first_item: items.first().cloned(),
        output,
    })
}
