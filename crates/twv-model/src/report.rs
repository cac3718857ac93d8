use serde::{Deserialize, Serialize};

use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    Processed,
}

/// Summary of one transformation run, with the rendered output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub status: ProcessStatus,
    pub item_count: usize,
    pub config_name: String,
    /// First input item. JSON has no non-finite numbers, so a `NaN` or
    /// infinite float serializes as `null` and reads back as `None`.
    pub first_item: Option<Item>,
    pub output: Vec<String>,
}

impl ProcessReport {
    pub fn is_processed(&self) -> bool {
        self.status == ProcessStatus::Processed
    }
}
