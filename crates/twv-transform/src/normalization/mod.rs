//! Per-item normalization used by the transformation function.
//!
//! - **numeric**: fixed-point formatting of numbers
//! - **text**: case normalization of text items

pub mod numeric;
pub mod text;

pub use numeric::{FIXED_DECIMALS, format_fixed, format_fixed_integer};
pub use text::normalize_text;

use twv_model::{Config, Item};

/// Render one input item as text under the given configuration.
pub fn render_item(item: &Item, config: &Config) -> String {
    match item {
        Item::Integer(value) => format_fixed_integer(*value),
        Item::Float(value) => format_fixed(*value),
        Item::Text(text) => normalize_text(text, config.uppercase()),
    }
}
