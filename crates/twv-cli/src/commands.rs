use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use twv_cli::{Config, Item, ProcessReport, process_report, run_demo};
use twv_model::UPPERCASE_OPTION;

use crate::cli::ProcessArgs;

pub fn run_demo_command() -> Result<ProcessReport> {
    run_demo().context("demo run failed")
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessReport> {
    let span = info_span!("process");
    let _guard = span.enter();

    let config = build_config(args)?;
    let items = load_items(args)?;
    info!(
        config = %config.name(),
        item_count = items.len(),
        "transforming items"
    );
    process_report(&items, &config, args.debug).context("process items")
}

/// Config from `--config` (or the default), with flag overrides applied.
fn build_config(args: &ProcessArgs) -> Result<Config> {
    let base = match &args.config {
        Some(path) => Config::load(path).context("load config")?,
        None => Config::default(),
    };
    // Name and value are fixed after construction, so overrides rebuild the
    // record and carry the option flags across.
    let mut config = Config::new(
        args.name.clone().unwrap_or_else(|| base.name().to_string()),
        args.value.unwrap_or(base.value()),
    );
    config.options_mut().extend(base.options().clone());
    for (key, flag) in &args.options {
        config.set_option(key.clone(), *flag);
    }
    if args.uppercase {
        config.set_option(UPPERCASE_OPTION, true);
    }
    debug!(?config, "resolved configuration");
    Ok(config)
}

fn load_items(args: &ProcessArgs) -> Result<Vec<Item>> {
    match &args.input {
        Some(path) => read_items_file(path),
        None => Ok(args.items.iter().map(|token| Item::parse_arg(token)).collect()),
    }
}

fn read_items_file(path: &Path) -> Result<Vec<Item>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read items from {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse items in {}", path.display()))
}
