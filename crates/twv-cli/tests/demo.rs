//! Integration tests for the public twv-cli surface.

use twv_cli::{Config, Item, ProcessError, VERSION, process_data, run_demo};

#[test]
fn version_is_exposed() {
    assert!(!VERSION.is_empty());
    assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
}

#[test]
fn demo_report_snapshot() {
    let report = run_demo().expect("demo runs");
    insta::assert_json_snapshot!(report, @r###"
    {
      "status": "processed",
      "item_count": 4,
      "config_name": "example_run_config",
      "first_item": "item1",
      "output": [
        "item1",
        "item2",
        "42.00",
        "3.50"
      ]
    }
    "###);
}

#[test]
fn reexported_process_data_matches_scenarios() {
    let items = vec![Item::from("apple"), Item::from("banana"), Item::from(123)];

    let plain = process_data(&items, &Config::default(), false).unwrap();
    assert_eq!(plain, vec!["apple", "banana", "123.00"]);

    let mut config = Config::default();
    config.set_option("uppercase", true);
    let upper = process_data(&items, &config, false).unwrap();
    assert_eq!(upper, vec!["APPLE", "BANANA", "123.00"]);
}

#[test]
fn reexported_process_data_rejects_empty_input() {
    assert_eq!(
        process_data(&[], &Config::default(), false),
        Err(ProcessError::EmptyInput)
    );
}
