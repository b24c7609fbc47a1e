//! Handlers run against the frameworks shipped in `frameworks/`.

use std::path::PathBuf;

use cfx_catalog::{Catalog, SortOrder};
use cfx_checklist::SessionOptions;
use cfx_cli::checklist::{run_checklist, ChecklistArgs};
use cfx_cli::list::{run_list, ListArgs};
use cfx_cli::show::{run_show, ShowArgs};

fn bundled() -> Catalog {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../frameworks");
    Catalog::load_dir(&dir).unwrap()
}

fn output(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<u8>) -> (u8, String) {
    let mut out = Vec::new();
    let code = f(&mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn test_bundled_catalog_loads_every_format() {
    let catalog = bundled();
    let ids: Vec<&str> = catalog.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["gdpr", "iso-27001", "nist-csf", "soc2"]);
    assert_eq!(catalog.categories(), vec!["Privacy", "Security", "Assurance"]);
}

#[test]
fn test_show_nist_keeps_function_order() {
    let catalog = bundled();
    let args = ShowArgs {
        framework: "nist-csf".to_string(),
    };
    let (code, text) = output(|out| run_show(&args, &catalog, out));
    assert_eq!(code, 0);

    let headers: Vec<&str> = text
        .lines()
        .filter(|l| !l.starts_with(' ') && l.contains(" (0/"))
        .map(|l| l.split(' ').next().unwrap())
        .collect();
    assert_eq!(
        headers,
        vec!["GOVERN", "IDENTIFY", "PROTECT", "DETECT", "RESPOND", "RECOVER"]
    );
    assert!(text.ends_with("0 of 16 controls implemented (0%)\n"));
}

#[test]
fn test_show_ungrouped_framework_has_no_headers() {
    let catalog = bundled();
    let args = ShowArgs {
        framework: "gdpr".to_string(),
    };
    let (_, text) = output(|out| run_show(&args, &catalog, out));
    assert!(!text.contains(cfx_core::GENERAL_GROUP));
    assert!(text.contains(
        "\n[ ] Art.5  Principles relating to processing of personal data  (Critical)\n"
    ));
}

#[test]
fn test_list_sorted_by_control_count() {
    let catalog = bundled();
    let args = ListArgs {
        sort: SortOrder::Controls,
        ..ListArgs::default()
    };
    let (_, text) = output(|out| run_list(&args, &catalog, out));
    let first: Vec<&str> = text.lines().map(|l| l.split_whitespace().next().unwrap()).collect();
    assert_eq!(first, vec!["nist-csf", "iso-27001", "gdpr", "soc2"]);
}

#[test]
fn test_checklist_custom_group_follows_seeded_groups() {
    let catalog = bundled();
    let args = ChecklistArgs {
        framework: "nist-csf".to_string(),
        toggles: vec!["GV.OC-01".to_string(), "RC.CO-03".to_string()],
        add_controls: vec![
            r#"{"id":"ACME-1","name":"Vendor review","group":"Acme Extras"}"#.to_string(),
            r#"{"id":"ACME-2","name":"Tabletop exercise","group":"RESPOND"}"#.to_string(),
        ],
        json: true,
        ..ChecklistArgs::default()
    };
    let (code, text) = output(|out| run_checklist(&args, &catalog, SessionOptions::default(), out));
    assert_eq!(code, 0);

    let snapshot: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(snapshot["implemented"], 2);
    assert_eq!(snapshot["total"], 18);
    assert_eq!(snapshot["percent"], 11);

    let keys: Vec<&str> = snapshot["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec!["GOVERN", "IDENTIFY", "PROTECT", "DETECT", "RESPOND", "RECOVER", "Acme Extras"]
    );
    assert_eq!(snapshot["groups"][4]["total"], 3);
}
