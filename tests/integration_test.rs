// Integration tests for library-catalog

use std::io::Cursor;

use library_catalog::app::Session;
use library_catalog::Catalog;

/// Run a session over `script` and return the final catalog and everything printed.
fn run_script(script: &str) -> (Catalog, String) {
    let mut session = Session::new(
        Catalog::new("Central Library"),
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    );
    session.run().expect("session run");
    let catalog = session.catalog().clone();
    let output = String::from_utf8(session.into_output()).expect("utf8 output");
    (catalog, output)
}

// 1) The Dune/1984 walkthrough driven through the menu
#[test]
fn menu_walkthrough_add_lend_delete_return() {
    let script = "\
1\nDune\nHerbert\n111\n\
1\n1984\nOrwell\n222\n\
5\n111\n\
2\n\
4\n222\n\
6\n111\n\
2\n\
7\n";
    let (catalog, out) = run_script(script);

    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("111").unwrap().is_available());

    assert!(out.contains("Item 'Dune' has been added to the catalog."));
    assert!(out.contains("Item '1984' has been added to the catalog."));
    assert!(out.contains("Item 'Dune' has been lent."));
    assert!(out.contains("Item with ID 222 has been deleted."));
    assert!(out.contains("Item 'Dune' has been returned."));

    // First listing shows only 1984, second only Dune
    let listings: Vec<&str> = out.split("Available items:\n").skip(1).collect();
    assert_eq!(listings.len(), 2);
    assert!(listings[0].starts_with("Title: 1984, Author: Orwell, ID: 222\n"));
    assert!(!listings[0].contains("ID: 111"));
    assert!(listings[1].starts_with("Title: Dune, Author: Herbert, ID: 111\n"));
}

// 2) Blank modify fields mean "keep"
#[test]
fn modify_with_blank_fields_keeps_values() {
    let script = "1\nDune\nHerbert\n111\n3\n111\n\n\n3\n111\n\nFrank Herbert\n7\n";
    let (catalog, out) = run_script(script);

    let item = catalog.get("111").unwrap();
    assert_eq!(item.title, "Dune");
    assert_eq!(item.author, "Frank Herbert");
    assert_eq!(out.matches("Item with ID 111 has been modified.").count(), 2);
}

// 3) Not-found, invalid options and wrong-state lend/return are reported and the loop continues
#[test]
fn recoverable_conditions_do_not_end_session() {
    let script = "\
9\n\
4\n404\n\
3\n404\nX\nY\n\
5\n404\n\
6\n404\n\
1\nDune\nHerbert\n111\n\
6\n111\n\
5\n111\n\
5\n111\n\
7\n";
    let (catalog, out) = run_script(script);

    assert_eq!(out.matches("Invalid option. Please try again.").count(), 1);
    assert_eq!(out.matches("No item found with ID 404.").count(), 4);
    assert!(out.contains("Item 'Dune' was already available."));
    assert!(out.contains("Item 'Dune' is not available."));
    assert!(!catalog.get("111").unwrap().is_available());
    // Menu shown once per iteration: 10 selections read
    assert_eq!(out.matches("Central Library menu").count(), 10);
}

// 4) Exit stops reading further input
#[test]
fn exit_ignores_remaining_input() {
    let (catalog, out) = run_script("7\n1\nDune\nHerbert\n111\n");
    assert!(catalog.is_empty());
    assert_eq!(out.matches("Choose an option: ").count(), 1);
}

// 5) End of input closes the session cleanly, even mid-prompt
#[test]
fn end_of_input_closes_session() {
    let (catalog, out) = run_script("1\nDune\n");
    assert!(catalog.is_empty());
    assert!(out.ends_with("Item author: "));

    let (catalog, _) = run_script("");
    assert!(catalog.is_empty());

    // Input ends after the new title: the modify is abandoned, nothing changes
    let (catalog, out) = run_script("1\nDune\nHerbert\n111\n3\n111\nArrakis\n");
    assert_eq!(catalog.get("111").unwrap().title, "Dune");
    assert!(!out.contains("has been modified"));
    assert!(out.ends_with("New author (leave blank to keep): "));
}

// 6) Windows line endings are stripped from fields
#[test]
fn crlf_input_is_accepted() {
    let (catalog, _) = run_script("1\r\nDune\r\nHerbert\r\n111\r\n5\r\n111\r\n7\r\n");
    let item = catalog.get("111").expect("item added with clean id");
    assert_eq!(item.title, "Dune");
    assert!(!item.is_available());
}

// 7) Fields are kept verbatim apart from the line terminator
#[test]
fn whitespace_in_fields_is_significant() {
    let script = "1\nDune\nHerbert\n111\n3\n111\n  \n\n5\n 111\n7\n";
    let (catalog, out) = run_script(script);

    let item = catalog.get("111").unwrap();
    // Only the empty string means "keep"; whitespace overwrites
    assert_eq!(item.title, "  ");
    assert_eq!(item.author, "Herbert");
    // " 111" does not match "111"
    assert!(out.contains("No item found with ID  111."));
    assert!(item.is_available());
}

// 8) Config file roundtrip
#[test]
fn config_roundtrip_via_file() {
    use std::time::{SystemTime, UNIX_EPOCH};
    use library_catalog::app::config::SessionConfig;

    let mut path = std::env::temp_dir();
    let nonce = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    path.push(format!("library_catalog_{}_{}.conf", std::process::id(), nonce));
    let path_str = path.to_string_lossy().to_string();

    let cfg = SessionConfig {
        catalog_name: "Branch Library".into(),
        log_filter: Some("library_catalog=debug".into()),
    };
    cfg.write_file(&path_str).expect("write config");
    let loaded = SessionConfig::from_file(&path_str).expect("read config");
    assert_eq!(loaded, cfg);

    let _ = std::fs::remove_file(&path_str);
}
