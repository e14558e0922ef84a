use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

mod common;
use common::{drilllog, init_db, section_cmd, setup_test_db};

fn list_json(db_path: &str) -> Vec<Value> {
    let out = section_cmd(db_path, "list", &["--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).expect("utf8 output");
    let value: Value = serde_json::from_str(text.trim()).expect("json rows");
    value.as_array().cloned().expect("array of rows")
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    drilllog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_chains_intervals() {
    let db_path = setup_test_db("cli_add_chain");
    init_db(&db_path);

    section_cmd(&db_path, "add", &[])
        .assert()
        .success()
        .stdout(contains("Row added"));
    section_cmd(&db_path, "add", &[]).assert().success();

    let rows = list_json(&db_path);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["depth_from"], 0.0);
    assert_eq!(rows[0]["depth_to"], 1.0);
    assert_eq!(rows[1]["depth_from"], 1.0);
    assert_eq!(rows[1]["depth_to"], 2.0);
    assert_eq!(rows[1]["large_interval"], false);
}

#[test]
fn test_set_rejects_invalid_depth_order() {
    let db_path = setup_test_db("cli_set_reject");
    init_db(&db_path);
    section_cmd(&db_path, "add", &[]).assert().success();
    section_cmd(&db_path, "add", &[]).assert().success();

    section_cmd(
        &db_path,
        "set",
        &["--row", "2", "--field", "depth_to", "--value", "0"],
    )
    .assert()
    .failure()
    .stderr(contains("Validation error").and(contains("depth_to must exceed depth_from")));

    let rows = list_json(&db_path);
    assert_eq!(rows[1]["depth_to"], 2.0);
}

#[test]
fn test_set_rejects_negative_depth() {
    let db_path = setup_test_db("cli_set_negative");
    init_db(&db_path);
    section_cmd(&db_path, "add", &[]).assert().success();

    section_cmd(
        &db_path,
        "set",
        &["--row", "1", "--field", "depth_from", "--value", "-1"],
    )
    .assert()
    .failure()
    .stderr(contains("negative depth"));
}

#[test]
fn test_set_updates_field_and_flags_large_interval() {
    let db_path = setup_test_db("cli_set_large");
    init_db(&db_path);
    section_cmd(&db_path, "add", &[]).assert().success();

    section_cmd(
        &db_path,
        "set",
        &["--row", "1", "--field", "depth-to", "--value", "6"],
    )
    .assert()
    .success();
    section_cmd(
        &db_path,
        "set",
        &["--row", "1", "--field", "lithology", "--value", "Granite"],
    )
    .assert()
    .success()
    .stdout(contains("Granite"));

    let rows = list_json(&db_path);
    assert_eq!(rows[0]["depth_to"], 6.0);
    assert_eq!(rows[0]["large_interval"], true);
    assert_eq!(rows[0]["attributes"]["lithology"], "Granite");
}

#[test]
fn test_set_sulphide_is_range_checked() {
    let db_path = setup_test_db("cli_sulphide");
    init_db(&db_path);
    section_cmd(&db_path, "add", &[]).assert().success();

    section_cmd(
        &db_path,
        "set",
        &["--row", "1", "--field", "sulphide_percent", "--value", "150"],
    )
    .assert()
    .failure()
    .stderr(contains("between 0 and 100"));

    section_cmd(
        &db_path,
        "set",
        &["--row", "1", "--field", "sulphide_percent", "--value", "35"],
    )
    .assert()
    .success();

    assert_eq!(list_json(&db_path)[0]["sulphide_percent"], 35);
}

#[test]
fn test_set_unknown_field_fails() {
    let db_path = setup_test_db("cli_unknown_field");
    init_db(&db_path);
    section_cmd(&db_path, "add", &[]).assert().success();

    section_cmd(
        &db_path,
        "set",
        &["--row", "1", "--field", "porosity", "--value", "x"],
    )
    .assert()
    .failure()
    .stderr(contains("Unknown field: porosity"));
}

#[test]
fn test_del_by_row_and_missing_row() {
    let db_path = setup_test_db("cli_del");
    init_db(&db_path);
    section_cmd(&db_path, "add", &[]).assert().success();
    section_cmd(&db_path, "add", &[]).assert().success();

    let second_id = list_json(&db_path)[1]["id"].as_str().unwrap().to_string();

    section_cmd(&db_path, "del", &["--row", "1"])
        .assert()
        .success()
        .stderr(contains("Row deleted"));

    let rows = list_json(&db_path);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], second_id.as_str());

    section_cmd(&db_path, "del", &["--row", "5"])
        .assert()
        .failure()
        .stderr(contains("No interval at row 5"));
}

#[test]
fn test_set_unknown_id_changes_nothing() {
    let db_path = setup_test_db("cli_set_unknown_id");
    init_db(&db_path);
    section_cmd(&db_path, "add", &[]).assert().success();

    section_cmd(
        &db_path,
        "set",
        &["--id", "does-not-exist", "--field", "lithology", "--value", "Granite"],
    )
    .assert()
    .success()
    .stdout(contains("nothing changed"));

    let rows = list_json(&db_path);
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["attributes"]["lithology"].is_null());

    drilllog()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("does-not-exist").not());
}

#[test]
fn test_save_seeds_empty_section() {
    let db_path = setup_test_db("cli_save");
    init_db(&db_path);

    section_cmd(&db_path, "save", &[])
        .assert()
        .success()
        .stdout(contains("Saved 1 intervals for Lithology"));

    let rows = list_json(&db_path);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["depth_to"], 2.0);
}

#[test]
fn test_sections_do_not_share_rows() {
    let db_path = setup_test_db("cli_sections");
    init_db(&db_path);
    section_cmd(&db_path, "add", &[]).assert().success();

    drilllog()
        .args([
            "--db", &db_path, "list", "--project", "P1", "--hole", "IDD4074", "--section",
            "samples",
        ])
        .assert()
        .success()
        .stdout(contains("No intervals logged."));
}

#[test]
fn test_options_lists_values() {
    drilllog()
        .args(["options", "lithology"])
        .assert()
        .success()
        .stdout(contains("Granite").and(contains("Dolerite")));

    drilllog()
        .args(["options", "--section", "depth-conglomerate"])
        .assert()
        .success()
        .stdout(contains("pebble_size").and(contains("lithology").not()));
}

#[test]
fn test_hole_add_validation_and_list() {
    let db_path = setup_test_db("cli_hole");
    init_db(&db_path);

    drilllog()
        .args(["--db", &db_path, "hole", "add", "--hole-no", "IDD4081"])
        .assert()
        .failure()
        .stderr(contains("Please fill in all required fields"));

    drilllog()
        .args([
            "--db",
            &db_path,
            "hole",
            "add",
            "--hole-no",
            "IDD4081",
            "--project",
            "P1",
            "--location",
            "BLOCK 4",
            "--hole-type",
            "Diamond",
            "--hole-size",
            "HQ",
            "--contractor",
            "Geodrill",
            "--logged-by",
            "J. Mensah",
            "--geologist",
            "A. Owusu",
            "--start-date",
            "2025-10-01",
            "--max-depth",
            "540",
            "--azimuth",
            "225",
            "--dip",
            "-60",
            "--purpose",
            "Resource definition",
        ])
        .assert()
        .success()
        .stdout(contains("Drill hole IDD4081 created successfully!"));

    drilllog()
        .args(["--db", &db_path, "hole", "list"])
        .assert()
        .success()
        .stdout(contains("IDD4081").and(contains("NOT DRILLED")));

    drilllog()
        .args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Total holes     1").and(contains("BLOCK 4")));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);
    section_cmd(&db_path, "add", &[]).assert().success();

    drilllog()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("add")).and(contains("P1/IDD4074/lithology")));
}
