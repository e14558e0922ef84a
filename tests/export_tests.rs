use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, section_cmd, setup_test_db, temp_out};

fn db_with_two_rows(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db(&db_path);
    section_cmd(&db_path, "add", &[]).assert().success();
    section_cmd(&db_path, "add", &[]).assert().success();
    section_cmd(
        &db_path,
        "set",
        &["--row", "1", "--field", "colour", "--value", "Grey"],
    )
    .assert()
    .success();
    db_path
}

#[test]
fn test_export_section_csv() {
    let db_path = db_with_two_rows("export_section_csv");
    let out = temp_out("export_section_csv", "csv");

    section_cmd(&db_path, "export", &["--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,depth_from,depth_to,large_interval,lithology,sub_lithology,colour,texture,grain_size,sorting"
    );
    assert!(lines.next().unwrap().contains(",0,1,false,,,Grey,"));
    assert!(lines.next().unwrap().contains(",1,2,false,"));
}

#[test]
fn test_export_section_json() {
    let db_path = db_with_two_rows("export_section_json");
    let out = temp_out("export_section_json", "json");

    section_cmd(&db_path, "export", &["--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(v["hole_id"], "IDD4074");
    assert_eq!(v["section"], "Lithology");
    assert_eq!(v["rows"].as_array().unwrap().len(), 2);
    assert_eq!(v["rows"][0]["colour"], "Grey");
    assert!(v["rows"][0]["lithology"].is_null());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = db_with_two_rows("export_relative");

    section_cmd(&db_path, "export", &["--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites() {
    let db_path = db_with_two_rows("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").unwrap();

    section_cmd(&db_path, "export", &["--file", &out, "--force"])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("id,"));
}

#[test]
fn test_export_declined_keeps_file() {
    let db_path = db_with_two_rows("export_declined");
    let out = temp_out("export_declined", "csv");
    fs::write(&out, "old").unwrap();

    section_cmd(&db_path, "export", &["--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).unwrap(), "old");
}
