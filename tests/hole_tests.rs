mod common;
use common::{date, temp_out};
use drilllog::core::hole::{HoleDraft, HoleLogic};
use drilllog::db::pool::DbPool;
use drilllog::db::queries::load_holes;
use drilllog::errors::AppError;
use drilllog::models::hole_status::HoleStatus;
use std::fs;
use std::path::Path;

fn complete_draft() -> HoleDraft {
    HoleDraft {
        hole_no: "IDD4081".into(),
        project_id: "P1".into(),
        site_id: "Blk4_2025_009".into(),
        location: "BLOCK 4".into(),
        hole_type: "Diamond".into(),
        hole_size: "HQ".into(),
        contractor: "Geodrill".into(),
        logged_by: "J. Mensah".into(),
        geologist: "A. Owusu".into(),
        start_date: Some(date("2025-10-01")),
        maximum_depth: Some(540.0),
        azimuth: Some(225.0),
        dip: Some(-60.0),
        drill_purpose: "Resource definition".into(),
        ..HoleDraft::default()
    }
}

#[test]
fn default_draft_lists_every_missing_field() {
    let err = HoleDraft::default().validate().unwrap_err();

    match err {
        AppError::MissingFields(missing) => {
            // status and country are pre-filled
            assert_eq!(
                missing,
                [
                    "hole_no",
                    "project_id",
                    "hole_type",
                    "hole_size",
                    "contractor",
                    "logged_by",
                    "geologist",
                    "start_date",
                    "maximum_depth",
                    "azimuth",
                    "dip",
                    "drill_purpose"
                ]
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn azimuth_and_dip_ranges_are_inclusive() {
    let mut d = complete_draft();
    d.azimuth = Some(360.0);
    d.dip = Some(-90.0);
    assert!(d.validate().is_ok());

    d.azimuth = Some(360.5);
    assert!(matches!(d.validate(), Err(AppError::OutOfRange(_))));

    d.azimuth = Some(0.0);
    d.dip = Some(91.0);
    let err = d.validate().unwrap_err();
    assert_eq!(err.to_string(), "Dip must be between -90 to +90°");
}

#[test]
fn create_registers_a_planned_hole() {
    let pool = DbPool::in_memory().expect("db");

    let hole = HoleLogic::create(&pool.conn, &complete_draft()).expect("created");
    assert_eq!(hole.status, HoleStatus::Planned);
    assert_eq!(hole.planned_depth, 540.0);
    assert_eq!(hole.drilled_depth, 0.0);

    let holes = load_holes(&pool.conn).unwrap();
    assert_eq!(holes.len(), 1);
    assert_eq!(holes[0], hole);
}

#[test]
fn create_rejects_duplicates() {
    let pool = DbPool::in_memory().expect("db");

    HoleLogic::create(&pool.conn, &complete_draft()).unwrap();
    let err = HoleLogic::create(&pool.conn, &complete_draft()).unwrap_err();

    assert!(matches!(err, AppError::DuplicateHole(id) if id == "IDD4081"));
}

#[test]
fn invalid_draft_stores_nothing() {
    let pool = DbPool::in_memory().expect("db");

    let mut d = complete_draft();
    d.contractor.clear();
    assert!(HoleLogic::create(&pool.conn, &d).is_err());

    assert!(load_holes(&pool.conn).unwrap().is_empty());
}

const REGISTER_CSV: &str = "\
id,site_id,location,status,planned_depth,drilled_depth,start_date,end_date,status_note,has_photo,has_litho,has_samples
IDD4074,Blk4_021,BLOCK 4,DRILLED,475,521.7,23-Oct-24,12-Dec-24,Drilled from 2024,true,true,true
IDD4079,Blk4_2025_001A,BLOCK 4,DRILLING,570,278,12-Sep-25,Ongoing,Ongoing,false,false,false
IDD420,IDD420,BLOCK 1,NOT DRILLED,720,0,,,Not Drilled,false,false,false
";

#[test]
fn import_reads_register_dates_and_statuses() {
    let path = temp_out("hole_import", "csv");
    fs::write(&path, REGISTER_CSV).unwrap();

    let holes = HoleLogic::read_csv(Path::new(&path)).unwrap();
    assert_eq!(holes.len(), 3);

    assert_eq!(holes[0].end_date, Some(date("2024-12-12")));
    assert!(holes[0].is_complete());
    assert_eq!(holes[1].status, HoleStatus::Drilling);
    assert_eq!(holes[1].end_date, None);
    assert_eq!(holes[2].status, HoleStatus::Planned);
    assert_eq!(holes[2].start_date, None);
}

#[test]
fn import_inserts_then_updates() {
    let path = temp_out("hole_import_twice", "csv");
    fs::write(&path, REGISTER_CSV).unwrap();
    let pool = DbPool::in_memory().expect("db");

    let first = HoleLogic::import(&pool.conn, Path::new(&path)).unwrap();
    assert_eq!((first.inserted, first.updated), (3, 0));

    let second = HoleLogic::import(&pool.conn, Path::new(&path)).unwrap();
    assert_eq!((second.inserted, second.updated), (0, 3));

    let ids: Vec<String> = load_holes(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|h| h.id)
        .collect();
    assert_eq!(ids, ["IDD4074", "IDD4079", "IDD420"]);
}

#[test]
fn import_rejects_unknown_status() {
    let path = temp_out("hole_import_bad", "csv");
    fs::write(
        &path,
        "id,site_id,location,status,planned_depth\nX1,S,B,SUSPENDED,100\n",
    )
    .unwrap();

    let err = HoleLogic::read_csv(Path::new(&path)).unwrap_err();
    assert!(matches!(err, AppError::InvalidStatus(s) if s == "SUSPENDED"));
}
