mod common;
use common::hole;
use drilllog::core::dashboard::{
    DashboardLogic, HoleFilter, Kpis, depth_distribution, group_by_location, meters_by_location,
    monthly_timeline,
};
use drilllog::models::drill_hole::DrillHole;
use drilllog::models::hole_status::HoleStatus;

fn register() -> Vec<DrillHole> {
    vec![
        hole("IDD4074", "BLOCK 4", HoleStatus::Drilled, 475.0, 521.7, Some("2024-12-12")),
        hole("IDD4076", "BLOCK 4", HoleStatus::Drilled, 520.0, 573.5, Some("2025-03-25")),
        hole("IDD4079", "BLOCK 4", HoleStatus::Drilling, 570.0, 278.0, None),
        hole("IDDUG016", "UNDERGROUND", HoleStatus::Abandoned, 250.0, 120.0, Some("2024-12-02")),
        hole("IDD420", "BLOCK 1", HoleStatus::Planned, 720.0, 0.0, None),
        hole("IDD4080", "BLOCK 4", HoleStatus::Planned, 650.0, 0.0, None),
    ]
}

#[test]
fn kpis_count_statuses_and_finished_meters() {
    let k = Kpis::compute(&register());

    assert_eq!(k.drilled, 2);
    assert_eq!(k.drilling, 1);
    assert_eq!(k.planned, 2);
    assert_eq!(k.abandoned, 1);
    assert_eq!(k.total_holes(), 6);

    let total = 521.7 + 573.5 + 120.0;
    assert!((k.total_meters - total).abs() < 1e-9);
    assert!((k.avg_depth - total / 3.0).abs() < 1e-9);
}

#[test]
fn kpis_average_is_zero_without_finished_holes() {
    let holes = vec![hole("A", "X", HoleStatus::Planned, 300.0, 0.0, None)];
    let k = Kpis::compute(&holes);

    assert_eq!(k.total_meters, 0.0);
    assert_eq!(k.avg_depth, 0.0);
}

#[test]
fn filter_matches_search_status_and_location() {
    let holes = register();

    let by_search = HoleFilter {
        search: Some("idd40".into()),
        ..HoleFilter::default()
    };
    assert_eq!(by_search.apply(&holes).len(), 4);

    let by_site = HoleFilter {
        search: Some("SITE_IDD420".into()),
        ..HoleFilter::default()
    };
    assert_eq!(by_site.apply(&holes).len(), 1);

    let by_status_and_location = HoleFilter {
        search: None,
        status: Some(HoleStatus::Planned),
        location: Some("BLOCK 4".into()),
    };
    let shown = by_status_and_location.apply(&holes);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "IDD4080");

    assert_eq!(HoleFilter::default().apply(&holes).len(), holes.len());
}

#[test]
fn groups_keep_first_appearance_order() {
    let holes = register();
    let all = HoleFilter::default().apply(&holes);

    let groups = group_by_location(&all);
    let names: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();

    assert_eq!(names, ["BLOCK 4", "UNDERGROUND", "BLOCK 1"]);
    assert_eq!(groups[0].1.len(), 4);
}

#[test]
fn meters_by_location_counts_finished_holes_only() {
    let locs = meters_by_location(&register());

    let block4 = locs.iter().find(|l| l.location == "BLOCK 4").unwrap();
    assert!((block4.meters - (521.7 + 573.5)).abs() < 1e-9);
    assert_eq!(block4.holes, 2);

    let block1 = locs.iter().find(|l| l.location == "BLOCK 1").unwrap();
    assert_eq!(block1.meters, 0.0);
}

#[test]
fn timeline_is_chronological() {
    let timeline = monthly_timeline(&register());

    let labels: Vec<String> = timeline.iter().map(|m| m.label()).collect();
    assert_eq!(labels, ["Dec-24", "Mar-25"]);

    assert_eq!(timeline[0].holes, 2);
    assert!((timeline[0].meters - (521.7 + 120.0)).abs() < 1e-9);
}

#[test]
fn depth_distribution_omits_empty_buckets() {
    let buckets = depth_distribution(&register());

    let pairs: Vec<(&str, usize)> = buckets.iter().map(|b| (b.range, b.count)).collect();
    assert_eq!(
        pairs,
        [("0-300m", 1), ("400-500m", 1), ("500-600m", 2), ("600-700m", 1), ("700+m", 1)]
    );
}

#[test]
fn summary_of_empty_register() {
    let s = DashboardLogic::summarize(&[]);

    assert_eq!(s.kpis.total_holes(), 0);
    assert!(s.locations.is_empty());
    assert!(s.timeline.is_empty());
    assert!(s.depths.is_empty());
}
