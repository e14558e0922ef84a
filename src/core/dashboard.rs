//! Drilling-progress aggregates over the hole register.

use crate::models::drill_hole::DrillHole;
use crate::models::hole_status::HoleStatus;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Search + equality filters of the holes table. Empty filter matches all.
#[derive(Debug, Clone, Default)]
pub struct HoleFilter {
    pub search: Option<String>,
    pub status: Option<HoleStatus>,
    pub location: Option<String>,
}

impl HoleFilter {
    pub fn matches(&self, hole: &DrillHole) -> bool {
        let matches_search = match &self.search {
            Some(q) => {
                let q = q.to_lowercase();
                hole.id.to_lowercase().contains(&q) || hole.site_id.to_lowercase().contains(&q)
            }
            None => true,
        };

        let matches_status = self.status.is_none_or(|s| hole.status == s);
        let matches_location = self
            .location
            .as_deref()
            .is_none_or(|l| hole.location == l);

        matches_search && matches_status && matches_location
    }

    pub fn apply<'a>(&self, holes: &'a [DrillHole]) -> Vec<&'a DrillHole> {
        holes.iter().filter(|h| self.matches(h)).collect()
    }
}

/// Group holes by location, locations in order of first appearance.
pub fn group_by_location<'a>(holes: &[&'a DrillHole]) -> Vec<(String, Vec<&'a DrillHole>)> {
    let mut groups: Vec<(String, Vec<&'a DrillHole>)> = Vec::new();

    for hole in holes {
        match groups.iter_mut().find(|(loc, _)| *loc == hole.location) {
            Some((_, list)) => list.push(hole),
            None => groups.push((hole.location.clone(), vec![*hole])),
        }
    }

    groups
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Kpis {
    pub drilled: usize,
    pub drilling: usize,
    pub planned: usize,
    pub abandoned: usize,
    /// Meters of drilled + abandoned holes.
    pub total_meters: f64,
    /// `total_meters` over drilled + abandoned holes; 0 when there are none.
    pub avg_depth: f64,
}

impl Kpis {
    pub fn compute(holes: &[DrillHole]) -> Self {
        let count = |s: HoleStatus| holes.iter().filter(|h| h.status == s).count();

        let drilled = count(HoleStatus::Drilled);
        let abandoned = count(HoleStatus::Abandoned);

        let total_meters: f64 = holes
            .iter()
            .filter(|h| h.status.is_finished())
            .map(|h| h.drilled_depth)
            .sum();

        let finished = drilled + abandoned;
        let avg_depth = if finished > 0 {
            total_meters / finished as f64
        } else {
            0.0
        };

        Self {
            drilled,
            drilling: count(HoleStatus::Drilling),
            planned: count(HoleStatus::Planned),
            abandoned,
            total_meters,
            avg_depth,
        }
    }

    pub fn total_holes(&self) -> usize {
        self.drilled + self.drilling + self.planned + self.abandoned
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationMeters {
    pub location: String,
    pub meters: f64,
    pub holes: usize,
}

/// Meters drilled per location (finished holes only), in order of first appearance.
pub fn meters_by_location(holes: &[DrillHole]) -> Vec<LocationMeters> {
    let mut out: Vec<LocationMeters> = Vec::new();

    for hole in holes {
        let idx = match out.iter().position(|l| l.location == hole.location) {
            Some(i) => i,
            None => {
                out.push(LocationMeters {
                    location: hole.location.clone(),
                    meters: 0.0,
                    holes: 0,
                });
                out.len() - 1
            }
        };

        if hole.status.is_finished() {
            out[idx].meters += hole.drilled_depth;
            out[idx].holes += 1;
        }
    }

    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    pub holes: usize,
    pub meters: f64,
}

impl MonthBucket {
    /// "Dec-24" style label.
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b-%y").to_string())
            .unwrap_or_else(|| format!("{}-{}", self.month, self.year))
    }
}

/// Completed holes per end month, oldest first. Holes without an end date are skipped.
pub fn monthly_timeline(holes: &[DrillHole]) -> Vec<MonthBucket> {
    let mut out: Vec<MonthBucket> = Vec::new();

    for hole in holes {
        let Some(end) = hole.end_date else {
            continue;
        };

        match out
            .iter_mut()
            .find(|b| b.year == end.year() && b.month == end.month())
        {
            Some(b) => {
                b.holes += 1;
                b.meters += hole.drilled_depth;
            }
            None => out.push(MonthBucket {
                year: end.year(),
                month: end.month(),
                holes: 1,
                meters: hole.drilled_depth,
            }),
        }
    }

    out.sort_by_key(|b| (b.year, b.month));
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthBucket {
    pub range: &'static str,
    pub count: usize,
}

const DEPTH_RANGES: [(&str, f64, f64); 6] = [
    ("0-300m", 0.0, 300.0),
    ("300-400m", 300.0, 400.0),
    ("400-500m", 400.0, 500.0),
    ("500-600m", 500.0, 600.0),
    ("600-700m", 600.0, 700.0),
    ("700+m", 700.0, f64::INFINITY),
];

/// Planned-depth histogram; empty buckets are omitted.
pub fn depth_distribution(holes: &[DrillHole]) -> Vec<DepthBucket> {
    let mut counts = [0usize; DEPTH_RANGES.len()];

    for hole in holes {
        let depth = hole.planned_depth;
        if let Some(i) = DEPTH_RANGES
            .iter()
            .position(|(_, min, max)| depth >= *min && depth < *max)
        {
            counts[i] += 1;
        }
    }

    DEPTH_RANGES
        .iter()
        .zip(counts)
        .filter(|(_, c)| *c > 0)
        .map(|((range, _, _), count)| DepthBucket { range, count })
        .collect()
}

/// Everything the dashboard shows, computed once.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub kpis: Kpis,
    pub locations: Vec<LocationMeters>,
    pub timeline: Vec<MonthBucket>,
    pub depths: Vec<DepthBucket>,
}

pub struct DashboardLogic;

impl DashboardLogic {
    pub fn summarize(holes: &[DrillHole]) -> DashboardSummary {
        DashboardSummary {
            kpis: Kpis::compute(holes),
            locations: meters_by_location(holes),
            timeline: monthly_timeline(holes),
            depths: depth_distribution(holes),
        }
    }
}
