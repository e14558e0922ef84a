use super::hole_status::HoleStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dashboard summary of a hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillHole {
    pub id: String,
    pub site_id: String,
    pub location: String, // block, e.g. "BLOCK 4"
    pub status: HoleStatus,
    pub planned_depth: f64,
    pub drilled_depth: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>, // None while ongoing
    #[serde(default)]
    pub status_note: String,
    pub has_photo: bool,
    pub has_litho: bool,
    pub has_samples: bool,
}

impl DrillHole {
    /// A newly registered hole: nothing drilled, nothing logged.
    pub fn planned(
        id: impl Into<String>,
        site_id: impl Into<String>,
        location: impl Into<String>,
        planned_depth: f64,
    ) -> Self {
        Self {
            id: id.into(),
            site_id: site_id.into(),
            location: location.into(),
            status: HoleStatus::Planned,
            planned_depth,
            drilled_depth: 0.0,
            start_date: None,
            end_date: None,
            status_note: "Not Drilled".to_string(),
            has_photo: false,
            has_litho: false,
            has_samples: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.has_photo && self.has_litho && self.has_samples
    }
}
