use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum HoleStatus {
    Planned,
    Drilling,
    Drilled,
    Abandoned,
}

impl HoleStatus {
    pub const ALL: [HoleStatus; 4] = [
        HoleStatus::Drilled,
        HoleStatus::Drilling,
        HoleStatus::Planned,
        HoleStatus::Abandoned,
    ];

    /// Label used by the drilling register ("NOT DRILLED", "DRILLED", ...).
    pub fn label(&self) -> &'static str {
        match self {
            HoleStatus::Planned => "NOT DRILLED",
            HoleStatus::Drilling => "DRILLING",
            HoleStatus::Drilled => "DRILLED",
            HoleStatus::Abandoned => "ABANDONED",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Parse a register label or a plain status name, any case.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "NOT DRILLED" | "PLANNED" => Some(HoleStatus::Planned),
            "DRILLING" => Some(HoleStatus::Drilling),
            "DRILLED" => Some(HoleStatus::Drilled),
            "ABANDONED" => Some(HoleStatus::Abandoned),
            _ => None,
        }
    }

    /// Holes whose drilled depth counts towards meters drilled.
    pub fn is_finished(&self) -> bool {
        matches!(self, HoleStatus::Drilled | HoleStatus::Abandoned)
    }
}

impl fmt::Display for HoleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
