use super::field::{Field, NumericField, TextField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One logged depth interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub depth_from: f64, // meters
    pub depth_to: f64,   // meters, > depth_from
    pub sulphide_percent: u8,
    #[serde(default)]
    pub depth_to_fresh: f64,
    #[serde(default)]
    pub conglomerate_from: f64,
    #[serde(default)]
    pub conglomerate_to: f64,
    /// Set classification fields only; a missing key means "unset".
    #[serde(default)]
    pub attributes: BTreeMap<TextField, String>,
}

impl LogEntry {
    /// Fresh interval with every classification field unset.
    pub fn new(depth_from: f64, depth_to: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            depth_from,
            depth_to,
            sulphide_percent: 0,
            depth_to_fresh: 0.0,
            conglomerate_from: 0.0,
            conglomerate_to: 0.0,
            attributes: BTreeMap::new(),
        }
    }

    pub fn length(&self) -> f64 {
        self.depth_to - self.depth_from
    }

    pub fn text(&self, field: TextField) -> Option<&str> {
        self.attributes.get(&field).map(String::as_str)
    }

    /// Assign a classification field; an empty value unsets it.
    pub fn set_text(&mut self, field: TextField, value: String) {
        if value.is_empty() {
            self.attributes.remove(&field);
        } else {
            self.attributes.insert(field, value);
        }
    }

    pub fn measure(&self, field: NumericField) -> f64 {
        match field {
            NumericField::DepthToFresh => self.depth_to_fresh,
            NumericField::ConglomerateFrom => self.conglomerate_from,
            NumericField::ConglomerateTo => self.conglomerate_to,
        }
    }

    pub fn measure_mut(&mut self, field: NumericField) -> &mut f64 {
        match field {
            NumericField::DepthToFresh => &mut self.depth_to_fresh,
            NumericField::ConglomerateFrom => &mut self.conglomerate_from,
            NumericField::ConglomerateTo => &mut self.conglomerate_to,
        }
    }

    /// Cell text for a field (empty when unset).
    pub fn display(&self, field: Field) -> String {
        match field {
            Field::DepthFrom => format_depth(self.depth_from),
            Field::DepthTo => format_depth(self.depth_to),
            Field::SulphidePercent => format!("{}%", self.sulphide_percent),
            Field::Measure(m) => format_depth(self.measure(m)),
            Field::Text(t) => self.text(t).unwrap_or_default().to_string(),
        }
    }
}

fn format_depth(v: f64) -> String {
    format!("{:.2}", v)
}

/// A listed entry with its derived flags, as handed to a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRow {
    #[serde(flatten)]
    pub entry: LogEntry,
    pub large_interval: bool,
}

impl LogRow {
    pub fn new(entry: &LogEntry, large_threshold: f64) -> Self {
        Self {
            large_interval: entry.length() > large_threshold,
            entry: entry.clone(),
        }
    }
}
