// src/export/model.rs

use crate::models::field::Field;
use crate::models::log_entry::LogRow;
use crate::models::section::Section;
use crate::models::section_key::SectionKey;
use serde::Serialize;
use serde_json::{Map, Value};

/// Flat, column-ordered view of one section, ready for writing.
#[derive(Debug, Clone, Serialize)]
pub struct SectionExport {
    pub project_id: String,
    pub hole_id: String,
    pub section: Section,
    #[serde(skip)]
    pub headers: Vec<&'static str>,
    #[serde(skip)]
    pub rows: Vec<Vec<String>>,
    #[serde(rename = "rows")]
    pub records: Vec<Map<String, Value>>,
}

/// Leading columns shared by every section.
const BASE_HEADERS: [&str; 4] = ["id", "depth_from", "depth_to", "large_interval"];

fn section_fields(section: Section) -> impl Iterator<Item = Field> {
    section.columns().iter().copied()
}

pub(crate) fn get_headers(section: Section) -> Vec<&'static str> {
    BASE_HEADERS
        .into_iter()
        .chain(section_fields(section).map(Field::name))
        .collect()
}

fn row_to_cells(section: Section, row: &LogRow) -> Vec<String> {
    let e = &row.entry;
    let mut cells = vec![
        e.id.clone(),
        e.depth_from.to_string(),
        e.depth_to.to_string(),
        row.large_interval.to_string(),
    ];

    cells.extend(section_fields(section).map(|f| match f {
        Field::SulphidePercent => e.sulphide_percent.to_string(),
        Field::Measure(m) => e.measure(m).to_string(),
        other => e.display(other),
    }));

    cells
}

fn row_to_record(section: Section, row: &LogRow) -> Map<String, Value> {
    let e = &row.entry;
    let mut map = Map::new();

    map.insert("id".into(), Value::from(e.id.clone()));
    map.insert("depth_from".into(), Value::from(e.depth_from));
    map.insert("depth_to".into(), Value::from(e.depth_to));
    map.insert("large_interval".into(), Value::from(row.large_interval));

    for f in section_fields(section) {
        let v = match f {
            Field::SulphidePercent => Value::from(e.sulphide_percent),
            Field::Measure(m) => Value::from(e.measure(m)),
            Field::Text(t) => e.text(t).map(Value::from).unwrap_or(Value::Null),
            Field::DepthFrom | Field::DepthTo => continue,
        };
        map.insert(f.name().into(), v);
    }

    map
}

impl SectionExport {
    pub fn build(key: &SectionKey, rows: &[LogRow]) -> Self {
        Self {
            project_id: key.project_id.clone(),
            hole_id: key.hole_id.clone(),
            section: key.section,
            headers: get_headers(key.section),
            rows: rows.iter().map(|r| row_to_cells(key.section, r)).collect(),
            records: rows.iter().map(|r| row_to_record(key.section, r)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
