use super::section::Section;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one logging collection: a section of a hole of a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionKey {
    pub project_id: String,
    pub hole_id: String,
    pub section: Section,
}

impl SectionKey {
    pub fn new(project_id: impl Into<String>, hole_id: impl Into<String>, section: Section) -> Self {
        Self {
            project_id: project_id.into(),
            hole_id: hole_id.into(),
            section,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.project_id, self.hole_id, self.section.to_db_str())
    }
}
