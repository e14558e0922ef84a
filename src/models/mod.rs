pub mod drill_hole;
pub mod field;
pub mod hole_status;
pub mod log_entry;
pub mod options;
pub mod section;
pub mod section_key;
pub mod validation;
