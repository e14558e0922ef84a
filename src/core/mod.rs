pub mod autosave;
pub mod config;
pub mod dashboard;
pub mod hole;
pub mod interval;
pub mod log;
pub mod persistence;
pub mod store;
