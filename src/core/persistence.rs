use crate::errors::AppResult;
use crate::models::log_entry::LogEntry;
use crate::models::section_key::SectionKey;

/// Receives committed interval collections.
///
/// A collection is always handed over whole and in display order; the sink
/// replaces whatever it held for the same key.
pub trait SectionSink {
    /// Previously committed collection for `key`, empty if none.
    fn load(&mut self, key: &SectionKey) -> AppResult<Vec<LogEntry>>;

    /// Replace the collection stored for `key`.
    fn commit(&mut self, key: &SectionKey, entries: &[LogEntry]) -> AppResult<()>;

    /// Periodic auto-save tick. Does nothing unless the sink opts in.
    fn autosave(&mut self, _key: &SectionKey, _entries: &[LogEntry]) -> AppResult<()> {
        Ok(())
    }
}

/// Placeholder collaborator: keeps nothing and acknowledges every commit.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SectionSink for NullSink {
    fn load(&mut self, _key: &SectionKey) -> AppResult<Vec<LogEntry>> {
        Ok(Vec::new())
    }

    fn commit(&mut self, _key: &SectionKey, _entries: &[LogEntry]) -> AppResult<()> {
        Ok(())
    }
}
