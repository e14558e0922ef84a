//! In-memory interval collections, one per (project, hole, section).

use crate::core::persistence::SectionSink;
use crate::errors::{AppError, AppResult};
use crate::models::field::FieldUpdate;
use crate::models::log_entry::{LogEntry, LogRow};
use crate::models::section_key::SectionKey;
use crate::models::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How `depth_from` edits are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthPolicy {
    /// `depth_from` must also stay below the entry's current `depth_to`.
    #[default]
    Strict,
    /// Only `depth_to` is compared against `depth_from`.
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreOptions {
    pub depth_policy: DepthPolicy,
    /// Intervals strictly longer than this (meters) are flagged as large.
    pub large_interval_threshold: f64,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            depth_policy: DepthPolicy::Strict,
            large_interval_threshold: 5.0,
        }
    }
}

/// Acknowledgement returned by `save`.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveReceipt {
    pub key: SectionKey,
    pub intervals: usize,
}

impl SaveReceipt {
    pub fn message(&self) -> String {
        format!(
            "Saved {} intervals for {}",
            self.intervals, self.key.section
        )
    }
}

pub struct IntervalLogStore<S: SectionSink> {
    sections: HashMap<SectionKey, Vec<LogEntry>>,
    sink: S,
    options: StoreOptions,
}

impl<S: SectionSink> IntervalLogStore<S> {
    pub fn new(sink: S, options: StoreOptions) -> Self {
        Self {
            sections: HashMap::new(),
            sink,
            options,
        }
    }

    /// Load the committed collection for `key`, replacing any in-memory copy.
    /// Returns the number of intervals loaded.
    pub fn activate(&mut self, key: &SectionKey) -> AppResult<usize> {
        let entries = self.sink.load(key)?;
        let n = entries.len();
        self.sections.insert(key.clone(), entries);
        Ok(n)
    }

    /// Like `activate`, but an empty section starts with one 0 → 2 m interval.
    pub fn seed(&mut self, key: &SectionKey) -> AppResult<usize> {
        let n = self.activate(key)?;
        if n > 0 {
            return Ok(n);
        }

        self.sections
            .insert(key.clone(), vec![LogEntry::new(0.0, 2.0)]);
        Ok(1)
    }

    /// Drop the in-memory collection without committing it.
    pub fn discard(&mut self, key: &SectionKey) -> bool {
        self.sections.remove(key).is_some()
    }

    pub fn is_active(&self, key: &SectionKey) -> bool {
        self.sections.contains_key(key)
    }

    /// Whether entry `id` exists in the collection for `key`.
    pub fn contains(&self, key: &SectionKey, id: &str) -> bool {
        self.sections
            .get(key)
            .is_some_and(|entries| entries.iter().any(|e| e.id == id))
    }

    /// Append an interval that continues from the last one.
    pub fn add_entry(&mut self, key: &SectionKey) -> String {
        let entries = self.sections.entry(key.clone()).or_default();

        let depth_from = entries.last().map(|e| e.depth_to).unwrap_or(0.0);
        let entry = LogEntry::new(depth_from, depth_from + 1.0);
        let id = entry.id.clone();

        entries.push(entry);
        id
    }

    /// Apply a single-field update to entry `id`.
    ///
    /// Rejected depth edits leave the entry untouched. An unknown id or an
    /// inactive section is not an error: nothing happens.
    pub fn update_field(
        &mut self,
        key: &SectionKey,
        id: &str,
        update: FieldUpdate,
    ) -> Result<(), ValidationError> {
        let policy = self.options.depth_policy;

        let Some(entry) = self
            .sections
            .get_mut(key)
            .and_then(|entries| entries.iter_mut().find(|e| e.id == id))
        else {
            return Ok(());
        };

        match update {
            FieldUpdate::DepthFrom(value) => {
                if value.is_nan() || value < 0.0 {
                    return Err(ValidationError::NegativeDepth { value });
                }
                if policy == DepthPolicy::Strict && value >= entry.depth_to {
                    return Err(ValidationError::InvalidDepthOrder {
                        depth_from: value,
                        depth_to: entry.depth_to,
                    });
                }
                entry.depth_from = value;
            }
            FieldUpdate::DepthTo(value) => {
                if value.is_nan() || value < 0.0 {
                    return Err(ValidationError::NegativeDepth { value });
                }
                if value <= entry.depth_from {
                    return Err(ValidationError::InvalidDepthOrder {
                        depth_from: entry.depth_from,
                        depth_to: value,
                    });
                }
                entry.depth_to = value;
            }
            FieldUpdate::SulphidePercent(pct) => entry.sulphide_percent = pct,
            FieldUpdate::Measure(field, value) => *entry.measure_mut(field) = value,
            FieldUpdate::Text(field, value) => entry.set_text(field, value),
        }

        Ok(())
    }

    /// Remove entry `id`. Returns whether something was removed.
    pub fn delete_entry(&mut self, key: &SectionKey, id: &str) -> bool {
        let Some(entries) = self.sections.get_mut(key) else {
            return false;
        };

        let before = entries.len();
        entries.retain(|e| e.id != id);
        entries.len() != before
    }

    /// Current rows in insertion order, with derived flags computed now.
    pub fn list_entries(&self, key: &SectionKey) -> Vec<LogRow> {
        let threshold = self.options.large_interval_threshold;

        self.sections
            .get(key)
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| LogRow::new(e, threshold))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self, key: &SectionKey) -> usize {
        self.sections.get(key).map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self, key: &SectionKey) -> bool {
        self.len(key) == 0
    }

    /// Entry id shown at 1-based table row `row`.
    pub fn id_at_row(&self, key: &SectionKey, row: usize) -> AppResult<String> {
        row.checked_sub(1)
            .and_then(|idx| self.sections.get(key).and_then(|entries| entries.get(idx)))
            .map(|e| e.id.clone())
            .ok_or(AppError::InvalidRow(row))
    }

    /// Hand the whole collection for `key` to the sink.
    pub fn save(&mut self, key: &SectionKey) -> AppResult<SaveReceipt> {
        let entries = self
            .sections
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default();

        self.sink.commit(key, entries)?;

        Ok(SaveReceipt {
            key: key.clone(),
            intervals: entries.len(),
        })
    }

    /// Auto-save callback; inactive keys are skipped.
    pub fn autosave(&mut self, key: &SectionKey) -> AppResult<()> {
        match self.sections.get(key) {
            Some(entries) => self.sink.autosave(key, entries),
            None => Ok(()),
        }
    }
}
