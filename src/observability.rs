//! Observer hooks for processing outcomes.
//!
//! Operations that soft-fail (unknown strategy names, absent target columns)
//! report a [`ProcessingWarning`] instead of returning an error, and file
//! writes report completion. Implementors can log, count, or alert.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A non-fatal condition encountered while processing.
///
/// Every warning leaves the input table unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingWarning {
    /// A strategy name passed to the missing-value dispatcher was not recognized.
    UnknownStrategy { name: String },
    /// A join strategy name was not recognized; the join fell back to inner.
    UnknownJoinStrategy { name: String },
    /// The requested target column does not exist in the table.
    MissingColumn { column: String },
}

impl fmt::Display for ProcessingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingWarning::UnknownStrategy { name } => {
                write!(f, "unknown missing-value strategy '{name}', returning input unchanged")
            }
            ProcessingWarning::UnknownJoinStrategy { name } => {
                write!(f, "unknown join strategy '{name}', falling back to inner")
            }
            ProcessingWarning::MissingColumn { column } => {
                write!(f, "column '{column}' not found, returning input unchanged")
            }
        }
    }
}

/// Observer interface for processing outcomes.
pub trait ProcessingObserver: Send + Sync {
    /// Called when an operation soft-fails and returns its input unchanged.
    fn on_warning(&self, _warning: &ProcessingWarning) {}

    /// Called after a table is written to disk.
    fn on_table_written(&self, _path: &Path, _rows: usize) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ProcessingObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ProcessingObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ProcessingObserver for CompositeObserver {
    fn on_warning(&self, warning: &ProcessingWarning) {
        for o in &self.observers {
            o.on_warning(warning);
        }
    }

    fn on_table_written(&self, path: &Path, rows: usize) {
        for o in &self.observers {
            o.on_table_written(path, rows);
        }
    }
}

/// Logs processing events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ProcessingObserver for StdErrObserver {
    fn on_warning(&self, warning: &ProcessingWarning) {
        eprintln!("[processing][warn] {warning}");
    }

    fn on_table_written(&self, path: &Path, rows: usize) {
        eprintln!("[processing][ok] wrote path={} rows={rows}", path.display());
    }
}
