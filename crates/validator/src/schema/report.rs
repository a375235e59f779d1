//! The outcome of validating one record.

use crate::foundation::Failure;
use std::fmt;

/// Verdict plus every failure, in field registration order.
///
/// A report with failures is itself an error, so
/// [`into_result`](Self::into_result) lets callers propagate it with `?`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    checked: usize,
    failures: Vec<Failure>,
}

impl ValidationReport {
    pub(crate) fn new(checked: usize, failures: Vec<Failure>) -> Self {
        Self { checked, failures }
    }

    /// `true` when no field failed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of fields that were validated.
    #[must_use]
    pub const fn checked(&self) -> usize {
        self.checked
    }

    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// The failure recorded for `key`, if any.
    #[must_use]
    pub fn failure_for(&self, key: &str) -> Option<&Failure> {
        self.failures.iter().find(|failure| failure.key == key)
    }

    #[must_use]
    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }

    /// # Errors
    ///
    /// Returns the report itself when any field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.passed() { Ok(()) } else { Err(self) }
    }

    /// `{"passed": bool, "failures": [...]}` with each failure as
    /// [`Failure::to_json`] renders it.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "passed": self.passed(),
            "failures": self.failures.iter().map(Failure::to_json).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "validation passed ({} fields checked)", self.checked);
        }
        write!(f, "validation failed with {} failure(s)", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "\n  - {failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

impl IntoIterator for ValidationReport {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}
