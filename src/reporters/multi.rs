//! Composite reporting: several reporters for one failure

use std::path::Path;

use tracing::warn;

use super::Reporter;
use crate::constants::reporters::MULTI;
use crate::error::ReporterError;

/// Invokes every wrapped reporter, in order, for the same failure
///
/// A failing member does not stop the others; the first error is returned
/// once all members have run.
pub struct MultiReporter {
    reporters: Vec<Box<dyn Reporter>>,
}

impl MultiReporter {
    pub fn new(reporters: Vec<Box<dyn Reporter>>) -> Self {
        debug_assert!(reporters.len() > 1, "a composite wraps at least two reporters");
        Self { reporters }
    }

    pub fn reporters(&self) -> &[Box<dyn Reporter>] {
        &self.reporters
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl std::fmt::Debug for MultiReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.reporters.iter().map(|r| r.name()))
            .finish()
    }
}

impl Reporter for MultiReporter {
    fn name(&self) -> &str {
        MULTI
    }

    fn report(&self, received: &Path, approved: &Path) -> Result<(), ReporterError> {
        let mut first_error = None;
        for reporter in &self.reporters {
            if let Err(e) = reporter.report(received, approved) {
                warn!(reporter = reporter.name(), error = %e, "reporter failed");
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
