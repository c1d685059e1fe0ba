//! A reporter that stays silent

use std::path::Path;

use tracing::debug;

use super::Reporter;
use crate::constants::reporters::QUIET;
use crate::error::ReporterError;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuietReporter;

impl Reporter for QuietReporter {
    fn name(&self) -> &str {
        QUIET
    }

    fn report(&self, received: &Path, approved: &Path) -> Result<(), ReporterError> {
        debug!(
            received = %received.display(),
            approved = %approved.display(),
            "approval failure not reported"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_never_touches_files() {
        let reporter = QuietReporter;
        reporter
            .report(
                Path::new("/nonexistent/a.received.txt"),
                Path::new("/nonexistent/a.approved.txt"),
            )
            .unwrap();
    }
}
