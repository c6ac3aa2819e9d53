//! Percent-complete reporting shared by every stage.

use std::fmt;

/// Wraps an optional progress observer and keeps its reports sane.
///
/// Percentages are clamped to `0..=100` and never decrease. The observer is
/// purely informational: nothing a stage computes depends on it.
pub struct ProgressReporter<'a> {
    callback: Option<Box<dyn FnMut(u8) + 'a>>,
    last: Option<u8>,
}

impl<'a> ProgressReporter<'a> {
    /// Create a reporter forwarding to `callback`.
    pub fn new(callback: impl FnMut(u8) + 'a) -> Self {
        Self {
            callback: Some(Box::new(callback)),
            last: None,
        }
    }

    /// Create a reporter that discards every report.
    pub fn silent() -> Self {
        Self {
            callback: None,
            last: None,
        }
    }

    /// Report `done` out of `total` units of work.
    ///
    /// A `total` of zero counts as finished.
    pub fn report(&mut self, done: usize, total: usize) {
        self.report_percent(percent(done, total));
    }

    /// Report an explicit percentage.
    pub fn report_percent(&mut self, percent: u8) {
        let percent = percent.min(100).max(self.last.unwrap_or(0));
        self.last = Some(percent);
        if let Some(callback) = self.callback.as_mut() {
            callback(percent);
        }
    }

    /// Report 100% unless that was already the last report.
    pub fn finish(&mut self) {
        if self.last != Some(100) {
            self.report_percent(100);
        }
    }

    /// The last percentage reported, if any.
    pub fn last(&self) -> Option<u8> {
        self.last
    }
}

impl fmt::Debug for ProgressReporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("observed", &self.callback.is_some())
            .field("last", &self.last)
            .finish()
    }
}

impl Default for ProgressReporter<'_> {
    fn default() -> Self {
        Self::silent()
    }
}

/// Integer percentage of `done` over `total`.
pub(crate) fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (done.min(total) * 100 / total) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_empty_work_is_complete() {
        assert_eq!(percent(0, 0), 100);
        assert_eq!(percent(1, 4), 25);
        assert_eq!(percent(9, 4), 100);
    }

    #[test]
    fn reports_never_decrease() {
        let mut seen = vec![];
        {
            let mut reporter = ProgressReporter::new(|p| seen.push(p));
            reporter.report(2, 4);
            reporter.report(1, 4);
            reporter.finish();
            reporter.finish();
        }
        assert_eq!(seen, vec![50, 50, 100]);
    }

    #[test]
    fn silent_reporter_tracks_last() {
        let mut reporter = ProgressReporter::silent();
        reporter.report(3, 10);
        assert_eq!(reporter.last(), Some(30));
    }
}
