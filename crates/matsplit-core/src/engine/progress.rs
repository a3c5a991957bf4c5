use std::fmt;

/// A non-fatal condition observed during a split.
///
/// Warnings are reported as [`Progress::Warning`] events while the workflow
/// runs and collected into the final report, so callers can assert on them
/// as values instead of scraping log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitWarning {
    /// A configured filter column does not exist; the filter was skipped.
    FilterColumnMissing { column: String },
    /// Records that cannot be stratified (categories with fewer than two
    /// members, or missing stratification values) were routed to train.
    DegenerateCategories { categories: usize, rows: usize },
}

impl fmt::Display for SplitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitWarning::FilterColumnMissing { column } => {
                write!(f, "Column '{column}' not found; skipping this filter")
            }
            SplitWarning::DegenerateCategories { categories, rows } => {
                write!(
                    f,
                    "{rows} record(s) in {categories} degenerate categor{} routed to the training set",
                    if *categories == 1 { "y" } else { "ies" }
                )
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
    Warning(SplitWarning),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_messages_read_naturally() {
        let missing = SplitWarning::FilterColumnMissing {
            column: "num_sites".into(),
        };
        assert_eq!(
            missing.to_string(),
            "Column 'num_sites' not found; skipping this filter"
        );

        let one = SplitWarning::DegenerateCategories {
            categories: 1,
            rows: 3,
        };
        assert_eq!(
            one.to_string(),
            "3 record(s) in 1 degenerate category routed to the training set"
        );

        let many = SplitWarning::DegenerateCategories {
            categories: 4,
            rows: 9,
        };
        assert_eq!(
            many.to_string(),
            "9 record(s) in 4 degenerate categories routed to the training set"
        );
    }

    #[test]
    fn reporter_without_callback_is_a_no_op() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PhaseStart { name: "Loading" });
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn reporter_forwards_events_to_the_callback() {
        use std::sync::Mutex;

        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Message(text) = event {
                seen.lock().unwrap().push(text);
            }
        }));
        reporter.report(Progress::Message("hello".into()));
        reporter.report(Progress::PhaseFinish);

        assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
    }
}
