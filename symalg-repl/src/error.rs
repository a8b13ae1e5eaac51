use ariadne::Source;
use symalg_error::Error as SymError;

/// Utility enum to package errors that can occur while parsing / differentiating.
#[derive(Debug)]
pub enum Error {
    /// Error that occurred while parsing.
    Parse(SymError),

    /// Error that occurred while differentiating.
    Differentiate(SymError),
}

impl Error {
    /// Report the error in this [`Error`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        let err = match self {
            Self::Parse(err) | Self::Differentiate(err) => err,
        };

        let report = err.build_report("input");
        if let Err(io_err) = report.eprint(("input", Source::from(input))) {
            tracing::warn!(%io_err, "failed to print error report");
        }
    }
}
