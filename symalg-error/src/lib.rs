//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs an [`ErrorKind`] with the regions of the input it
//! concerns.
//!
//! Both the parser and the symbolic engine report their failures through [`Error`]. Callers that
//! need to react to a specific failure can recover the concrete kind with
//! [`Error::downcast_kind`].

use ariadne::{Color, Report};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error kind as [`Any`], so that it can be downcast to its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    ///
    /// `spans` may be empty if the error is not associated with any region of the input.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Returns the kind of this error as the concrete type `K`, or [`None`] if the error is of a
    /// different kind.
    pub fn downcast_kind<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the error is of kind `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.downcast_kind::<K>().is_some()
    }
}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind, Source};
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Misplaced {
        symbol: char,
    }

    impl ErrorKind for Misplaced {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans.first().map_or(0, |span| span.start))
                .with_message(format!("misplaced `{}`", self.symbol))
                .with_labels(spans.iter().map(|span| {
                    Label::new((src_id, span.clone())).with_color(EXPR).with_message("here")
                }))
                .finish()
        }
    }

    #[derive(Debug)]
    struct Other;

    impl ErrorKind for Other {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            _: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, 0).finish()
        }
    }

    #[test]
    fn downcast_to_concrete_kind() {
        let err = Error::new(vec![2..3], Misplaced { symbol: ')' });
        assert_eq!(err.downcast_kind::<Misplaced>(), Some(&Misplaced { symbol: ')' }));
        assert!(err.is::<Misplaced>());
        assert!(!err.is::<Other>());
    }

    #[test]
    fn report_mentions_message_and_label() {
        let input = "1 +) 2";
        let err = Error::new(vec![3..4], Misplaced { symbol: ')' });

        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(input)), &mut buf)
            .unwrap();
        let output = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();

        assert!(output.contains("misplaced `)`"));
        assert!(output.contains("here"));
    }
}
