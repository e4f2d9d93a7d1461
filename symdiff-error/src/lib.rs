//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

#[cfg(test)]
extern crate self as symdiff_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error kind as [`Any`], so that callers can recover the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
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

    /// Returns the kind of this error as the concrete type `K`, or [`None`] if the error is of a
    /// different kind.
    pub fn downcast_kind<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if this error is of kind `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.downcast_kind::<K>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer, highlighting the given input.
    pub fn write_report(&self, src_id: &str, input: &str, w: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), w)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

#[cfg(test)]
mod tests {
    use ariadne::Fmt;
    use symdiff_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = "unknown operator",
        labels = [format!("`{}` is not an operator", self.name.as_str().fg(EXPR))],
        help = "try one of: + - * / ^ sin cos tan exp ln",
    )]
    struct UnknownThing {
        name: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "unexpected end of file", labels = [""])]
    struct Eof;

    fn render(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.write_report("input", input, &mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn downcast() {
        let err = Error::new(vec![1..2], UnknownThing { name: "@".to_string() });
        assert!(err.is::<UnknownThing>());
        assert!(!err.is::<Eof>());
        assert_eq!(err.downcast_kind::<UnknownThing>().unwrap().name, "@");
    }

    #[test]
    fn report_contains_message_label_and_help() {
        let err = Error::new(vec![1..2], UnknownThing { name: "@".to_string() });
        let report = render(&err, "(@ x 1)");

        assert!(report.contains("unknown operator"));
        assert!(report.contains("`@` is not an operator"));
        assert!(report.contains("try one of"));
    }

    #[test]
    fn report_with_empty_label() {
        let err = Error::new(vec![5..5], Eof);
        let report = render(&err, "(+ x");
        assert!(report.contains("unexpected end of file"));
    }
}
