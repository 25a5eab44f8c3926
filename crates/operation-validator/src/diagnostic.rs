//! Pretty-printing of validation errors against the operation source, with
//! [`ariadne`].
//!
//! ```rust
//! use operation_validator::{Color, OperationValidator, Parser, Report};
//!
//! let schema = Parser::new()
//!     .parse_schema("type Query { pet: Pet } type Pet { name: String! }")
//!     .unwrap();
//! let operation = Parser::new().parse_executable("{ pet { nickname } }").unwrap();
//!
//! let mut report = Report::new();
//! OperationValidator::default().validate(&operation, &schema, Some(&mut report));
//! println!("{}", report.to_diagnostics(&operation, Color::Never));
//! ```

use crate::ast::Document;
use crate::report::ExternalError;
use crate::report::Report;
use ariadne::ReportKind;
use std::fmt;
use std::io;
use std::ops::Range;

/// Indicate when to use ANSI colors for printing.
#[derive(Debug, Clone, Copy)]
pub enum Color {
    /// Do not use colors.
    Never,
    /// Use colors if stderr is a terminal.
    StderrIsTerminal,
}

/// Displays every error of a [`Report`] with source excerpts.
pub struct Diagnostics<'a> {
    report: &'a Report,
    operation: &'a Document,
    color: Color,
}

impl Report {
    /// Returns a displayable rendering of this report. `operation` must be the
    /// document the report was filled for.
    pub fn to_diagnostics<'a>(&'a self, operation: &'a Document, color: Color) -> Diagnostics<'a> {
        Diagnostics {
            report: self,
            operation,
            color,
        }
    }
}

impl ExternalError {
    fn write_report(&self, operation: &Document, color: Color, w: impl io::Write) -> io::Result<()> {
        let source = operation.input.source();
        let span = self
            .span
            .map(|span| char_range(source, span.start as usize..span.end as usize));
        let offset = span.as_ref().map_or(0, |span| span.start);
        let enable_color = match color {
            Color::Never => false,
            // ariadne's `auto-color` feature decides whether stderr supports colors
            Color::StderrIsTerminal => true,
        };
        let mut report = ariadne::Report::build(ReportKind::Error, (), offset)
            .with_config(ariadne::Config::default().with_color(enable_color))
            .with_code(self.code())
            .with_message(&self.data);
        if let Some(span) = span {
            report.add_label(ariadne::Label::new(span).with_message(&self.data));
        }
        report.finish().write(ariadne::Source::from(source), w)
    }
}

/// ariadne counts characters, spans count bytes.
fn char_range(source: &str, bytes: Range<usize>) -> Range<usize> {
    let to_char = |offset: usize| {
        source
            .get(..offset.min(source.len()))
            .map_or(0, |prefix| prefix.chars().count())
    };
    to_char(bytes.start)..to_char(bytes.end)
}

/// Provide a [`std::io::Write`] API for a [`std::fmt::Formatter`].
struct WriteToFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
}

impl io::Write for WriteToFormatter<'_, '_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = std::str::from_utf8(buf).map_err(|_| io::ErrorKind::Other)?;
        self.f.write_str(s).map_err(|_| io::ErrorKind::Other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for Diagnostics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.report.external_errors {
            error
                .write_report(self.operation, self.color, WriteToFormatter { f: &mut *f })
                .map_err(|_| fmt::Error)?;
        }
        for error in &self.report.internal_errors {
            writeln!(f, "internal error: {error}")?;
        }
        Ok(())
    }
}
