use std::{cell::RefCell, io::Write};

use serde::Serialize;

use crate::linter::{Diagnostic, Report};

use super::Writer;

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
    message: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    functions: usize,
    violations: bool,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

/// Writes the whole report as a single JSON document.
pub struct JsonWriter<W: Write> {
    writer: RefCell<W>,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> JsonWriter<W> {
        JsonWriter {
            writer: RefCell::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> Writer for JsonWriter<W> {
    fn write_report(&self, report: &Report) -> std::io::Result<()> {
        let doc = JsonReport {
            functions: report.functions(),
            violations: report.has_violations(),
            diagnostics: report
                .diagnostics()
                .iter()
                .map(|d| JsonDiagnostic {
                    diagnostic: d,
                    message: d.message(report.exclusion_marker()),
                })
                .collect(),
        };

        let mut w = self.writer.borrow_mut();
        serde_json::to_writer_pretty(&mut *w, &doc)?;
        writeln!(w)?;
        w.flush()
    }
}
