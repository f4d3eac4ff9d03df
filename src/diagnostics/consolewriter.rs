use std::{cell::RefCell, io::Write};

use crate::linter::Report;

use super::Writer;

/// Writes one line per diagnostic, in the order the checks found them.
pub struct ConsoleWriter<W: Write> {
    writer: RefCell<W>,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(writer: W) -> ConsoleWriter<W> {
        ConsoleWriter {
            writer: RefCell::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> Writer for ConsoleWriter<W> {
    fn write_report(&self, report: &Report) -> std::io::Result<()> {
        let mut w = self.writer.borrow_mut();
        for msg in report.messages() {
            writeln!(w, "{}", msg)?;
        }
        w.flush()
    }
}
