//! Writers which present a lint [`Report`] to the user.
use crate::linter::Report;

mod consolewriter;
mod jsonwriter;
mod tests;

pub use consolewriter::ConsoleWriter;
pub use jsonwriter::JsonWriter;

/// Defines a way to emit the findings of a lint run.
pub trait Writer {
    /// Write every diagnostic in `report` to the output target
    fn write_report(&self, report: &Report) -> std::io::Result<()>;
}
