mod include;
pub mod project;

pub use include::resolve_includes;
pub use project::*;
