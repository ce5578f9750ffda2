pub mod entry;
pub mod error;
pub mod macros;
pub mod scaffold;
pub mod suites;
pub mod types;

pub use entry::{EntryFunction, ProcessEntry};
pub use error::ScaffoldError;
pub use scaffold::{check_case, confirmation, run_suite};
pub use types::{Suite, SuiteKind, SuiteReport, TestCase};
