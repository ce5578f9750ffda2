/// Test Scaffold - fail-fast suite runner
///
/// **Core Responsibility:**
/// Call the entry once per case, compare the result to the authored
/// expectation with strict equality, stop at the first disagreement.
///
/// **Comparison Rules:**
/// - Exact `PartialEq` on the entry's output type
/// - No trimming, no case folding, no tolerance
/// - One failure ends the run; later cases are never invoked
///
/// Knows nothing about where the entry lives (in-process or external program)
/// or how results are shown to the user.
use crate::entry::EntryFunction;
use crate::error::ScaffoldError;
use crate::types::{Suite, SuiteKind, SuiteReport, TestCase};
use std::fmt::Debug;
use tracing::{debug, info};

/// Run one case against the entry
pub fn check_case<I, O, E>(entry: &mut E, case: &TestCase<I, O>) -> Result<(), ScaffoldError>
where
    I: Clone,
    O: PartialEq + Debug,
    E: EntryFunction<I, O> + ?Sized,
{
    let actual = entry
        .invoke(case.input.clone())
        .map_err(|reason| ScaffoldError::Entry {
            case: case.name.clone(),
            reason,
        })?;

    if actual != case.expected_output {
        debug!(case = %case.name, expected = ?case.expected_output, actual = ?actual, "Output mismatch");
        return Err(ScaffoldError::AssertionMismatch {
            case: case.name.clone(),
            expected: format!("{:?}", case.expected_output),
            actual: format!("{:?}", actual),
        });
    }

    debug!(case = %case.name, "Output matched");
    Ok(())
}

/// Run every case of a suite in order.
///
/// Returns at the first failing case. An empty suite passes.
pub fn run_suite<I, O, E>(entry: &mut E, suite: &Suite<I, O>) -> Result<SuiteReport, ScaffoldError>
where
    I: Clone,
    O: PartialEq + Debug,
    E: EntryFunction<I, O> + ?Sized,
{
    info!(suite = %suite.kind, cases = suite.len(), "Running suite");

    let mut passed = Vec::with_capacity(suite.len());
    for case in &suite.cases {
        check_case(&mut *entry, case)?;
        passed.push(case.name.clone());
    }

    info!(suite = %suite.kind, passed = passed.len(), "Suite passed");

    Ok(SuiteReport {
        kind: suite.kind,
        passed,
    })
}

/// Line printed once a whole suite has passed
pub fn confirmation(kind: SuiteKind) -> String {
    format!("All {} tests passed!", kind)
}
