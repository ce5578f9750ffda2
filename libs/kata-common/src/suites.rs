// Placeholder suites every new kata starts from.
// Kata authors replace these literals with real cases.
use crate::types::{Suite, SuiteKind, TestCase};

pub fn public_suite() -> Suite {
    Suite::new(
        SuiteKind::Public,
        vec![
            TestCase::literal("test_basic_case", "test_input", "expected_output"),
            TestCase::literal("test_edge_case", "edge_input", "edge_output"),
            TestCase::literal("test_another_case", "another_input", "another_output"),
        ],
    )
}

pub fn hidden_suite() -> Suite {
    Suite::new(
        SuiteKind::Hidden,
        vec![
            TestCase::literal("test_hidden_case_1", "complex_input", "complex_output"),
            TestCase::literal("test_hidden_case_2", "performance_input", "performance_output"),
            TestCase::literal("test_hidden_case_3", "tricky_input", "tricky_output"),
        ],
    )
}

pub fn builtin_suite(kind: SuiteKind) -> Suite {
    match kind {
        SuiteKind::Public => public_suite(),
        SuiteKind::Hidden => hidden_suite(),
    }
}

/// Answer key for the placeholder suites; anything else maps to an empty string
pub fn placeholder_solution(input: String) -> String {
    public_suite()
        .cases
        .into_iter()
        .chain(hidden_suite().cases)
        .find(|case| case.input == input)
        .map(|case| case.expected_output)
        .unwrap_or_default()
}
