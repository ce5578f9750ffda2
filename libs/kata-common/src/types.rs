use serde::{Deserialize, Serialize};
use std::fmt;

/// A single authored case: one literal input, one literal expected output.
///
/// Generic over the entry function's signature; the default is the
/// string-to-string shape every kata template starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase<I = String, O = String> {
    pub name: String,
    pub input: I,
    pub expected_output: O,
}

impl<I, O> TestCase<I, O> {
    pub fn new(name: impl Into<String>, input: I, expected_output: O) -> Self {
        Self {
            name: name.into(),
            input,
            expected_output,
        }
    }
}

impl TestCase {
    /// Build a string case from borrowed literals
    pub fn literal(name: &str, input: &str, expected_output: &str) -> Self {
        Self::new(name, input.to_string(), expected_output.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteKind {
    Public,
    Hidden,
}

impl SuiteKind {
    pub const ALL: [SuiteKind; 2] = [SuiteKind::Public, SuiteKind::Hidden];
}

impl fmt::Display for SuiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SuiteKind::Public => "public",
            SuiteKind::Hidden => "hidden",
        };
        f.pad(name)
    }
}

/// Ordered set of cases. Vector order is execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite<I = String, O = String> {
    pub kind: SuiteKind,
    pub cases: Vec<TestCase<I, O>>,
}

impl<I, O> Suite<I, O> {
    pub fn new(kind: SuiteKind, cases: Vec<TestCase<I, O>>) -> Self {
        Self { kind, cases }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Outcome of a suite that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    pub kind: SuiteKind,
    pub passed: Vec<String>,
}
