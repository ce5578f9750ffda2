// Case-file configuration for kata-cli
use anyhow::{bail, Context, Result};
use kata_common::suites::builtin_suite;
use kata_common::{Suite, SuiteKind, TestCase};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
struct CasesJson {
    #[serde(default)]
    public: Vec<TestCase>,
    #[serde(default)]
    hidden: Vec<TestCase>,
}

/// Suites the CLI operates on: built-in placeholders or an authored case file
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    public: Suite,
    hidden: Suite,
}

impl SuiteConfig {
    /// Load suites from a JSON case file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Case file not found: {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let cases: CasesJson = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        validate(&cases).with_context(|| format!("Invalid case file {}", path.display()))?;

        Ok(Self {
            public: Suite::new(SuiteKind::Public, cases.public),
            hidden: Suite::new(SuiteKind::Hidden, cases.hidden),
        })
    }

    pub fn builtin() -> Self {
        Self {
            public: builtin_suite(SuiteKind::Public),
            hidden: builtin_suite(SuiteKind::Hidden),
        }
    }

    /// Case file when given, placeholders otherwise
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn suite(&self, kind: SuiteKind) -> &Suite {
        match kind {
            SuiteKind::Public => &self.public,
            SuiteKind::Hidden => &self.hidden,
        }
    }
}

/// Strict and reserved keywords; none can name a generated test function
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Items every generated suite file already defines or imports
const GENERATED_ITEMS: &[&str] = &["main", "your_function"];

/// Names must be unique and usable as Rust function names in generated katas
fn validate(cases: &CasesJson) -> Result<()> {
    let mut seen = HashSet::new();
    for case in cases.public.iter().chain(cases.hidden.iter()) {
        if !is_identifier(&case.name) {
            bail!("Case name '{}' is not a valid identifier", case.name);
        }
        if RUST_KEYWORDS.contains(&case.name.as_str()) {
            bail!("Case name '{}' is a Rust keyword", case.name);
        }
        if GENERATED_ITEMS.contains(&case.name.as_str()) {
            bail!("Case name '{}' clashes with a generated test file item", case.name);
        }
        if !seen.insert(case.name.as_str()) {
            bail!("Duplicate case name '{}'", case.name);
        }
    }
    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    name != "_" && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
