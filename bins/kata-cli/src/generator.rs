// Kata template generation
use anyhow::{bail, Context, Result};
use handlebars::{no_escape, Handlebars};
use kata_common::{confirmation, Suite};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CARGO_TEMPLATE: &str = include_str!("../templates/Cargo.toml.hbs");
const LIB_TEMPLATE: &str = include_str!("../templates/lib.rs.hbs");
const SUITE_TEMPLATE: &str = include_str!("../templates/suite_tests.rs.hbs");

/// Renders a kata crate: manifest, entry stub, one test target per suite
pub struct TemplateGenerator {
    handlebars: Handlebars<'static>,
}

impl TemplateGenerator {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        // Output is Rust and TOML, not HTML
        handlebars.register_escape_fn(no_escape);

        handlebars
            .register_template_string("cargo", CARGO_TEMPLATE)
            .context("Failed to register Cargo.toml template")?;
        handlebars
            .register_template_string("lib", LIB_TEMPLATE)
            .context("Failed to register lib.rs template")?;
        handlebars
            .register_template_string("suite", SUITE_TEMPLATE)
            .context("Failed to register suite test template")?;

        Ok(Self { handlebars })
    }

    pub fn render_manifest(&self, kata_name: &str) -> Result<String> {
        self.handlebars
            .render("cargo", &json!({ "kata_name": kata_name }))
            .context("Failed to render Cargo.toml template")
    }

    pub fn render_entry(&self, kata_name: &str) -> Result<String> {
        self.handlebars
            .render("lib", &json!({ "kata_name": kata_name }))
            .context("Failed to render lib.rs template")
    }

    /// Render a `harness = false` test target: one function per case and a
    /// `main` calling them in order, then printing the confirmation
    pub fn render_suite(&self, kata_name: &str, suite: &Suite) -> Result<String> {
        let cases: Vec<_> = suite
            .cases
            .iter()
            .map(|case| {
                json!({
                    "name": case.name,
                    "input": rust_literal(&case.input),
                    "expected_output": rust_literal(&case.expected_output),
                })
            })
            .collect();

        let data = json!({
            "kata_name": kata_name,
            "crate_ident": crate_ident(kata_name),
            "suite": suite.kind.to_string(),
            "confirmation": confirmation(suite.kind),
            "cases": cases,
        });

        self.handlebars
            .render("suite", &data)
            .with_context(|| format!("Failed to render {} test template", suite.kind))
    }

    /// Write a new kata crate under `root`. Refuses to touch an existing kata.
    pub fn generate(
        &self,
        root: &Path,
        kata_name: &str,
        suites: &[&Suite],
    ) -> Result<Vec<PathBuf>> {
        let manifest_path = root.join("Cargo.toml");
        if manifest_path.exists() {
            bail!("A crate already exists at {}", root.display());
        }

        let mut files = vec![
            (manifest_path, self.render_manifest(kata_name)?),
            (root.join("src/lib.rs"), self.render_entry(kata_name)?),
        ];
        for suite in suites {
            files.push((
                root.join(format!("tests/{}_tests.rs", suite.kind)),
                self.render_suite(kata_name, suite)?,
            ));
        }

        for (path, _) in &files {
            if path.exists() {
                bail!("Refusing to overwrite {}", path.display());
            }
        }

        let mut written = Vec::with_capacity(files.len());
        for (path, content) in files {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!(path = %path.display(), "Wrote kata file");
            written.push(path);
        }

        Ok(written)
    }
}

/// Crate names may use dashes; the library path in `use` statements may not
pub fn crate_ident(kata_name: &str) -> String {
    kata_name.replace('-', "_")
}

/// Kata names become crate names: lower-case ASCII, digits, dashes, underscores
pub fn validate_kata_name(kata_name: &str) -> Result<()> {
    let starts_ok = kata_name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase());
    let rest_ok = kata_name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');

    if !starts_ok || !rest_ok {
        bail!(
            "Invalid kata name '{}': use lower-case letters, digits, '-' or '_', starting with a letter",
            kata_name
        );
    }
    Ok(())
}

/// `Debug` on `str` yields a valid Rust string literal with escapes
fn rust_literal(value: &str) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata_common::suites::{hidden_suite, public_suite};
    use kata_common::SuiteKind;

    #[test]
    fn test_rust_literal_escapes() {
        assert_eq!(rust_literal("test_input"), "\"test_input\"");
        assert_eq!(rust_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(rust_literal("a\nb"), "\"a\\nb\"");
    }

    #[test]
    fn test_validate_kata_name() {
        assert!(validate_kata_name("reverse-words").is_ok());
        assert!(validate_kata_name("kata_2").is_ok());
        assert!(validate_kata_name("Reverse").is_err());
        assert!(validate_kata_name("9lives").is_err());
        assert!(validate_kata_name("").is_err());
        assert!(validate_kata_name("a b").is_err());
    }

    #[test]
    fn test_render_manifest_declares_harnessless_targets() {
        let generator = TemplateGenerator::new().unwrap();
        let manifest = generator.render_manifest("reverse-words").unwrap();

        assert!(manifest.contains("name = \"reverse-words\""));
        assert!(manifest.contains("name = \"public_tests\""));
        assert!(manifest.contains("name = \"hidden_tests\""));
        assert_eq!(manifest.matches("harness = false").count(), 2);
    }

    #[test]
    fn test_render_entry_stub() {
        let generator = TemplateGenerator::new().unwrap();
        let entry = generator.render_entry("reverse-words").unwrap();

        assert!(entry.contains("pub fn your_function(input: &str) -> String"));
        assert!(entry.contains("todo!"));
    }

    #[test]
    fn test_render_public_suite() {
        let generator = TemplateGenerator::new().unwrap();
        let source = generator.render_suite("reverse-words", &public_suite()).unwrap();

        assert!(source.contains("use reverse_words::your_function;"));
        assert!(source.contains("fn test_basic_case() {"));
        assert!(source.contains("let result = your_function(\"test_input\");"));
        assert!(source.contains("let expected = \"expected_output\";"));
        assert!(source.contains("println!(\"All public tests passed!\");"));

        // main calls the cases in authored order
        let basic = source.find("    test_basic_case();").unwrap();
        let edge = source.find("    test_edge_case();").unwrap();
        let another = source.find("    test_another_case();").unwrap();
        assert!(basic < edge && edge < another);
    }

    #[test]
    fn test_render_hidden_suite() {
        let generator = TemplateGenerator::new().unwrap();
        let source = generator.render_suite("kata", &hidden_suite()).unwrap();

        assert!(source.contains("fn test_hidden_case_3() {"));
        assert!(source.contains("your_function(\"tricky_input\")"));
        assert!(source.contains("println!(\"All hidden tests passed!\");"));
    }

    #[test]
    fn test_render_escapes_quotes_without_html_entities() {
        let generator = TemplateGenerator::new().unwrap();
        let suite = Suite::new(
            SuiteKind::Public,
            vec![kata_common::TestCase::literal("quoted", "<a & \"b\">", "ok")],
        );

        let source = generator.render_suite("kata", &suite).unwrap();

        assert!(source.contains(r#"your_function("<a & \"b\">")"#));
        assert!(!source.contains("&amp;"));
    }

    #[test]
    fn test_generate_writes_kata_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let generator = TemplateGenerator::new().unwrap();
        let public = public_suite();
        let hidden = hidden_suite();

        let written = generator
            .generate(dir.path(), "kata", &[&public, &hidden])
            .unwrap();

        assert_eq!(written.len(), 4);
        assert!(dir.path().join("Cargo.toml").is_file());
        assert!(dir.path().join("src/lib.rs").is_file());
        assert!(dir.path().join("tests/public_tests.rs").is_file());
        assert!(dir.path().join("tests/hidden_tests.rs").is_file());

        let again = generator.generate(dir.path(), "kata", &[&public, &hidden]);
        assert!(again.is_err());
    }
}
