// CLI commands for running and scaffolding katas
use anyhow::{Context, Result};
use kata_common::{confirmation, run_suite, EntryFunction, SuiteKind};
use std::path::Path;
use tracing::{error, info};

use crate::config::SuiteConfig;
use crate::generator::{validate_kata_name, TemplateGenerator};

/// Run the selected suites in order, stopping at the first failure.
///
/// Each passing suite prints its confirmation line; a failing suite aborts the
/// run and later suites are never started.
pub fn run_suites<E>(entry: &mut E, config: &SuiteConfig, kinds: &[SuiteKind]) -> Result<()>
where
    E: EntryFunction<String, String> + ?Sized,
{
    for kind in kinds {
        let suite = config.suite(*kind);
        let report = run_suite(&mut *entry, suite)
            .inspect_err(|e| error!(suite = %kind, case = %e.case(), "Suite failed"))
            .with_context(|| format!("{} tests failed", kind))?;

        info!(suite = %kind, passed = report.passed.len(), "Suite complete");
        println!("{}", confirmation(report.kind));
    }

    Ok(())
}

/// Print the configured cases as a table
pub fn list_cases(config: &SuiteConfig, kinds: &[SuiteKind]) {
    println!("{:<8} {:<24} {:<24} {:<24}", "Suite", "Name", "Input", "Expected");
    println!("{}", "─".repeat(82));

    let mut total = 0;
    for kind in kinds {
        for case in &config.suite(*kind).cases {
            println!(
                "{:<8} {:<24} {:<24} {:<24}",
                kind,
                case.name,
                format!("{:?}", case.input),
                format!("{:?}", case.expected_output)
            );
            total += 1;
        }
    }

    println!("\nTotal: {} case(s)", total);
}

/// Generate a new kata crate at `path`
pub fn init_kata(path: &Path, name: Option<&str>, config: &SuiteConfig) -> Result<()> {
    let kata_name = match name {
        Some(name) => name.to_string(),
        None => default_kata_name(path)?,
    };
    validate_kata_name(&kata_name)?;

    println!("🚀 Initializing kata '{}' at: {}", kata_name, path.display());

    let generator = TemplateGenerator::new()?;
    let written = generator.generate(
        path,
        &kata_name,
        &[config.suite(SuiteKind::Public), config.suite(SuiteKind::Hidden)],
    )?;

    for file in &written {
        let shown = file.strip_prefix(path).unwrap_or(file);
        println!("  ✅ Created: {}", shown.display());
    }

    info!(kata = %kata_name, files = written.len(), "Kata generated");

    println!("✅ Kata initialized successfully!");
    println!("\n📋 Next steps:");
    println!("  1. Implement your_function in src/lib.rs");
    println!("  2. Run public tests: cargo test --test public_tests");
    println!("  3. Run hidden tests: cargo test --test hidden_tests");

    Ok(())
}

fn default_kata_name(path: &Path) -> Result<String> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to resolve current directory")?
            .join(path)
    };

    absolute
        .components()
        .next_back()
        .and_then(|c| c.as_os_str().to_str())
        .filter(|name| *name != "." && *name != "..")
        .map(|name| name.to_lowercase())
        .with_context(|| format!("Cannot derive a kata name from {}, pass --name", path.display()))
}
