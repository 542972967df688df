use super::load_schema;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use formcraft_validator::{validate as validate_form, Diagnostic, DiagnosticLevel, ValidateOptions};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Form file, directory or glob pattern (defaults to the configured forms directory)
    pub input: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Totals across every checked file
#[derive(Debug, Default, PartialEq)]
pub struct ValidateSummary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    diagnostics: &'a [Diagnostic],
}

pub fn validate(args: ValidateArgs, verbose: bool, cwd: &Path) -> Result<ValidateSummary> {
    let input = match &args.input {
        Some(input) => input.clone(),
        None => crate::config::Config::load(cwd)?
            .get_forms_dir(cwd)
            .display()
            .to_string(),
    };
    let json = args.format == "json";

    let files = find_form_files(&input, cwd)?;
    if !json {
        println!("🔍 {} Formcraft Validator", "Starting".green().bold());
        println!("   Input: {}", input);
        println!("   Found {} form files", files.len());
        println!();
    }

    let mut summary = ValidateSummary::default();
    for file in &files {
        let diagnostics = match load_schema(file) {
            Ok(schema) => validate_form(&schema, ValidateOptions::default()),
            Err(err) => vec![Diagnostic::error("parse", format!("{:#}", err))],
        };
        summary.files += 1;
        summary.errors += diagnostics.iter().filter(|d| d.is_error()).count();
        summary.warnings += diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warning)
            .count();

        if json {
            let report = FileReport {
                file: file.display().to_string(),
                diagnostics: &diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_diagnostics(file, &diagnostics, verbose);
        }
    }

    if !json {
        print_summary(&summary);
    }

    if summary.errors > 0 {
        return Err(anyhow!(
            "{} error(s) in {} file(s)",
            summary.errors,
            summary.files
        ));
    }
    Ok(summary)
}

fn print_diagnostics(file: &Path, diagnostics: &[Diagnostic], verbose: bool) {
    if diagnostics.is_empty() {
        if verbose {
            println!("{} {}", "✓".green(), file.display());
        }
        return;
    }

    println!("{}", file.display());
    for diagnostic in diagnostics {
        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };

        if !verbose && diagnostic.level == DiagnosticLevel::Info {
            continue;
        }

        match &diagnostic.element_id {
            Some(id) => println!(
                "  {} [{}] {} {}",
                level_str,
                diagnostic.rule,
                diagnostic.message,
                format!("({})", id).dimmed()
            ),
            None => println!("  {} [{}] {}", level_str, diagnostic.rule, diagnostic.message),
        }

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }
    println!();
}

fn print_summary(summary: &ValidateSummary) {
    println!(
        "✨ {} Validation complete!",
        if summary.errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", summary.files);

    if summary.errors > 0 {
        println!("   {} {}", "Errors:".red(), summary.errors);
    }
    if summary.warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), summary.warnings);
    }
    if summary.errors == 0 && summary.warnings == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}

/// Resolve a file, a directory (every *.json below it) or a glob pattern
fn find_form_files(input: &str, cwd: &Path) -> Result<Vec<PathBuf>> {
    if input.contains(&['*', '?', '['][..]) {
        let pattern = if Path::new(input).is_absolute() {
            input.to_string()
        } else {
            cwd.join(input).display().to_string()
        };
        let mut files = glob::glob(&pattern)?
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect::<Vec<_>>();
        files.sort();
        return Ok(files);
    }

    let path = cwd.join(input);
    if path.is_file() {
        return Ok(vec![path]);
    }
    if !path.is_dir() {
        return Err(anyhow!("Input path does not exist: {}", path.display()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&path)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_schema::{Element, ElementKind, Schema};
    use std::fs;

    fn write_form(dir: &Path, file: &str, schema: &Schema) {
        fs::write(dir.join(file), schema.to_json_pretty().unwrap()).unwrap();
    }

    fn args(input: &str) -> ValidateArgs {
        ValidateArgs {
            input: Some(input.to_string()),
            format: "text".to_string(),
        }
    }

    fn valid_schema() -> Schema {
        let mut schema = Schema::new("Valid");
        schema.elements.push(Element::new("when", "When", ElementKind::Date));
        schema
    }

    #[test]
    fn test_directory_of_valid_forms() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("forms")).unwrap();
        write_form(&dir.path().join("forms"), "a.form.json", &valid_schema());
        write_form(&dir.path().join("forms"), "b.form.json", &valid_schema());
        fs::write(dir.path().join("forms/notes.txt"), "not a form").unwrap();

        let summary = validate(args("forms"), false, dir.path()).unwrap();
        assert_eq!(
            summary,
            ValidateSummary {
                files: 2,
                errors: 0,
                warnings: 0
            }
        );
    }

    #[test]
    fn test_errors_fail_the_command() {
        let dir = tempfile::tempdir().unwrap();
        write_form(dir.path(), "empty.form.json", &Schema::new(""));

        let err = validate(args("empty.form.json"), false, dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "2 error(s) in 1 file(s)");
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "{ nope").unwrap();
        assert!(validate(args("bad.json"), false, dir.path()).is_err());
    }

    #[test]
    fn test_glob_pattern() {
        let dir = tempfile::tempdir().unwrap();
        write_form(dir.path(), "one.form.json", &valid_schema());
        write_form(dir.path(), "two.form.json", &valid_schema());
        write_form(dir.path(), "skip.json", &Schema::new(""));

        let summary = validate(args("*.form.json"), false, dir.path()).unwrap();
        assert_eq!(summary.files, 2);
    }

    #[test]
    fn test_defaults_to_configured_forms_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("forms")).unwrap();
        write_form(&dir.path().join("forms"), "a.form.json", &valid_schema());

        let summary = validate(
            ValidateArgs {
                input: None,
                format: "json".to_string(),
            },
            false,
            dir.path(),
        )
        .unwrap();
        assert_eq!(summary.files, 1);
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate(args("nowhere"), false, dir.path()).is_err());
    }
}
