use super::load_schema;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use formcraft_editor::{parse_script, CommandOutcome, EditorSession};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Form file to edit
    pub file: PathBuf,

    /// JSON array of editor commands
    pub script: PathBuf,

    /// Write the result here instead of overwriting the form file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn apply(args: ApplyArgs, cwd: &Path) -> Result<Vec<CommandOutcome>> {
    let config = Config::load(cwd)?;
    let form_path = cwd.join(&args.file);
    let script_path = cwd.join(&args.script);

    let schema = load_schema(&form_path)?;
    let script = fs::read_to_string(&script_path)
        .with_context(|| format!("Cannot read {}", script_path.display()))?;
    let commands = parse_script(&script)
        .with_context(|| format!("Invalid command script in {}", script_path.display()))?;

    println!("{}", "✏️  Applying edit script...".bright_blue().bold());

    let mut session = EditorSession::from_schema(schema, config.editor_options())?;
    let mut outcomes = Vec::with_capacity(commands.len());
    for (step, command) in commands.into_iter().enumerate() {
        let name = command.name();
        let outcome = session.apply(command);
        match &outcome {
            CommandOutcome::Created { id } => {
                println!("  {} {:>3} {} → {}", "✓".green(), step + 1, name, id.bright_white())
            }
            CommandOutcome::Changed => println!("  {} {:>3} {}", "✓".green(), step + 1, name),
            CommandOutcome::Unchanged => println!(
                "  {} {:>3} {} {}",
                "–".yellow(),
                step + 1,
                name,
                "(no change)".dimmed()
            ),
        }
        outcomes.push(outcome);
    }

    let output = args
        .output
        .as_ref()
        .map(|output| cwd.join(output))
        .unwrap_or(form_path);
    fs::write(&output, session.schema().to_json_pretty()?)?;

    let changed = outcomes.iter().filter(|o| o.is_change()).count();
    println!();
    println!(
        "{} {} of {} commands changed the form",
        "✅".green(),
        changed,
        outcomes.len()
    );
    println!("   Wrote {}", output.display());

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_schema::{ElementKind, Schema};

    fn setup(script: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let schema = Schema::new("Scripted");
        fs::write(dir.path().join("form.json"), schema.to_json_pretty().unwrap()).unwrap();
        fs::write(dir.path().join("script.json"), script).unwrap();
        dir
    }

    fn args(output: Option<&str>) -> ApplyArgs {
        ApplyArgs {
            file: PathBuf::from("form.json"),
            script: PathBuf::from("script.json"),
            output: output.map(PathBuf::from),
        }
    }

    fn read(dir: &Path, file: &str) -> Schema {
        Schema::from_json(&fs::read_to_string(dir.join(file)).unwrap()).unwrap()
    }

    #[test]
    fn test_apply_in_place() {
        let dir = setup(
            r#"[
                { "op": "addElement", "type": "grid" },
                { "op": "setName", "name": "Renamed" },
                { "op": "removeElement", "id": "missing" }
            ]"#,
        );

        let outcomes = apply(args(None), dir.path()).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[2], CommandOutcome::Unchanged);

        let schema = read(dir.path(), "form.json");
        assert_eq!(schema.name, "Renamed");
        assert_eq!(schema.elements[0].elements.len(), 2);
    }

    #[test]
    fn test_config_grid_columns_apply() {
        let dir = setup(r#"[{ "op": "addElement", "type": "grid" }]"#);
        fs::write(
            dir.path().join("formcraft.config.json"),
            r#"{ "defaultGridColumns": 4 }"#,
        )
        .unwrap();

        apply(args(Some("out.json")), dir.path()).unwrap();
        let schema = read(dir.path(), "out.json");
        assert_eq!(schema.elements[0].kind, ElementKind::Grid { columns: 4 });
        assert!(read(dir.path(), "form.json").elements.is_empty());
    }

    #[test]
    fn test_bad_script_is_error() {
        let dir = setup(r#"[{ "op": "teleport" }]"#);
        let err = apply(args(None), dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid command script"));
    }
}
