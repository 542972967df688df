use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use formcraft_schema::Schema;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the starter form
    #[arg(short, long, default_value = "Contact Form")]
    pub name: String,

    /// Forms directory
    #[arg(long, default_value = "forms")]
    pub forms_dir: String,

    /// Force overwrite existing config and form
    #[arg(short, long)]
    pub force: bool,
}

/// File name for a form: lowercase words joined by dashes
pub fn slugify(name: &str) -> String {
    let slug = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "form".to_string()
    } else {
        slug
    }
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Formcraft project...".bright_blue().bold()
    );

    let config = Config {
        forms_dir: args.forms_dir.clone(),
        ..Config::default()
    };

    // Create forms directory if it doesn't exist
    let forms_dir = config.get_forms_dir(cwd);
    if !forms_dir.exists() {
        fs::create_dir_all(&forms_dir)?;
        println!("  {} Created {}/", "✓".green(), args.forms_dir);
    }

    // Create starter form
    let form_file: PathBuf = forms_dir.join(format!("{}.form.json", slugify(&args.name)));
    if !form_file.exists() || args.force {
        let schema = Schema::new(args.name.as_str());
        fs::write(&form_file, schema.to_json_pretty()?)?;
        println!(
            "  {} Created {}",
            "✓".green(),
            form_file.strip_prefix(cwd).unwrap_or(&form_file).display()
        );
    }

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Write an edit script (see `formcraft apply --help`)");
    println!("  2. Run: formcraft apply {} <script.json>", form_file.display());
    println!("  3. Run: formcraft validate {}", args.forms_dir);

    Ok(())
}
