use super::load_schema;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use formcraft_schema::{Element, Schema};
use std::fmt::Write;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Form file to inspect
    pub file: PathBuf,
}

pub fn inspect(args: InspectArgs, cwd: &Path) -> Result<()> {
    let schema = load_schema(&cwd.join(&args.file))?;
    print!("{}", render_outline(&schema)?);
    Ok(())
}

/// Indented element tree followed by the page layout
pub fn render_outline(schema: &Schema) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{} {}", schema.name.bold(), format!("({})", schema.id).dimmed())?;
    if !schema.description.is_empty() {
        writeln!(out, "{}", schema.description)?;
    }
    writeln!(
        out,
        "{} elements, updated {}",
        schema.element_count(),
        schema.updated_at.to_rfc3339()
    )?;
    writeln!(out)?;

    writeln!(out, "{}", "Elements".bright_blue().bold())?;
    if schema.elements.is_empty() {
        writeln!(out, "  {}", "(none)".dimmed())?;
    }
    for element in &schema.elements {
        write_element(&mut out, schema, element, 1)?;
    }

    let pages = schema.settings.pages();
    if !pages.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Pages".bright_blue().bold())?;
        for (number, page) in pages.iter().enumerate() {
            let ids: Vec<&str> = page.elements.iter().map(|id| id.as_str()).collect();
            writeln!(
                out,
                "  {}. {} {}",
                number + 1,
                page.title,
                format!("[{}]", ids.join(", ")).dimmed()
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "Settings".bright_blue().bold())?;
    writeln!(out, "  submit: {}", schema.settings.submit_button_text)?;
    writeln!(out, "  success: {}", schema.settings.success_message)?;
    if let Some(url) = &schema.settings.redirect_url {
        writeln!(out, "  redirect: {}", url)?;
    }
    Ok(out)
}

fn write_element(out: &mut String, schema: &Schema, element: &Element, depth: usize) -> Result<()> {
    let required = if element.required { " *".red().to_string() } else { String::new() };
    let page = schema
        .settings
        .page_of(&element.id)
        .map(|page| format!(" @{}", page.title).cyan().to_string())
        .unwrap_or_default();

    writeln!(
        out,
        "{}{} \"{}\" {}{}{}",
        "  ".repeat(depth),
        element.element_type().to_string().green(),
        element.label,
        format!("({})", element.id).dimmed(),
        required,
        page
    )?;
    for child in &element.elements {
        write_element(out, schema, child, depth + 1)?;
    }
    Ok(())
}
