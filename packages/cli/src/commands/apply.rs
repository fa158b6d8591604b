use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use scribe_editor::{Document, MutationResult, ToolCall};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Document to edit
    pub file: PathBuf,

    /// Tool name (update_doc_by_line, update_doc_by_replace, insert_at_line,
    /// delete_lines, append_to_document)
    #[arg(short, long, conflicts_with = "call")]
    pub name: Option<String>,

    /// Tool arguments as a JSON object
    #[arg(short, long, default_value = "{}")]
    pub args: String,

    /// JSON file holding a whole tool call: { "name": ..., "arguments": ... }
    #[arg(long)]
    pub call: Option<PathBuf>,

    /// Print the result without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn apply(args: ApplyArgs, cwd: &Path) -> Result<()> {
    let call = read_tool_call(&args, cwd)?;
    let path = cwd.join(&args.file);

    let mut doc = Document::load(path.clone())
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let lines_before = doc.lines().line_count();

    let result = doc.execute(&call.name, &call.arguments);

    if result.is_success() && !args.dry_run {
        doc.save()?;
        info!(path = %path.display(), function = %call.name, "Wrote document");
    }

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return match result {
            MutationResult::Success { .. } => Ok(()),
            MutationResult::Failure { error } => Err(anyhow!(error)),
        };
    }

    match result {
        MutationResult::Success { new_content } => {
            let lines_after = doc.lines().line_count();
            println!(
                "{} {} {} ({} → {} lines)",
                "✓".green(),
                call.name.bright_white(),
                args.file.display(),
                lines_before,
                lines_after
            );

            if args.dry_run {
                println!();
                println!("{}", new_content);
            }
            Ok(())
        }
        MutationResult::Failure { error } => Err(anyhow!(error)),
    }
}

fn read_tool_call(args: &ApplyArgs, cwd: &Path) -> Result<ToolCall> {
    if let Some(call_path) = &args.call {
        let content = fs::read_to_string(cwd.join(call_path))
            .with_context(|| format!("Failed to read tool call {}", call_path.display()))?;
        return Ok(serde_json::from_str(&content)?);
    }

    let name = args
        .name
        .clone()
        .ok_or_else(|| anyhow!("Provide a tool with --name or --call"))?;
    let arguments: Value = serde_json::from_str(&args.args)
        .with_context(|| format!("--args is not valid JSON: {}", args.args))?;

    Ok(ToolCall::new(name, arguments))
}
