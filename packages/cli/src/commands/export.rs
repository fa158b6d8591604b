use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use scribe_editor::{export as render, Document, ExportFormat};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Document to export
    pub file: PathBuf,

    /// Target format (txt, md, html); defaults to the config value
    #[arg(short, long)]
    pub to: Option<String>,

    /// Output path (overrides config export directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Document title used by the md and html templates
    #[arg(long)]
    pub title: Option<String>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn export(args: ExportArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let format = match &args.to {
        Some(to) => to.parse::<ExportFormat>()?,
        None => config.default_export_format,
    };

    let doc = Document::load(cwd.join(&args.file))?;
    let stem = args
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());
    let title = args.title.clone().unwrap_or_else(|| stem.clone());

    let rendered = render(doc.text(), &title, format);

    if args.stdout {
        print!("{}", rendered);
        return Ok(());
    }

    let out_path = match &args.out {
        Some(out) => cwd.join(out),
        None => config
            .get_export_dir(cwd)
            .join(format!("{}.{}", stem, format.file_extension())),
    };

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, rendered)?;

    println!(
        "{} {} → {}",
        "✓".green(),
        args.file.display(),
        out_path.display()
    );

    Ok(())
}
