use anyhow::Result;
use clap::Args;
use colored::Colorize;
use scribe_editor::Document;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Document to display
    pub file: PathBuf,

    /// Print the raw text instead of the numbered snapshot
    #[arg(long)]
    pub plain: bool,
}

pub fn show(args: ShowArgs, cwd: &Path) -> Result<()> {
    let doc = Document::load(cwd.join(&args.file))?;
    let output = snapshot(&doc, args.plain);

    if args.plain {
        print!("{}", output);
        return Ok(());
    }

    // Same text the model sees, with the `N:` prefixes dimmed
    for line in output.split('\n') {
        match line.split_once(": ") {
            Some((number, rest)) => println!("{} {}", format!("{}:", number).dimmed(), rest),
            None => println!("{}", line),
        }
    }

    Ok(())
}

/// The text `show` prints, before coloring
fn snapshot(doc: &Document, plain: bool) -> String {
    if plain {
        doc.text().to_string()
    } else {
        doc.numbered()
    }
}
