//! unpaste CLI - clean up text pasted from PDF viewers
//!
//! Reads text from a file, stdin, or the clipboard, runs the correction
//! pipeline over it, and writes the result back out.

use clap::Parser;
use colored::*;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use unpaste::Corrector;

/// PDF paste cleanup: line breaks, split words, endnote markers
#[derive(Parser)]
#[command(
    name = "unpaste",
    version,
    about = "Repair text pasted from PDF viewers",
    long_about = "unpaste - repair text pasted from PDF viewers.\n\n\
                  Removes hard line wraps, re-joins hyphenated and split words,\n\
                  brackets bare endnote numbers, and tidies spacing around\n\
                  quotes and parentheses.\n\n\
                  Usage:\n  \
                  unpaste <file>            Correct a file, print to stdout\n  \
                  unpaste -c                Correct the clipboard in place\n  \
                  unpaste < in.txt          Correct stdin"
)]
struct Cli {
    /// Input file (default: stdin)
    #[arg(conflicts_with = "clipboard")]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, conflicts_with = "clipboard")]
    output: Option<PathBuf>,

    /// Read from and write back to the system clipboard
    #[arg(short, long)]
    clipboard: bool,

    /// Word list file, one word per line
    #[arg(short, long, default_value = "wordsEn.txt")]
    dict: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let corrector = Corrector::from_dict_file(&cli.dict)?;

    if cli.clipboard {
        return run_clipboard(&corrector);
    }

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let corrected = corrector.correct(&text);

    match &cli.output {
        Some(path) => {
            fs::write(path, &corrected)?;
            println!(
                "{} Corrected text written to {}",
                "✓".green().bold(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", corrected)?;
        }
    }

    Ok(())
}

/// Correct the clipboard in place.
fn run_clipboard(corrector: &Corrector) -> Result<(), Box<dyn std::error::Error>> {
    let mut clipboard = arboard::Clipboard::new()?;

    let text = clipboard.get_text()?;
    if text.is_empty() {
        println!("{} Clipboard is empty, nothing to do", "!".yellow().bold());
        return Ok(());
    }

    let corrected = corrector.correct(&text);
    clipboard.set_text(corrected)?;

    println!("{} Clipboard corrected", "✓".green().bold());
    Ok(())
}
