//! docfill CLI - fill Word report templates with prepared content

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docfill::{fill, render, DocxFile, ParseOptions};

/// Default output name for the dumped text report.
const DEFAULT_REPORT_NAME: &str = "report_filled_content.txt";

#[derive(Parser)]
#[command(name = "docfill")]
#[command(version)]
#[command(about = "Fill Word report templates with prepared section content", long_about = None)]
struct Cli {
    /// Input docx file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output docx file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Substitute the title, fill Abstract and Introduction, save a copy
    Fill {
        /// Input docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output docx file (default: <input stem>-FILLED.docx)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Write all prepared section content as a plain-text report
    Dump {
        /// Input docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output text file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_REPORT_NAME)]
        output: PathBuf,
    },

    /// Extract the document's plain text
    Text {
        /// Input docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Fill { input, output }) => cmd_fill(&input, output.as_deref()),
        Some(Commands::Dump { input, output }) => cmd_dump(&input, &output),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: fill if an input is provided
            if let Some(input) = cli.input {
                cmd_fill(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: docfill <FILE> [OUTPUT]".yellow());
                println!("       docfill --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_fill(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_path = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        input.with_file_name(format!("{stem}-FILLED.docx"))
    });

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // A load failure is fatal; nothing below runs and no save is attempted
    pb.set_message("Loading document...");
    let options = ParseOptions::new().lenient();
    let mut file = DocxFile::open_with_options(input, options)?;
    log::debug!(
        "loaded {} with {} paragraph(s)",
        input.display(),
        file.document.paragraph_count()
    );
    pb.inc(1);

    pb.set_message("Filling sections...");
    let summary = fill::fill_report(&mut file.document);
    pb.inc(1);

    pb.set_message("Saving document...");
    let save_result = file.save(&output_path);
    pb.inc(1);
    pb.finish_and_clear();

    println!(
        "Title placeholder: {} paragraph(s) updated",
        summary.titles_substituted
    );
    for (name, outcome) in &summary.sections {
        if outcome.is_filled() {
            println!("  {} {}", "✓".green(), name);
        } else {
            println!("  {} {} (heading not located, left unchanged)", "-".dimmed(), name);
        }
    }

    match save_result {
        Ok(()) => {
            println!(
                "\n{} {}",
                "Updated document saved to".green().bold(),
                output_path.display()
            );
        }
        Err(e) => {
            // Saving is best-effort: report and point at the manual route
            println!(
                "\n{}: could not save the updated document: {}",
                "Note".yellow().bold(),
                e
            );
            println!("Run `docfill dump {}` and copy each section", input.display());
            println!("into the document by hand.");
        }
    }

    Ok(())
}

fn cmd_dump(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Load first: a template that cannot be opened is a hard error even
    // though the report itself is built from prepared content
    let options = ParseOptions::new().lenient();
    let mut file = DocxFile::open_with_options(input, options)?;
    fill::substitute_title(&mut file.document, docfill::content::PROJECT_TITLE);

    let report = render::to_report();
    fs::write(output, &report)?;

    println!("{} {}", "Content saved to".green(), output.display());
    println!("\nYou can now:");
    println!("1. Open the text file and copy each section into your Word document");
    println!("2. Or run `docfill fill` to update the document directly");

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::new().lenient();
    let file = DocxFile::open_with_options(input, options)?;
    let text = render::to_text(&file.document)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{text}");
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::new().lenient();
    let file = DocxFile::open_with_options(input, options)?;
    let metadata = &file.document.metadata;

    if json {
        println!("{}", serde_json::to_string_pretty(metadata)?);
        return Ok(());
    }

    println!("{}", "Document Information".green().bold());
    println!("  File:       {}", input.display());
    println!("  Parts:      {}", file.package().len());
    println!("  Paragraphs: {}", metadata.paragraph_count);
    if let Some(ref title) = metadata.title {
        println!("  Title:      {title}");
    }
    if let Some(ref creator) = metadata.creator {
        println!("  Author:     {creator}");
    }
    if let Some(ref modified_by) = metadata.last_modified_by {
        println!("  Modified by: {modified_by}");
    }
    if let Some(ref revision) = metadata.revision {
        println!("  Revision:   {revision}");
    }
    if let Some(created) = metadata.created {
        println!("  Created:    {created}");
    }
    if let Some(modified) = metadata.modified {
        println!("  Modified:   {modified}");
    }

    Ok(())
}

fn cmd_version() {
    println!("docfill {}", env!("CARGO_PKG_VERSION"));
}
