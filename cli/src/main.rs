//! docmark CLI - document JSON to Markdown, HTML, and text

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docmark::{tree, Docmark, Document, FormatRegistry, JsonFormat, Manifest};

#[derive(Parser)]
#[command(name = "docmark")]
#[command(version)]
#[command(about = "Convert document JSON exports to Markdown, HTML, and text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to the given format
    Convert {
        /// Input document JSON ("-" reads stdin)
        #[arg(value_name = "DOC")]
        input: PathBuf,

        /// Output format (md, html, txt)
        #[arg(short, long, default_value = "md", env = "DOCMARK_FORMAT")]
        format: String,

        /// Asset manifest JSON mapping object ids to downloaded files
        #[arg(short, long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Render items of undefined lists as bullets instead of failing
        #[arg(long)]
        lenient: bool,

        /// Font family that marks code paragraphs
        #[arg(long, value_name = "FAMILY")]
        code_font: Option<String>,
    },

    /// Dump the parse tree as JSON
    Tree {
        /// Input document JSON ("-" reads stdin)
        #[arg(value_name = "DOC")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Render items of undefined lists as bullets instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Show document information
    Info {
        /// Input document JSON ("-" reads stdin)
        #[arg(value_name = "DOC")]
        input: PathBuf,
    },

    /// List the registered output formats
    Formats,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            format,
            manifest,
            output,
            lenient,
            code_font,
        } => cmd_convert(
            &input,
            &format,
            manifest.as_deref(),
            output.as_deref(),
            lenient,
            code_font,
        ),
        Commands::Tree {
            input,
            output,
            compact,
            lenient,
        } => cmd_tree(&input, output.as_deref(), compact, lenient),
        Commands::Info { input } => cmd_info(&input),
        Commands::Formats => cmd_formats(),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_document(input: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    if input == Path::new("-") {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json)?;
        return Ok(Document::from_json(&json)?);
    }
    Ok(Document::from_path(input)?)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_convert(
    input: &Path,
    format: &str,
    manifest: Option<&Path>,
    output: Option<&Path>,
    lenient: bool,
    code_font: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let manifest = match manifest {
        Some(path) => Manifest::from_path(path)?,
        None => Manifest::new(),
    };

    let mut docmark = Docmark::new().with_format(format);
    if lenient {
        docmark = docmark.lenient();
    }
    if let Some(family) = code_font {
        docmark = docmark.with_code_font(family);
    }

    let rendered = docmark.convert(&doc, &manifest)?;
    write_output(output, &rendered)
}

fn cmd_tree(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    let mut docmark = Docmark::new();
    if lenient {
        docmark = docmark.lenient();
    }
    let tree = docmark.parse(&doc)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let mut json = tree::to_json(&tree, format)?;
    json.push('\n');
    write_output(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    // Lenient so that documents with dangling list references still report.
    let tree = Docmark::new().lenient().parse(&doc)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = doc.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref id) = doc.document_id {
        println!("{}: {}", "Document ID".bold(), id);
    }
    println!("{}: {}", "Elements".bold(), doc.element_count());
    println!("{}: {}", "Lists".bold(), doc.lists.len());

    println!();
    println!("{}", "Parse Tree".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for id in tree.descendants(tree.root()) {
        *counts.entry(tree.kind(id).as_str()).or_default() += 1;
    }
    println!("{}: {}", "Nodes".bold(), tree.len());
    for (kind, count) in counts {
        println!("  {}: {}", kind, count);
    }

    Ok(())
}

fn cmd_formats() -> Result<(), Box<dyn std::error::Error>> {
    let registry = FormatRegistry::global()?;
    for key in registry.keys() {
        println!("{}", key);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docmark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document tree to Markdown, HTML, and text converter");
    println!();
    println!("License: MIT");
}
