use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use content_reader::{is_valid_markdown, ContentReader, ItemParagraph, Options};

#[derive(Parser)]
#[command(name = "content-reader")]
#[command(about = "Convert markdown to editor document JSON")]
struct Cli {
    /// Input markdown file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Role for images without a `role:` prefix
    #[arg(long, value_name = "ROLE")]
    image_role: Option<String>,

    /// Leave out the empty paragraph of list items holding only nested lists
    #[arg(long)]
    omit_item_paragraph: bool,

    /// Collapse a level-3 heading followed by a level-1 heading into an eyebrow
    #[arg(long)]
    eyebrow_headings: bool,

    /// Maximum token nesting depth
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Only report whether the input looks like markdown
    #[arg(long)]
    check: bool,
}

impl From<&Cli> for Options {
    fn from(cli: &Cli) -> Self {
        let defaults = Options::default();
        Options {
            default_image_role: cli
                .image_role
                .clone()
                .unwrap_or(defaults.default_image_role),
            item_paragraph: if cli.omit_item_paragraph {
                ItemParagraph::Omit
            } else {
                ItemParagraph::Synthesize
            },
            eyebrow_headings: cli.eyebrow_headings,
            max_depth: cli.max_depth.unwrap_or(defaults.max_depth),
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Error reading stdin")?;
            Ok(source)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let source = read_input(cli.input.as_ref())?;

    if cli.check {
        let valid = is_valid_markdown(&source);
        println!("{}", if valid { "markdown" } else { "not markdown" });
        return Ok(valid);
    }

    let reader = ContentReader::with_options(Options::from(cli));
    let doc = reader.read(&source).context("Error converting markdown")?;
    log::info!("converted {} bytes into {} top-level nodes", source.len(), doc.content().len());

    let json = if cli.pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    }
    .context("Error serializing document")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).context("Error writing output")?;
    Ok(true)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
