use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use termsnap_markdown::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "termsnap-md")]
#[command(about = "Render Markdown files to HTML, plain text or a JSON document tree")]
struct Cli {
    /// Input Markdown file, or `-` for stdin
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::compiled_default(),
    };

    let markdown = read_input(&cli.input)?;
    let doc = termsnap_markdown::render_with_config(&markdown, &config);
    tracing::info!(blocks = doc.len(), "rendered {}", cli.input.display());

    let rendered = match cli.format {
        Format::Html => termsnap_markdown::document_to_html(&doc, &config.html),
        Format::Text => termsnap_markdown::document_to_text(&doc),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&doc).context("serializing document")?;
            json.push('\n');
            json
        }
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Created {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut markdown = String::new();
        io::stdin()
            .read_to_string(&mut markdown)
            .context("reading stdin")?;
        return Ok(markdown);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "termsnap_md=info,termsnap_markdown=debug"
    } else {
        "termsnap_md=warn,termsnap_markdown=warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
