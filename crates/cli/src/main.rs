use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use notecard_core::{Document, ExtractConfig, JsonConfig, PageKind, deliver, extract_card, fetch_file, fetch_stdin};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::sink::{EchoNotifier, OutputSink};

mod echo;
mod sink;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which extractor to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindArg {
    Auto,
    Fixed(PageKind),
}

impl FromStr for KindArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            other => other.parse::<PageKind>().map(Self::Fixed).map_err(|e| e.to_string()),
        }
    }
}

/// Output format for the extracted page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Card,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: card, json", s)),
        }
    }
}

/// Turn a saved jisho.org entry or LinkedIn job pane into a pasteable note
#[derive(Parser, Debug)]
#[command(name = "notecard")]
#[command(version)]
#[command(about = "Turn saved dictionary and job pages into notes", long_about = None)]
struct Args {
    /// Local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// Page kind (auto, word, job)
    #[arg(short, long, default_value = "auto", value_name = "KIND")]
    kind: KindArg,

    /// Output format (card, json)
    #[arg(short, long, default_value = "card", value_name = "FORMAT")]
    format: OutputFormat,

    /// Address the page was saved from; used as the job source link
    #[arg(long, value_name = "URL", value_parser = Url::parse)]
    url: Option<Url>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Skip the rich HTML write and emit the card as plain HTML source
    #[arg(long)]
    plain: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Delay before extracting, in milliseconds (0 disables)
    #[arg(long, default_value = "150", value_name = "MS")]
    settle_ms: u64,

    /// Drop word tags containing this marker (repeatable)
    #[arg(long, value_name = "MARKER")]
    exclude_tag: Vec<String>,

    /// Drop job meta fragments containing this marker (repeatable)
    #[arg(long, value_name = "MARKER")]
    exclude_meta: Vec<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn extract_config(&self) -> ExtractConfig {
        let mut builder = ExtractConfig::builder();
        if !self.exclude_tag.is_empty() {
            builder = builder.excluded_tag_markers(self.exclude_tag.clone());
        }
        if !self.exclude_meta.is_empty() {
            builder = builder.excluded_meta_markers(self.exclude_meta.clone());
        }
        builder.build()
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "notecard", &mut io::stdout());
        return Ok(());
    }

    init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
    }

    let input = args.input.as_deref().context("No input given")?;
    let html = if input == "-" {
        if args.verbose {
            echo::print_step(1, 4, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else {
        if args.verbose {
            echo::print_step(1, 4, &format!("Reading from file {}", input.bright_white()));
        }
        fetch_file(input).with_context(|| format!("Failed to read file: {}", input))?
    };

    if args.verbose {
        echo::print_detail("Size", &echo::format_size(html.len()));
    }

    if args.settle_ms > 0 {
        if args.verbose {
            echo::print_step(2, 4, &format!("Waiting {}ms for the page to settle", args.settle_ms));
        }
        tokio::time::sleep(Duration::from_millis(args.settle_ms)).await;
    }

    let doc = match &args.url {
        Some(url) => Document::parse_with_location(&html, url.as_str()),
        None => Document::parse(&html),
    }
    .context("Failed to parse HTML")?;

    let kind = match args.kind {
        KindArg::Fixed(kind) => kind,
        KindArg::Auto => PageKind::detect(&doc)
            .context("Could not tell whether this is a word or a job page; pass --kind word or --kind job")?,
    };

    if args.verbose {
        echo::print_step(3, 4, &format!("Extracting {:?} record", kind));
    }

    let started = Instant::now();
    let card = extract_card(&doc, kind, &args.extract_config());

    if args.verbose {
        echo::print_timing("Extraction", started.elapsed());
    }
    if !card.is_found() {
        echo::print_warning("Nothing usable found on this page; emitting the placeholder");
    }

    if args.verbose {
        echo::print_step(4, 4, "Writing output");
        echo::print_detail("Format", &format!("{:?}", args.format));
    }

    match args.format {
        OutputFormat::Json => {
            let json = card
                .to_json(&JsonConfig { pretty: args.pretty })
                .context("Failed to serialize record")?;
            match &args.output {
                Some(path) => {
                    std::fs::write(path, json)
                        .with_context(|| format!("Failed to write to file: {}", path.display()))?;
                    echo::print_success(&format!("Output written to {}", path.display().bright_white()));
                }
                None => println!("{}", json),
            }
        }
        OutputFormat::Card => {
            let rendered = card.render();
            let mut sink = OutputSink::new(args.output.clone(), !args.plain);
            let delivery = deliver(&rendered, &mut sink, &mut EchoNotifier).context("Failed to write output")?;

            if args.verbose {
                echo::print_detail("Content type", rendered.content_type.mime());
                echo::print_detail("Delivery", &format!("{:?}", delivery));
            }
        }
    }

    Ok(())
}
