//! `homepage` - render and validate the Mumbai Homes homepage from the shell.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use homepage_leptos::content::RawContent;
use homepage_leptos::enquiry::{Enquiry, EnquiryHandler, EnquiryModal};
use homepage_leptos::{render_homepage, EnquiryError, HomepageConfig, WebsiteContent};

#[derive(Parser, Debug)]
#[command(name = "homepage")]
#[command(about = "Render the Mumbai Homes homepage from a content document")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the full HTML document
    Render {
        /// Content document (JSON)
        #[arg(long)]
        content: PathBuf,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Config file; defaults to .homepage/config.toml in the working directory
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Resolve the content document and print a per-slice summary
    Check {
        /// Content document (JSON)
        #[arg(long)]
        content: PathBuf,
        /// Config file; defaults to .homepage/config.toml in the working directory
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate an enquiry and append it to a JSON lines outbox
    Enquiry {
        /// Enquiry form fields (JSON)
        #[arg(long)]
        input: PathBuf,
        /// Outbox file, one JSON object per line
        #[arg(long)]
        outbox: PathBuf,
        /// Project the enquiry was opened from
        #[arg(long)]
        project: Option<String>,
    },
}

/// Appends each delivered enquiry as one JSON line.
struct JsonLinesOutbox {
    path: PathBuf,
}

impl EnquiryHandler for JsonLinesOutbox {
    fn deliver(&mut self, enquiry: &Enquiry) -> Result<(), EnquiryError> {
        let line =
            serde_json::to_string(enquiry).map_err(|e| EnquiryError::Delivery(e.to_string()))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| EnquiryError::Delivery(format!("{}: {}", self.path.display(), e)))?;
        writeln!(file, "{}", line).map_err(|e| EnquiryError::Delivery(e.to_string()))
    }
}

fn load_config(path: Option<&Path>) -> Result<HomepageConfig> {
    match path {
        Some(path) => Ok(HomepageConfig::load_from_path(path)?),
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            Ok(HomepageConfig::load(&cwd)?)
        }
    }
}

fn load_content(path: &Path, config: &HomepageConfig) -> Result<WebsiteContent> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read content document {}", path.display()))?;
    let raw = RawContent::from_json(&text)
        .with_context(|| format!("invalid content document {}", path.display()))?;
    Ok(raw.resolve(config.missing_slices)?)
}

fn run_render(content: &Path, out: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let content = load_content(content, &config)?;
    let html = render_homepage(&content, &config);
    debug!(bytes = html.len(), "rendered homepage");

    match out {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn run_check(content: &Path, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let content = load_content(content, &config)?;

    let summary = [
        ("banks", content.banks.len()),
        ("discoverNeighborhoods", content.discover_neighborhoods.len()),
        ("frequentlyAskedQuestions", content.frequently_asked_questions.len()),
        ("homesInEveryZone", content.homes_in_every_zone.len()),
        ("newlyLaunched", content.newly_launched.len()),
        ("trendingProjects", content.trending_projects.len()),
        ("virtualTours", content.virtual_tours.len()),
        ("whyChooseUs.features", content.why_choose_us.features.len()),
        ("mumbaiHomes.socialLinks", content.mumbai_homes.social_links.len()),
    ];
    for (slice, count) in summary {
        println!("{:<26} {}", slice, count);
    }
    println!("content OK");
    Ok(())
}

fn run_enquiry(input: &Path, outbox: &Path, project: Option<String>) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read enquiry {}", input.display()))?;
    let enquiry: Enquiry = serde_json::from_str(&text)
        .with_context(|| format!("invalid enquiry {}", input.display()))?;

    let mut modal = EnquiryModal::default();
    match project {
        Some(project) => modal.open_for(project),
        None => modal.open(),
    }
    let mut handler = JsonLinesOutbox {
        path: outbox.to_path_buf(),
    };
    modal.submit(&enquiry, &mut handler)?;
    println!("enquiry recorded in {}", outbox.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            content,
            out,
            config,
        } => run_render(&content, out.as_deref(), config.as_deref()),
        Commands::Check { content, config } => run_check(&content, config.as_deref()),
        Commands::Enquiry {
            input,
            outbox,
            project,
        } => run_enquiry(&input, &outbox, project),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the rendered document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[homepage] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
