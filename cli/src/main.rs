//! pagepulse CLI - reading time, scroll progress and freshness tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagepulse::{
    load_post, sample, to_json, BatchAnalyzer, FreshnessFormatter, FreshnessOptions, JsonFormat,
    ReadingOptions, ReadingSpeed, ReadingTimeEstimator, Variant, ViewportMetrics, WidgetConfig,
};

/// File extensions picked up by `batch`.
const CONTENT_EXTENSIONS: &[&str] = &["md", "markdown", "html", "htm", "txt"];

#[derive(Parser)]
#[command(name = "pagepulse")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Estimate reading time, scroll progress, and content freshness", long_about = None)]
struct Cli {
    /// Widget configuration file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate reading time of a file
    #[command(alias = "rt")]
    Reading {
        /// Input file (Markdown, HTML, or text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Reading speed in words per minute
        #[arg(long, env = "PAGEPULSE_WPM")]
        wpm: Option<u32>,

        /// Exclude YAML frontmatter from the word count
        #[arg(long)]
        skip_frontmatter: bool,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe published and updated dates
    Freshness {
        /// Publish timestamp (ISO-8601)
        #[arg(long, value_name = "DATE")]
        published: String,

        /// Update timestamp (ISO-8601)
        #[arg(long, value_name = "DATE")]
        updated: Option<String>,

        /// Ignore a malformed update timestamp instead of failing
        #[arg(long)]
        lenient: bool,

        /// Layout variant
        #[arg(long, value_enum)]
        variant: Option<LayoutVariant>,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute scroll progress from viewport measurements
    Progress {
        /// Visible viewport height
        #[arg(long)]
        viewport: f64,

        /// Total document height
        #[arg(long)]
        scroll_height: f64,

        /// Current scroll offset
        #[arg(long, allow_negative_numbers = true)]
        offset: f64,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze every post in a directory
    Batch {
        /// Directory containing posts
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Reading speed in words per minute
        #[arg(long, env = "PAGEPULSE_WPM")]
        wpm: Option<u32>,

        /// Exclude YAML frontmatter from the word count
        #[arg(long)]
        skip_frontmatter: bool,

        /// Ignore malformed update timestamps
        #[arg(long)]
        lenient: bool,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LayoutVariant {
    /// Single line
    Inline,
    /// One line per date
    Block,
}

impl From<LayoutVariant> for Variant {
    fn from(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::Inline => Variant::Inline,
            LayoutVariant::Block => Variant::Block,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Some(Commands::Reading {
            input,
            wpm,
            skip_frontmatter,
            json,
        }) => cmd_reading(&input, &config, wpm, skip_frontmatter, json),
        Some(Commands::Freshness {
            published,
            updated,
            lenient,
            variant,
            json,
        }) => cmd_freshness(
            &config,
            &published,
            updated.as_deref(),
            lenient,
            variant,
            json,
        ),
        Some(Commands::Progress {
            viewport,
            scroll_height,
            offset,
            json,
        }) => cmd_progress(viewport, scroll_height, offset, json),
        Some(Commands::Batch {
            dir,
            wpm,
            skip_frontmatter,
            lenient,
            json,
        }) => cmd_batch(&dir, &config, wpm, skip_frontmatter, lenient, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: pagepulse <COMMAND>".yellow());
            println!("       pagepulse --help for more information");
            Ok(())
        }
    });

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<WidgetConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(WidgetConfig::from_path(path)?),
        None => Ok(WidgetConfig::default()),
    }
}

fn reading_options(
    config: &WidgetConfig,
    wpm: Option<u32>,
    skip_frontmatter: bool,
) -> Result<ReadingOptions, Box<dyn std::error::Error>> {
    let speed = match wpm {
        Some(wpm) => ReadingSpeed::new(wpm)?,
        None => config.reading_time.words_per_minute,
    };
    Ok(ReadingOptions::new()
        .with_speed(speed)
        .with_frontmatter_skipped(skip_frontmatter))
}

fn cmd_reading(
    input: &Path,
    config: &WidgetConfig,
    wpm: Option<u32>,
    skip_frontmatter: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = reading_options(config, wpm, skip_frontmatter)?;
    let content = fs::read_to_string(input)?;
    let estimate = ReadingTimeEstimator::new(options.clone()).estimate(&content);

    if json {
        println!("{}", to_json(&estimate, JsonFormat::Pretty)?);
        return Ok(());
    }

    let icon = if config.reading_time.show_icon { "⏱ " } else { "" };
    println!("{}{}", icon, estimate.to_string().green().bold());
    println!(
        "{}",
        format!("{} words at {}", estimate.words, options.speed).dimmed()
    );

    Ok(())
}

fn cmd_freshness(
    config: &WidgetConfig,
    published: &str,
    updated: Option<&str>,
    lenient: bool,
    variant: Option<LayoutVariant>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = FreshnessOptions::new();
    if lenient {
        options = options.lenient();
    }
    let freshness = FreshnessFormatter::new(options).describe(published, updated)?;

    if json {
        println!("{}", to_json(&freshness, JsonFormat::Pretty)?);
        return Ok(());
    }

    let variant = variant.map(Variant::from).unwrap_or(config.freshness.variant);
    let icon = if config.freshness.show_icon { "📅 " } else { "" };
    println!("{}{}", icon, freshness.render(variant));

    Ok(())
}

fn cmd_progress(
    viewport: f64,
    scroll_height: f64,
    offset: f64,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = ViewportMetrics::new(viewport, scroll_height, offset);
    let progress = sample(&metrics);

    if json {
        println!("{}", to_json(&progress, JsonFormat::Compact)?);
        return Ok(());
    }

    const WIDTH: usize = 40;
    let filled = (progress.ratio() * WIDTH as f64).round() as usize;
    println!(
        "[{}{}] {}",
        "#".repeat(filled).cyan(),
        "-".repeat(WIDTH - filled).dimmed(),
        progress.to_string().bold()
    );

    Ok(())
}

fn collect_post_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(collect_post_files(&path)?);
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn cmd_batch(
    dir: &Path,
    config: &WidgetConfig,
    wpm: Option<u32>,
    skip_frontmatter: bool,
    lenient: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let reading = reading_options(config, wpm, skip_frontmatter)?;
    let mut freshness = FreshnessOptions::new();
    if lenient {
        freshness = freshness.lenient();
    }

    let files = collect_post_files(dir)?;
    log::info!("found {} post files in {}", files.len(), dir.display());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Loading posts...");
    let mut posts = Vec::with_capacity(files.len());
    for path in &files {
        posts.push(load_post(path)?);
        pb.inc(1);
    }

    pb.set_message("Analyzing...");
    let summaries = BatchAnalyzer::new(reading, freshness).analyze_all(&posts)?;
    pb.finish_and_clear();

    if json {
        println!("{}", to_json(&summaries, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!("{}", "Posts".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for summary in &summaries {
        let status = match &summary.freshness {
            Some(f) if f.is_updated => format!("updated {}", f.updated.as_deref().unwrap_or("")),
            Some(f) => format!("published {}", f.published),
            None => "undated".to_string(),
        };
        println!(
            "{:<32} {:>12}  {}",
            summary.id.bold(),
            summary.reading.to_string(),
            status.dimmed()
        );
    }

    let total_minutes: u64 = summaries.iter().map(|s| s.reading.minutes as u64).sum();
    let total_words: usize = summaries.iter().map(|s| s.reading.words).sum();
    println!();
    println!("{}: {}", "Posts".bold(), summaries.len());
    println!("{}: {}", "Words".bold(), total_words);
    println!("{}: {} min", "Reading time".bold(), total_minutes);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagepulse".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Reading time, scroll progress, and freshness tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/pagepulse".dimmed());
    println!("License: MIT");
}
