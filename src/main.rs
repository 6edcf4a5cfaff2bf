use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

use podhome::{
    CacheOptions, HomeEvent, HomeReporter, NoopReporter, Player, PrepareOptions, QueuePlayer,
    ReqwestClient, SharedReporter, load_or_prepare, render_home, render_now_playing, resolve_row,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static CACHE: Emoji<'_, '_> = Emoji("💾 ", "[c] ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static PLAY: Emoji<'_, '_> = Emoji("▶️  ", "[>] ");

/// Terminal home page for a podcast catalog
#[derive(Parser, Debug)]
#[command(name = "podhome")]
#[command(about = "Show the latest releases and episode table of a podcast catalog")]
#[command(version)]
struct Args {
    /// Base URL of the episode listing API
    #[arg(default_value = "http://localhost:3333")]
    api_url: String,

    /// Maximum number of episodes to request
    #[arg(short, long, default_value = "12")]
    limit: usize,

    /// How many episodes form the latest releases region
    #[arg(long, default_value = "2")]
    latest: usize,

    /// Snapshot freshness window in hours
    #[arg(long, default_value = "8", value_name = "HOURS")]
    ttl: i64,

    /// Directory for cached snapshots
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Regenerate the snapshot even if a fresh one is cached
    #[arg(short, long)]
    refresh: bool,

    /// Queue playback starting at this row of the rendered page
    #[arg(short, long, value_name = "ROW")]
    play: Option<usize>,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Progress reporter using indicatif for terminal output
struct IndicatifReporter {
    main_bar: ProgressBar,
}

impl IndicatifReporter {
    fn new() -> Self {
        let main_bar = ProgressBar::new_spinner();
        main_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {wide_msg}")
                .unwrap(),
        );
        main_bar.enable_steady_tick(Duration::from_millis(100));

        Self { main_bar }
    }
}

impl HomeReporter for IndicatifReporter {
    fn report(&self, event: HomeEvent) {
        match event {
            HomeEvent::FetchingEpisodes { url } => {
                self.main_bar
                    .set_message(format!("{SEARCH}Fetching episodes: {}", url.cyan()));
            }

            HomeEvent::EpisodesLoaded { total, skipped } => {
                let mut message =
                    format!("{HEADPHONES}{} episodes loaded", total.to_string().cyan());
                if skipped > 0 {
                    message.push_str(&format!(
                        ", {} skipped as malformed",
                        skipped.to_string().yellow()
                    ));
                }
                self.main_bar.set_message(message);
            }

            HomeEvent::ServedFromCache { age_secs } => {
                self.main_bar.finish_and_clear();
                println!(
                    "{CACHE}{} {}\n",
                    "Served from cache".bold().green(),
                    format!("({} min old)", age_secs / 60).dimmed()
                );
            }

            HomeEvent::SnapshotReady { latest, remaining } => {
                self.main_bar.finish_and_clear();
                println!(
                    "{SUCCESS}{} {} latest, {} in the table\n",
                    "Home page ready:".bold().green(),
                    latest.to_string().green().bold(),
                    remaining.to_string().cyan()
                );
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podhome".bold().magenta(),
            "- Podcast Home Page".dimmed()
        );
    }

    let client = ReqwestClient::new();

    let prepare_options = PrepareOptions {
        limit: args.limit,
        latest_count: args.latest,
    };

    let cache_options = CacheOptions {
        cache_dir: args
            .cache_dir
            .unwrap_or_else(|| std::env::temp_dir().join("podhome")),
        ttl_secs: args.ttl * 3600,
        force_refresh: args.refresh,
    };

    let reporter: SharedReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        Arc::new(IndicatifReporter::new())
    };

    let props = load_or_prepare(
        &client,
        &args.api_url,
        &prepare_options,
        &cache_options,
        &reporter,
    )
    .await
    .context("Failed to prepare the home page")?;

    println!("{}", render_home(&props));

    if let Some(row) = args.play {
        let index = resolve_row(&props, row)
            .with_context(|| format!("No episode at row {row} (valid rows: 1-{})", props.len()))?;

        let player = QueuePlayer::shared();
        player.play_list(&props.combined(), index);

        if let Some(episode) = player.now_playing() {
            println!("{PLAY}{}\n", render_now_playing(&episode));
        }
    }

    Ok(())
}
