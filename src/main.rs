use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use workout::core::config::{self, CliOverrides, WorkoutConfig};

#[derive(Parser)]
#[command(name = "workout", version, about = "Guided exercise walkthrough for the terminal")]
struct Args {
    /// Folder holding the demonstration videos
    #[arg(short, long)]
    media_dir: Option<PathBuf>,

    /// Command used to play a video; the file path is appended (e.g. "mpv --loop")
    #[arg(short, long)]
    player: Option<String>,

    /// Config file to read instead of ~/.workout/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the debug log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger before anything that logs. The terminal
    // belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let log_path = config::log_file_path(args.log_file.as_deref());
    if let Ok(log_file) = File::create(&log_path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        WorkoutConfig::default()
    });

    let cli = CliOverrides {
        media_dir: args.media_dir,
        player: args.player,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Workout starting up with media dir {}", resolved.media_dir.display());

    workout::tui::run(resolved)
}
