use bloom::StartScreen;
use bloom::core::config::{self, CliOverrides};
use bloom::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bloom", about = "Terminal storefront for home garden plants")]
struct Args {
    /// Screen to open on
    #[arg(short, long, value_enum)]
    start: Option<StartScreen>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger isn't up yet; keep the error and report it once it is.
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("bloom: {e}; using defaults");
            (config::BloomConfig::default(), Some(e))
        }
    };

    let cli = CliOverrides {
        start_screen: args.start.map(Into::into),
        log_level: args.log_level,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = resolved.level_filter().unwrap_or_else(|| {
        eprintln!(
            "bloom: unknown log level '{}'; using info",
            resolved.log_level
        );
        LevelFilter::Info
    });
    match File::create(&resolved.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "bloom: cannot create log file {}: {e}; logging disabled",
            resolved.log_file.display()
        ),
    }

    if let Some(e) = config_error {
        log::warn!("Falling back to default config: {}", e);
    }
    log::info!("Bloom starting up with {:?}", resolved);

    tui::run(resolved)
}
