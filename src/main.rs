use clap::Parser;
use folio::Theme;
use folio::core::config::{self, CliOverrides, FolioConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "folio", about = "SOC analyst portfolio in the terminal")]
struct Args {
    /// Colour theme (overrides FOLIO_THEME and the config file)
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Suppress the scripted notification feed
    #[arg(long)]
    no_notifications: bool,

    /// Section to open on start (hero, about, skills, projects, certs, contact)
    #[arg(short, long)]
    section: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Loaded before the logger so the file can set the log level; errors are
    // reported once logging is up.
    let (file_config, load_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (FolioConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        theme: args.theme,
        no_notifications: args.no_notifications,
        section: args.section,
    };
    let config = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    if let Some(e) = load_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "Folio starting up: theme={}, section={}, notifications={}",
        config.theme.label(),
        config.start_section,
        config.notifications
    );

    folio::tui::run(config)
}
