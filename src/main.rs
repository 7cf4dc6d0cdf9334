use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing::Level;

use screensaver::window::{self, WindowOptions};
use screensaver::{AppContext, Settings, Timing};

#[derive(Parser, Debug)]
#[command(name = "screensaver", version, about = "Preview and run screensavers")]
struct Args {
    /// Quote file, one `quote|author` per line.
    #[arg(long, default_value = "quotes.txt")]
    quotes: PathBuf,

    /// Keep each quote on screen for 30 minutes instead of a few seconds.
    #[arg(long)]
    production: bool,

    /// Screensaver to preselect (see --list).
    #[arg(long)]
    variant: Option<String>,

    /// Go straight to fullscreen.
    #[arg(long)]
    fullscreen: bool,

    /// Seed for reproducible quote order and drift.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the available screensavers and exit.
    #[arg(long)]
    list: bool,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();

    let settings = Settings {
        quotes_path: args.quotes,
        timing: if args.production { Timing::Production } else { Timing::Test },
        seed: args.seed,
        ..Settings::default()
    };
    let context = AppContext::new(settings).context("registering screensavers")?;

    if args.list {
        for name in context.registry().names() {
            println!("{name}");
        }
        return Ok(());
    }

    let selected = match args.variant.as_deref() {
        Some(name) => context.registry().position(name)?,
        None => 0,
    };

    window::run(context, WindowOptions { selected, fullscreen: args.fullscreen })
}
