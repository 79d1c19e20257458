use anyhow::Result;
use clap::Parser;
use magnus_blind::core::Side;
use magnus_blind::device::AdbDevice;
use magnus_blind::game::Session;
use magnus_blind::screen::ScreenConfig;
use std::path::PathBuf;

/// Play blind chess against the Play Magnus Android app over adb.
#[derive(Debug, Parser)]
#[command(
    name = "magnus-blind",
    about = "Play blind chess against the Play Magnus Android app over adb"
)]
struct Args {
    /// Play as Black (mirrors the board mapping)
    #[arg(long)]
    black: bool,

    /// Screen layout file; built-in defaults are used when it is missing
    #[arg(long, default_value = "screen_config.json")]
    config: PathBuf,

    /// adb executable to invoke
    #[arg(long, default_value = "adb")]
    adb: String,

    /// Verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = ScreenConfig::load_or_default(&args.config);
    config.validate()?;

    let side = if args.black { Side::Black } else { Side::White };
    let device = AdbDevice::new(args.adb);

    let mut session = Session::new(config, device, side);
    session.run()
}
