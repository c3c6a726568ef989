use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use rgb_tui_cli::TuiApp;
use rgb_tui_core::utils::debug::DEBUG_ENV_VAR;
use rgb_tui_core::utils::logger;
use rgb_tui_core::{format_hex, parse_hex, Config};

#[derive(Parser)]
#[command(name = "rgb-tui")]
#[command(about = "Pick a color with the mouse or keyboard, right in the terminal", long_about = None)]
struct Cli {
    /// Starting color, as #RRGGBB or #RGB
    #[arg(short, long, value_name = "HEX")]
    color: Option<String>,

    /// Rows used by the saturation/value plane
    #[arg(short, long, value_name = "N")]
    rows: Option<u16>,

    /// Config file to read instead of ~/.rgb-tui/config.yaml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the picked color as hex on exit
    #[arg(short, long)]
    print: bool,

    /// Enable debug logging to .rgb-tui/logs/latest.log
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        unsafe {
            std::env::set_var(DEBUG_ENV_VAR, "1");
        }
    }

    if let Err(e) = logger::init_global_logger(cli.debug) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(rows) = cli.rows {
        config.gradient_rows = rows;
    }
    let initial = match cli.color.as_deref() {
        Some(hex) => parse_hex(hex)?,
        None => config.initial_rgb()?,
    };

    let picked = {
        let mut tui = TuiApp::new(initial, config.gradient_rows(), config.max_width())?;
        if let Err(e) = tui.run() {
            logger::error(&format!("picker aborted: {:#}", e));
            return Err(e);
        }
        tui.rgb()
    };

    if cli.print {
        println!("{}", format_hex(picked));
    }

    Ok(())
}
