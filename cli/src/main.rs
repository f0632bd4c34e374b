//! Terminal front end for the memorama matching game.

use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use memorama_core::Level;

use crate::app::App;

mod app;
mod screen;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the pause that keeps a resolved pair on screen
    #[arg(long)]
    no_pause: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    for level in Level::ALL {
        level
            .config()
            .validate()
            .with_context(|| format!("built-in level {} is not dealable", level.name()))?;
    }

    let pause = if args.no_pause {
        Duration::ZERO
    } else {
        session::REVEAL_PAUSE
    };

    let stdin = io::stdin();
    App::new(stdin.lock(), io::stdout(), args.seed, pause).run()
}
