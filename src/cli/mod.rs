mod handlers;
pub mod parse;

use clap::Parser;
use log::LevelFilter;
pub use parse::Cli;

use crate::core::error::BarcharError;

pub fn run() -> Result<(), BarcharError> {
    let cli = parse::Cli::parse();
    init_logging(cli.debug());
    match cli.cmd {
        parse::Command::Render(a) => handlers::render(a),
        parse::Command::Examples(a) => handlers::examples(a),
    }
}

/// `RUST_LOG` decides, defaulting to warnings; `--debug` raises it to debug.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.format_timestamp(None).target(env_logger::Target::Stderr).try_init();
}
