mod errors;
mod generators;
mod password;
mod prompt;

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{ EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt };

use crate::errors::CitadelError;
use crate::prompt::Prompter;

/// Pattern-based password generator
#[derive(Parser, Debug)]
#[command(name = "citadel")]
#[command(version)]
struct Args {
    /// Pause after the banner, in milliseconds
    #[arg(long, default_value_t = 2000)]
    delay_ms: u64,

    /// Skip the pause after the banner
    #[arg(long)]
    no_delay: bool,

    /// Do not print the banner (also skips the pause)
    #[arg(long)]
    no_banner: bool,

    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn banner_delay(&self) -> Duration {
        if self.no_delay {
            Duration::ZERO
        } else {
            Duration::from_millis(self.delay_ms)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CitadelError> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    if !args.no_banner {
        prompter.show_banner(args.banner_delay())?;
    }

    let request = prompter.collect_request()?;
    let password = request.generate(&mut rand::rng());
    tracing::debug!(style = %request.style, length = request.length, "password generated");

    prompter.print_password(&password)
}
