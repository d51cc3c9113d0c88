//! Money Cart entry point
//!
//! Runs a headless demo session with the autopilot at the controls and prints
//! the run summary as JSON.
//!
//! Usage: `money-cart [seed] [max_ticks] [params.json]`

use std::process::ExitCode;

use money_cart::{GameParams, Session};

const DEFAULT_SEED: u64 = 0x5eed;
const DEFAULT_MAX_TICKS: u64 = 60 * 60 * 5;

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, default: T, what: &str) -> Result<T, String> {
    match arg {
        None => Ok(default),
        Some(s) => s.parse().map_err(|_| format!("invalid {}: {}", what, s)),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Money Cart (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), DEFAULT_SEED, "seed");
    let max_ticks = parse_arg(args.next(), DEFAULT_MAX_TICKS, "max_ticks");
    let (seed, max_ticks) = match (seed, max_ticks) {
        (Ok(seed), Ok(max_ticks)) => (seed, max_ticks),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("{}", e);
            eprintln!("usage: money-cart [seed] [max_ticks] [params.json]");
            return ExitCode::FAILURE;
        }
    };

    let params = match args.next() {
        Some(path) => match GameParams::load(&path) {
            Ok(params) => params.clamped(),
            Err(e) => {
                log::error!("Failed to load {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => GameParams::default(),
    };

    let mut session = Session::new(seed, params);
    let summary = session.run_headless(max_ticks, true);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize summary: {}", e);
            ExitCode::FAILURE
        }
    }
}
