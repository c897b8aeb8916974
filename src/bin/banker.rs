//! Terminal banker.
//!
//! Keeps board-game balances in memory for one session.

use anyhow::{bail, Context, Result};
use pico_args::Arguments;
use std::io;

use banker::cli;
use banker::core::{Banker, BankerConfig, Player};
use banker::roster::Roster;
use banker::currency::{supported_locales, CurrencyConfig};
use banker::rules::OperationMode;

const HELP: &str = "\
Keep board-game balances for the banker

USAGE:
  banker [OPTIONS]

OPTIONS:
  --locale TAG          Display locale  [default: pt-BR]
  --currency CODE       ISO 4217 currency code  [default: BRL]
  --mode MODE           'two' (every operation pays between two players)
                        or 'single' (add/subtract one player)  [default: two]
  --player NAME=AMOUNT  Start with this player (repeatable)

FLAGS:
  -h, --help            Print help information

Set RUST_LOG=debug to see ignored input.
";

struct Args {
    config: BankerConfig,
    players: Vec<Player>,
}

fn parse_args() -> Result<Args> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        let locales: Vec<_> = supported_locales().collect();
        println!("Supported locales: {}", locales.join(", "));
        std::process::exit(0);
    }

    let defaults = CurrencyConfig::default();
    let locale: String = pargs
        .opt_value_from_str("--locale")?
        .unwrap_or(defaults.locale);
    let currency: String = pargs
        .opt_value_from_str("--currency")?
        .unwrap_or(defaults.currency_code);
    let mode: OperationMode = pargs.opt_value_from_str("--mode")?.unwrap_or_default();

    let mut seed = Roster::new();
    for pair in pargs.values_from_str::<_, String>("--player")? {
        if let Err(err) = seed.add_pair(&pair) {
            bail!("invalid --player {pair:?}: {err}");
        }
    }
    let players = seed.confirm();

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {remaining:?}");
    }

    let config = BankerConfig::default()
        .with_currency(CurrencyConfig::new(locale, currency.to_uppercase()))
        .with_mode(mode);
    config.validate().context("invalid configuration")?;

    Ok(Args { config, players })
}

fn main() -> Result<()> {
    env_logger::builder().format_target(false).init();

    let args = parse_args()?;
    log::info!(
        "starting with {} players, mode {}, {} / {}",
        args.players.len(),
        args.config.mode,
        args.config.currency.locale,
        args.config.currency.currency_code,
    );

    let mut banker = Banker::with_players(args.config, args.players);
    cli::run(&mut banker, io::stdin().lock(), io::stdout().lock())
}
