use std::{env, str::FromStr};

use tracing::warn;

use minesweeper_common::models::GameParams;

pub const ROWS_VAR: &str = "MINESWEEPER_ROWS";
pub const COLS_VAR: &str = "MINESWEEPER_COLS";
pub const MINES_VAR: &str = "MINESWEEPER_MINES";
pub const SEED_VAR: &str = "MINESWEEPER_SEED";

fn parse_or<T: FromStr>(name: &str, value: Option<String>, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparsable {}={:?}, using default", name, raw);
            default
        }),
    }
}

/// Builds game parameters from an arbitrary variable lookup, falling back
/// to [`GameParams::default`] field by field.
pub fn params_from<F>(lookup: F) -> GameParams
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = GameParams::default();
    GameParams {
        rows: parse_or(ROWS_VAR, lookup(ROWS_VAR), defaults.rows),
        cols: parse_or(COLS_VAR, lookup(COLS_VAR), defaults.cols),
        mines: parse_or(MINES_VAR, lookup(MINES_VAR), defaults.mines),
    }
}

/// Reads `MINESWEEPER_ROWS`, `MINESWEEPER_COLS` and `MINESWEEPER_MINES`.
pub fn params_from_env() -> GameParams {
    params_from(|name| env::var(name).ok())
}

/// Optional fixed seed for reproducible games, from an arbitrary lookup.
pub fn seed_from<F>(lookup: F) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(SEED_VAR)?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            warn!("Ignoring unparsable {}={:?}", SEED_VAR, raw);
            None
        }
    }
}

/// Reads `MINESWEEPER_SEED`.
pub fn seed_from_env() -> Option<u64> {
    seed_from(|name| env::var(name).ok())
}
