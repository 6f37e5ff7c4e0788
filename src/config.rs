//! Environment-driven configuration.
//! Used by: main, server.

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Config {
    /// Reads `PORT`. Unset or blank falls back to [`DEFAULT_PORT`].
    pub fn from_env() -> Result<Self> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| Error::InvalidPort(value.into())),
    }
}
