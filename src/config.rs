//! Environment driven settings.
//!
//! `OVERRIDE_SEED` pins the seed used by [`crate::patterns`], so a failing test or a surprising
//! scenario run can be reproduced exactly.

use std::env;

use crate::{Error, Result};

pub const OVERRIDE_SEED_VAR: &str = "OVERRIDE_SEED";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub override_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source, `lookup` returns `None` for unset
    /// variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let override_seed = lookup(OVERRIDE_SEED_VAR)
            .map(|value| parse_seed(&value))
            .transpose()?;

        Ok(Self { override_seed })
    }
}

fn parse_seed(value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|source| Error::InvalidSeed {
            value: value.to_owned(),
            source,
        })
}
