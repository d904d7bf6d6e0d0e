//! Session configuration, overridable from the environment.
//!
//! | Variable             | Default |
//! |----------------------|---------|
//! | `ELO_INITIAL_RATING` | 1000    |
//! | `ELO_K_FACTOR`       | 32      |
//! | `ELO_DIVISOR`        | 10      |
//! | `ELO_ROUNDS`         | 3       |
//! | `ELO_EXTEND_ROUNDS`  | 3       |

use crate::logic::EloParams;
use crate::models::Rating;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_INITIAL_RATING: Rating = 1000;
pub const DEFAULT_TOTAL_ROUNDS: u32 = 3;
pub const DEFAULT_EXTEND_ROUNDS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Rating every participant starts with.
    pub initial_rating: Rating,
    pub elo: EloParams,
    /// Rounds per session before the leaderboard is shown.
    pub total_rounds: u32,
    /// Rounds added by "play more rounds".
    pub extend_rounds: u32,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            initial_rating: DEFAULT_INITIAL_RATING,
            elo: EloParams::default(),
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            extend_rounds: DEFAULT_EXTEND_ROUNDS,
        }
    }
}

impl RankerConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing keys use the default;
    /// unparsable or out-of-range values are logged and use the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let k_factor = read(&lookup, "ELO_K_FACTOR", defaults.elo.k_factor, |k: &f64| {
            k.is_finite() && *k > 0.0
        });
        let divisor = read(&lookup, "ELO_DIVISOR", defaults.elo.divisor, |d: &f64| {
            d.is_finite() && *d > 0.0
        });
        Self {
            initial_rating: read(&lookup, "ELO_INITIAL_RATING", defaults.initial_rating, |_| true),
            elo: EloParams { k_factor, divisor },
            total_rounds: read(&lookup, "ELO_ROUNDS", defaults.total_rounds, |r: &u32| *r > 0),
            extend_rounds: read(&lookup, "ELO_EXTEND_ROUNDS", defaults.extend_rounds, |r: &u32| {
                *r > 0
            }),
        }
    }
}

fn read<F, T>(lookup: &F, key: &str, default: T, valid: impl Fn(&T) -> bool) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            log::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = RankerConfig::from_lookup(|_| None);
        assert_eq!(config, RankerConfig::default());
        assert_eq!(config.initial_rating, 1000);
        assert_eq!(config.elo.k_factor, 32.0);
        assert_eq!(config.elo.divisor, 10.0);
        assert_eq!(config.total_rounds, 3);
        assert_eq!(config.extend_rounds, 3);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = RankerConfig::from_lookup(lookup_from(&[
            ("ELO_INITIAL_RATING", "1500"),
            ("ELO_K_FACTOR", "24"),
            ("ELO_DIVISOR", " 400 "),
            ("ELO_ROUNDS", "5"),
            ("ELO_EXTEND_ROUNDS", "2"),
        ]));
        assert_eq!(config.initial_rating, 1500);
        assert_eq!(config.elo.k_factor, 24.0);
        assert_eq!(config.elo.divisor, 400.0);
        assert_eq!(config.total_rounds, 5);
        assert_eq!(config.extend_rounds, 2);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = RankerConfig::from_lookup(lookup_from(&[
            ("ELO_INITIAL_RATING", "lots"),
            ("ELO_K_FACTOR", "inf"),
            ("ELO_DIVISOR", "0"),
            ("ELO_ROUNDS", "0"),
            ("ELO_EXTEND_ROUNDS", "-1"),
        ]));
        assert_eq!(config, RankerConfig::default());
    }

    #[test]
    fn non_positive_k_and_divisor_are_rejected() {
        for (k, d) in [("-32", "-10"), ("0", "-400"), ("-0.5", "0")] {
            let config = RankerConfig::from_lookup(lookup_from(&[
                ("ELO_K_FACTOR", k),
                ("ELO_DIVISOR", d),
            ]));
            assert_eq!(config.elo, EloParams::default(), "K={k} divisor={d}");
        }
    }
}
