//! Runtime settings read from `BOMBER_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Context, Result};
use log::LevelFilter;

use crate::core::GameRules;
use crate::types::{
    DEFAULT_AMMO, DEFAULT_BOMB_RADIUS, DEFAULT_END_PAUSE_SECS, DEFAULT_GUN_RANGE,
    DEFAULT_SAFE_ALTITUDE, MAX_RULE_VALUE,
};

pub const DEFAULT_SCORE_FILE: &str = "bomber.scores.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rules: GameRules,
    /// How long the end-of-round screen stays up without a key press.
    pub end_pause: Duration,
    /// Skyline seed. `None` derives one from the clock for each round.
    pub seed: Option<u32>,
    pub score_file: PathBuf,
    /// Log file; logging is off when unset.
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            end_pause: Duration::from_secs(DEFAULT_END_PAUSE_SECS),
            seed: None,
            score_file: PathBuf::from(DEFAULT_SCORE_FILE),
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Unset or blank keys take their
    /// default; present but malformed or out-of-range values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let rules = GameRules {
            ammo: parse(&get, "BOMBER_AMMO")?.unwrap_or(DEFAULT_AMMO),
            gun_range: parse_rule(&get, "BOMBER_GUN_RANGE")?.unwrap_or(DEFAULT_GUN_RANGE),
            safe_altitude: parse_rule(&get, "BOMBER_SAFE_ALTITUDE")?
                .unwrap_or(DEFAULT_SAFE_ALTITUDE),
            bomb_radius: parse_rule(&get, "BOMBER_BOMB_RADIUS")?.unwrap_or(DEFAULT_BOMB_RADIUS),
        };

        let end_pause_secs: u64 =
            parse(&get, "BOMBER_END_PAUSE_SECS")?.unwrap_or(DEFAULT_END_PAUSE_SECS);

        Ok(Self {
            rules,
            end_pause: Duration::from_secs(end_pause_secs),
            seed: parse(&get, "BOMBER_SEED")?,
            score_file: get("BOMBER_SCORE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORE_FILE)),
            log_path: get("BOMBER_LOG_PATH").map(PathBuf::from),
            log_level: parse(&get, "BOMBER_LOG_LEVEL")?.unwrap_or(LevelFilter::Info),
        })
    }

    /// Seed for the next round's skyline.
    pub fn round_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn parse<T>(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    get(key)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("invalid value {raw:?} for {key}"))
        })
        .transpose()
}

/// Distances in cells: `0..=MAX_RULE_VALUE`.
fn parse_rule(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<i32>> {
    let value = parse::<i32>(get, key)?;
    if let Some(v) = value {
        ensure!(
            (0..=MAX_RULE_VALUE).contains(&v),
            "{key} must be between 0 and {MAX_RULE_VALUE}, got {v}"
        );
    }
    Ok(value)
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.rules.ammo, 5);
        assert_eq!(settings.rules.gun_range, 20);
        assert_eq!(settings.end_pause, Duration::from_secs(3));
        assert_eq!(settings.score_file, PathBuf::from("bomber.scores.json"));
        assert!(settings.log_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("BOMBER_AMMO", "9"),
            ("BOMBER_GUN_RANGE", " 30 "),
            ("BOMBER_SAFE_ALTITUDE", "7"),
            ("BOMBER_BOMB_RADIUS", "2"),
            ("BOMBER_END_PAUSE_SECS", "0"),
            ("BOMBER_SEED", "42"),
            ("BOMBER_SCORE_FILE", "/tmp/s.json"),
            ("BOMBER_LOG_PATH", "/tmp/bomber.log"),
            ("BOMBER_LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert_eq!(
            settings.rules,
            GameRules {
                ammo: 9,
                gun_range: 30,
                safe_altitude: 7,
                bomb_radius: 2,
            }
        );
        assert_eq!(settings.end_pause, Duration::ZERO);
        assert_eq!(settings.round_seed(), 42);
        assert_eq!(settings.score_file, PathBuf::from("/tmp/s.json"));
        assert_eq!(settings.log_path, Some(PathBuf::from("/tmp/bomber.log")));
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let settings = settings_from(&[("BOMBER_AMMO", ""), ("BOMBER_LOG_PATH", "  ")]).unwrap();
        assert_eq!(settings.rules.ammo, DEFAULT_AMMO);
        assert!(settings.log_path.is_none());
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let err = settings_from(&[("BOMBER_AMMO", "lots")]).unwrap_err();
        assert!(format!("{err:#}").contains("BOMBER_AMMO"));
    }

    #[test]
    fn test_out_of_range_rules_are_errors() {
        for key in ["BOMBER_GUN_RANGE", "BOMBER_SAFE_ALTITUDE", "BOMBER_BOMB_RADIUS"] {
            for raw in ["-1", "2147483647"] {
                let err = settings_from(&[(key, raw)]).unwrap_err();
                assert!(format!("{err:#}").contains(key), "{key}={raw}");
            }
        }

        let edge = settings_from(&[("BOMBER_BOMB_RADIUS", "65535"), ("BOMBER_GUN_RANGE", "0")])
            .unwrap();
        assert_eq!(edge.rules.bomb_radius, MAX_RULE_VALUE);
        assert_eq!(edge.rules.gun_range, 0);
    }
}
