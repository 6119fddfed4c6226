//! Runtime configuration.
//!
//! Configuration comes from environment variables:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `RYDZ_PRICING` | `postcode` or `distance` | `postcode` |
//! | `RYDZ_RATE_TABLE` | JSON rate table file (postcode pricing) | built-in London table |
//! | `RYDZ_RATE_PER_MILE` | decimal rate (distance pricing) | `2.5` |
//! | `GOOGLE_MAPS_API_KEY` | Distance Matrix key (distance pricing) | required |
//! | `RYDZ_DISTANCE_CACHE_TTL_SECS` | distance cache TTL | 86400 |
//! | `RYDZ_DISTANCE_CACHE_CAPACITY` | distance cache entries | 10000 |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;

use crate::cache::{CacheConfig, CachedDistanceSource};
use crate::distance::{DistanceError, GoogleDistanceClient, GoogleDistanceConfig};
use crate::ratebook::{
    FlatRateDistanceRateBook, PostcodeRateBook, RateBook, RateTable, RateTableError,
};

/// Default per-mile rate for distance pricing.
const DEFAULT_RATE_PER_MILE: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// Errors in configuration, reported at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable has a value that cannot be used
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    /// A variable required by the chosen settings is not set
    #[error("{0} must be set")]
    Missing(&'static str),

    /// The rate table could not be loaded
    #[error(transparent)]
    RateTable(#[from] RateTableError),

    /// The distance client could not be created
    #[error("distance client: {0}")]
    Distance(#[from] DistanceError),
}

/// How journeys are priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingMode {
    /// Look up postcode areas in a rate table; `None` uses the built-in table.
    Postcode { rate_table: Option<PathBuf> },

    /// Charge a flat rate per mile of road distance from the Distance Matrix API.
    Distance {
        rate_per_mile: Decimal,
        api_key: String,
    },
}

/// Full runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub pricing: PricingMode,
    pub distance_cache: CacheConfig,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = lookup("RYDZ_PRICING").unwrap_or_else(|| "postcode".to_string());

        let pricing = match mode.as_str() {
            "postcode" => PricingMode::Postcode {
                rate_table: lookup("RYDZ_RATE_TABLE").map(PathBuf::from),
            },
            "distance" => PricingMode::Distance {
                rate_per_mile: parse_var(&lookup, "RYDZ_RATE_PER_MILE")?
                    .unwrap_or(DEFAULT_RATE_PER_MILE),
                api_key: lookup("GOOGLE_MAPS_API_KEY")
                    .filter(|key| !key.is_empty())
                    .ok_or(ConfigError::Missing("GOOGLE_MAPS_API_KEY"))?,
            },
            _ => {
                return Err(ConfigError::Invalid {
                    name: "RYDZ_PRICING",
                    value: mode,
                });
            }
        };

        if let PricingMode::Distance { rate_per_mile, .. } = &pricing {
            if *rate_per_mile < Decimal::ZERO {
                return Err(ConfigError::Invalid {
                    name: "RYDZ_RATE_PER_MILE",
                    value: rate_per_mile.to_string(),
                });
            }
        }

        let defaults = CacheConfig::default();
        let distance_cache = CacheConfig {
            ttl: parse_var::<u64, _>(&lookup, "RYDZ_DISTANCE_CACHE_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.ttl),
            max_capacity: parse_var(&lookup, "RYDZ_DISTANCE_CACHE_CAPACITY")?
                .unwrap_or(defaults.max_capacity),
        };

        Ok(Self {
            pricing,
            distance_cache,
        })
    }

    /// Build the rate book these settings describe.
    pub fn ratebook(&self) -> Result<Box<dyn RateBook>, ConfigError> {
        match &self.pricing {
            PricingMode::Postcode { rate_table } => {
                let table = match rate_table {
                    Some(path) => RateTable::load(path)?,
                    None => RateTable::london(),
                };
                Ok(Box::new(PostcodeRateBook::new(table)))
            }
            PricingMode::Distance {
                rate_per_mile,
                api_key,
            } => {
                let client = GoogleDistanceClient::new(GoogleDistanceConfig::new(api_key))?;
                let cached = CachedDistanceSource::new(client, &self.distance_cache);
                Ok(Box::new(FlatRateDistanceRateBook::new(cached, *rate_per_mile)))
            }
        }
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Address;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::io::Write;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    fn uk(postcode: &str) -> Address {
        Address::new().with_postcode(postcode).with_country("UK")
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.pricing, PricingMode::Postcode { rate_table: None });
        assert_eq!(config.distance_cache.ttl, CacheConfig::default().ttl);
        assert_eq!(
            config.distance_cache.max_capacity,
            CacheConfig::default().max_capacity
        );
    }

    #[test]
    fn default_ratebook_is_london_table() {
        let ratebook = config(&[]).unwrap().ratebook().unwrap();
        assert_eq!(
            ratebook.price(&uk("NW1 1AB"), &uk("RM14 2CD")).unwrap(),
            dec!(52.5)
        );
    }

    #[test]
    fn rate_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"E1": {"N1": 11.75}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = config(&[("RYDZ_RATE_TABLE", &path)]).unwrap();
        let ratebook = config.ratebook().unwrap();
        assert_eq!(
            ratebook.price(&uk("E1 6AN"), &uk("N1 9GU")).unwrap(),
            dec!(11.75)
        );
    }

    #[test]
    fn unreadable_rate_table() {
        let config = config(&[("RYDZ_RATE_TABLE", "/nonexistent/rates.json")]).unwrap();
        assert!(matches!(
            config.ratebook(),
            Err(ConfigError::RateTable(RateTableError::Io { .. }))
        ));
    }

    #[test]
    fn distance_mode() {
        let config = config(&[
            ("RYDZ_PRICING", "distance"),
            ("GOOGLE_MAPS_API_KEY", "my_key"),
            ("RYDZ_RATE_PER_MILE", "1.75"),
            ("RYDZ_DISTANCE_CACHE_TTL_SECS", "60"),
        ])
        .unwrap();

        assert_eq!(
            config.pricing,
            PricingMode::Distance {
                rate_per_mile: dec!(1.75),
                api_key: "my_key".into()
            }
        );
        assert_eq!(config.distance_cache.ttl, Duration::from_secs(60));
        assert!(config.ratebook().is_ok());
    }

    #[test]
    fn distance_mode_defaults_rate() {
        let config = config(&[
            ("RYDZ_PRICING", "distance"),
            ("GOOGLE_MAPS_API_KEY", "my_key"),
        ])
        .unwrap();
        match config.pricing {
            PricingMode::Distance { rate_per_mile, .. } => assert_eq!(rate_per_mile, dec!(2.5)),
            other => panic!("unexpected mode: {other:?}"),
        }
    }

    #[test]
    fn distance_mode_needs_key() {
        let err = config(&[("RYDZ_PRICING", "distance")]).unwrap_err();
        assert_eq!(err.to_string(), "GOOGLE_MAPS_API_KEY must be set");
    }

    #[test]
    fn invalid_values() {
        let err = config(&[("RYDZ_PRICING", "surge")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid RYDZ_PRICING: \"surge\"");

        let err = config(&[
            ("RYDZ_PRICING", "distance"),
            ("GOOGLE_MAPS_API_KEY", "my_key"),
            ("RYDZ_RATE_PER_MILE", "cheap"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "RYDZ_RATE_PER_MILE",
                ..
            }
        ));

        let err = config(&[
            ("RYDZ_PRICING", "distance"),
            ("GOOGLE_MAPS_API_KEY", "my_key"),
            ("RYDZ_RATE_PER_MILE", "-1"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let err = config(&[("RYDZ_DISTANCE_CACHE_CAPACITY", "lots")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "RYDZ_DISTANCE_CACHE_CAPACITY",
                ..
            }
        ));
    }
}
