//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is honoured via `dotenvy`; real
//! environment variables win over it.
use crate::coupon::QuorumPolicy;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DATA_DIR_VAR: &str = "ORDER_DATA_DIR";
pub const PRODUCTS_FILE_VAR: &str = "ORDER_PRODUCTS_FILE";
pub const COUPON_FILES_VAR: &str = "ORDER_COUPON_FILES";
pub const COUPON_QUORUM_VAR: &str = "ORDER_COUPON_QUORUM";
pub const REQUEST_TIMEOUT_VAR: &str = "ORDER_REQUEST_TIMEOUT_SECS";
pub const CHANNEL_CAPACITY_VAR: &str = "ORDER_CHANNEL_CAPACITY";

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_COUPON_FILES: [&str; 3] = ["couponbase1", "couponbase2", "couponbase3"];
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    NotPositive { var: &'static str, value: String },

    #[error("{var} must be \"majority\" or a positive integer, got {value:?}")]
    InvalidQuorum { var: &'static str, value: String },

    #[error("{var} requires {required} matching coupon lists but only {available} are configured")]
    UnreachableQuorum {
        var: &'static str,
        required: usize,
        available: usize,
    },

    #[error("{var} lists no coupon files")]
    NoCouponFiles { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub products_file: PathBuf,
    pub coupon_files: Vec<PathBuf>,
    pub quorum: QuorumPolicy,
    pub request_timeout: Duration,
    pub channel_capacity: usize,
}

impl AppConfig {
    /// Reads configuration from the process environment, after loading `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Missing or blank keys fall back to defaults. Relative coupon file names
    /// are resolved against the data directory.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let data_dir = PathBuf::from(get(DATA_DIR_VAR).unwrap_or_else(|| DEFAULT_DATA_DIR.into()));

        let products_file = get(PRODUCTS_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("products.json"));

        let coupon_files = match get(COUPON_FILES_VAR) {
            Some(list) => {
                let files: Vec<PathBuf> = list
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(|name| data_dir.join(name))
                    .collect();
                if files.is_empty() {
                    return Err(ConfigError::NoCouponFiles {
                        var: COUPON_FILES_VAR,
                    });
                }
                files
            }
            None => DEFAULT_COUPON_FILES
                .iter()
                .map(|name| data_dir.join(name))
                .collect(),
        };

        let quorum = match get(COUPON_QUORUM_VAR) {
            None => QuorumPolicy::default(),
            Some(value) if value.eq_ignore_ascii_case("majority") => QuorumPolicy::StrictMajority,
            Some(value) => match value.parse::<usize>() {
                Ok(k) if k > coupon_files.len() => {
                    return Err(ConfigError::UnreachableQuorum {
                        var: COUPON_QUORUM_VAR,
                        required: k,
                        available: coupon_files.len(),
                    })
                }
                Ok(k) if k > 0 => QuorumPolicy::AtLeast(k),
                _ => {
                    return Err(ConfigError::InvalidQuorum {
                        var: COUPON_QUORUM_VAR,
                        value,
                    })
                }
            },
        };

        let request_timeout = Duration::from_secs(positive(
            REQUEST_TIMEOUT_VAR,
            get(REQUEST_TIMEOUT_VAR),
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);

        let channel_capacity = positive(
            CHANNEL_CAPACITY_VAR,
            get(CHANNEL_CAPACITY_VAR),
            DEFAULT_CHANNEL_CAPACITY as u64,
        )? as usize;

        Ok(Self {
            products_file,
            coupon_files,
            quorum,
            request_timeout,
            channel_capacity,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = PathBuf::from(DEFAULT_DATA_DIR);
        Self {
            products_file: data_dir.join("products.json"),
            coupon_files: DEFAULT_COUPON_FILES
                .iter()
                .map(|name| data_dir.join(name))
                .collect(),
            quorum: QuorumPolicy::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

fn positive(var: &'static str, value: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => match value.parse::<u64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::NotPositive { var, value }),
        },
    }
}
