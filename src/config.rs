// Configuration management for the Revnet simulator

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevnetConfig {
    pub ceiling_step_percentage: f64,    // Fractional price-ceiling rise per step
    pub ceiling_step_frequency_days: u32, // Days between ceiling steps
    pub floor_tax_intensity: f64,        // Redemption tax weight, 0..=1
    pub premint_amount: f64,             // Tokens minted to the boost at day 0
    pub boost_percent: f64,              // Fraction of each mint diverted to boost
    pub boost_duration_days: u32,        // Days the boost diversion stays active
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    pub initial_currency_reserve: f64,
    pub initial_token_reserve: f64,
    pub deployment_day: u32,  // Pool ignored by the simulator before this day
    pub fee_rate: f64,        // Output-side fee, 0..1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub total_days: u32,
    pub random_seed: u64,
    pub daily_purchase_mean: f64,        // Poisson mean for purchase events per day
    pub purchase_size_log_mean: f64,     // Log-normal location of purchase sizes
    pub purchase_size_log_sigma: f64,    // Log-normal scale of purchase sizes
    pub token_liquidity_feed_ratio: f64, // Fraction of bought tokens fed to the pool
    pub currency_liquidity_feed_ratio: f64, // Fraction of sale proceeds fed to the pool
    pub sale_probability: f64,           // Daily Bernoulli sale chance per holder
    pub minimum_holding_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub revnet: RevnetConfig,
    pub pool: PoolConfig,
    pub simulation: SimulationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            revnet: RevnetConfig {
                ceiling_step_percentage: 0.02,
                ceiling_step_frequency_days: 30,
                floor_tax_intensity: 0.33,
                premint_amount: 100.0,
                boost_percent: 0.1,
                boost_duration_days: 100,
            },
            pool: PoolConfig {
                initial_currency_reserve: 10.0,
                initial_token_reserve: 10.0,
                deployment_day: 10,
                fee_rate: 0.003,
            },
            simulation: SimulationConfig {
                total_days: 365,
                random_seed: 42,
                daily_purchase_mean: 3.0,
                purchase_size_log_mean: 0.0,
                purchase_size_log_sigma: 1.0,
                token_liquidity_feed_ratio: 0.1,
                currency_liquidity_feed_ratio: 0.1,
                sale_probability: 0.05,
                minimum_holding_days: 30,
            },
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, content)
            .map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// Load configuration from file, or create default if file doesn't exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            let config = Self::default();
            config.to_file(&path)?;
            println!("📁 Created default config file: {}", path.as_ref().display());
            Ok(config)
        }
    }

    /// Validate configuration values
    ///
    /// The engine itself only carries numeric guards (zero supply, empty
    /// reserves); every range check lives here so no Revnet or Pool is ever
    /// constructed from out-of-range parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.revnet;
        if !(0.0..=1.0).contains(&r.ceiling_step_percentage) {
            return Err(ConfigError::Validation(
                "ceiling_step_percentage must be within [0, 1]".to_string(),
            ));
        }
        if r.ceiling_step_frequency_days == 0 {
            return Err(ConfigError::Validation(
                "ceiling_step_frequency_days must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&r.floor_tax_intensity) {
            return Err(ConfigError::Validation(
                "floor_tax_intensity must be within [0, 1]".to_string(),
            ));
        }
        if r.premint_amount < 0.0 {
            return Err(ConfigError::Validation(
                "premint_amount must be non-negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&r.boost_percent) {
            return Err(ConfigError::Validation(
                "boost_percent must be within [0, 1]".to_string(),
            ));
        }

        let p = &self.pool;
        if p.initial_currency_reserve <= 0.0 || p.initial_token_reserve <= 0.0 {
            return Err(ConfigError::Validation(
                "pool initial reserves must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&p.fee_rate) {
            return Err(ConfigError::Validation(
                "fee_rate must be within [0, 1)".to_string(),
            ));
        }

        let s = &self.simulation;
        if s.total_days == 0 {
            return Err(ConfigError::Validation(
                "total_days must be greater than 0".to_string(),
            ));
        }
        if s.daily_purchase_mean <= 0.0 {
            return Err(ConfigError::Validation(
                "daily_purchase_mean must be positive".to_string(),
            ));
        }
        if s.purchase_size_log_sigma < 0.0 {
            return Err(ConfigError::Validation(
                "purchase_size_log_sigma must be non-negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&s.token_liquidity_feed_ratio) {
            return Err(ConfigError::Validation(
                "token_liquidity_feed_ratio must be within [0, 1]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&s.currency_liquidity_feed_ratio) {
            return Err(ConfigError::Validation(
                "currency_liquidity_feed_ratio must be within [0, 1]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&s.sale_probability) {
            return Err(ConfigError::Validation(
                "sale_probability must be within [0, 1]".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(String),

    #[error("Failed to write config file: {0}")]
    FileWrite(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
