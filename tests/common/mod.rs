// Common test utilities and helpers

use revnet_sim::{Config, PoolConfig, RevnetConfig, SimulationConfig};

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        revnet: RevnetConfig {
            ceiling_step_percentage: 0.02,
            ceiling_step_frequency_days: 1,
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
            total_days: 120,
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
