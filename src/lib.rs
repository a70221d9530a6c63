// Revnet Simulator Library
//
// Models a revenue-network token (stepped mint-price ceiling, floor-tax
// redemption, boost diversion) alongside a constant-product liquidity pool,
// under a randomized trader population over discrete daily steps.

pub mod config;      // Parameter record + TOML file layer
pub mod error;       // Unified error handling
pub mod rng;         // Seeded Poisson / log-normal / Bernoulli sampling
pub mod pool;        // Constant-product AMM
pub mod revnet;      // Issuance/redemption engine
pub mod router;      // Execution venue selection
pub mod trader;      // Participant purchase/sale records
pub mod simulator;   // Day-stepped driver and snapshots
pub mod report;      // JSON/CSV export and summaries
pub mod progress;    // Progress bars for long runs

// Re-export engine types
pub use pool::{Asset, Pool};
pub use revnet::{Issuance, Revnet};
pub use router::{route_purchase, route_sale, Fill};
pub use trader::{Purchase, Sale, Trader, Venue};

// Re-export the driver
pub use simulator::{DailySnapshot, SimulationOutcome, Simulator};

// Re-export error types
pub use error::{SimError, SimResult};

// Re-export configuration
pub use config::{Config, ConfigError, PoolConfig, RevnetConfig, SimulationConfig};
