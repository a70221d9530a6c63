// Day-stepped simulation driver
//
// Owns the one Revnet and one Pool for a run and feeds them through the
// router. Each day: Poisson-many purchases with log-normal sizes, Bernoulli
// sale decisions for eligible holders, liquidity skims back into the pool,
// then an immutable snapshot. A run is strictly sequential; re-running with
// new parameters means constructing a fresh Simulator.

use crate::config::Config;
use crate::error::SimResult;
use crate::pool::{Asset, Pool};
use crate::revnet::Revnet;
use crate::rng::SimRng;
use crate::router::{route_purchase, route_sale};
use crate::trader::{Purchase, Sale, Trader};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Immutable record of one simulated day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub day: u32,
    pub revnet_reserve: f64,
    pub token_supply: f64,
    pub price_ceiling: f64,
    pub price_floor: f64,
    pub tokens_sent_to_boost: f64,
    pub pool_currency_reserve: f64,
    pub pool_token_reserve: f64,
    pub pool_spot_price: Option<f64>,
    pub purchases: Vec<Purchase>,
    pub sales: Vec<Sale>,
    pub unfulfilled_sales: u32,
}

/// Everything a completed run hands to reporting collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub snapshots: Vec<DailySnapshot>,
    pub traders: Vec<Trader>,
}

pub struct Simulator {
    config: Config,
    revnet: Revnet,
    pool: Pool,
    rng: SimRng,
    traders: Vec<Trader>,
    snapshots: Vec<DailySnapshot>,
    current_day: u32,
}

impl Simulator {
    /// Build a fresh simulator from validated configuration
    ///
    /// No state bleeds across runs: every call constructs new Revnet, Pool
    /// and RNG instances.
    pub fn new(config: Config) -> SimResult<Self> {
        config.validate()?;

        let revnet = Revnet::new(config.revnet.clone());
        let pool = Pool::new(
            config.pool.initial_currency_reserve,
            config.pool.initial_token_reserve,
            config.pool.fee_rate,
        );
        let rng = SimRng::new(
            config.simulation.random_seed,
            config.simulation.daily_purchase_mean,
            config.simulation.purchase_size_log_mean,
            config.simulation.purchase_size_log_sigma,
        )?;

        Ok(Self {
            config,
            revnet,
            pool,
            rng,
            traders: Vec::new(),
            snapshots: Vec::new(),
            current_day: 0,
        })
    }

    pub fn total_days(&self) -> u32 {
        self.config.simulation.total_days
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    /// Advance one day; returns false once all configured days have run
    pub fn step(&mut self) -> SimResult<bool> {
        if self.current_day >= self.config.simulation.total_days {
            return Ok(false);
        }

        let day = self.current_day;
        let pool_deployed = day >= self.config.pool.deployment_day;

        let purchases = self.run_purchases(day, pool_deployed)?;
        let (sales, unfulfilled_sales) = self.run_sales(day, pool_deployed)?;

        debug!(
            day,
            purchases = purchases.len(),
            sales = sales.len(),
            unfulfilled_sales,
            "day complete"
        );

        self.snapshots.push(DailySnapshot {
            day,
            revnet_reserve: self.revnet.reserve_balance(),
            token_supply: self.revnet.token_supply(),
            price_ceiling: self.revnet.price_ceiling(day),
            price_floor: self.revnet.price_floor(),
            tokens_sent_to_boost: self.revnet.tokens_sent_to_boost(),
            pool_currency_reserve: self.pool.reserve(Asset::Currency),
            pool_token_reserve: self.pool.reserve(Asset::Token),
            pool_spot_price: self.pool.spot_price(Asset::Token),
            purchases,
            sales,
            unfulfilled_sales,
        });

        self.current_day += 1;
        Ok(self.current_day < self.config.simulation.total_days)
    }

    /// Run all remaining days and return the outcome
    pub fn run(mut self) -> SimResult<SimulationOutcome> {
        info!(
            total_days = self.total_days(),
            seed = self.config.simulation.random_seed,
            "starting simulation"
        );
        while self.step()? {}
        info!(
            traders = self.traders.len(),
            "simulation complete"
        );
        Ok(self.finish())
    }

    /// Consume the simulator, yielding whatever has been simulated so far
    pub fn finish(self) -> SimulationOutcome {
        SimulationOutcome {
            snapshots: self.snapshots,
            traders: self.traders,
        }
    }

    fn run_purchases(&mut self, day: u32, pool_deployed: bool) -> SimResult<Vec<Purchase>> {
        let count = self.rng.daily_purchase_count();
        let mut purchases = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let amount_in = self.rng.purchase_size();
            let pool = pool_deployed.then_some(&mut self.pool);
            let fill = route_purchase(&mut self.revnet, pool, amount_in, day)?;

            // A slice of every buy re-enters the pool as passive liquidity
            // once the pool exists.
            let skim = if pool_deployed {
                self.config.simulation.token_liquidity_feed_ratio * fill.amount_out
            } else {
                0.0
            };
            if skim > 0.0 {
                self.pool.provide(Asset::Token, skim);
            }

            let purchase = Purchase {
                amount_paid: fill.amount_in,
                tokens_received: fill.amount_out,
                venue: fill.venue,
                day,
            };
            self.traders
                .push(Trader::new(purchase.clone(), fill.amount_out - skim));
            purchases.push(purchase);
        }

        Ok(purchases)
    }

    fn run_sales(&mut self, day: u32, pool_deployed: bool) -> SimResult<(Vec<Sale>, u32)> {
        let minimum_holding_days = self.config.simulation.minimum_holding_days;
        let sale_probability = self.config.simulation.sale_probability;
        let currency_feed_ratio = self.config.simulation.currency_liquidity_feed_ratio;

        let mut sales = Vec::new();
        let mut unfulfilled = 0u32;

        for trader in &mut self.traders {
            if trader.has_sold()
                || trader.tokens_held <= 0.0
                || trader.holding_days(day) < minimum_holding_days
            {
                continue;
            }
            if !self.rng.sells_today(sale_probability) {
                continue;
            }

            let pool = pool_deployed.then_some(&mut self.pool);
            match route_sale(&mut self.revnet, pool, trader.tokens_held, day)? {
                Some(fill) => {
                    let skim = if pool_deployed {
                        currency_feed_ratio * fill.amount_out
                    } else {
                        0.0
                    };
                    if skim > 0.0 {
                        self.pool.provide(Asset::Currency, skim);
                    }

                    let sale = Sale {
                        tokens_sold: fill.amount_in,
                        amount_received: fill.amount_out,
                        venue: fill.venue,
                        day,
                    };
                    trader.record_sale(sale.clone());
                    sales.push(sale);
                }
                None => unfulfilled += 1,
            }
        }

        Ok((sales, unfulfilled))
    }
}
