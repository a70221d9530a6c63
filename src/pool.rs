// Constant-product liquidity pool between the base currency and the token
//
// Fees are charged on the output side of every trade and kept in separate
// accumulators outside the tradable reserves, so the reserve product stays
// exactly on the x*y=k curve across trades.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// One side of the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Asset {
    Currency,
    Token,
}

impl Asset {
    pub fn other(self) -> Asset {
        match self {
            Asset::Currency => Asset::Token,
            Asset::Token => Asset::Currency,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Asset::Currency => "currency",
            Asset::Token => "token",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pool {
    reserve_currency: f64,
    reserve_token: f64,
    fee_rate: f64,
    fees_currency: f64,
    fees_token: f64,
}

impl Pool {
    pub fn new(initial_currency_reserve: f64, initial_token_reserve: f64, fee_rate: f64) -> Self {
        Self {
            reserve_currency: initial_currency_reserve,
            reserve_token: initial_token_reserve,
            fee_rate,
            fees_currency: 0.0,
            fees_token: 0.0,
        }
    }

    pub fn reserve(&self, asset: Asset) -> f64 {
        match asset {
            Asset::Currency => self.reserve_currency,
            Asset::Token => self.reserve_token,
        }
    }

    pub fn fees_accumulated(&self, asset: Asset) -> f64 {
        match asset {
            Asset::Currency => self.fees_currency,
            Asset::Token => self.fees_token,
        }
    }

    pub fn fee_rate(&self) -> f64 {
        self.fee_rate
    }

    fn check_reserves(&self) -> SimResult<()> {
        if self.reserve_currency <= 0.0 {
            return Err(SimError::ZeroReserve(Asset::Currency.name()));
        }
        if self.reserve_token <= 0.0 {
            return Err(SimError::ZeroReserve(Asset::Token.name()));
        }
        Ok(())
    }

    /// Gross (pre-fee) output for spending `amount_in` of `input_asset`
    ///
    /// `out = reserve_out - k / (reserve_in + amount_in)` — the fee-less quote
    /// used for routing comparisons against the Revnet's pre-fee pricing.
    pub fn quote_output(&self, input_asset: Asset, amount_in: f64) -> SimResult<f64> {
        self.check_reserves()?;
        let reserve_in = self.reserve(input_asset);
        let reserve_out = self.reserve(input_asset.other());
        let k = self.reserve_currency * self.reserve_token;
        Ok(reserve_out - k / (reserve_in + amount_in))
    }

    /// Net (post-fee) output — what a trader actually settles at
    pub fn quote_output_net(&self, input_asset: Asset, amount_in: f64) -> SimResult<f64> {
        Ok(self.quote_output(input_asset, amount_in)? * (1.0 - self.fee_rate))
    }

    /// Execute a swap of `amount_in` of `input_asset`, returning the net output
    ///
    /// Both reserves move together on the constant-product curve; the fee is
    /// carved out of the gross output into the output-side accumulator.
    pub fn trade(&mut self, input_asset: Asset, amount_in: f64) -> SimResult<f64> {
        let gross = self.quote_output(input_asset, amount_in)?;
        let fee = self.fee_rate * gross;
        let net = gross - fee;

        match input_asset {
            Asset::Currency => {
                self.reserve_currency += amount_in;
                self.reserve_token -= gross;
                self.fees_token += fee;
            }
            Asset::Token => {
                self.reserve_token += amount_in;
                self.reserve_currency -= gross;
                self.fees_currency += fee;
            }
        }

        Ok(net)
    }

    /// Price of one unit of `asset` in units of the other asset
    pub fn spot_price(&self, asset: Asset) -> Option<f64> {
        if self.reserve_currency <= 0.0 || self.reserve_token <= 0.0 {
            return None;
        }
        Some(self.reserve(asset.other()) / self.reserve(asset))
    }

    /// One-way liquidity injection; there is no matching withdrawal operation
    pub fn provide(&mut self, asset: Asset, amount: f64) {
        match asset {
            Asset::Currency => self.reserve_currency += amount,
            Asset::Token => self.reserve_token += amount,
        }
    }
}
