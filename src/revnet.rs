// Revnet issuance/redemption engine
//
// Minting happens at a stepped price ceiling that only rises over time;
// redemption pays out of the reserve along a floor-tax curve that leaves the
// remaining tokens better backed after every burn.

use crate::config::RevnetConfig;
use crate::error::{SimError, SimResult};

/// Result of one issuance: tokens handed to the payer and tokens diverted to
/// the boost allocation
#[derive(Debug, Clone, Copy)]
pub struct Issuance {
    pub tokens_to_payer: f64,
    pub tokens_to_boost: f64,
}

#[derive(Debug, Clone)]
pub struct Revnet {
    config: RevnetConfig,
    token_supply: f64,
    reserve_balance: f64,
    tokens_sent_to_boost: f64,
}

impl Revnet {
    /// Create a Revnet with the premint already allocated to the boost
    pub fn new(config: RevnetConfig) -> Self {
        let premint = config.premint_amount;
        Self {
            config,
            token_supply: premint,
            reserve_balance: 0.0,
            tokens_sent_to_boost: premint,
        }
    }

    pub fn token_supply(&self) -> f64 {
        self.token_supply
    }

    pub fn reserve_balance(&self) -> f64 {
        self.reserve_balance
    }

    pub fn tokens_sent_to_boost(&self) -> f64 {
        self.tokens_sent_to_boost
    }

    /// Tokens minted per unit of currency on `day`
    ///
    /// `(1 - ceiling_step_percentage) ^ floor(day / ceiling_step_frequency_days)`,
    /// a non-increasing step function. The day is always passed explicitly so
    /// routing comparisons and snapshots read the same value side-effect free.
    pub fn tokens_per_currency(&self, day: u32) -> f64 {
        let steps = day / self.config.ceiling_step_frequency_days;
        (1.0 - self.config.ceiling_step_percentage).powi(steps as i32)
    }

    /// Currency cost to mint one marginal token on `day` ("price ceiling")
    pub fn price_ceiling(&self, day: u32) -> f64 {
        1.0 / self.tokens_per_currency(day)
    }

    /// Mint tokens for `amount_in` currency
    ///
    /// The only path that grows `token_supply`. While the boost window is
    /// open, `boost_percent` of the minted tokens goes to the boost
    /// allocation and only the remainder to the payer.
    pub fn issue(&mut self, amount_in: f64, day: u32) -> Issuance {
        let minted = amount_in * self.tokens_per_currency(day);
        self.reserve_balance += amount_in;
        self.token_supply += minted;

        let tokens_to_boost = if day < self.config.boost_duration_days {
            let boost = self.config.boost_percent * minted;
            self.tokens_sent_to_boost += boost;
            boost
        } else {
            0.0
        };

        Issuance {
            tokens_to_payer: minted - tokens_to_boost,
            tokens_to_boost,
        }
    }

    /// Currency paid out for burning `tokens_in`, without executing the burn
    ///
    /// `reserve * share * (1 - intensity + share * intensity)` where
    /// `share = tokens_in / token_supply`. Strictly below pro-rata for any
    /// partial exit when the tax intensity is positive; a full exit
    /// (`share = 1`) always returns the entire reserve. Unstable near zero
    /// supply — callers guard before asking.
    pub fn redeemable_amount(&self, tokens_in: f64) -> SimResult<f64> {
        if self.token_supply <= 0.0 {
            return Err(SimError::ZeroSupply);
        }
        let share = tokens_in / self.token_supply;
        let intensity = self.config.floor_tax_intensity;
        let tax_term = 1.0 - intensity + share * intensity;
        Ok(self.reserve_balance * share * tax_term)
    }

    /// Burn `tokens_in` and pay out the redeemable amount
    ///
    /// Performs no solvency check of its own; the router verifies the reserve
    /// covers the payout before calling.
    pub fn redeem(&mut self, tokens_in: f64) -> SimResult<f64> {
        let amount_out = self.redeemable_amount(tokens_in)?;
        self.token_supply -= tokens_in;
        self.reserve_balance -= amount_out;
        Ok(amount_out)
    }

    /// Redemption value of one token ("price floor"), 0 while the supply is
    /// too small to quote against
    pub fn price_floor(&self) -> f64 {
        if self.token_supply < 1.0 {
            return 0.0;
        }
        self.redeemable_amount(1.0).unwrap_or(0.0)
    }
}
