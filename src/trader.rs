// Trader lifecycle records

use serde::{Deserialize, Serialize};

/// Where a fill executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Venue {
    Pool,
    Revnet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub amount_paid: f64,
    pub tokens_received: f64,
    pub venue: Venue,
    pub day: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub tokens_sold: f64,
    pub amount_received: f64,
    pub venue: Venue,
    pub day: u32,
}

/// One participant: exactly one purchase, at most one full sale
///
/// Traders only come into existence together with their purchase, and
/// `tokens_held` is the post-liquidity-skim balance a later sale liquidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trader {
    pub purchase: Purchase,
    pub sale: Option<Sale>,
    pub tokens_held: f64,
}

impl Trader {
    pub fn new(purchase: Purchase, tokens_held: f64) -> Self {
        Self {
            purchase,
            sale: None,
            tokens_held,
        }
    }

    pub fn has_sold(&self) -> bool {
        self.sale.is_some()
    }

    /// Days the position has been held as of `day`
    pub fn holding_days(&self, day: u32) -> u32 {
        day.saturating_sub(self.purchase.day)
    }

    /// Record the one full sale; the held balance is gone afterwards
    pub fn record_sale(&mut self, sale: Sale) {
        self.tokens_held = 0.0;
        self.sale = Some(sale);
    }
}
