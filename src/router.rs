// Execution venue selection
//
// Greedy per-trade routing between the pool and the Revnet. Purchases always
// fill (Revnet minting is uncapped); sales can fail both venues, in which
// case nothing executes and the caller records the attempt as unfulfilled.
// The Revnet can never be forced insolvent by a sale.

use crate::error::SimResult;
use crate::pool::{Asset, Pool};
use crate::revnet::Revnet;
use crate::trader::Venue;
use tracing::debug;

/// A settled trade at one venue
#[derive(Debug, Clone, Copy)]
pub struct Fill {
    pub venue: Venue,
    pub amount_in: f64,
    pub amount_out: f64,
}

/// Buy tokens with `amount_in` currency at whichever venue pays out more
///
/// The pool wins only when it can cover the quoted tokens out of its reserve
/// AND its post-fee payout strictly beats minting at the Revnet ceiling for
/// this size. Ties go to the Revnet. Pass `None` for the pool while it is
/// not yet deployed.
pub fn route_purchase(
    revnet: &mut Revnet,
    pool: Option<&mut Pool>,
    amount_in: f64,
    day: u32,
) -> SimResult<Fill> {
    let revnet_tokens = amount_in * revnet.tokens_per_currency(day);

    if let Some(pool) = pool {
        if pool.reserve(Asset::Currency) > 0.0 && pool.reserve(Asset::Token) > 0.0 {
            let gross = pool.quote_output(Asset::Currency, amount_in)?;
            let net = pool.quote_output_net(Asset::Currency, amount_in)?;

            if gross < pool.reserve(Asset::Token) && net > revnet_tokens {
                let tokens_out = pool.trade(Asset::Currency, amount_in)?;
                debug!(
                    day,
                    amount_in, tokens_out, "purchase routed to pool"
                );
                return Ok(Fill {
                    venue: Venue::Pool,
                    amount_in,
                    amount_out: tokens_out,
                });
            }
        }
    }

    let issued = revnet.issue(amount_in, day);
    debug!(
        day,
        amount_in,
        tokens_out = issued.tokens_to_payer,
        boosted = issued.tokens_to_boost,
        "purchase routed to revnet"
    );
    Ok(Fill {
        venue: Venue::Revnet,
        amount_in,
        amount_out: issued.tokens_to_payer,
    })
}

/// Sell `tokens_in` at whichever venue pays out more, if either can
///
/// The pool wins on sufficient currency reserve plus a strictly better
/// payout than redemption. The Revnet fallback only fires when its reserve
/// covers the computed redemption amount; otherwise the sale executes
/// nothing and `None` is returned.
pub fn route_sale(
    revnet: &mut Revnet,
    pool: Option<&mut Pool>,
    tokens_in: f64,
    day: u32,
) -> SimResult<Option<Fill>> {
    let revnet_amount = if revnet.token_supply() > 0.0 {
        Some(revnet.redeemable_amount(tokens_in)?)
    } else {
        None
    };

    if let Some(pool) = pool {
        if pool.reserve(Asset::Currency) > 0.0 && pool.reserve(Asset::Token) > 0.0 {
            let gross = pool.quote_output(Asset::Token, tokens_in)?;
            let net = pool.quote_output_net(Asset::Token, tokens_in)?;

            if gross < pool.reserve(Asset::Currency) && net > revnet_amount.unwrap_or(0.0) {
                let amount_out = pool.trade(Asset::Token, tokens_in)?;
                debug!(day, tokens_in, amount_out, "sale routed to pool");
                return Ok(Some(Fill {
                    venue: Venue::Pool,
                    amount_in: tokens_in,
                    amount_out,
                }));
            }
        }
    }

    match revnet_amount {
        Some(amount) if amount <= revnet.reserve_balance() => {
            let amount_out = revnet.redeem(tokens_in)?;
            debug!(day, tokens_in, amount_out, "sale routed to revnet");
            Ok(Some(Fill {
                venue: Venue::Revnet,
                amount_in: tokens_in,
                amount_out,
            }))
        }
        _ => {
            debug!(day, tokens_in, "sale unfulfilled at both venues");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RevnetConfig;

    fn plain_revnet() -> Revnet {
        Revnet::new(RevnetConfig {
            ceiling_step_percentage: 0.02,
            ceiling_step_frequency_days: 1,
            floor_tax_intensity: 0.0,
            premint_amount: 0.0,
            boost_percent: 0.0,
            boost_duration_days: 0,
        })
    }

    #[test]
    fn test_purchase_without_pool_mints() {
        let mut revnet = plain_revnet();
        let fill = route_purchase(&mut revnet, None, 2.0, 0).unwrap();

        assert_eq!(fill.venue, Venue::Revnet);
        assert!((fill.amount_out - 2.0).abs() < 1e-12);
        assert!((revnet.reserve_balance() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_purchase_prefers_cheaper_pool() {
        let mut revnet = plain_revnet();
        // Token-heavy pool: ~10 tokens per currency vs 1.0 at the ceiling
        let mut pool = Pool::new(100.0, 1000.0, 0.0);

        let fill = route_purchase(&mut revnet, Some(&mut pool), 1.0, 0).unwrap();
        assert_eq!(fill.venue, Venue::Pool);
        assert!(fill.amount_out > 1.0);
        assert_eq!(revnet.token_supply(), 0.0);
    }

    #[test]
    fn test_purchase_falls_back_when_pool_expensive() {
        let mut revnet = plain_revnet();
        // Currency-heavy pool: well under 1 token per currency
        let mut pool = Pool::new(1000.0, 100.0, 0.0);

        let fill = route_purchase(&mut revnet, Some(&mut pool), 1.0, 0).unwrap();
        assert_eq!(fill.venue, Venue::Revnet);
        assert!((revnet.token_supply() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sale_prefers_richer_pool() {
        let mut revnet = plain_revnet();
        revnet.issue(10.0, 0); // reserve 10, supply 10, floor 1.0

        // Currency-heavy pool pays ~10 per token
        let mut pool = Pool::new(1000.0, 100.0, 0.0);
        let fill = route_sale(&mut revnet, Some(&mut pool), 1.0, 5)
            .unwrap()
            .unwrap();

        assert_eq!(fill.venue, Venue::Pool);
        assert!(fill.amount_out > 1.0);
        assert!((revnet.reserve_balance() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_sale_falls_back_to_redemption() {
        let mut revnet = plain_revnet();
        revnet.issue(10.0, 0);

        // Token-heavy pool pays well under the 1.0 redemption rate
        let mut pool = Pool::new(100.0, 1000.0, 0.0);
        let fill = route_sale(&mut revnet, Some(&mut pool), 2.0, 5)
            .unwrap()
            .unwrap();

        assert_eq!(fill.venue, Venue::Revnet);
        assert!((fill.amount_out - 2.0).abs() < 1e-12);
        assert!((revnet.token_supply() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_sale_unfulfilled_when_neither_venue_works() {
        // Tokens bought out of the pool are not backed by the Revnet reserve,
        // so a large enough sale can exceed what redemption covers.
        let mut revnet = plain_revnet();
        revnet.issue(1.0, 0); // reserve 1, supply 1

        // Pool pays almost nothing per token
        let mut pool = Pool::new(0.001, 1000.0, 0.0);
        // Redeeming 5 tokens against a supply of 1 would need 5x the reserve
        let result = route_sale(&mut revnet, Some(&mut pool), 5.0, 5).unwrap();

        assert!(result.is_none());
        assert!((revnet.reserve_balance() - 1.0).abs() < 1e-12);
        assert!((revnet.token_supply() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sale_without_pool_or_supply_is_unfulfilled() {
        let mut revnet = plain_revnet();
        let result = route_sale(&mut revnet, None, 1.0, 0).unwrap();
        assert!(result.is_none());
    }
}
