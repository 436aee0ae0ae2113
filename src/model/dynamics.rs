// src/model/dynamics.rs

//! Single-period inventory dynamics, shared between the solver and the
//! forward simulation so both price a period the same way.

use crate::model::config::InventoryConfig;

/// Outcome of receiving an order and serving one period of demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Closing inventory, clipped to the tracked range.
    pub inventory: i64,
    /// Flat penalty, non-zero exactly when the raw closing level had to be
    /// clipped in either direction.
    pub penalty: f64,
}

/// Applies one period of dynamics: the order arrives in full before demand
/// is served, so the closing level is `inventory + order - demand`. A level
/// outside `[-max_inventory, +max_inventory]` is clipped to the violated
/// bound and charged the overflow penalty once.
pub fn apply_period(
    inventory: i64,
    order: u32,
    demand: u32,
    config: &InventoryConfig,
) -> Transition {
    let bound = config.max_inventory as i64;
    let raw = inventory + order as i64 - demand as i64;

    if raw < -bound {
        Transition {
            inventory: -bound,
            penalty: config.overflow_penalty(),
        }
    } else if raw > bound {
        Transition {
            inventory: bound,
            penalty: config.overflow_penalty(),
        }
    } else {
        Transition {
            inventory: raw,
            penalty: 0.0,
        }
    }
}

/// Cost incurred during one period given its closing state: holding cost on
/// stock, unmet demand priced at the sales price, plus any clip penalty.
pub fn period_cost(transition: Transition, config: &InventoryConfig) -> f64 {
    let held = transition.inventory.max(0) as f64;
    let short = (-transition.inventory).max(0) as f64;
    config.holding_cost * held + config.price * short + transition.penalty
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> InventoryConfig {
        InventoryConfig {
            time_horizon: 1,
            holding_cost: 2.0,
            price: 10.0,
            max_inventory: 5,
            max_demand: 3,
        }
    }

    #[test]
    fn interior_transition_is_unclipped() {
        let t = apply_period(2, 3, 1, &config());
        assert_eq!(t.inventory, 4);
        assert_eq!(t.penalty, 0.0);
    }

    #[test]
    fn overflow_clips_to_upper_bound_with_penalty() {
        let t = apply_period(4, 5, 0, &config());
        assert_eq!(t.inventory, 5);
        assert_eq!(t.penalty, 20.0);
    }

    #[test]
    fn shortfall_clips_to_lower_bound_with_penalty() {
        let t = apply_period(-4, 0, 3, &config());
        assert_eq!(t.inventory, -5);
        assert_eq!(t.penalty, 20.0);
    }

    #[test]
    fn landing_exactly_on_a_bound_is_not_clipped() {
        let upper = apply_period(4, 1, 0, &config());
        assert_eq!(upper.inventory, 5);
        assert_eq!(upper.penalty, 0.0);

        let lower = apply_period(-3, 0, 2, &config());
        assert_eq!(lower.inventory, -5);
        assert_eq!(lower.penalty, 0.0);
    }

    #[test]
    fn period_cost_prices_stock_backorders_and_penalty() {
        let cfg = config();
        let held = Transition {
            inventory: 3,
            penalty: 0.0,
        };
        assert_eq!(period_cost(held, &cfg), 6.0);

        let short = Transition {
            inventory: -2,
            penalty: 0.0,
        };
        assert_eq!(period_cost(short, &cfg), 20.0);

        let clipped = Transition {
            inventory: 5,
            penalty: 20.0,
        };
        assert_eq!(period_cost(clipped, &cfg), 30.0);
    }
}
