// src/solver/backward.rs

//! Backward induction over the inventory state space.
//!
//! Periods are processed from `time_horizon - 1` down to 0 so that every
//! continuation value a period reads is already final; the all-zero terminal
//! column of a fresh table is the base case. Within one period the states
//! only read the next period's column and never each other, so they are
//! swept in parallel.

use rayon::prelude::*;

use crate::model::config::InventoryConfig;
use crate::model::dynamics::{apply_period, period_cost};
use crate::model::tables::PolicyTables;
use crate::solver::progress::ProgressSink;

/// Solves the finite-horizon problem for `config` and returns the populated
/// value/decision tables.
pub fn solve(config: &InventoryConfig, progress: &dyn ProgressSink) -> PolicyTables {
    let mut tables = PolicyTables::new(config);
    let states = config.state_count();
    progress.begin((config.time_horizon * states) as u64);

    for period in (0..config.time_horizon).rev() {
        let solved: Vec<(f64, u32)> = (0..states)
            .into_par_iter()
            .map(|state| {
                let cell = solve_cell(config, &tables, state, period);
                progress.advance();
                cell
            })
            .collect();

        for (state, (value, order)) in solved.into_iter().enumerate() {
            tables.record(state, period, value, order);
        }
    }

    progress.finish();
    tables
}

/// Expected-cost minimization for a single `(state, period)` cell.
///
/// Every order in `0..=max_inventory - inventory + max_demand` is priced
/// against all equally likely demand realizations; the largest candidate
/// restocks to the cap and covers the largest possible demand on top, so no
/// useful order lies outside the range.
fn solve_cell(
    config: &InventoryConfig,
    tables: &PolicyTables,
    state: usize,
    period: usize,
) -> (f64, u32) {
    let inventory = tables.inventory_at(state);
    let max_order = (config.max_inventory as i64 - inventory) as u32 + config.max_demand;
    let realizations = (config.max_demand + 1) as f64;

    let mut best_cost = f64::INFINITY;
    let mut best_order = 0u32;

    for order in 0..=max_order {
        let mut total = 0.0;
        for demand in 0..=config.max_demand {
            let transition = apply_period(inventory, order, demand, config);
            let continuation =
                tables.value_at(tables.state_index(transition.inventory), period + 1);
            total += period_cost(transition, config) + continuation;
        }
        let expected = total / realizations;

        // Strict comparison keeps the smallest order on ties.
        if expected < best_cost {
            best_cost = expected;
            best_order = order;
        }
    }

    (best_cost, best_order)
}
