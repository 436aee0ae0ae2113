// src/simulation/engine.rs

use serde::Serialize;

use crate::error::InventoryError;
use crate::io::demand::DemandSource;
use crate::model::config::InventoryConfig;
use crate::model::dynamics::{apply_period, period_cost};
use crate::model::tables::PolicyTables;

/// One period of a simulated run. Serializable so a run's history can be
/// exported to CSV.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodRecord {
    pub period: usize,
    pub order: u32,
    pub demand: u32,
    /// Closing inventory after clipping; negative means a backorder.
    pub inventory: i64,
    /// Realized holding/backorder/penalty cost for this period.
    pub cost: f64,
}

/// Result of replaying the solved policy once.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub total_cost: f64,
    pub orders: Vec<u32>,
    pub demands: Vec<u32>,
    pub history: Vec<PeriodRecord>,
}

/// Replays the decision table forward from `initial_inventory` for the full
/// horizon, drawing one demand per period from `demand_source`.
///
/// Each period looks up the optimal order for the current state, applies the
/// same clip-and-penalize dynamics the solver priced, and accumulates the
/// realized cost. Starting levels are restricted to `[0, max_inventory]`:
/// runs cannot begin with an outstanding backorder even though the tables
/// price those states.
pub fn run_policy(
    config: &InventoryConfig,
    tables: &PolicyTables,
    initial_inventory: i64,
    demand_source: &mut dyn DemandSource,
) -> Result<SimulationRun, InventoryError> {
    if initial_inventory < 0 || initial_inventory > config.max_inventory as i64 {
        return Err(InventoryError::StartOutOfRange {
            got: initial_inventory,
            max: config.max_inventory as i64,
        });
    }

    let horizon = config.time_horizon;
    let mut inventory = initial_inventory;
    let mut total_cost = 0.0;
    let mut orders = Vec::with_capacity(horizon);
    let mut demands = Vec::with_capacity(horizon);
    let mut history = Vec::with_capacity(horizon);

    for period in 0..horizon {
        let order = tables.order(inventory, period);
        let demand = demand_source.next_demand(config.max_demand);

        let transition = apply_period(inventory, order, demand, config);
        let cost = period_cost(transition, config);

        inventory = transition.inventory;
        total_cost += cost;
        orders.push(order);
        demands.push(demand);
        history.push(PeriodRecord {
            period,
            order,
            demand,
            inventory,
            cost,
        });
    }

    Ok(SimulationRun {
        total_cost,
        orders,
        demands,
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::demand::ScheduledDemand;
    use crate::solver::backward;
    use crate::solver::progress::NoopProgress;

    fn solved(config: &InventoryConfig) -> PolicyTables {
        backward::solve(config, &NoopProgress)
    }

    #[test]
    fn run_records_one_entry_per_period() {
        let config = InventoryConfig {
            time_horizon: 5,
            holding_cost: 1.0,
            price: 10.0,
            max_inventory: 8,
            max_demand: 2,
        };
        let tables = solved(&config);
        let mut demand = ScheduledDemand::new(vec![2, 1, 0, 2, 1]);
        let run = run_policy(&config, &tables, 3, &mut demand).unwrap();

        assert_eq!(run.orders.len(), 5);
        assert_eq!(run.demands, vec![2, 1, 0, 2, 1]);
        assert_eq!(run.history.len(), 5);
        for (period, record) in run.history.iter().enumerate() {
            assert_eq!(record.period, period);
        }
    }

    #[test]
    fn total_cost_is_the_sum_of_period_costs() {
        let config = InventoryConfig {
            time_horizon: 4,
            holding_cost: 2.0,
            price: 6.0,
            max_inventory: 5,
            max_demand: 3,
        };
        let tables = solved(&config);
        let mut demand = ScheduledDemand::new(vec![3, 3, 0, 1]);
        let run = run_policy(&config, &tables, 2, &mut demand).unwrap();

        let summed: f64 = run.history.iter().map(|r| r.cost).sum();
        assert!((run.total_cost - summed).abs() < 1e-12);
    }

    #[test]
    fn start_outside_range_is_rejected() {
        let config = InventoryConfig {
            time_horizon: 2,
            holding_cost: 1.0,
            price: 10.0,
            max_inventory: 4,
            max_demand: 1,
        };
        let tables = solved(&config);
        let mut demand = ScheduledDemand::new(vec![]);

        let below = run_policy(&config, &tables, -1, &mut demand).unwrap_err();
        assert_eq!(below, InventoryError::StartOutOfRange { got: -1, max: 4 });

        let above = run_policy(&config, &tables, 5, &mut demand).unwrap_err();
        assert_eq!(above, InventoryError::StartOutOfRange { got: 5, max: 4 });
    }
}
