//! Optimal ordering policies for a periodic-review inventory problem with
//! stochastic demand and backorders.
//!
//! A finite-horizon dynamic program prices every `(inventory, period)` state
//! by backward induction, backordered (negative) levels included, and
//! records the cost-minimizing order quantity for each. The resulting
//! decision table can then be replayed forward under random demand to
//! measure realized costs.
//!
//! ```
//! use inventory_policy::io::demand::UniformDemand;
//! use inventory_policy::{InventoryConfig, InventoryPlanner};
//!
//! let config = InventoryConfig {
//!     time_horizon: 5,
//!     holding_cost: 2.0,
//!     price: 20.0,
//!     max_inventory: 10,
//!     max_demand: 3,
//! };
//! let mut planner = InventoryPlanner::new(config).unwrap();
//! planner.solve();
//!
//! let mut demand = UniformDemand::seeded(42);
//! let run = planner.simulate(4, &mut demand).unwrap();
//! assert_eq!(run.orders.len(), 5);
//! ```

pub mod error;
pub mod io;
pub mod model;
pub mod planner;
pub mod simulation;
pub mod solver;

pub use error::InventoryError;
pub use model::config::InventoryConfig;
pub use model::tables::PolicyTables;
pub use planner::InventoryPlanner;
pub use simulation::engine::{PeriodRecord, SimulationRun};
pub use solver::progress::{NoopProgress, ProgressSink};
