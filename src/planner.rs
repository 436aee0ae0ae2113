// src/planner.rs

use crate::error::InventoryError;
use crate::io::demand::DemandSource;
use crate::model::config::InventoryConfig;
use crate::model::tables::PolicyTables;
use crate::simulation::engine::{run_policy, SimulationRun};
use crate::solver::backward;
use crate::solver::progress::{NoopProgress, ProgressSink};

/// Owns one problem instance: the configuration and, once [`solve`] has
/// run, the value/decision tables computed for it.
///
/// Solving and simulating are strictly sequential: `simulate` refuses to run
/// until a policy exists. Re-solving allocates fresh tables; nothing is
/// shared between runs.
///
/// [`solve`]: InventoryPlanner::solve
#[derive(Debug)]
pub struct InventoryPlanner {
    config: InventoryConfig,
    tables: Option<PolicyTables>,
}

impl InventoryPlanner {
    /// Validates the configuration and builds an unsolved planner.
    pub fn new(config: InventoryConfig) -> Result<Self, InventoryError> {
        config.validate()?;
        Ok(Self {
            config,
            tables: None,
        })
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Runs the backward induction, replacing any previously solved tables.
    pub fn solve(&mut self) -> &PolicyTables {
        self.solve_with_progress(&NoopProgress)
    }

    /// Like [`solve`], reporting progress to the given observer.
    ///
    /// [`solve`]: InventoryPlanner::solve
    pub fn solve_with_progress(&mut self, progress: &dyn ProgressSink) -> &PolicyTables {
        self.tables.insert(backward::solve(&self.config, progress))
    }

    /// The solved tables, if a solve has run.
    pub fn policy(&self) -> Option<&PolicyTables> {
        self.tables.as_ref()
    }

    /// Replays the solved policy forward from `initial_inventory`, drawing
    /// demands from the given source.
    ///
    /// Fails with [`InventoryError::NotSolved`] before the first solve and
    /// with [`InventoryError::StartOutOfRange`] for starting levels outside
    /// `[0, max_inventory]`.
    pub fn simulate(
        &self,
        initial_inventory: i64,
        demand_source: &mut dyn DemandSource,
    ) -> Result<SimulationRun, InventoryError> {
        let tables = self.tables.as_ref().ok_or(InventoryError::NotSolved)?;
        run_policy(&self.config, tables, initial_inventory, demand_source)
    }
}
