use indicatif::ProgressBar;
use inventory_policy::io::demand::UniformDemand;
use inventory_policy::io::reporting;
use inventory_policy::{InventoryConfig, InventoryPlanner, ProgressSink};

/// Terminal progress bar for solver runs, fed by the solver's observer seam.
struct SolveBar {
    bar: ProgressBar,
}

impl SolveBar {
    fn new() -> Self {
        Self {
            bar: ProgressBar::new(0),
        }
    }
}

impl ProgressSink for SolveBar {
    fn begin(&self, total: u64) {
        self.bar.set_length(total);
    }

    fn advance(&self) {
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn main() {
    println!("=== Periodic-Review Inventory Policy Optimization ===");

    // 1. EXPERIMENT SETUP
    // Three presets over the same horizon and bounds, varying the balance
    // between the holding cost and the price.
    let experiments = vec![
        InventoryConfig {
            time_horizon: 10,
            holding_cost: 5.0,
            price: 5.0,
            max_inventory: 100,
            max_demand: 10,
        },
        InventoryConfig {
            time_horizon: 10,
            holding_cost: 10.0,
            price: 5.0,
            max_inventory: 100,
            max_demand: 10,
        },
        InventoryConfig {
            time_horizon: 10,
            holding_cost: 5.0,
            price: 10.0,
            max_inventory: 100,
            max_demand: 10,
        },
    ];

    for (i, config) in experiments.into_iter().enumerate() {
        println!();
        println!("Experiment #{}", i + 1);
        println!("=============");
        println!(" Parameters: {:?}", config);

        // 2. SOLVE THE DECISION PROBLEM
        let mut planner = match InventoryPlanner::new(config) {
            Ok(planner) => planner,
            Err(e) => {
                eprintln!("Invalid experiment configuration: {}", e);
                continue;
            }
        };
        planner.solve_with_progress(&SolveBar::new());

        // 3. SIMULATE THE SOLVED POLICY
        // Two independent runs per experiment, both starting from 10 units.
        let mut demand = UniformDemand::from_thread_rng();
        let mut last_run = None;

        for j in 0..2 {
            match planner.simulate(10, &mut demand) {
                Ok(run) => {
                    println!();
                    println!(" Simulation #{}", j + 1);
                    for (k, (order, sold)) in run.orders.iter().zip(&run.demands).enumerate() {
                        println!("   Period #{}: {} ordered and {} sold", k + 1, order, sold);
                    }
                    println!("  Total costs: {:.2}", run.total_cost);
                    last_run = Some(run);
                }
                Err(e) => eprintln!("Simulation failed: {}", e),
            }
        }

        // 4. EXPORT THE LAST RUN
        if let Some(run) = last_run {
            let output_file = format!("experiment_{}.csv", i + 1);
            match reporting::write_simulation_log(&output_file, &run.history) {
                Ok(_) => println!("\nHistory written to ./{}", output_file),
                Err(e) => eprintln!("Error writing CSV: {}", e),
            }
        }
    }

    println!("\nAll experiments complete.");
}
