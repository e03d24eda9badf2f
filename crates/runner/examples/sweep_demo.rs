//! Parameter sweep demo
//!
//! Runs a small sweep against a self-contained market session that
//! prices schedule-driven orders and settles each trial as one
//! average-balance line in its sink file.

use agora_ports::{MarketSession, SessionError, SessionRequest, SessionResult};
use agora_pricing::OrderPricer;
use agora_runner::{ExperimentRunner, SweepConfig};
use std::io::Write;

/// Toy session: samples each schedule segment at its midpoint, prices
/// one order per seller and reports the average as the trial balance
struct DemoSession {
    pricer: OrderPricer,
}

impl MarketSession for DemoSession {
    fn run(&mut self, request: &SessionRequest<'_>, sink: &mut dyn Write) -> SessionResult<()> {
        let sellers = request.traders.total_sellers();
        let mut total: i64 = 0;
        let mut samples: u32 = 0;

        for segment in &request.schedule.supply {
            let midpoint = (segment.valid_from() + segment.valid_to()) / 2.0;
            for index in 0..sellers {
                let price = self
                    .pricer
                    .order_price_at(
                        index,
                        segment.ranges(),
                        sellers,
                        segment.step_mode(),
                        midpoint,
                    )
                    .map_err(|e| SessionError::Failed(e.to_string()))?;
                total += price;
                samples += 1;
            }
        }

        let average = total as f64 / samples as f64;
        writeln!(sink, "{}, {:.1}, {:.2}", request.trial_id, request.end_time, average)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "DemoSession"
    }
}

fn main() {
    env_logger::init();

    println!("=== Agora Sweep Demo ===\n");

    let output_dir = std::env::temp_dir().join("agora-sweep-demo");
    std::fs::create_dir_all(&output_dir).expect("output dir should be creatable");

    // Small grid: 2 ensemble sizes x 3 weights
    let config = SweepConfig {
        ensemble_sizes: 4..6,
        weight_start: 0.5,
        weight_stop: 2.0,
        weight_step: 0.5,
        simulated_days: 1.0,
        verbose: false,
        output_dir: output_dir.clone(),
        ..Default::default()
    };

    println!(
        "Sweeping {} grid points into {}\n",
        config.points().len(),
        output_dir.display()
    );

    let session = DemoSession {
        pricer: OrderPricer::with_seed(42),
    };
    let mut runner = ExperimentRunner::new(session);

    match runner.run_sweep(&config) {
        Ok(summary) => {
            println!("=== Results ===");
            println!("Points run: {}", summary.points_run);
            println!("Trials run: {}", summary.trials_run);
            println!("\nTrial balances:");
            for report in &summary.reports {
                let line = std::fs::read_to_string(&report.sink_path).unwrap_or_default();
                print!("  {}", line);
            }
            println!("\nSweep completed successfully!");
        }
        Err(e) => {
            eprintln!("Sweep failed: {e}");
            std::process::exit(1);
        }
    }
}
