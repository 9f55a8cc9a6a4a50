use std::time::Instant;

use benchmarks::data::{housing, split};
use benchmarks::metrics::Metrics;
use linreg_rs::backend::{CpuBackend, Tensor2D};
use linreg_rs::{RegressionPipeline, TrainingConfig};

const ITERATIONS: usize = 500;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Learning Rate Search for Full-Batch Gradient Descent");
    println!("====================================================\n");

    let dataset = housing(5000, 42)?;
    let (train, test) = split(&dataset, 0.8)?;
    println!(
        "{} training / {} test samples, {} iterations per run\n",
        train.features().len(),
        test.features().len(),
        ITERATIONS
    );

    let test_x = Tensor2D::<CpuBackend>::from_rows(test.features())?;

    // Four normalized features put the stability limit at 2 / 5.
    let learning_rates = [1e-3, 3e-3, 1e-2, 3e-2, 0.1, 0.2, 0.3, 0.5];

    let mut best: Option<(f64, f64)> = None;
    for lr in learning_rates {
        let start = Instant::now();
        let (pipeline, history) =
            RegressionPipeline::<CpuBackend>::fit_with_history(&train, &TrainingConfig::new(lr, ITERATIONS))?;
        let elapsed = start.elapsed();

        let predictions = pipeline.predict_raw_batch(&test_x)?.to_vec();
        let metrics = Metrics::calculate_all(test.targets(), &predictions);
        let final_cost = history.final_cost().unwrap_or(f64::NAN);
        log::info!("learning rate {lr}: {} iterations in {elapsed:?}", history.len());
        if !metrics.mse.is_finite() {
            log::warn!("learning rate {lr} diverged (final cost {final_cost})");
        }

        println!(
            "LR = {:<6}: time = {:>7.2} ms, cost = {:>12.4}, MSE = {:>10.4}, R² = {:.4}",
            lr,
            elapsed.as_secs_f64() * 1000.0,
            final_cost,
            metrics.mse,
            metrics.r_squared
        );

        if metrics.mse.is_finite() && best.map_or(true, |(_, mse)| metrics.mse < mse) {
            best = Some((lr, metrics.mse));
        }
    }

    match best {
        Some((lr, mse)) => println!("\nBest: LR = {lr} (MSE = {mse:.4})"),
        None => println!("\nEvery learning rate diverged"),
    }
    Ok(())
}
