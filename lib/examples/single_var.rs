//! Single-feature regression of price on house size.
//!
//! Reads a two-column CSV (size, price) when a path is given, otherwise draws
//! synthetic samples. Prints the learned line next to the data points.
//!
//! Run with: cargo run --example single_var -- [sizes.csv]

use std::error::Error;

use linreg_rs::dataset::synthetic::linear_samples;
use linreg_rs::dataset::{read_csv, CsvOptions, Dataset};
use linreg_rs::{fit_transform, UnivariateTrainer};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Univariate Linear Regression ===\n");

    let dataset = match std::env::args().nth(1) {
        Some(path) => read_csv(path, CsvOptions::default())?,
        None => {
            let mut rng = StdRng::seed_from_u64(7);
            linear_samples(&mut rng, 30, &[0.15], 50.0, 500.0..=2500.0, 20.0)?
        }
    };
    if dataset.n_features() != 1 {
        return Err(format!("expected one feature column, got {}", dataset.n_features()).into());
    }
    println!("Loaded {} samples", dataset.len());

    let (x_norm, means, sigmas) = fit_transform(dataset.features())?;
    let x: Vec<f64> = x_norm.iter().map(|row| row[0]).collect();

    let (model, history) = UnivariateTrainer::new(0.1, 1000).fit(&x, dataset.targets())?;
    println!("w = {:.4}, b = {:.4}", model.weight, model.bias);
    if let Some(cost) = history.final_cost() {
        println!("final cost = {cost:.4}");
    }
    println!("(normalized with mean {:.2}, sigma {:.2})\n", means[0], sigmas[0]);

    println!("{:>10} {:>10} {:>10}", "size", "price", "predicted");
    for (raw, (z, price)) in dataset.features().iter().zip(x.iter().zip(dataset.targets())) {
        println!("{:>10.1} {:>10.2} {:>10.2}", raw[0], price, model.predict(*z));
    }

    Ok(())
}
