//! Multivariate house price regression.
//!
//! Reads a CSV whose first column is an id, followed by four feature columns
//! (size, bedrooms, floors, age) and the price. Without a path argument the
//! demo draws a synthetic dataset of the same shape.
//!
//! Run with: cargo run --example multi_var -- [houses.csv]

use std::error::Error;

use linreg_rs::dataset::synthetic::linear_samples;
use linreg_rs::dataset::{read_csv, CsvOptions, Dataset, InMemoryDataset};
use linreg_rs::{fit_transform, train, transform, InferenceModel};
use rand::rngs::StdRng;
use rand::SeedableRng;

const LEARNING_RATE: f64 = 0.1;
const ITERATIONS: usize = 1000;

fn load(path: Option<String>) -> Result<InMemoryDataset, Box<dyn Error>> {
    match path {
        Some(path) => {
            println!("Loading {path}");
            let options = CsvOptions {
                skip_columns: 1,
                ..CsvOptions::default()
            };
            Ok(read_csv(path, options)?)
        }
        None => {
            println!("No CSV given, generating synthetic houses");
            let mut rng = StdRng::seed_from_u64(42);
            let size = linear_samples(&mut rng, 100, &[0.2], 20.0, 600.0..=3000.0, 5.0)?;
            // Columns: size, bedrooms, floors, age
            let rows = size
                .features()
                .iter()
                .zip(size.targets())
                .enumerate()
                .map(|(i, (x, price))| {
                    let bedrooms = (1 + i % 5) as f64;
                    let floors = (1 + i % 2) as f64;
                    let age = (5 + (i * 7) % 60) as f64;
                    vec![
                        x[0],
                        bedrooms,
                        floors,
                        age,
                        price + 8.0 * bedrooms + 4.0 * floors - 0.5 * age,
                    ]
                })
                .collect();
            Ok(InMemoryDataset::from_rows(rows)?)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Multivariate Linear Regression ===\n");

    println!("1. Loading data...");
    let dataset = load(std::env::args().nth(1))?;
    println!(
        "   {} samples, {} features\n",
        dataset.len(),
        dataset.n_features()
    );

    println!("2. Normalizing features...");
    let (x_norm, means, sigmas) = fit_transform(dataset.features())?;
    println!("   means:  {means:.3?}");
    println!("   sigmas: {sigmas:.3?}\n");

    println!("3. Training (learning_rate = {LEARNING_RATE}, iterations = {ITERATIONS})...");
    let model = train(&x_norm, dataset.targets(), LEARNING_RATE, ITERATIONS)?;
    let (w, b) = model.parameters();
    println!("   w = {w:.4?}");
    println!("   b = {b:.4}\n");

    println!("4. Predicting...");
    let house = [1200.0, 3.0, 1.0, 40.0];
    let query = transform(&house, &means, &sigmas)?;
    let price = model.predict(&query)?;
    println!("   size = 1200, bedrooms = 3, floors = 1, age = 40");
    println!("   predicted price: {price:.2}");

    Ok(())
}
