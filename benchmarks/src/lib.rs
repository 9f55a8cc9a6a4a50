//! Benchmark utilities for linreg-rs.
//!
//! - Seeded synthetic datasets and a train/test split
//! - Metrics calculation (MSE, RMSE, MAE, R²)

pub mod data;
pub mod metrics;

pub use metrics::{Metrics, RegressionMetrics};
