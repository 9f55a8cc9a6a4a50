//! Scaling transformers for feature normalization.
//!
//! Gradient descent on raw features converges slowly when their ranges differ by
//! orders of magnitude, so features are z-scored before training.
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`StandardScaler`] | Z-score normalization (mean=0, std=1), population std |

pub mod standard;

pub use standard::{FittedStandardScaler, NormalizationStats, StandardScaler};
