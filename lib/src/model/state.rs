/// A marker type indicating that a model is **not yet trained**.
///
/// Its parameters are the zero initialisation until a trainer replaces them.
/// Inference methods (`predict`) are not available in this state.
#[derive(Debug, Clone, Copy)]
pub struct Unfitted;

/// A marker type indicating that a model has been **fully trained**.
///
/// A `Fitted` model holds only its weights and bias: no optimizer state, loss
/// function or hyperparameters. It is immutable and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct Fitted;
