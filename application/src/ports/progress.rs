//! Progress notification port
//!
//! Defines the interface for reporting progress during MCQ generation.

use mcq_domain::Model;

/// Callback for progress updates during a generate action
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called before the model session is created (first use only)
    fn on_model_load_start(&self, model: &Model);

    /// Called when session creation finishes
    fn on_model_loaded(&self, model: &Model, success: bool);

    /// Called when the generation request is sent
    fn on_generation_start(&self, model: &Model);

    /// Called when output arrived; `parsed` tells whether extraction succeeded
    fn on_generation_complete(&self, model: &Model, parsed: bool);

    /// Called when the backend call failed or timed out
    fn on_generation_failed(&self, _model: &Model, _error: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_model_load_start(&self, _model: &Model) {}
    fn on_model_loaded(&self, _model: &Model, _success: bool) {}
    fn on_generation_start(&self, _model: &Model) {}
    fn on_generation_complete(&self, _model: &Model, _parsed: bool) {}
}
