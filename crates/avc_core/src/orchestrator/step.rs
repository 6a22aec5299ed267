//! Pipeline step trait definition.

use super::errors::StepResult;
use super::types::{Context, RunState};

/// Trait for pipeline steps.
///
/// The pipeline calls these methods in order:
///
/// 1. `validate_input` - Check preconditions before execution
/// 2. `execute` - Perform the step's work
/// 3. `validate_output` - Verify the step recorded what later steps need
pub trait PipelineStep: Send + Sync {
    /// Step name, used for log phases and error context.
    fn name(&self) -> &str;

    /// Check preconditions (inputs present, previous step completed).
    fn validate_input(&self, ctx: &Context, state: &RunState) -> StepResult<()>;

    /// Perform the step's work and record results in `state`.
    fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<()>;

    /// Verify the step produced valid output.
    fn validate_output(&self, ctx: &Context, state: &RunState) -> StepResult<()>;

    /// Human-readable description of what this step does.
    fn description(&self) -> &str {
        self.name()
    }
}
