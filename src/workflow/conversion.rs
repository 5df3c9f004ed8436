use super::definition::WorkflowDefinition;
use crate::error::WorkflowConversionError;

/// A trait for custom data models that can be converted into a `WorkflowDefinition`.
///
/// The transpiler only ever sees the canonical model. Implementing this trait on
/// your own structs is how a new editor format (or an in-memory graph built by
/// another tool) is plugged in.
///
/// # Example
///
/// ```rust,no_run
/// use comfyscript::prelude::*;
/// use comfyscript::error::WorkflowConversionError;
///
/// struct MyStep { id: i64, op: String }
/// struct MyPipeline { steps: Vec<MyStep> }
///
/// impl IntoWorkflow for MyPipeline {
///     fn into_workflow(self) -> std::result::Result<WorkflowDefinition, WorkflowConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| WorkflowNode::new(step.id, step.op))
///             .collect();
///         Ok(WorkflowDefinition { nodes, links: vec![] })
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a transpilable workflow.
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError>;
}

impl IntoWorkflow for WorkflowDefinition {
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError> {
        Ok(self)
    }
}
