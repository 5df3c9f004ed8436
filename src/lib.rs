//! # ComfyScript - Workflow to Script Transpiler
//!
//! **ComfyScript** turns a node-graph workflow, as saved by a visual node editor,
//! into an equivalent linear script. Every node becomes one call statement, every
//! link becomes a variable passed from the statement producing it to the
//! statements consuming it.
//!
//! ## Core Workflow
//!
//! The transpiler is format-agnostic. It operates on a canonical
//! [`WorkflowDefinition`](workflow::WorkflowDefinition):
//!
//! 1.  **Load Your Data**: Parse a saved workflow with [`WorkflowDocument`](workflow::WorkflowDocument),
//!     or implement [`IntoWorkflow`](workflow::IntoWorkflow) for your own format.
//! 2.  **Build**: Use `WorkflowToScriptTranspiler::builder` to build the dependency graph.
//! 3.  **Emit**: Call `to_script` to get the script body, or `statements` to inspect
//!     the generated statements.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use comfyscript::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let nodes = vec![
//!         WorkflowNode {
//!             outputs: Some(vec![WorkflowOutput {
//!                 name: "IMAGE".to_string(),
//!                 output_type: "IMAGE".to_string(),
//!                 slot_index: Some(0),
//!                 links: vec![1],
//!             }]),
//!             widgets_values: Some(vec!["example.png".into()]),
//!             ..WorkflowNode::new(1, "LoadImage")
//!         },
//!         WorkflowNode {
//!             inputs: Some(vec![WorkflowInput { name: "images".to_string(), link: Some(1) }]),
//!             ..WorkflowNode::new(2, "SaveImage")
//!         },
//!     ];
//!     let links = vec![WorkflowLink::new(1, 1, 0, 2, 0, "IMAGE")];
//!
//!     let transpiler = WorkflowToScriptTranspiler::builder(WorkflowDefinition { nodes, links })
//!         .build()?;
//!
//!     // image = LoadImage('example.png')
//!     // SaveImage(image)
//!     print!("{}", transpiler.to_script()?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod graph;
pub mod ident;
pub mod prelude;
pub mod transpiler;
pub mod workflow;

#[cfg(feature = "python-bindings")]
mod python;
