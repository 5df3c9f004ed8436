//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! comfyscript crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use comfyscript::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow_json = std::fs::read_to_string("path/to/workflow.json")?;
//! let transpiler = WorkflowToScriptTranspiler::from_json(&workflow_json)?;
//! println!("{}", transpiler.to_script()?);
//! # Ok(())
//! # }
//! ```

// Transpilation
pub use crate::transpiler::{
    NamingScope, Statement, TranspilerBuilder, WorkflowToScriptTranspiler,
};

// Workflow model
pub use crate::workflow::{
    IntoWorkflow, LinkId, NodeId, SUPPORTED_VERSION, WidgetValue, WorkflowDefinition,
    WorkflowDocument, WorkflowInput, WorkflowLink, WorkflowNode, WorkflowOutput,
};

// Graph
pub use crate::graph::{Edge, WorkflowGraph};

// Identifier helpers
pub use crate::ident::{
    str_to_class_id, str_to_const_id, str_to_func_id, str_to_mod_id, str_to_var_id, to_str,
    to_tuple,
};

// Error types
pub use crate::error::{TranspileError, WorkflowConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
