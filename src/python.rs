use crate::error::TranspileError;
use crate::transpiler::WorkflowToScriptTranspiler;
use pyo3::prelude::*;

fn to_py_err(e: TranspileError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// Transpiles a saved workflow into a script.
///
/// The workflow graph is parsed and built once on initialization. `to_script`
/// can then be called repeatedly and always yields the same text.
#[pyclass(name = "Transpiler")]
struct TranspilerPy {
    transpiler: WorkflowToScriptTranspiler,
}

#[pymethods]
impl TranspilerPy {
    /// Parses a workflow and builds its dependency graph.
    ///
    /// Args:
    ///     workflow_json (str): The workflow document as saved by the editor.
    ///     check_version (bool): Reject documents whose version tag is not
    ///         supported. Defaults to True.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed, the version is unsupported or
    ///         a link points at a node that does not exist.
    #[new]
    #[pyo3(signature = (workflow_json, check_version = true))]
    fn new(workflow_json: &str, check_version: bool) -> PyResult<Self> {
        let transpiler = if check_version {
            WorkflowToScriptTranspiler::from_json(workflow_json)
        } else {
            WorkflowToScriptTranspiler::from_json_unchecked(workflow_json)
        }
        .map_err(to_py_err)?;
        Ok(TranspilerPy { transpiler })
    }

    /// Generates the script body.
    ///
    /// Returns:
    ///     str: One newline-terminated statement per node, in dependency order.
    ///
    /// Raises:
    ///     ValueError: If the graph has a cycle or an input reads an output
    ///         that was never assigned.
    fn to_script(&self) -> PyResult<String> {
        self.transpiler.to_script().map_err(to_py_err)
    }

    /// The node ids in the order their statements are emitted.
    fn emission_order(&self) -> PyResult<Vec<i64>> {
        self.transpiler.emission_order().map_err(to_py_err)
    }
}

/// Transpiles a saved workflow document into a script in one call.
#[pyfunction]
fn transpile(workflow_json: &str) -> PyResult<String> {
    WorkflowToScriptTranspiler::from_json(workflow_json)
        .and_then(|t| t.to_script())
        .map_err(to_py_err)
}

/// Workflow to script transpiler.
///
/// Python bindings for turning node-graph workflows into flat call scripts.
#[pymodule]
fn comfyscript(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<TranspilerPy>()?;
    m.add_function(wrap_pyfunction!(transpile, m)?)?;
    Ok(())
}
