use crate::ident::to_tuple;
use crate::workflow::NodeId;
use itertools::Itertools;
use std::fmt;

/// Prefix that comments out a statement whose results are all discarded.
pub const DEFAULT_DEAD_CODE_MARKER: &str = "# ";

/// One generated statement: an optional assignment around a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The workflow node this statement was generated from.
    pub node_id: NodeId,
    /// Assignment targets in output slot order. Empty for a bare call.
    pub targets: Vec<String>,
    pub callee: String,
    /// Input identifiers first, then widget literals.
    pub args: Vec<String>,
    /// All targets are discards.
    pub dead: bool,
}

impl Statement {
    /// Renders the statement. Dead statements get `marker` in front of every
    /// line, including the continuation lines of a multi-line string.
    pub fn render(&self, marker: &str) -> String {
        let mut line = String::new();
        if !self.targets.is_empty() {
            line.push_str(&to_tuple(&self.targets));
            line.push_str(" = ");
        }
        line.push_str(&self.callee);
        line.push('(');
        line.push_str(&self.args.iter().join(", "));
        line.push(')');

        if self.dead {
            line.split('\n').map(|l| format!("{}{}", marker, l)).join("\n")
        } else {
            line
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_DEAD_CODE_MARKER))
    }
}
