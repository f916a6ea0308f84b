use crate::{
    filter::library::IntoExpr,
    foundation::escape::{label, labels},
};

/// One filtergraph statement: `[in1][in2]node,node,...[out]`.
///
/// Used both as a graph statement inside a [`FilterSet`](crate::FilterSet) and as a
/// single stream chain; [`Graph`] and [`Stream`] are names for this type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chain {
    inputs: Vec<String>,
    nodes: Vec<String>,
    output: Option<String>,
}

/// A chain used as a statement of a filter set.
pub type Graph = Chain;
/// A chain used on its own, read through [`Chain::output`].
pub type Stream = Chain;

impl Chain {
    /// Empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input stream labels (unbracketed).
    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    /// Append one node expression.
    pub fn append(mut self, node: impl IntoExpr) -> Self {
        self.nodes.push(node.into_expr());
        self
    }

    /// Append node expressions in order.
    pub fn append_all<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoExpr,
    {
        self.nodes.extend(nodes.into_iter().map(IntoExpr::into_expr));
        self
    }

    /// Set the output stream label (unbracketed).
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn output_label(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Input labels followed by the comma-joined nodes, without the output label.
    ///
    /// A chain without nodes yields an empty statement.
    pub fn statement(&self) -> String {
        if self.nodes.is_empty() {
            return String::new();
        }
        format!("{}{}", labels(&self.inputs), self.nodes.join(","))
    }

    /// Full statement text including the bracketed output label.
    pub fn render(&self) -> String {
        let mut out = self.statement();
        if let Some(output) = &self.output {
            out.push_str(&label(output));
        }
        out
    }

    /// Same text as [`Chain::render`], for stream-style call sites.
    pub fn output(&self) -> String {
        self.render()
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/chain.rs"]
mod tests;
