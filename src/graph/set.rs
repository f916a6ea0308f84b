use crate::{
    args::list::ArgumentList,
    foundation::error::FfgraphResult,
    foundation::escape::labels,
    graph::chain::Chain,
};

/// Which command-line option carries the filtergraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterOption {
    /// `-vf`: one linear video chain.
    Simple,
    /// `-af`: one linear audio chain.
    Audio,
    /// `-filter_complex`: labelled multi-input graphs.
    Complex,
    /// Any other option name, without the leading dash.
    Custom(String),
}

impl FilterOption {
    /// Option name without the leading dash.
    pub fn name(&self) -> &str {
        match self {
            Self::Simple => "vf",
            Self::Audio => "af",
            Self::Complex => "filter_complex",
            Self::Custom(name) => name,
        }
    }

    /// Inverse of [`FilterOption::name`]; unknown names become `Custom`.
    pub fn from_name(name: &str) -> Self {
        match name.trim_start_matches('-') {
            "vf" => Self::Simple,
            "af" => Self::Audio,
            "filter_complex" => Self::Complex,
            other => Self::Custom(other.to_string()),
        }
    }
}

/// Ordered graph statements, optionally preceded by a split statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSet {
    option: FilterOption,
    split: Option<Vec<String>>,
    graphs: Vec<Chain>,
}

impl FilterSet {
    /// Empty set carried by `option`.
    pub fn new(option: FilterOption) -> Self {
        Self {
            option,
            split: None,
            graphs: Vec::new(),
        }
    }

    /// Empty `-vf` set.
    pub fn simple() -> Self {
        Self::new(FilterOption::Simple)
    }

    /// Empty `-filter_complex` set.
    pub fn complex() -> Self {
        Self::new(FilterOption::Complex)
    }

    /// Start the set with `split[l1][l2]...`.
    pub fn with_split<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.split = Some(outputs.into_iter().map(Into::into).collect());
        self
    }

    /// Append a graph statement.
    pub fn add_graph(mut self, graph: Chain) -> Self {
        self.graphs.push(graph);
        self
    }

    /// Option name without the leading dash (`vf`, `filter_complex`, ...).
    pub fn option_name(&self) -> &str {
        self.option.name()
    }

    pub fn graphs(&self) -> &[Chain] {
        &self.graphs
    }

    pub fn is_empty(&self) -> bool {
        self.split.is_none() && self.graphs.is_empty()
    }

    /// Split statement (if any) followed by the graph statements joined with `;`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn render(&self) -> String {
        let mut text = String::new();
        if let Some(split) = &self.split {
            text.push_str("split");
            text.push_str(&labels(split));
            text.push(';');
        }
        let graphs: Vec<String> = self.graphs.iter().map(Chain::render).collect();
        text.push_str(&graphs.join(";"));
        tracing::debug!(
            option = self.option_name(),
            graphs = self.graphs.len(),
            len = text.len(),
            "rendered filtergraph"
        );
        text
    }

    /// Set `-<option> <graph>` on `args`, or leave `args` untouched when the set renders empty.
    pub fn apply_to(&self, args: &mut ArgumentList) -> FfgraphResult<()> {
        let text = self.render();
        if text.is_empty() {
            return Ok(());
        }
        args.set(format!("-{}", self.option_name()), text)?;
        Ok(())
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::complex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/set.rs"]
mod tests;
