use crate::value::normalize::Value;

/// Default separator between a node's arguments.
pub const DEFAULT_SEPARATOR: &str = ":";

/// Slot identity inside a node's ordered argument map.
///
/// Positional slots get a per-node ordinal, so two equal unnamed values never collapse and
/// can never be confused with a named slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotKey {
    /// Slot addressed by parameter name.
    Named(String),
    /// Unnamed slot, numbered in insertion order.
    Positional(u32),
}

/// One rendered parameter of a filter node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterArgument {
    name: Option<String>,
    value: Option<String>,
}

impl FilterArgument {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn render(&self) -> String {
        match (&self.name, &self.value) {
            (Some(name), Some(value)) => format!("{name}={value}"),
            (Some(name), None) => name.clone(),
            (None, Some(value)) => value.clone(),
            (None, None) => String::new(),
        }
    }
}

/// Deferred base arguments.
///
/// Base values wait in `Buffering` until the first real argument or the first render, then
/// become positional slots in registration order and the node moves to `Flushed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BaseArgs {
    /// Base values registered so far, keyed by parameter name.
    Buffering(Vec<(String, String)>),
    /// Buffer already promoted into the slot map.
    Flushed,
}

/// A single filter expression: `function=arg:name=value:...`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterNode {
    function: Option<String>,
    separator: String,
    slots: Vec<(SlotKey, FilterArgument)>,
    next_ordinal: u32,
    wrapper: (String, String),
    base: BaseArgs,
}

impl Default for FilterNode {
    fn default() -> Self {
        Self {
            function: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            slots: Vec::new(),
            next_ordinal: 0,
            wrapper: (String::new(), String::new()),
            base: BaseArgs::Buffering(Vec::new()),
        }
    }
}

impl FilterNode {
    /// Node for filter `function`.
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: Some(function.into()),
            ..Self::default()
        }
    }

    /// Node without a function name; renders its arguments alone.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Replace the argument separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Wrap the joined argument text in `prefix` and `suffix`.
    pub fn with_wrapper(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.wrapper = (prefix.into(), suffix.into());
        self
    }

    /// Override the function name.
    pub fn set_function(&mut self, function: impl Into<String>) {
        self.function = Some(function.into());
    }

    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// True until the base buffer has been promoted.
    pub fn is_buffering(&self) -> bool {
        matches!(self.base, BaseArgs::Buffering(_))
    }

    /// Materialized arguments in slot order. Buffered base values are not included.
    pub fn args(&self) -> impl Iterator<Item = &FilterArgument> {
        self.slots.iter().map(|(_, arg)| arg)
    }

    /// Add `name=v1<sep>v2...`; no values adds a bare `name` flag.
    ///
    /// Re-adding an existing name overwrites that slot in place.
    pub fn add_named<I, V>(&mut self, name: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.flush();
        let name = name.into();
        let value = self.join(values);
        let key = SlotKey::Named(name.clone());
        if let Some((_, slot)) = self.slots.iter_mut().find(|(k, _)| *k == key) {
            slot.value = value;
        } else {
            self.slots.push((
                key,
                FilterArgument {
                    name: Some(name),
                    value,
                },
            ));
        }
        self
    }

    /// Add an unnamed value (several values are joined with the separator).
    pub fn add_positional<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.flush();
        let value = self.join(values);
        self.push_positional(value);
        self
    }

    /// Register a base argument.
    ///
    /// While the node is buffering, the value waits and re-registering `name` replaces it.
    /// Once flushed, base values append directly as positional slots.
    pub fn add_base(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let value = value.into().normalize();
        if let BaseArgs::Buffering(buffer) = &mut self.base {
            let name = name.into();
            if let Some((_, existing)) = buffer.iter_mut().find(|(n, _)| *n == name) {
                *existing = value;
            } else {
                buffer.push((name, value));
            }
            return self;
        }
        self.push_positional(Some(value));
        self
    }

    /// Promote buffered base values to positional slots. Idempotent.
    pub fn flush(&mut self) {
        if let BaseArgs::Buffering(buffer) = std::mem::replace(&mut self.base, BaseArgs::Flushed) {
            for (_, value) in buffer {
                self.push_positional(Some(value));
            }
        }
    }

    /// Render the node expression, flushing any buffered base values first.
    pub fn render(&mut self) -> String {
        self.flush();
        let function = self.function.as_deref().unwrap_or_default();
        if self.slots.is_empty() {
            return function.to_string();
        }
        let joined = self
            .slots
            .iter()
            .map(|(_, arg)| arg.render())
            .collect::<Vec<_>>()
            .join(&self.separator);
        let (prefix, suffix) = &self.wrapper;
        if function.is_empty() {
            format!("{prefix}{joined}{suffix}")
        } else {
            format!("{function}={prefix}{joined}{suffix}")
        }
    }

    /// Consume the node and return its expression.
    pub fn into_expr(mut self) -> String {
        self.render()
    }

    fn join<I, V>(&self, values: I) -> Option<String>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let parts: Vec<String> = values.into_iter().map(|v| v.into().normalize()).collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(&self.separator))
        }
    }

    fn push_positional(&mut self, value: Option<String>) {
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        self.slots.push((
            SlotKey::Positional(ordinal),
            FilterArgument { name: None, value },
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/node.rs"]
mod tests;
