use crate::{
    foundation::error::{FfgraphError, FfgraphResult},
    value::normalize::Value,
};

/// One `-key [value]` entry of a flat command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    key: String,
    value: Option<String>,
    quoted: bool,
}

impl Argument {
    /// Build an argument, normalizing `value` once.
    ///
    /// An empty key is rejected: there is no command-line token it could stand for.
    pub fn new(key: impl Into<String>, value: Option<Value>) -> FfgraphResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(FfgraphError::contract("argument key must be non-empty"));
        }
        Ok(Self {
            key,
            value: value.map(|v| v.normalize()),
            quoted: false,
        })
    }

    /// Argument for a key the crate itself spells out, so it cannot be empty.
    pub(crate) fn known(key: &'static str, value: Option<Value>) -> Self {
        debug_assert!(!key.is_empty());
        Self {
            key: key.to_string(),
            value: value.map(|v| v.normalize()),
            quoted: false,
        }
    }

    /// Mark the value for double-quote wrapping at render time.
    pub fn quoted(mut self) -> Self {
        self.quoted = true;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    fn render_into(&self, out: &mut Vec<String>, quote: bool) {
        if self.key != ArgumentList::OUTPUT {
            out.push(self.key.clone());
        }
        if let Some(value) = &self.value {
            if quote && self.quoted {
                out.push(format!("\"{value}\""));
            } else {
                out.push(value.clone());
            }
        }
    }
}

/// Ordered command-line arguments with replace-by-key semantics for unique options.
///
/// Positions are assigned at first insertion. A unique write to an existing key updates
/// that entry in place; a non-unique write (repeated `-i`, repeated `-map`) always appends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentList {
    entries: Vec<Argument>,
}

impl ArgumentList {
    /// Key of the output target. Renders its value only, never the key itself.
    pub const OUTPUT: &'static str = "<output>";

    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` with an optional value. Returns the entry's position.
    pub fn put(
        &mut self,
        key: impl Into<String>,
        value: Option<Value>,
        unique: bool,
    ) -> FfgraphResult<usize> {
        Ok(self.put_argument(Argument::new(key, value)?, unique))
    }

    /// Insert a prebuilt argument. Returns the entry's position.
    pub fn put_argument(&mut self, arg: Argument, unique: bool) -> usize {
        if unique && let Some(pos) = self.position(&arg.key) {
            let existing = &mut self.entries[pos];
            existing.value = arg.value;
            existing.quoted = arg.quoted;
            return pos;
        }
        self.entries.push(arg);
        self.entries.len() - 1
    }

    /// Unique `key value` option.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> FfgraphResult<usize> {
        self.put(key, Some(value.into()), true)
    }

    /// Unique valueless flag such as `-y` or `-an`.
    pub fn flag(&mut self, key: impl Into<String>) -> FfgraphResult<usize> {
        self.put(key, None, true)
    }

    /// Repeatable `key value` option.
    pub fn append(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> FfgraphResult<usize> {
        self.put(key, Some(value.into()), false)
    }

    /// Remove the first entry with `key`. Absent keys are ignored.
    pub fn remove(&mut self, key: &str) {
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
        }
    }

    /// First entry with `key`.
    pub fn find(&self, key: &str) -> Option<&Argument> {
        self.entries.iter().find(|a| a.key == key)
    }

    /// Position of the first entry with `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|a| a.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expand every entry into display tokens after `prefix`, quoted values wrapped in `"`.
    pub fn render<I, S>(&self, prefix: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand(prefix, true)
    }

    /// Expand every entry into process arguments after `prefix`.
    ///
    /// No shell sits between these tokens and the child, so quoted values are passed raw.
    pub fn argv<I, S>(&self, prefix: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand(prefix, false)
    }

    fn expand<I, S>(&self, prefix: I, quote: bool) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = prefix.into_iter().map(Into::into).collect();
        for arg in &self.entries {
            arg.render_into(&mut out, quote);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/args/list.rs"]
mod tests;
