//! The ordered fixture list.

use std::fmt;

use thiserror::Error;

/// Fixture files exercised by default, in the order their records are printed.
pub const DEFAULT_FIXTURES: [&str; 5] = [
    "InvalidDescrip.xml",
    "ValidSchema.xml",
    "InvalidLevel.xml",
    "ValidDTD.xml",
    "InvalidPickList.xml",
];

/// Errors raised while building a fixture list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureListError {
    #[error("fixture list is empty")]
    Empty,

    #[error("fixture name at position {0} is empty")]
    EmptyName(usize),

    #[error("fixture name {name:?} at position {pos} starts with '-' and would be read as an option")]
    OptionLike { pos: usize, name: String },
}

/// An immutable, ordered list of fixture file names.
///
/// Order is significant only for output: records come out in list order.
/// Names are kept verbatim and resolved relative to the runner's working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureList {
    names: Vec<String>,
}

impl FixtureList {
    /// Build a list from any sequence of names.
    ///
    /// Rejects empty lists, empty names and names that start with `-`.
    pub fn new<I, S>(names: I) -> Result<Self, FixtureListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(FixtureListError::Empty);
        }
        if let Some(pos) = names.iter().position(|n| n.is_empty()) {
            return Err(FixtureListError::EmptyName(pos));
        }
        if let Some(pos) = names.iter().position(|n| n.starts_with('-')) {
            return Err(FixtureListError::OptionLike {
                pos,
                name: names[pos].clone(),
            });
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl Default for FixtureList {
    fn default() -> Self {
        Self {
            names: DEFAULT_FIXTURES.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FixtureList {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl fmt::Display for FixtureList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.names {
            writeln!(f, "{name}")?;
        }
        Ok(())
    }
}
