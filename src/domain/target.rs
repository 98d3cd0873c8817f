use crate::error::{Result, VerbumpError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder substituted by the version inside a search template
pub const VERSION_PLACEHOLDER: &str = "{{version}}";

/// One file where the project version is mirrored.
///
/// Exactly one of `search` and `key` must be set. Empty strings count as
/// unset. A `search` template must contain `{{version}}`. `comment` is free text for humans and is never read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct TargetSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// How the version is found inside a target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLocator<'a> {
    /// Literal text containing `{{version}}`
    Search(&'a str),
    /// Dotted path into a JSON document
    Key(&'a str),
}

impl TargetSpec {
    pub fn search(file: impl Into<String>, search: impl Into<String>) -> Self {
        TargetSpec {
            file: Some(file.into()),
            search: Some(search.into()),
            ..Default::default()
        }
    }

    pub fn key(file: impl Into<String>, key: impl Into<String>) -> Self {
        TargetSpec {
            file: Some(file.into()),
            key: Some(key.into()),
            ..Default::default()
        }
    }

    /// Build a spec from one raw entry of the metadata target list.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| VerbumpError::InvalidTarget(format!("{} ({})", value, e)))
    }

    /// Validate the spec and split it into file and locator.
    pub fn resolve(&self) -> Result<(&Path, TargetLocator<'_>)> {
        let file = present(&self.file).ok_or_else(|| self.invalid("no file given"))?;
        let locator = match (present(&self.search), present(&self.key)) {
            (Some(search), None) if !search.contains(VERSION_PLACEHOLDER) => {
                return Err(self.invalid("search has no {{version}} placeholder"))
            }
            (Some(search), None) => TargetLocator::Search(search),
            (None, Some(key)) => TargetLocator::Key(key),
            (Some(_), Some(_)) => return Err(self.invalid("both search and key given")),
            (None, None) => return Err(self.invalid("neither search nor key given")),
        };

        Ok((Path::new(file), locator))
    }

    fn invalid(&self, why: &str) -> VerbumpError {
        let shown = serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self));
        VerbumpError::InvalidTarget(format!("{}: {}", shown, why))
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
