//! Rewrites the version string inside configured target files.
//!
//! Two kinds of target are supported:
//! - search targets: a literal template with a `{{version}}` placeholder; the
//!   first occurrence of the template filled with the current version is
//!   replaced by the template filled with the next version
//! - key targets: a dotted path into a JSON document; the value there is
//!   replaced when it equals the current version, and the document is written
//!   back in compact form

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::{TargetLocator, TargetSpec, VERSION_PLACEHOLDER};
use crate::error::{Result, VerbumpError};

/// Options for a single patch invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// Compute the change but do not write it
    pub dry_run: bool,
}

/// What happened to a target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The file now holds (or, in a dry run, would hold) the next version
    Updated(PathBuf),
    /// A key target whose value was not the current version; nothing written
    Unchanged(PathBuf),
}

impl PatchOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, PatchOutcome::Updated(_))
    }
}

/// Replaces `current` by `next` in the file described by `target`.
///
/// Relative target paths are resolved against `root`.
///
/// # Errors
/// * `InvalidTarget` - neither or both of search/key, or no file
/// * `FileNotFound` / `NotARegularFile` - filesystem preconditions
/// * `PatternNotFound` - the filled-in search text is absent
/// * `InvalidJson` / `MissingKey` - key targets only
pub fn patch_target(
    target: &TargetSpec,
    root: &Path,
    current: &str,
    next: &str,
    options: &PatchOptions,
) -> Result<PatchOutcome> {
    let (file, locator) = target.resolve()?;
    let path = root.join(file);

    if !path.exists() {
        return Err(VerbumpError::FileNotFound(path));
    }
    if !path.is_file() {
        return Err(VerbumpError::NotARegularFile(path));
    }

    let content = fs::read_to_string(&path)?;
    let updated = match locator {
        TargetLocator::Search(search) => Some(replace_search(&path, &content, search, current, next)?),
        TargetLocator::Key(key) => replace_key(&path, &content, key, current, next)?,
    };

    match updated {
        Some(updated) => {
            if !options.dry_run {
                persist(&path, &updated)?;
            }
            Ok(PatchOutcome::Updated(path))
        }
        None => Ok(PatchOutcome::Unchanged(path)),
    }
}

/// Single-occurrence substitution of the filled-in template.
fn replace_search(
    path: &Path,
    content: &str,
    search: &str,
    current: &str,
    next: &str,
) -> Result<String> {
    let from = search.replacen(VERSION_PLACEHOLDER, current, 1);
    let to = search.replacen(VERSION_PLACEHOLDER, next, 1);

    if !content.contains(&from) {
        return Err(VerbumpError::PatternNotFound {
            path: path.to_path_buf(),
            search: from,
        });
    }

    Ok(content.replacen(&from, &to, 1))
}

/// Returns `None` when the value at `key` is not `current`.
fn replace_key(
    path: &Path,
    content: &str,
    key: &str,
    current: &str,
    next: &str,
) -> Result<Option<String>> {
    let mut document: Value = serde_json::from_str(content).map_err(|e| VerbumpError::InvalidJson {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let missing = || VerbumpError::MissingKey {
        path: path.to_path_buf(),
        key: key.to_string(),
    };

    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };

    let mut node = &mut document;
    if let Some(parents) = parents {
        for component in parents.split('.') {
            node = child_mut(node, component).ok_or_else(missing)?;
        }
    }

    match child_mut(node, leaf) {
        Some(value) if value.as_str() == Some(current) => {
            *value = Value::String(next.to_string());
        }
        _ => return Ok(None),
    }

    serde_json::to_string(&document)
        .map(Some)
        .map_err(|e| VerbumpError::InvalidJson {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Object member by name, or array element by index.
fn child_mut<'a>(node: &'a mut Value, component: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(component),
        Value::Array(items) => component
            .parse::<usize>()
            .ok()
            .and_then(move |index| items.get_mut(index)),
        _ => None,
    }
}

fn persist(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(())
}
