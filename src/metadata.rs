//! Project metadata file (`package.json` by default).
//!
//! The document is kept as an untyped JSON object so every field other than
//! `version` and the targets section passes through untouched, in order.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use serde_json::{json, Map, Value};

use crate::domain::TargetSpec;
use crate::error::{Result, VerbumpError};

#[derive(Debug, Clone)]
pub struct ProjectMetadata {
    path: PathBuf,
    document: Map<String, Value>,
}

impl ProjectMetadata {
    /// Reads and parses the metadata file.
    ///
    /// # Returns
    /// * `Err(MetadataMissing)` - no file at `path`
    /// * `Err(MetadataMalformed)` - not JSON, or not a JSON object
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(VerbumpError::MetadataMissing(path));
        }

        let content = fs::read_to_string(&path)?;
        let document = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(VerbumpError::MetadataMalformed {
                    path,
                    reason: "top level is not an object".to_string(),
                })
            }
            Err(e) => {
                return Err(VerbumpError::MetadataMalformed {
                    path,
                    reason: e.to_string(),
                })
            }
        };

        Ok(ProjectMetadata { path, document })
    }

    /// The `version` field.
    ///
    /// An absent key or an empty string is `None`. Any other non-string value
    /// is an `InvalidVersion` error.
    pub fn version(&self) -> Result<Option<&str>> {
        match self.document.get("version") {
            None => Ok(None),
            Some(Value::String(version)) if version.is_empty() => Ok(None),
            Some(Value::String(version)) => Ok(Some(version.as_str())),
            Some(other) => Err(VerbumpError::InvalidVersion(other.to_string())),
        }
    }

    pub fn set_version(&mut self, version: &str) {
        self.document
            .insert("version".to_string(), Value::String(version.to_string()));
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.document.contains_key(section)
    }

    /// Raw entries of `<section>.targets`, one result per entry.
    ///
    /// A missing section or a `targets` value that is not an array yields no
    /// targets at all.
    pub fn targets(&self, section: &str) -> Vec<Result<TargetSpec>> {
        self.document
            .get(section)
            .and_then(|s| s.get("targets"))
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(TargetSpec::from_value).collect())
            .unwrap_or_default()
    }

    /// Adds an example targets section.
    pub fn init_section(&mut self, section: &str) -> Result<()> {
        if self.has_section(section) {
            return Err(VerbumpError::AlreadyInitialized(section.to_string()));
        }

        let sample = json!({
            "targets": [
                {
                    "comment": "target a (possibly nested) key in a JSON file. This comment is instructive, not functional",
                    "file": "some-file.json",
                    "key": "software.version.key"
                },
                {
                    "comment": "target a string in a file. This comment is instructive, not functional",
                    "file": "site/template/footer.inc.html",
                    "search": "<p>Site Version {{version}}</p>"
                }
            ]
        });
        self.document.insert(section.to_string(), sample);
        Ok(())
    }

    /// Pretty-printed with two-space indentation and a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(&self.document).map_err(|e| {
            VerbumpError::MetadataMalformed {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;
        rendered.push('\n');
        Ok(rendered)
    }

    pub fn save(&self) -> Result<()> {
        let rendered = self.to_json_string()?;
        let mut file = File::create(&self.path)?;
        file.write_all(rendered.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
