//! Template model: a named collection of remotely fetched file bodies.
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::registry::RegistryEntry;

/// Output specification for one file key within a template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileSpec {
    /// Output extension, including the leading dot (e.g. `".vim"`).
    pub extension: String,
}

/// A template registry entry.
///
/// File bodies are not stored in the registry; they are fetched lazily from
/// `<source_root>/templates/<file_key>.tmpl` by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Template {
    pub name: String,
    /// Base location for fetching per-file template bodies.
    pub source_root: String,
    /// File keys to their output specifications.
    pub files: BTreeMap<String, FileSpec>,
}

impl Template {
    /// URL of the template body for `file_key`.
    #[must_use]
    pub fn body_url(&self, file_key: &str) -> String {
        format!(
            "{}/templates/{file_key}.tmpl",
            self.source_root.trim_end_matches('/')
        )
    }
}

impl RegistryEntry for Template {
    fn name(&self) -> &str {
        &self.name
    }

    /// The template index is a JSON object mapping template name to
    /// `{"root": ..., "files": {key: {"extension": ...}}}`.
    fn parse_index(text: &str) -> Result<Vec<Self>> {
        #[derive(Deserialize)]
        struct IndexEntry {
            root: String,
            #[serde(default)]
            files: BTreeMap<String, FileSpec>,
        }

        let index: BTreeMap<String, IndexEntry> =
            serde_json::from_str(text).context("parsing template index")?;
        Ok(index
            .into_iter()
            .map(|(name, entry)| Self {
                name,
                source_root: entry.root,
                files: entry.files,
            })
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const INDEX: &str = r#"{
        "vim": {
            "root": "https://example.test/base16-vim/",
            "files": {"colors": {"extension": ".vim"}}
        },
        "alacritty": {
            "root": "https://example.test/base16-alacritty",
            "files": {"colors": {"extension": ".toml"}, "extra": {"extension": ".yml"}}
        }
    }"#;

    #[test]
    fn parse_index_yields_templates_with_file_specs() {
        let templates = Template::parse_index(INDEX).unwrap();
        assert_eq!(templates.len(), 2);
        let vim = templates.iter().find(|t| t.name == "vim").unwrap();
        assert_eq!(vim.files["colors"].extension, ".vim");
        let alacritty = templates.iter().find(|t| t.name == "alacritty").unwrap();
        assert_eq!(alacritty.files.len(), 2);
    }

    #[test]
    fn parse_index_allows_missing_files_map() {
        let templates = Template::parse_index(r#"{"x":{"root":"https://r"}}"#).unwrap();
        assert!(templates[0].files.is_empty());
    }

    #[test]
    fn parse_index_rejects_malformed_json() {
        assert!(Template::parse_index("[]").is_err());
    }

    #[test]
    fn body_url_normalizes_trailing_slash() {
        let templates = Template::parse_index(INDEX).unwrap();
        let vim = templates.iter().find(|t| t.name == "vim").unwrap();
        assert_eq!(
            vim.body_url("colors"),
            "https://example.test/base16-vim/templates/colors.tmpl"
        );
        let alacritty = templates.iter().find(|t| t.name == "alacritty").unwrap();
        assert_eq!(
            alacritty.body_url("colors"),
            "https://example.test/base16-alacritty/templates/colors.tmpl"
        );
    }
}
