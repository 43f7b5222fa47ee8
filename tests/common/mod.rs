// Shared helpers for integration tests.
//
// Provides an in-memory fetcher and a temporary-directory-backed
// configuration so each test can drive the full resolve-and-render flow
// without a network or a real home directory.
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use tinter::config::Config;
use tinter::fetch::Fetch;

pub const SCHEME_INDEX_URL: &str = "https://example.test/schemes/list.json";
pub const TEMPLATE_INDEX_URL: &str = "https://example.test/templates/list.json";
pub const NORD_URL: &str = "https://example.test/schemes/nord.json";
pub const VIM_BODY_URL: &str = "https://example.test/base16-vim/templates/colors.tmpl";

/// Map-backed fetcher: URL → response body.
#[derive(Debug, Default)]
pub struct MapFetch {
    responses: HashMap<String, String>,
}

impl MapFetch {
    pub fn insert(&mut self, url: &str, body: &str) {
        self.responses.insert(url.to_string(), body.to_string());
    }
}

impl Fetch for MapFetch {
    fn get_text(&self, url: &str) -> Result<String> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no response configured for {url}"))
    }
}

/// A fetcher seeded with a complete remote: one scheme (`nord`, 16 colors)
/// and one template (`vim`, file key `colors` with extension `.vim`).
pub fn seeded_fetch() -> MapFetch {
    let mut fetch = MapFetch::default();
    fetch.insert(SCHEME_INDEX_URL, &format!("{{\"nord\": \"{NORD_URL}\"}}"));
    fetch.insert(NORD_URL, &nord_scheme_json());
    fetch.insert(
        TEMPLATE_INDEX_URL,
        r#"{
            "vim": {
                "root": "https://example.test/base16-vim",
                "files": {"colors": {"extension": ".vim"}}
            }
        }"#,
    );
    fetch.insert(VIM_BODY_URL, "\" {{ scheme_name }}\nlet g:bg = \"#{{ base00_hex }}\"\n");
    fetch
}

/// A nord-like scheme document with all 16 color slots defined.
pub fn nord_scheme_json() -> String {
    let mut colors = String::new();
    for i in 0..16u8 {
        colors.push_str(&format!(",\"base{i:02X}\":\"{i:02x}{i:02x}{i:02x}\""));
    }
    format!("{{\"scheme\":\"Nord\",\"author\":\"arcticicestudio\"{colors}}}")
}

/// Build a [`Config`] whose cache files, cache dirs, and index URLs all live
/// under `root` / the example remote.
pub fn test_config(root: &Path) -> Config {
    Config {
        colorscheme: "nord".to_string(),
        schemes_list_url: SCHEME_INDEX_URL.to_string(),
        templates_list_url: TEMPLATE_INDEX_URL.to_string(),
        schemes_list_file: root.join("schemes-list.json"),
        templates_list_file: root.join("templates-list.json"),
        schemes_cache_dir: root.join("schemes"),
        templates_cache_dir: root.join("templates"),
        ..Config::default()
    }
}
