//! Colorscheme model, cached scheme loading, and template context building.
use anyhow::{Context as _, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::TargetError;
use crate::fetch::Fetch;
use crate::fsutil;
use crate::registry::RegistryEntry;

/// A scheme registry entry: a name and the URL of the scheme file itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchemeEntry {
    pub name: String,
    pub source: String,
}

impl RegistryEntry for SchemeEntry {
    fn name(&self) -> &str {
        &self.name
    }

    /// The scheme index is a JSON object mapping scheme name to source URL.
    fn parse_index(text: &str) -> Result<Vec<Self>> {
        let index: BTreeMap<String, String> =
            serde_json::from_str(text).context("parsing scheme index")?;
        Ok(index
            .into_iter()
            .map(|(name, source)| Self { name, source })
            .collect())
    }
}

/// A named set of color values for fixed semantic roles (`base00`..`base0F`).
///
/// Read-only once loaded; used purely as rendering context.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Colorscheme {
    #[serde(rename = "scheme", default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
    /// Color slots to hex values (`"2e3440"`, optional leading `#`).
    #[serde(flatten)]
    pub colors: BTreeMap<String, String>,
}

impl Colorscheme {
    /// Load the scheme body for `entry`, going through the on-disk cache at
    /// `<cache_dir>/<name>.json`.
    ///
    /// # Errors
    ///
    /// Returns an error on fetch failure, cache I/O failure, or a malformed
    /// scheme document.
    pub fn load(entry: &SchemeEntry, cache_dir: &Path, fetch: &dyn Fetch) -> Result<Self> {
        let cached = cache_dir.join(format!("{}.json", entry.name));
        let body = if cached.exists() {
            std::fs::read_to_string(&cached)
                .with_context(|| format!("reading cached scheme {}", cached.display()))?
        } else {
            let body = fetch
                .get_text(&entry.source)
                .with_context(|| format!("fetching scheme {:?}", entry.name))?;
            fsutil::ensure_parent_dir(&cached)?;
            std::fs::write(&cached, &body)
                .with_context(|| format!("caching scheme {}", cached.display()))?;
            body
        };

        let mut scheme: Self = serde_json::from_str(&body)
            .with_context(|| format!("parsing scheme {:?}", entry.name))?;
        if scheme.name.is_empty() {
            scheme.name = entry.name.clone();
        }
        Ok(scheme)
    }

    /// Build the key-value context consumed by the expansion engine for a
    /// template body with the given output extension.
    ///
    /// Each color slot contributes `<slot>_hex`, per-channel `<slot>_hex_r`
    /// (`_g`, `_b`), decimal `<slot>_rgb_r` and unit-interval `<slot>_dec_r`
    /// variants, alongside `scheme_name`, `scheme_author` and `scheme_slug`.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::UnsupportedExtension`] for extensions not of
    /// the form `.something`, and a parse error for malformed color values.
    pub fn template_context(&self, extension: &str) -> Result<BTreeMap<String, String>> {
        if extension.is_empty() || !extension.starts_with('.') {
            return Err(TargetError::UnsupportedExtension(extension.to_string()).into());
        }

        let mut context = BTreeMap::new();
        context.insert("scheme_name".to_string(), self.name.clone());
        context.insert("scheme_author".to_string(), self.author.clone());
        context.insert("scheme_slug".to_string(), slug(&self.name));

        for (slot, value) in &self.colors {
            let (r, g, b) = parse_hex(value)
                .with_context(|| format!("color {slot} in scheme {:?}", self.name))?;
            context.insert(format!("{slot}_hex"), format!("{r:02x}{g:02x}{b:02x}"));
            context.insert(format!("{slot}_hex_r"), format!("{r:02x}"));
            context.insert(format!("{slot}_hex_g"), format!("{g:02x}"));
            context.insert(format!("{slot}_hex_b"), format!("{b:02x}"));
            context.insert(format!("{slot}_rgb_r"), r.to_string());
            context.insert(format!("{slot}_rgb_g"), g.to_string());
            context.insert(format!("{slot}_rgb_b"), b.to_string());
            context.insert(format!("{slot}_dec_r"), unit_interval(r));
            context.insert(format!("{slot}_dec_g"), unit_interval(g));
            context.insert(format!("{slot}_dec_b"), unit_interval(b));
        }
        Ok(context)
    }
}

/// Parse a 6-digit hex color (optional leading `#`) into RGB channels.
fn parse_hex(value: &str) -> Result<(u8, u8, u8)> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("malformed color value {value:?}, expected 6 hex digits");
    }
    let channel = |range: std::ops::Range<usize>| -> Result<u8> {
        let part = digits.get(range).unwrap_or_default();
        u8::from_str_radix(part, 16).with_context(|| format!("color channel {part:?}"))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn unit_interval(channel: u8) -> String {
    format!("{:.6}", f64::from(channel) / 255.0)
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
