//! Wordmark configuration file handling
//!
//! `wordmark.toml` supplies the container attributes, an optional accessible
//! title and the raster size:
//!
//! ```toml
//! title = "Government of Canada"
//!
//! [svg]
//! role = "img"
//! aria-label = "Government of Canada"
//! width = 200
//!
//! [raster]
//! width = 286
//! height = 70
//! ```

use anyhow::{Context, Result};
use goc_wordmark::{AttrValue, Attributes, Node, WORDMARK};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "wordmark.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WordmarkConfig {
    /// Accessible `<title>` placed before the paths
    #[serde(default)]
    pub title: Option<String>,
    /// Attributes forwarded to the `svg` container, in file order
    #[serde(default)]
    pub svg: IndexMap<String, toml::Value>,
    #[serde(default)]
    pub raster: RasterConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RasterConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    286
}

fn default_height() -> u32 {
    70
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl WordmarkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: WordmarkConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Load the explicit file, else `wordmark.toml` in `dir` if present, else defaults
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Self::load(&fallback);
        }

        Ok(Self::default())
    }

    /// Container attributes with command-line overrides applied last
    pub fn attributes(&self, overrides: &[(String, String)]) -> Result<Attributes> {
        let mut attrs = Attributes::new();
        for (name, value) in &self.svg {
            attrs.insert(name.as_str(), toml_to_attr(name, value)?);
        }
        for (name, value) in overrides {
            attrs.insert(name.as_str(), value.as_str());
        }
        Ok(attrs)
    }

    /// Accessible title: the command-line value wins over the file's
    pub fn title<'a>(&'a self, cli: Option<&'a str>) -> Option<&'a str> {
        cli.or(self.title.as_deref())
    }

    /// Render the wordmark, adding a `<title>` child only when a title resolves
    pub fn build(&self, overrides: &[(String, String)], cli_title: Option<&str>) -> Result<Node> {
        let attrs = self.attributes(overrides)?;
        let node = match self.title(cli_title) {
            Some(title) => WORDMARK.titled(attrs, title),
            None => WORDMARK.standard(attrs),
        };
        Ok(node)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

fn toml_to_attr(name: &str, value: &toml::Value) -> Result<AttrValue> {
    match value {
        toml::Value::String(s) => Ok(AttrValue::from(s.as_str())),
        toml::Value::Integer(i) => Ok(AttrValue::Number(*i as f64)),
        toml::Value::Float(f) => Ok(AttrValue::Number(*f)),
        toml::Value::Boolean(b) => Ok(AttrValue::Bool(*b)),
        other => anyhow::bail!(
            "Attribute '{}' must be a string, number or boolean, got {}",
            name,
            other.type_str()
        ),
    }
}

/// Parse a `key=value` command-line attribute
pub fn parse_attr(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
title = "Government of Canada"

[svg]
role = "img"
aria-label = "Government of Canada"
width = 200
focusable = false

[raster]
width = 572
"#,
        )
        .unwrap();

        let config = WordmarkConfig::load(&path).unwrap();
        assert_eq!(config.title.as_deref(), Some("Government of Canada"));
        assert_eq!(config.raster.width, 572);
        assert_eq!(config.raster.height, 70);

        let attrs = config.attributes(&[]).unwrap();
        assert_eq!(attrs.get_str("role"), Some("img"));
        assert_eq!(attrs.get("width"), Some(&AttrValue::Number(200.0)));
        assert_eq!(attrs.get("focusable"), Some(&AttrValue::Bool(false)));
    }

    #[test]
    fn test_resolve_fallback_and_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = WordmarkConfig::resolve(None, dir.path()).unwrap();
        assert!(config.svg.is_empty());
        assert_eq!(config.raster.width, 286);

        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "title = \"t\"\n").unwrap();
        let config = WordmarkConfig::resolve(None, dir.path()).unwrap();
        assert_eq!(config.title.as_deref(), Some("t"));
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(WordmarkConfig::resolve(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config: WordmarkConfig = toml::from_str("[svg]\nrole = \"img\"\n").unwrap();
        let attrs = config
            .attributes(&[("role".to_string(), "presentation".to_string())])
            .unwrap();
        assert_eq!(attrs.get_str("role"), Some("presentation"));
    }

    #[test]
    fn test_rejects_table_attribute() {
        let config: WordmarkConfig = toml::from_str("[svg.style]\ncolor = \"red\"\n").unwrap();
        assert!(config.attributes(&[]).is_err());
    }

    #[test]
    fn test_attribute_order_follows_file() {
        let config: WordmarkConfig =
            toml::from_str("[svg]\nrole = \"img\"\naria-label = \"GoC\"\nwidth = 200\n").unwrap();

        let attrs = config.attributes(&[]).unwrap();
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["role", "aria-label", "width"]);

        let markup = config.build(&[], None).unwrap().to_markup();
        let role = markup.find("role=").unwrap();
        let label = markup.find("aria-label=").unwrap();
        let width = markup.find("width=").unwrap();
        assert!(role < label && label < width);

        let text = config.to_toml().unwrap();
        assert!(text.find("role").unwrap() < text.find("aria-label").unwrap());
    }

    #[test]
    fn test_title_resolution() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "title = \"T from file\"\n",
        )
        .unwrap();
        let config = WordmarkConfig::resolve(None, dir.path()).unwrap();

        let node = config.build(&[], Some("CLI")).unwrap();
        assert_eq!(node.children()[0].tag(), Some("title"));
        assert!(node.find_by_title("CLI").is_some());
        assert!(node.find_by_title("T from file").is_none());

        let node = config.build(&[], None).unwrap();
        assert!(node.find_by_title("T from file").is_some());
        assert_eq!(node.children().len(), 3);
    }

    #[test]
    fn test_no_title_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let config = WordmarkConfig::resolve(None, dir.path()).unwrap();

        let node = config.build(&[], None).unwrap();
        assert_eq!(node.children().len(), 2);
        assert!(node.children().iter().all(|c| c.tag() == Some("path")));
        assert!(!node.to_markup().contains("<title>"));
    }

    #[test]
    fn test_parse_attr() {
        assert_eq!(
            parse_attr("data-foo=bar=baz").unwrap(),
            ("data-foo".to_string(), "bar=baz".to_string())
        );
        assert!(parse_attr("novalue").is_err());
        assert!(parse_attr("=x").is_err());
    }

    #[test]
    fn test_round_trip_toml() {
        let mut config = WordmarkConfig::default();
        config.title = Some("Gouvernement du Canada".to_string());
        let text = config.to_toml().unwrap();
        let parsed: WordmarkConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.title, config.title);
    }
}
