//! Render settings: icon tables and ignore rules.
//!
//! Settings come from an optional JSON file. Every field has a default, so
//! `{}` is a valid file. Loading is strict: a malformed glob is reported at
//! load time. Settings assembled in code with [`Settings::lenient`] skip bad
//! globs instead.

use globset::GlobMatcher;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::glob::{self, PatternList};

/// Serialized form of the icon tables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IconConfig {
    pub folder_open: String,
    pub folder_closed: String,
    pub link: String,
    pub link_broken: String,
    /// Extension (without dot) to glyph.
    pub filetype: HashMap<String, String>,
    /// Exact file name to glyph; checked before `filetype`.
    pub filename_exact: HashMap<String, String>,
    /// Name globs to glyph, searched in order.
    pub filename_glob: Vec<GlobIcon>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GlobIcon {
    pub pattern: String,
    pub icon: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        let filetype = [
            ("rs", "\u{e7a8}"),
            ("py", "\u{e73c}"),
            ("js", "\u{e74e}"),
            ("ts", "\u{e628}"),
            ("md", "\u{e73e}"),
            ("json", "\u{e60b}"),
            ("toml", "\u{e615}"),
            ("sh", "\u{f489}"),
            ("lock", "\u{f023}"),
        ];
        let filename_exact = [("Cargo.toml", "\u{e7a8}"), ("Makefile", "\u{e615}")];
        let filename_glob = [(".git*", "\u{e702}"), ("*.d.ts", "\u{e628}"), ("README*", "\u{f48a}")];
        Self {
            folder_open: "\u{f07c}".to_string(),
            folder_closed: "\u{f07b}".to_string(),
            link: "\u{f0c1}".to_string(),
            link_broken: "\u{f127}".to_string(),
            filetype: owned_map(&filetype),
            filename_exact: owned_map(&filename_exact),
            filename_glob: filename_glob
                .iter()
                .map(|(pattern, icon)| GlobIcon {
                    pattern: pattern.to_string(),
                    icon: icon.to_string(),
                })
                .collect(),
        }
    }
}

fn owned_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Serialized form of [`Settings`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SettingsFile {
    pub use_icons: bool,
    pub icons: IconConfig,
    pub name_ignore: Vec<String>,
    pub path_ignore: Vec<String>,
}

impl SettingsFile {
    /// Read and parse a settings file.
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Icon tables with their globs compiled.
#[derive(Debug, Clone)]
pub struct Icons {
    pub folder_open: String,
    pub folder_closed: String,
    pub link: String,
    pub link_broken: String,
    pub filetype: HashMap<String, String>,
    pub filename_exact: HashMap<String, String>,
    filename_glob: Vec<(GlobMatcher, String)>,
}

impl Icons {
    /// Compile the icon tables, skipping invalid name globs.
    pub fn lenient(config: IconConfig) -> Self {
        let globs = config
            .filename_glob
            .iter()
            .filter_map(|g| glob::matcher(&g.pattern).map(|m| (m, g.icon.clone())))
            .collect();
        Self::from_parts(config, globs)
    }

    /// Compile the icon tables, failing on the first invalid name glob.
    pub fn strict(config: IconConfig) -> Result<Self> {
        let globs = config
            .filename_glob
            .iter()
            .map(|g| Ok((glob::compile(&g.pattern)?.compile_matcher(), g.icon.clone())))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_parts(config, globs))
    }

    fn from_parts(config: IconConfig, filename_glob: Vec<(GlobMatcher, String)>) -> Self {
        Self {
            folder_open: config.folder_open,
            folder_closed: config.folder_closed,
            link: config.link,
            link_broken: config.link_broken,
            filetype: config.filetype,
            filename_exact: config.filename_exact,
            filename_glob,
        }
    }

    /// Glyph for a file: exact name, then extension, then the first
    /// matching name glob.
    pub fn file_icon(&self, name: &str, ext: Option<&str>) -> Option<&str> {
        self.filename_exact
            .get(name)
            .or_else(|| self.filetype.get(ext.unwrap_or("")))
            .or_else(|| {
                self.filename_glob
                    .iter()
                    .find(|(m, _)| m.is_match(name))
                    .map(|(_, icon)| icon)
            })
            .map(String::as_str)
            .filter(|icon| !icon.is_empty())
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::lenient(IconConfig::default())
    }
}

/// Immutable configuration for render passes.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub use_icons: bool,
    pub icons: Icons,
    /// Globs matched against bare names.
    pub name_ignore: PatternList,
    /// Globs matched against full paths.
    pub path_ignore: PatternList,
}

impl Settings {
    /// Load settings from a JSON file, rejecting invalid globs.
    pub fn load(path: &Path) -> Result<Self> {
        Self::try_from(SettingsFile::read(path)?)
    }

    /// Build settings, skipping invalid globs so they never match.
    pub fn lenient(file: SettingsFile) -> Self {
        Self {
            use_icons: file.use_icons,
            icons: Icons::lenient(file.icons),
            name_ignore: PatternList::lenient(&file.name_ignore),
            path_ignore: PatternList::lenient(&file.path_ignore),
        }
    }
}

impl TryFrom<SettingsFile> for Settings {
    type Error = Error;

    fn try_from(file: SettingsFile) -> Result<Self> {
        Ok(Self {
            use_icons: file.use_icons,
            icons: Icons::strict(file.icons)?,
            name_ignore: PatternList::strict(&file.name_ignore)?,
            path_ignore: PatternList::strict(&file.path_ignore)?,
        })
    }
}
