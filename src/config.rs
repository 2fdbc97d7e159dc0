//! Option loader for `asset-urls.config.json`.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::error::Error;
use crate::options::{
    BasePath, EncodeType, Fallback, HashMethod, HashOptions, UrlOptions, UrlStrategy,
};

/// File name searched for by [`discover`].
pub const DEFAULT_CONFIG_FILE: &str = "asset-urls.config.json";

/// A single string or a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// One value.
    One(String),
    /// Several values, order preserved.
    Many(Vec<String>),
}

/// Digest settings as written in the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HashOptionsFile {
    /// `xxhash32`, `xxhash64` or `sha256`.
    pub method: Option<String>,
    /// Digest length; `0` keeps the full digest.
    pub shrink: Option<usize>,
    /// Keep the original file stem in front of the digest.
    pub append: bool,
}

/// One option set as written in the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlOptionsFile {
    /// Strategy name: `rebase`, `inline`, `copy` or `passthrough`.
    pub url: Option<String>,
    /// Regular expression matched against the reference pathname.
    pub filter: Option<String>,
    /// Directories searched for referenced files.
    pub base_path: Option<OneOrMany>,
    /// Destination directory for copied assets, relative to `to`.
    pub assets_path: Option<String>,
    /// Name copied files after their content digest.
    pub use_hash: bool,
    /// Digest settings.
    pub hash_options: Option<HashOptionsFile>,
    /// Inline size limit in kilobytes.
    pub max_size: u64,
    /// `base64`, `encodeURI` or `encodeURIComponent`.
    pub encode_type: Option<String>,
    /// `copy` to copy files that are too large to inline.
    pub fallback: Option<String>,
    /// Do not warn about inlined SVG files referenced with a fragment.
    pub ignore_fragment_warning: bool,
}

/// A configuration file holds either one option set or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConfigFile {
    /// Several option sets, first match wins.
    Multi(Vec<UrlOptionsFile>),
    /// A single option set.
    Single(UrlOptionsFile),
}

impl ConfigFile {
    fn into_sets(self) -> Vec<UrlOptionsFile> {
        match self {
            Self::Single(options) => vec![options],
            Self::Multi(options) => options,
        }
    }
}

/// Load option sets from `dir`, falling back to a single default set when the
/// configuration file does not exist.
pub fn discover(dir: &Path) -> Result<Vec<UrlOptions>, Error> {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if !candidate.is_file() {
        return Ok(vec![UrlOptions::default()]);
    }
    from_path(&candidate)
}

/// Read option sets from a specific JSON file.
pub fn from_path(path: &Path) -> Result<Vec<UrlOptions>, Error> {
    let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = serde_json::from_str(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    file.into_sets().into_iter().map(UrlOptions::try_from).collect()
}

impl TryFrom<UrlOptionsFile> for UrlOptions {
    type Error = Error;

    fn try_from(file: UrlOptionsFile) -> Result<Self, Self::Error> {
        let strategy = match file.url.as_deref() {
            None => UrlStrategy::default(),
            Some(name) => UrlStrategy::from_name(name)
                .ok_or_else(|| Error::UnknownStrategy(name.to_string()))?,
        };

        let filter = file
            .filter
            .map(|pattern| {
                Regex::new(&pattern).map_err(|source| Error::InvalidFilter { pattern, source })
            })
            .transpose()?;

        let base_path = file.base_path.map(|value| match value {
            OneOrMany::One(path) => BasePath::new([path]),
            OneOrMany::Many(paths) => BasePath::new(paths),
        });

        let fallback = match file.fallback.as_deref() {
            None => Fallback::None,
            Some("copy") => Fallback::Copy,
            Some(other) => return Err(unknown_option("fallback", other)),
        };

        let encode_type = match file.encode_type.as_deref() {
            None => EncodeType::default(),
            Some(name) => {
                EncodeType::from_name(name).ok_or_else(|| unknown_option("encodeType", name))?
            }
        };

        Ok(Self {
            strategy,
            filter,
            base_path,
            assets_path: file.assets_path,
            use_hash: file.use_hash,
            hash_options: file
                .hash_options
                .map(hash_options)
                .transpose()?
                .unwrap_or_default(),
            max_size: file.max_size,
            encode_type,
            fallback,
            ignore_fragment_warning: file.ignore_fragment_warning,
        })
    }
}

fn hash_options(file: HashOptionsFile) -> Result<HashOptions, Error> {
    let defaults = HashOptions::default();
    let method = match file.method.as_deref() {
        None => defaults.method,
        Some(name) => {
            HashMethod::from_name(name).ok_or_else(|| unknown_option("hashOptions.method", name))?
        }
    };

    Ok(HashOptions {
        method,
        shrink: file.shrink.unwrap_or(defaults.shrink),
        append: file.append,
    })
}

fn unknown_option(key: &'static str, value: &str) -> Error {
    Error::UnknownOption {
        key,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(json: &str) -> Result<Vec<UrlOptions>, Error> {
        let file: ConfigFile = serde_json::from_str(json).unwrap();
        file.into_sets().into_iter().map(UrlOptions::try_from).collect()
    }

    #[test]
    fn discover_defaults_when_file_is_missing() {
        let temp = tempdir().unwrap();
        let sets = discover(temp.path()).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].strategy.name(), "rebase");
    }

    #[test]
    fn reads_single_option_object() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{
                "url": "inline",
                "basePath": ["p1", "p2"],
                "maxSize": 8,
                "fallback": "copy",
                "assetsPath": "assets",
                "useHash": true,
                "hashOptions": { "method": "xxhash64", "shrink": 12, "append": true },
                "encodeType": "encodeURIComponent"
            }"#,
        )
        .unwrap();

        let sets = discover(temp.path()).unwrap();
        let options = &sets[0];

        assert_eq!(options.strategy.name(), "inline");
        assert_eq!(options.base_path, Some(BasePath::new(["p1", "p2"])));
        assert_eq!(options.max_size_bytes(), Some(8 * 1024));
        assert!(matches!(options.fallback, Fallback::Copy));
        assert_eq!(options.assets_path(), Some("assets"));
        assert!(options.use_hash);
        assert!(matches!(options.hash_options.method, HashMethod::XxHash64));
        assert_eq!(options.hash_options.shrink, 12);
        assert!(options.hash_options.append);
        assert_eq!(options.encode_type, EncodeType::EncodeUriComponent);
    }

    #[test]
    fn reads_option_list_with_filters() {
        let sets = parse(
            r#"[
                { "filter": "\\.svg$", "url": "inline" },
                { "url": "copy", "basePath": "static" }
            ]"#,
        )
        .unwrap();

        assert_eq!(sets.len(), 2);
        assert!(sets[0].matches("a.svg"));
        assert!(!sets[0].matches("a.png"));
        assert_eq!(sets[1].base_path, Some(BasePath::from("static")));
    }

    #[test]
    fn rejects_unknown_strategy() {
        let err = parse(r#"{ "url": "teleport" }"#).unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy(name) if name == "teleport"));
    }

    #[test]
    fn rejects_unknown_fallback() {
        let err = parse(r#"{ "url": "inline", "fallback": "Copy" }"#).unwrap_err();
        assert!(matches!(err, Error::UnknownOption { key: "fallback", ref value } if value == "Copy"));
    }

    #[test]
    fn rejects_unknown_encode_type() {
        let err = parse(r#"{ "url": "inline", "encodeType": "encodeUri" }"#).unwrap_err();
        assert!(matches!(err, Error::UnknownOption { key: "encodeType", ref value } if value == "encodeUri"));
        assert_eq!(err.to_string(), "unknown encodeType `encodeUri`");
    }

    #[test]
    fn rejects_unknown_hash_method() {
        let err = parse(r#"{ "hashOptions": { "method": "md5" } }"#).unwrap_err();
        assert!(matches!(err, Error::UnknownOption { key: "hashOptions.method", .. }));
    }

    #[test]
    fn rejects_invalid_filter() {
        let err = parse(r#"{ "filter": "(" }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidFilter { .. }));
    }

    #[test]
    fn reports_malformed_json_with_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = from_path(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
