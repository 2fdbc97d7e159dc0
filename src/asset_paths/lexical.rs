//! Lexical path arithmetic.
//!
//! References are resolved without touching the filesystem until the final existence
//! check, so `..` segments are folded here rather than through `canonicalize`.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` segments without consulting the filesystem.
///
/// Leading `..` segments of a relative path are kept; `..` directly below the root is
/// dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    parts.iter().collect()
}

/// Join a reference path onto a base directory the way URL paths nest.
///
/// A leading `/` on `tail` does not discard `base`; with an empty base the tail is
/// used as written.
pub fn join(base: &str, tail: &str) -> PathBuf {
    if base.is_empty() {
        return normalize(Path::new(tail));
    }

    let trimmed = tail.trim_start_matches(['/', '\\']);
    normalize(&Path::new(base).join(trimmed))
}

/// Resolve `path` against `root`; absolute paths win.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&root.join(path))
    }
}

/// Turn `path` into an absolute, normalised path using the working directory.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }

    let cwd = std::env::current_dir()?;
    Ok(normalize(&cwd.join(path)))
}

/// Relative path leading from directory `from` to `to`.
///
/// Both paths are expected to be absolute and normalised. Equal paths yield an empty
/// path.
pub fn relative(from: &Path, to: &Path) -> PathBuf {
    let from_parts: Vec<_> = from.components().collect();
    let to_parts: Vec<_> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..from_parts.len() {
        result.push("..");
    }
    for part in &to_parts[common..] {
        result.push(part);
    }
    result
}
