use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};
use xxhash_rust::{xxh32::xxh32, xxh64::xxh64};

use crate::options::{HashMethod, HashOptions};

/// Compute a short, stable digest of `contents`.
///
/// xxHash digests are rendered as unpadded lower-case hex, SHA-256 as URL-safe base64 so
/// the result can always be used as a file name. The digest is then cut down to
/// `shrink` characters.
pub fn calc_hash(contents: &[u8], options: &HashOptions) -> String {
    let digest = match &options.method {
        HashMethod::XxHash32 => format!("{:x}", xxh32(contents, 0)),
        HashMethod::XxHash64 => format!("{:x}", xxh64(contents, 0)),
        HashMethod::Sha256 => URL_SAFE_NO_PAD.encode(Sha256::digest(contents)),
        HashMethod::Custom(hash) => hash(contents),
    };

    if options.shrink == 0 {
        return digest;
    }

    digest.chars().take(options.shrink).collect()
}

/// File name for a hashed copy of the asset at `path`.
///
/// The original extension is kept; with `append` the original stem is kept too.
pub fn hashed_file_name(path: &Path, contents: &[u8], options: &HashOptions) -> String {
    let digest = calc_hash(contents, options);
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    if options.append {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{stem}_{digest}{extension}")
    } else {
        format!("{digest}{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn options(method: HashMethod, shrink: usize) -> HashOptions {
        HashOptions {
            method,
            shrink,
            append: false,
        }
    }

    #[test]
    fn same_input_gives_same_digest() {
        let opts = HashOptions::default();
        let first = calc_hash(b"body { color: red }", &opts);
        let second = calc_hash(b"body { color: red }", &opts);
        assert_eq!(first, second);
        assert!(first.len() <= 8);
    }

    #[test]
    fn different_input_gives_different_digest() {
        let opts = HashOptions::default();
        assert_ne!(calc_hash(b"image-a", &opts), calc_hash(b"image-b", &opts));
    }

    #[test]
    fn xxhash32_matches_reference_value() {
        // xxh32("", 0) = 0x02cc5d05
        assert_eq!(calc_hash(b"", &options(HashMethod::XxHash32, 0)), "2cc5d05");
    }

    #[test]
    fn shrink_truncates_long_digests() {
        let full = calc_hash(b"asset", &options(HashMethod::Sha256, 0));
        let short = calc_hash(b"asset", &options(HashMethod::Sha256, 10));
        assert_eq!(full.len(), 43);
        assert_eq!(short, full[..10]);
        assert!(!full.contains('/') && !full.contains('+'));
    }

    #[test]
    fn xxhash64_digest_is_hex() {
        let digest = calc_hash(b"asset", &options(HashMethod::XxHash64, 0));
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn custom_method_is_used_verbatim() {
        let method = HashMethod::Custom(Arc::new(|bytes: &[u8]| format!("len{}", bytes.len())));
        assert_eq!(calc_hash(b"abcd", &options(method, 8)), "len4");
    }

    #[test]
    fn hashed_name_keeps_extension() {
        let opts = options(HashMethod::Custom(Arc::new(|_: &[u8]| "cafe".to_string())), 8);
        let name = hashed_file_name(Path::new("/img/logo.png"), b"x", &opts);
        assert_eq!(name, "cafe.png");

        let appended = HashOptions {
            append: true,
            ..opts
        };
        let name = hashed_file_name(Path::new("/img/logo.png"), b"x", &appended);
        assert_eq!(name, "logo_cafe.png");
    }
}
