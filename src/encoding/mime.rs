//! Mime type detection from file extensions.

use std::path::Path;

/// Mime type constants for the formats commonly referenced from stylesheets.
#[allow(missing_docs)]
pub mod types {
    pub const SVG: &str = "image/svg+xml";
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const ICO: &str = "image/x-icon";
    pub const BMP: &str = "image/bmp";
    pub const TIFF: &str = "image/tiff";
    pub const CUR: &str = "image/x-win-bitmap";

    pub const WOFF: &str = "font/woff";
    pub const WOFF2: &str = "font/woff2";
    pub const TTF: &str = "font/ttf";
    pub const OTF: &str = "font/otf";
    pub const EOT: &str = "application/vnd.ms-fontobject";

    pub const CSS: &str = "text/css";
    pub const HTML: &str = "text/html";
    pub const PLAIN: &str = "text/plain";
    pub const JAVASCRIPT: &str = "application/javascript";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";

    pub const MP3: &str = "audio/mpeg";
    pub const WAV: &str = "audio/wav";
    pub const OGG_AUDIO: &str = "audio/ogg";
    pub const MP4: &str = "video/mp4";
    pub const WEBM: &str = "video/webm";
    pub const OGG_VIDEO: &str = "video/ogg";

    pub const PDF: &str = "application/pdf";
    pub const WASM: &str = "application/wasm";
}

/// Look up the mime type for `path` from its extension.
///
/// Unknown or missing extensions yield `None`; the inline strategy refuses to embed
/// those files rather than guessing.
pub fn lookup(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    from_extension(&ext)
}

/// Look up the mime type for a lower-case extension without the leading dot.
pub fn from_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext {
        "svg" | "svgz" => types::SVG,
        "png" => types::PNG,
        "jpg" | "jpeg" | "jpe" => types::JPEG,
        "gif" => types::GIF,
        "webp" => types::WEBP,
        "avif" => types::AVIF,
        "ico" => types::ICO,
        "bmp" => types::BMP,
        "tif" | "tiff" => types::TIFF,
        "cur" => types::CUR,

        "woff" => types::WOFF,
        "woff2" => types::WOFF2,
        "ttf" => types::TTF,
        "otf" => types::OTF,
        "eot" => types::EOT,

        "css" => types::CSS,
        "html" | "htm" => types::HTML,
        "txt" => types::PLAIN,
        "js" | "mjs" => types::JAVASCRIPT,
        "json" => types::JSON,
        "xml" => types::XML,

        "mp3" => types::MP3,
        "wav" => types::WAV,
        "oga" => types::OGG_AUDIO,
        "mp4" | "m4v" => types::MP4,
        "webm" => types::WEBM,
        "ogg" | "ogv" => types::OGG_VIDEO,

        "pdf" => types::PDF,
        "wasm" => types::WASM,

        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_stylesheet_assets() {
        assert_eq!(lookup(Path::new("a/b/icon.svg")), Some(types::SVG));
        assert_eq!(lookup(Path::new("photo.JPG")), Some(types::JPEG));
        assert_eq!(lookup(Path::new("fonts/inter.woff2")), Some(types::WOFF2));
    }

    #[test]
    fn unknown_extensions_are_not_guessed() {
        assert_eq!(lookup(Path::new("archive.xyz")), None);
        assert_eq!(lookup(Path::new("Makefile")), None);
    }
}
