use std::path::Path;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::asset_paths::lexical;

/// Characters that cannot appear unescaped in an unquoted `url()` path segment.
const URL_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`');

/// Produce the reference written back into the stylesheet for a placed asset.
///
/// The generated path always uses forward slashes so that stylesheets built on Windows
/// hosts stay valid URLs. The query and fragment of the original reference are appended
/// untouched.
pub fn make_public_reference(relative_dir: &Path, file_name: &str, suffix: &str) -> String {
    let joined = lexical::normalize(&relative_dir.join(file_name));
    format!("{}{}", to_url_path(&joined), suffix)
}

/// Render a path with forward slashes regardless of the host separator.
pub fn to_url_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Percent-encode a file name generated on disk so it can be placed in a reference.
pub fn encode_url_segment(name: &str) -> String {
    utf8_percent_encode(name, URL_SEGMENT).to_string()
}
