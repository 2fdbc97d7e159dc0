use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::asset_paths::lexical;
use crate::options::BasePath;

/// Generate the absolute paths a reference may point at, in search order.
///
/// Without an explicit base path the stylesheet's own directory is searched when it
/// differs from the resolution root; otherwise only the root itself is used. An explicit
/// but empty list yields no candidates. Each base path is joined with the reference
/// pathname and resolved against `root`. Both `root`
/// and `document_dir` must already be absolute. Duplicates are dropped so every file is
/// checked at most once.
pub fn generate_file_candidates(
    root: &Path,
    document_dir: &Path,
    base_path: Option<&BasePath>,
    pathname: &str,
) -> Vec<PathBuf> {
    let mut builder = CandidateBuilder::new(root, pathname);

    match base_path {
        Some(paths) => {
            for base in paths.as_slice() {
                builder.add_base(base);
            }
        }
        None => builder.add_document_scope(document_dir),
    }

    builder.finish()
}

struct CandidateBuilder<'a> {
    root: &'a Path,
    pathname: &'a str,
    seen: BTreeSet<PathBuf>,
    result: Vec<PathBuf>,
}

impl<'a> CandidateBuilder<'a> {
    fn new(root: &'a Path, pathname: &'a str) -> Self {
        Self {
            root,
            pathname,
            seen: BTreeSet::new(),
            result: Vec::new(),
        }
    }

    fn add_base(&mut self, base: &str) {
        let joined = lexical::join(base, self.pathname);
        self.push(lexical::resolve(self.root, &joined));
    }

    fn add_document_scope(&mut self, document_dir: &Path) {
        if document_dir != self.root {
            self.add_base(&document_dir.to_string_lossy());
        } else {
            self.add_base("");
        }
    }

    fn finish(self) -> Vec<PathBuf> {
        self.result
    }

    fn push(&mut self, candidate: PathBuf) {
        if self.seen.insert(candidate.clone()) {
            self.result.push(candidate);
        }
    }
}
