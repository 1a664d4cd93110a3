use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::data::{MARKUP_EXT, RUST_EXT, WEB_EXTS};
use crate::literals;
use crate::types::Charset;

/// Collect the distinct characters appearing in string-like regions of the
/// files under `roots`.
///
/// File roots are read directly; directory roots are walked recursively and
/// filtered to recognized extensions (Rust sources plus common web assets).
/// Unreadable or non-UTF-8 files are skipped silently: this is a best-effort
/// pass, and a missed string only costs coverage the baseline set may
/// already provide.
///
/// # Examples
///
/// ```no_run
/// let mut charset = font_subset::scan_roots(&["src", "web"]);
/// charset.add_baseline();
/// println!("{} distinct chars", charset.len());
/// ```
pub fn scan_roots<P: AsRef<Path>>(roots: &[P]) -> Charset {
    let mut charset = Charset::new();
    for root in roots {
        scan_root(root.as_ref(), &mut charset);
    }
    charset
}

fn scan_root(root: &Path, charset: &mut Charset) {
    if root.is_file() {
        // Explicit file roots bypass the extension filter.
        scan_file(root, charset);
        return;
    }
    for entry in WalkDir::new(root).into_iter().filter_map(|entry| entry.ok()) {
        // Stats through symlinks, so a linked source file still counts.
        if !entry.path().is_file() {
            continue;
        }
        if !recognized(entry.path()) {
            continue;
        }
        scan_file(entry.path(), charset);
    }
}

fn recognized(path: &Path) -> bool {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) => ext == RUST_EXT || WEB_EXTS.contains(&ext),
        None => false,
    }
}

fn scan_file(path: &Path, charset: &mut Charset) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    debug!("scanning {}", path.display());

    let ext = path.extension().and_then(OsStr::to_str);
    if ext == Some(RUST_EXT) {
        for body in literals::quoted_strings(&content) {
            charset.extend_from_text(&literals::decode_escapes(body));
        }
        for body in literals::raw_strings(&content) {
            charset.extend_from_text(&literals::decode_escapes(body));
        }
        return;
    }

    // Generic quoted spans in web assets.
    for body in literals::generic_quoted(&content) {
        charset.extend_from_text(&literals::decode_escapes(body));
    }

    // Visible-ish text between markup tags, best effort.
    if ext == Some(MARKUP_EXT) {
        for text in literals::markup_text(&content) {
            charset.extend_from_text(&literals::decode_escapes(text));
        }
    }
}
