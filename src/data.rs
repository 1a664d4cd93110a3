//! Fixed character data and recognized file extensions.

/// Printable ASCII, always included so menu shortcuts, digits and common
/// punctuation render even when extraction finds nothing.
pub(crate) const ASCII_PRINTABLE_FIRST: char = ' '; // 0x20
pub(crate) const ASCII_PRINTABLE_LAST: char = '~'; // 0x7e

/// Full-width punctuation and symbols common in CJK UI copy.
pub(crate) const CJK_PUNCTUATION: &str = "，。！？：；（）【】《》“”‘’、·—…+-×/";

/// Extension of Rust sources, which get literal-aware extraction.
pub(crate) const RUST_EXT: &str = "rs";

/// Extensions of web assets, which get the generic quoted-span heuristic.
pub(crate) const WEB_EXTS: &[&str] = &["html", "css", "js", "ts"];

/// Markup files additionally yield the text between tags.
pub(crate) const MARKUP_EXT: &str = "html";
