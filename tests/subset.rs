//! Invoker behavior: hard errors, fallback copies, and the happy path
//! against stub interpreters standing in for Python.

use std::fs;
use std::path::PathBuf;

use font_subset::{Charset, FallbackReason, SubsetError, SubsetOutcome, Subsetter, check_input_font};
use pretty_assertions::assert_eq;

const FONT_BYTES: &[u8] = b"\x00\x01\x00\x00 fake font payload";

/// Baseline charset plus a couple of scanned characters.
fn sample_charset() -> Charset {
    let mut charset: Charset = "Hi∑".chars().collect();
    charset.add_baseline();
    charset
}

fn missing_python() -> PathBuf {
    PathBuf::from("/definitely/not/a/python-interpreter")
}

#[test]
fn missing_input_is_a_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.ttf");
    let output = dir.path().join("out.ttf");

    let err = Subsetter::builder()
        .python(missing_python())
        .build()
        .subset(&input, &output, &sample_charset())
        .unwrap_err();

    assert!(matches!(err, SubsetError::MissingInput(_)));
    assert!(!output.exists());
}

#[test]
fn empty_input_is_a_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.ttf");
    fs::write(&input, b"").unwrap();
    let output = dir.path().join("out.ttf");

    let err = Subsetter::builder()
        .python(missing_python())
        .build()
        .subset(&input, &output, &sample_charset())
        .unwrap_err();

    assert!(matches!(err, SubsetError::MissingInput(_)));
    assert!(!output.exists());
}

#[test]
fn input_check_matches_the_invoker_precondition() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.ttf");
    assert!(matches!(
        check_input_font(&missing),
        Err(SubsetError::MissingInput(_))
    ));

    let empty = dir.path().join("empty.ttf");
    fs::write(&empty, b"").unwrap();
    assert!(matches!(
        check_input_font(&empty),
        Err(SubsetError::MissingInput(_))
    ));

    let full = dir.path().join("full.ttf");
    fs::write(&full, FONT_BYTES).unwrap();
    assert!(check_input_font(&full).is_ok());
}

#[test_log::test]
fn missing_fonttools_copies_input_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("full.ttf");
    fs::write(&input, FONT_BYTES).unwrap();
    // Nested parents are created on the way.
    let output = dir.path().join("assets/fonts/app.ttf");

    let outcome = Subsetter::builder()
        .python(missing_python())
        .build()
        .subset(&input, &output, &sample_charset())
        .unwrap();

    assert_eq!(
        outcome,
        SubsetOutcome::CopiedFull(FallbackReason::FontToolsUnavailable)
    );
    assert_eq!(fs::read(&output).unwrap(), FONT_BYTES);
}

#[test]
fn repeated_runs_produce_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("full.ttf");
    fs::write(&input, FONT_BYTES).unwrap();
    let output = dir.path().join("app.ttf");

    let subsetter = Subsetter::builder().python(missing_python()).build();
    subsetter.subset(&input, &output, &sample_charset()).unwrap();
    let first = fs::read(&output).unwrap();
    subsetter.subset(&input, &output, &sample_charset()).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[cfg(unix)]
mod with_stub_interpreter {
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    use font_subset::scan_roots;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Stub that passes the probe, checks the fixed flag profile, captures
    /// the glyph list next to itself, and "subsets" by copying the input.
    const SUBSET_OK: &str = r#"
if [ "$1" = "-c" ]; then exit 0; fi
[ "$1" = "-m" ] || exit 9
[ "$2" = "fontTools.subset" ] || exit 9
input="$3"
out=""
text=""
flags=0
for arg in "$@"; do
    case "$arg" in
        --output-file=*) out="${arg#--output-file=}" ;;
        --text-file=*) text="${arg#--text-file=}" ;;
        --layout-features=|--notdef-glyph|--notdef-outline|--recommended-glyphs|--no-hinting|--retain-gids)
            flags=$((flags + 1)) ;;
    esac
done
[ -n "$out" ] || exit 9
[ -f "$text" ] || exit 9
[ "$flags" -eq 6 ] || exit 9
cp "$text" "$(dirname "$0")/glyphs-captured.txt"
cp "$input" "$out"
exit 0
"#;

    /// Stub that passes the probe but fails every subset run.
    const SUBSET_FAILS: &str = r#"
if [ "$1" = "-c" ]; then exit 0; fi
exit 7
"#;

    /// Stub that reports success without producing any glyphs.
    const SUBSET_WRITES_EMPTY: &str = r#"
if [ "$1" = "-c" ]; then exit 0; fi
out=""
for arg in "$@"; do
    case "$arg" in
        --output-file=*) out="${arg#--output-file=}" ;;
    esac
done
: > "$out"
exit 0
"#;

    /// Write an executable shell script standing in for the interpreter.
    fn write_stub(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("python-stub");
        fs::write(&path, format!("#!/bin/sh{body}")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test_log::test]
    fn successful_subset_commits_the_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("full.ttf");
        fs::write(&input, FONT_BYTES).unwrap();
        let output = dir.path().join("app.ttf");
        let python = write_stub(dir.path(), SUBSET_OK);

        let charset = sample_charset();
        let outcome = Subsetter::builder()
            .python(&python)
            .build()
            .subset(&input, &output, &charset)
            .unwrap();

        assert_eq!(outcome, SubsetOutcome::Subsetted);
        assert_eq!(fs::read(&output).unwrap(), FONT_BYTES);

        // The glyph file the interpreter saw is the sorted charset text.
        let captured = fs::read_to_string(dir.path().join("glyphs-captured.txt")).unwrap();
        assert_eq!(captured, charset.to_text());
    }

    #[test_log::test]
    fn failing_subprocess_falls_back_to_copy() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("full.ttf");
        fs::write(&input, FONT_BYTES).unwrap();
        let output = dir.path().join("app.ttf");
        let python = write_stub(dir.path(), SUBSET_FAILS);

        let outcome = Subsetter::builder()
            .python(&python)
            .build()
            .subset(&input, &output, &sample_charset())
            .unwrap();

        assert_eq!(
            outcome,
            SubsetOutcome::CopiedFull(FallbackReason::SubsetFailed)
        );
        assert_eq!(fs::read(&output).unwrap(), FONT_BYTES);
    }

    #[test_log::test]
    fn empty_subset_output_falls_back_to_copy() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("full.ttf");
        fs::write(&input, FONT_BYTES).unwrap();
        let output = dir.path().join("app.ttf");
        let python = write_stub(dir.path(), SUBSET_WRITES_EMPTY);

        let outcome = Subsetter::builder()
            .python(&python)
            .build()
            .subset(&input, &output, &sample_charset())
            .unwrap();

        assert_eq!(
            outcome,
            SubsetOutcome::CopiedFull(FallbackReason::EmptyOutput)
        );
        assert_eq!(fs::read(&output).unwrap(), FONT_BYTES);
    }

    #[test_log::test]
    fn empty_scan_still_ships_the_baseline() {
        let dir = tempfile::tempdir().unwrap();
        let empty_root = dir.path().join("nothing-here");
        fs::create_dir_all(&empty_root).unwrap();

        let input = dir.path().join("full.ttf");
        fs::write(&input, FONT_BYTES).unwrap();
        let output = dir.path().join("app.ttf");
        let python = write_stub(dir.path(), SUBSET_OK);

        let mut charset = scan_roots(&[&empty_root]);
        assert!(charset.is_empty());
        charset.add_baseline();

        Subsetter::builder()
            .python(&python)
            .build()
            .subset(&input, &output, &charset)
            .unwrap();

        let captured = fs::read_to_string(dir.path().join("glyphs-captured.txt")).unwrap();
        assert_eq!(captured, charset.to_text());
        assert!(captured.contains(' '));
        assert!(captured.contains('~'));
        assert!(captured.contains('，'));
    }

    #[test_log::test]
    fn scan_augment_subset_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(
            src.join("main.rs"),
            r#"const GREETING: &str = "Héllo, 世界！";"#,
        )
        .unwrap();

        let input = dir.path().join("full.ttf");
        fs::write(&input, FONT_BYTES).unwrap();
        let output = dir.path().join("app.ttf");
        let python = write_stub(dir.path(), SUBSET_OK);

        let mut charset = scan_roots(&[&src]);
        charset.add_baseline();
        assert!(charset.contains('世'));

        let outcome = Subsetter::builder()
            .python(&python)
            .build()
            .subset(&input, &output, &charset)
            .unwrap();

        assert_eq!(outcome, SubsetOutcome::Subsetted);
        let captured = fs::read_to_string(dir.path().join("glyphs-captured.txt")).unwrap();
        assert_eq!(captured, charset.to_text());
        // Scanned, baseline, and punctuation characters all made it through.
        assert!(captured.contains('é'));
        assert!(captured.contains('~'));
        assert!(captured.contains('！'));
    }
}
