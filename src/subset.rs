use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::error::SubsetError;
use crate::types::{Charset, FallbackReason, SubsetOutcome};

/// Interpreter used when none is configured.
const DEFAULT_PYTHON: &str = "python3";

/// Fixed option profile for `fontTools.subset`. The UI needs no advanced
/// OpenType features and no hinting, but must keep the missing-glyph
/// placeholder, its outline, and the original glyph ID numbering.
const SUBSET_FLAGS: &[&str] = &[
    "--layout-features=",
    "--notdef-glyph",
    "--notdef-outline",
    "--recommended-glyphs",
    "--no-hinting",
    "--retain-gids",
];

/// Builder for configuring the subsetter.
///
/// # Examples
///
/// ```no_run
/// use font_subset::Subsetter;
///
/// // With an explicit interpreter
/// let subsetter = Subsetter::builder()
///     .python("/opt/tools/bin/python3")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubsetterBuilder {
    python: Option<PathBuf>,
}

impl SubsetterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Python executable used to run fontTools.
    pub fn python(mut self, python: impl Into<PathBuf>) -> Self {
        self.python = Some(python.into());
        self
    }

    /// Build the subsetter configuration.
    pub fn build(self) -> Subsetter {
        Subsetter {
            python: self.python.unwrap_or_else(|| PathBuf::from(DEFAULT_PYTHON)),
        }
    }
}

/// Produces a reduced font covering a given character set, by invoking the
/// fontTools subsetter through a Python interpreter.
///
/// Subsetting is a soft capability: if the interpreter or fontTools is
/// missing, or the subprocess fails, or it produces an empty file, the input
/// font is copied to the output verbatim and the run still succeeds. A build
/// must never fail because font subsetting didn't work. The only hard error
/// is an invalid input font.
///
/// # Examples
///
/// ```no_run
/// use font_subset::{Charset, Subsetter};
///
/// let mut charset = font_subset::scan_roots(&["src", "web"]);
/// charset.add_baseline();
///
/// let outcome = Subsetter::default().subset("fonts/full.ttf", "dist/app.ttf", &charset)?;
/// if !outcome.is_subset() {
///     eprintln!("shipped the full font");
/// }
/// # Ok::<(), font_subset::SubsetError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Subsetter {
    python: PathBuf,
}

impl Default for Subsetter {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Subsetter {
    /// Create a builder for configuring the subsetter.
    pub fn builder() -> SubsetterBuilder {
        SubsetterBuilder::new()
    }

    /// Write a font at `output` covering `charset`, either a true subset of
    /// `input` or a byte-for-byte copy of it.
    ///
    /// Parent directories of `output` are created as needed. The glyph list
    /// and the intermediate subset live in a temporary directory that is
    /// removed when this returns, whichever path was taken.
    ///
    /// # Errors
    ///
    /// [`SubsetError::MissingInput`] when `input` does not exist, is not a
    /// regular file, or is empty; [`SubsetError::IoError`] for filesystem
    /// failures outside the subprocess (those degrade to a copy instead).
    pub fn subset<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
        charset: &Charset,
    ) -> Result<SubsetOutcome, SubsetError> {
        let input = input.as_ref();
        let output = output.as_ref();

        check_input_font(input)?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let workdir = tempfile::tempdir()?;
        let glyph_file = workdir.path().join("glyphs.txt");
        fs::write(&glyph_file, charset.to_text())?;
        debug!(
            "serialized {} chars to {}",
            charset.len(),
            glyph_file.display()
        );

        if !fonttools_available(&self.python) {
            warn!("fontTools not available; copying full font as-is");
            return copy_full(input, output, FallbackReason::FontToolsUnavailable);
        }

        // Subset into the temp dir first so a failed run never leaves a
        // partial file at the real output path.
        let tmp_out = workdir
            .path()
            .join(output.file_name().unwrap_or_else(|| OsStr::new("subset")));

        let mut output_flag = OsString::from("--output-file=");
        output_flag.push(&tmp_out);
        let mut text_flag = OsString::from("--text-file=");
        text_flag.push(&glyph_file);

        let status = Command::new(&self.python)
            .arg("-m")
            .arg("fontTools.subset")
            .arg(input)
            .arg(output_flag)
            .arg(text_flag)
            .args(SUBSET_FLAGS)
            .status();

        match status {
            Ok(status) if status.success() => {}
            Ok(status) => {
                warn!("fontTools.subset failed ({status}); copying full font as-is");
                return copy_full(input, output, FallbackReason::SubsetFailed);
            }
            Err(e) => {
                warn!("fontTools.subset failed ({e}); copying full font as-is");
                return copy_full(input, output, FallbackReason::SubsetFailed);
            }
        }

        let produced = fs::metadata(&tmp_out)
            .map(|meta| meta.is_file() && meta.len() > 0)
            .unwrap_or(false);
        if !produced {
            warn!("subset output missing; copying full font as-is");
            return copy_full(input, output, FallbackReason::EmptyOutput);
        }

        let bytes = fs::copy(&tmp_out, output)?;
        info!("wrote subset font: {} ({} bytes)", output.display(), bytes);
        Ok(SubsetOutcome::Subsetted)
    }
}

/// Subset `input` into `output` using the default interpreter.
///
/// This is a convenience function equivalent to
/// `Subsetter::default().subset(input, output, charset)`.
pub fn subset_font<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    charset: &Charset,
) -> Result<SubsetOutcome, SubsetError> {
    Subsetter::default().subset(input, output, charset)
}

/// Validate that `input` names a non-empty regular font file.
///
/// [`Subsetter::subset`] runs the same check before doing any work; callers
/// that scan sources first can call this up front to fail fast on a bad
/// input path.
///
/// # Errors
///
/// [`SubsetError::MissingInput`] when `input` does not exist, is not a
/// regular file, or is empty.
pub fn check_input_font<P: AsRef<Path>>(input: P) -> Result<(), SubsetError> {
    let input = input.as_ref();
    let usable = fs::metadata(input)
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false);
    if usable {
        Ok(())
    } else {
        Err(SubsetError::MissingInput(input.to_path_buf()))
    }
}

/// Shared fallback: ship the unmodified input font.
fn copy_full(
    input: &Path,
    output: &Path,
    reason: FallbackReason,
) -> Result<SubsetOutcome, SubsetError> {
    fs::copy(input, output)?;
    Ok(SubsetOutcome::CopiedFull(reason))
}

/// Capability probe: can `python` import the fontTools subset module?
/// Spawns a short-lived interpreter; failure to spawn counts as missing.
fn fonttools_available(python: &Path) -> bool {
    Command::new(python)
        .args(["-c", "import fontTools; import fontTools.subset"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
