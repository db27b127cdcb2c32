use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use nord_dither::FrameDitherer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{BatchError, ConvertError};
use crate::models::AppConfig;
use crate::rendering::{decode_photo, encode_canvas};

/// Extensions (lowercase) picked up from the input directory.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Outcome of one batch run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchReport {
    /// Candidate photos in the input directory
    pub found: usize,
    /// Output files written
    pub converted: Vec<PathBuf>,
    /// Inputs whose output already existed
    pub skipped: Vec<PathBuf>,
    /// Inputs that failed, with the error message
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Converts every photo in the input directory that has no output yet.
pub struct BatchRunner {
    config: AppConfig,
    ditherer: FrameDitherer,
}

impl BatchRunner {
    pub fn new(config: AppConfig) -> Self {
        let ditherer = FrameDitherer::new(config.display()).noise_amount(config.noise_amount);
        Self { config, ditherer }
    }

    /// Run the batch with a generator seeded from the configuration, or
    /// from OS entropy when no seed is set.
    pub fn run(&self) -> Result<BatchReport, BatchError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Run the batch drawing noise from `rng`. Photos consume it in
    /// processing order.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<BatchReport, BatchError> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| BatchError::OutputDir {
            path: output_dir.clone(),
            source,
        })?;

        // Outputs written during this run do not cause later inputs to be skipped
        let existing = existing_outputs(output_dir)?;

        let inputs = list_photos(&self.config.input_dir)?;
        tracing::info!(
            count = inputs.len(),
            dir = %self.config.input_dir.display(),
            "Found images"
        );

        let mut report = BatchReport {
            found: inputs.len(),
            ..Default::default()
        };

        for input in inputs {
            self.process(input, &existing, &mut report, rng);
        }

        tracing::info!(
            converted = report.converted.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Done"
        );
        Ok(report)
    }

    /// Convert, skip or fail one input, recording the outcome in `report`.
    fn process<R: Rng + ?Sized>(
        &self,
        input: PathBuf,
        existing: &HashSet<OsString>,
        report: &mut BatchReport,
        rng: &mut R,
    ) {
        let output = match output_path_for(
            &input,
            &self.config.output_dir,
            &self.config.output_prefix,
        ) {
            Some(output) => output,
            None => {
                let e = ConvertError::NoOutputName {
                    path: input.clone(),
                };
                tracing::warn!(file = %input.display(), %e, "Conversion failed");
                report.failed.push((input, e.to_string()));
                return;
            }
        };

        if output.file_name().is_some_and(|name| existing.contains(name)) {
            tracing::info!(file = %input.display(), "Skipping, output exists");
            report.skipped.push(input);
            return;
        }

        tracing::info!(file = %input.display(), "Processing");
        match convert_file(&self.ditherer, &input, &output, self.config.optimize_png, rng) {
            Ok(bytes) => {
                tracing::info!(output = %output.display(), bytes, "Wrote frame");
                report.converted.push(output);
            }
            Err(e) => {
                tracing::error!(file = %input.display(), %e, "Conversion failed");
                report.failed.push((input, e.to_string()));
            }
        }
    }
}

/// Names of the entries already present in `dir`.
fn existing_outputs(dir: &Path) -> Result<HashSet<OsString>, BatchError> {
    let entries = fs::read_dir(dir).map_err(|source| BatchError::ListOutputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = HashSet::new();
    for entry in entries {
        match entry {
            Ok(entry) => {
                names.insert(entry.file_name());
            }
            Err(e) => {
                tracing::warn!(%e, dir = %dir.display(), "Skipping unreadable directory entry");
            }
        }
    }
    Ok(names)
}

/// Regular files in `dir` with a photo extension, sorted by file name.
pub fn list_photos(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let entries = fs::read_dir(dir).map_err(|source| BatchError::InputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut photos = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(%e, dir = %dir.display(), "Skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && has_photo_extension(&path) {
            photos.push(path);
        }
    }
    photos.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(photos)
}

/// Case-insensitive check against [`PHOTO_EXTENSIONS`].
pub fn has_photo_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            PHOTO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// `output_dir/<prefix><stem>.png` for `input`.
pub fn output_path_for(input: &Path, output_dir: &Path, prefix: &str) -> Option<PathBuf> {
    let stem = input.file_stem()?;
    let mut name = OsString::from(prefix);
    name.push(stem);
    name.push(".png");
    Some(output_dir.join(name))
}

/// Read, decode, dither, encode and write one photo. Returns the number
/// of bytes written.
///
/// The PNG is fully encoded before `output` is created, so a failed
/// conversion never leaves a file behind.
pub fn convert_file<R: Rng + ?Sized>(
    ditherer: &FrameDitherer,
    input: &Path,
    output: &Path,
    optimize: bool,
    rng: &mut R,
) -> Result<usize, ConvertError> {
    let bytes = fs::read(input).map_err(|source| ConvertError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let photo = decode_photo(&bytes)?;
    tracing::debug!(
        file = %input.display(),
        width = photo.width(),
        height = photo.height(),
        "Decoded"
    );

    let canvas = ditherer.dither(&photo, rng)?;
    let png = encode_canvas(&canvas, ditherer.palette(), optimize)?;

    fs::write(output, &png).map_err(|source| ConvertError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(png.len())
}
