//! Image compression by re-encoding

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageFormat};
use log::info;

use crate::utils::{create_progress_bar, finish_with_success};

/// Extensions offered for compression
pub const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif"];

/// Prefix of every compressed output file
pub const COMPRESSED_PREFIX: &str = "compressed_";

/// Size of one compressed file before and after
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionReport {
    pub name: String,
    pub output: PathBuf,
    pub original_bytes: u64,
    pub compressed_bytes: u64,
}

impl CompressionReport {
    /// Percentage saved relative to the original size; negative if the file grew
    pub fn saved_pct(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (self.original_bytes as f64 - self.compressed_bytes as f64) / self.original_bytes as f64
            * 100.0
    }
}

pub fn output_name(name: &str) -> String {
    format!("{}{}", COMPRESSED_PREFIX, name)
}

/// Turn validated quality input into an encoder quality in `1..=100`
pub fn quality_from_input(input: &str) -> Result<u8> {
    let value: f64 = input
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a valid quality", input))?;
    if !value.is_finite() {
        anyhow::bail!("'{}' is not a valid quality", input);
    }
    Ok(value.round().clamp(1.0, 100.0) as u8)
}

/// Re-encode `dir/name` into `dir/compressed_<name>`.
///
/// JPEG honours `quality`; PNG is written with the strongest deflate setting;
/// other formats are re-saved as-is.
pub fn compress_image(dir: &Path, name: &str, quality: u8) -> Result<CompressionReport> {
    let input = dir.join(name);
    let output = dir.join(output_name(name));

    let format = ImageFormat::from_path(&input)
        .with_context(|| format!("Unsupported image format: {}", input.display()))?;
    let img = image::open(&input)
        .with_context(|| format!("Failed to read image: {}", input.display()))?;

    match format {
        ImageFormat::Jpeg => write_jpeg(&img, &output, quality)?,
        ImageFormat::Png => write_png(&img, &output)?,
        other => img
            .save_with_format(&output, other)
            .with_context(|| format!("Failed to write image: {}", output.display()))?,
    }

    let report = CompressionReport {
        name: name.to_string(),
        original_bytes: file_size(&input)?,
        compressed_bytes: file_size(&output)?,
        output,
    };
    info!(
        "Compressed {} at quality {}: {} -> {} bytes",
        name, quality, report.original_bytes, report.compressed_bytes
    );
    Ok(report)
}

/// Compress every file in `names` with the same quality.
///
/// Stops at the first file that fails.
pub fn compress_all(dir: &Path, names: &[String], quality: u8) -> Result<Vec<CompressionReport>> {
    let pb = create_progress_bar(names.len() as u64, "Compressing");
    let mut reports = Vec::with_capacity(names.len());
    for name in names {
        pb.set_message(name.clone());
        let report = compress_image(dir, name, quality);
        pb.inc(1);
        reports.push(report?);
    }
    finish_with_success(&pb, &format!("Compressed {} image(s)", reports.len()));
    Ok(reports)
}

fn write_jpeg(img: &DynamicImage, output: &Path, quality: u8) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))
        .with_context(|| format!("Failed to encode JPEG: {}", output.display()))?;
    writer.flush()?;
    Ok(())
}

fn write_png(img: &DynamicImage, output: &Path) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    img.write_with_encoder(encoder)
        .with_context(|| format!("Failed to encode PNG: {}", output.display()))?;
    writer.flush()?;
    Ok(())
}

fn file_size(path: &Path) -> Result<u64> {
    Ok(std::fs::metadata(path)
        .with_context(|| format!("Failed to read file size: {}", path.display()))?
        .len())
}
