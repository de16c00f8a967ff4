//! Document conversion between PDF and DOCX
//!
//! Conversion itself is delegated to an office suite run headless. The
//! [`DocumentConverter`] trait is the seam, so menus can be exercised with a
//! fake converter and a different backend can be dropped in later.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::utils::create_spinner;

/// Direction of a document conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    PdfToDocx,
    DocxToPdf,
}

impl ConversionKind {
    pub fn source_extension(self) -> &'static str {
        match self {
            ConversionKind::PdfToDocx => "pdf",
            ConversionKind::DocxToPdf => "docx",
        }
    }

    pub fn target_extension(self) -> &'static str {
        match self {
            ConversionKind::PdfToDocx => "docx",
            ConversionKind::DocxToPdf => "pdf",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ConversionKind::PdfToDocx => "Convert PDF to DOCX",
            ConversionKind::DocxToPdf => "Convert DOCX to PDF",
        }
    }

    /// Output file name: target extension as prefix, source extension swapped.
    ///
    /// `report.pdf` becomes `docx_report.docx`.
    pub fn output_name(self, name: &str) -> String {
        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name);
        format!(
            "{}_{}.{}",
            self.target_extension(),
            stem,
            self.target_extension()
        )
    }

    /// Arguments selecting import filter and export format
    fn office_args(self) -> &'static [&'static str] {
        match self {
            ConversionKind::PdfToDocx => &[
                "--infilter=writer_pdf_import",
                "--convert-to",
                "docx:MS Word 2007 XML",
            ],
            ConversionKind::DocxToPdf => &["--convert-to", "pdf"],
        }
    }
}

/// Converts one document into another format
pub trait DocumentConverter {
    fn convert(&self, kind: ConversionKind, input: &Path, output: &Path) -> Result<()>;
}

/// Converter backed by a LibreOffice-compatible binary (`soffice`)
#[derive(Debug, Clone)]
pub struct OfficeConverter {
    program: PathBuf,
}

impl OfficeConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl DocumentConverter for OfficeConverter {
    fn convert(&self, kind: ConversionKind, input: &Path, output: &Path) -> Result<()> {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        // soffice always names its output after the input stem, so stage it
        // in a private directory and rename into place afterwards
        let staging = parent.join(format!(".filedeck-convert-{}", std::process::id()));
        std::fs::create_dir_all(&staging)
            .with_context(|| format!("Failed to create directory: {}", staging.display()))?;

        let result = self.run(kind, input, &staging).and_then(|produced| {
            std::fs::rename(&produced, output).with_context(|| {
                format!(
                    "Failed to move {} to {}",
                    produced.display(),
                    output.display()
                )
            })
        });

        let _ = std::fs::remove_dir_all(&staging);
        result
    }
}

impl OfficeConverter {
    fn run(&self, kind: ConversionKind, input: &Path, outdir: &Path) -> Result<PathBuf> {
        debug!(
            "Running {} {:?} --outdir {} {}",
            self.program.display(),
            kind.office_args(),
            outdir.display(),
            input.display()
        );
        let out = Command::new(&self.program)
            .arg("--headless")
            .args(kind.office_args())
            .arg("--outdir")
            .arg(outdir)
            .arg(input)
            .output()
            .with_context(|| format!("Failed to launch converter: {}", self.program.display()))?;

        if !out.status.success() {
            anyhow::bail!(
                "Converter {} failed ({}): {}",
                self.program.display(),
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            );
        }

        let stem = input
            .file_stem()
            .ok_or_else(|| anyhow::anyhow!("Invalid input filename: {}", input.display()))?;
        let mut produced = outdir.join(stem);
        produced.set_extension(kind.target_extension());
        if !produced.is_file() {
            anyhow::bail!(
                "Converter {} produced no output for {}",
                self.program.display(),
                input.display()
            );
        }
        Ok(produced)
    }
}

/// Convert `dir/name` and return the path of the new file
pub fn convert_file(
    converter: &dyn DocumentConverter,
    kind: ConversionKind,
    dir: &Path,
    name: &str,
) -> Result<PathBuf> {
    let input = dir.join(name);
    let output = dir.join(kind.output_name(name));

    let spinner = create_spinner(&format!("Converting {}...", name));
    let result = converter.convert(kind, &input, &output);
    spinner.finish_and_clear();
    result.with_context(|| format!("Failed to convert {}", input.display()))?;

    info!("Converted {} -> {}", input.display(), output.display());
    Ok(output)
}
