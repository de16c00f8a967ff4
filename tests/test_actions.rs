//! Tests for the file actions: listing, removal, compression and conversion

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::Result;
use filedeck::actions::compress::{output_name, quality_from_input};
use filedeck::actions::{
    compress_all, compress_image, convert_file, files_with_extensions, list_files,
    remove_matching, select_matching, ConversionKind, DocumentConverter, NameFilter,
    IMAGE_EXTENSIONS,
};

#[path = "common/mod.rs"]
mod common;

/// Converter that records its calls and writes a stub output file
#[derive(Default)]
struct FakeConverter {
    calls: RefCell<Vec<(ConversionKind, PathBuf, PathBuf)>>,
}

impl DocumentConverter for FakeConverter {
    fn convert(&self, kind: ConversionKind, input: &Path, output: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((kind, input.to_path_buf(), output.to_path_buf()));
        std::fs::write(output, b"converted")?;
        Ok(())
    }
}

struct FailingConverter;

impl DocumentConverter for FailingConverter {
    fn convert(&self, _kind: ConversionKind, _input: &Path, _output: &Path) -> Result<()> {
        anyhow::bail!("office suite crashed")
    }
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_list_files_skips_directories() {
    let temp = common::dir_with_files(&["b.txt", "a.txt", ".hidden"]);
    std::fs::create_dir(temp.path().join("sub")).unwrap();

    let files = list_files(temp.path()).unwrap();

    assert_eq!(files, vec![".hidden", "a.txt", "b.txt"]);
}

#[test]
fn test_files_with_extensions_is_case_insensitive() {
    let temp = common::dir_with_files(&["a.pdf", "B.PDF", "c.docx", "pdf", "d.pdf.txt"]);

    let pdfs = files_with_extensions(temp.path(), &["pdf"]).unwrap();
    assert_eq!(pdfs, vec!["B.PDF", "a.pdf"]);

    let images = common::dir_with_files(&["x.jpg", "y.JPEG", "z.png", "w.gif", "v.bmp"]);
    let found = files_with_extensions(images.path(), IMAGE_EXTENSIONS).unwrap();
    assert_eq!(found, vec!["w.gif", "x.jpg", "y.JPEG", "z.png"]);
}

#[test]
fn test_listing_missing_directory_fails() {
    let temp = tempfile::TempDir::new().unwrap();
    assert!(list_files(&temp.path().join("missing")).is_err());
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn test_remove_containing_substring() {
    let temp = common::dir_with_files(&["a_draft.txt", "final.txt", "draft2.md"]);
    let files = list_files(temp.path()).unwrap();

    let removed =
        remove_matching(temp.path(), &files, &NameFilter::Contains("draft".into())).unwrap();

    assert_eq!(removed, vec!["a_draft.txt", "draft2.md"]);
    assert_eq!(common::file_names(temp.path()), vec!["final.txt"]);
}

#[test]
fn test_remove_by_extension_uses_the_entered_extension() {
    let temp = common::dir_with_files(&["a.log", "b.LOG", "c.txt", "log"]);
    let files = list_files(temp.path()).unwrap();

    let removed =
        remove_matching(temp.path(), &files, &NameFilter::Extension(".log".into())).unwrap();

    assert_eq!(removed, vec!["a.log", "b.LOG"]);
    assert_eq!(common::file_names(temp.path()), vec!["c.txt", "log"]);
}

#[test]
fn test_prefix_and_suffix_filters() {
    let files: Vec<String> = ["tmp_a", "a_tmp", "keep"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(
        select_matching(&files, &NameFilter::StartsWith("tmp".into())),
        vec!["tmp_a"]
    );
    assert_eq!(
        select_matching(&files, &NameFilter::EndsWith("tmp".into())),
        vec!["a_tmp"]
    );
}

#[test]
fn test_remove_with_no_match_removes_nothing() {
    let temp = common::dir_with_files(&["a.txt"]);
    let files = list_files(temp.path()).unwrap();

    let removed =
        remove_matching(temp.path(), &files, &NameFilter::Contains("zzz".into())).unwrap();

    assert!(removed.is_empty());
    assert_eq!(common::file_names(temp.path()), vec!["a.txt"]);
}

#[test]
fn test_remove_stops_on_vanished_file() {
    let temp = common::dir_with_files(&["x1", "x2"]);
    let files = list_files(temp.path()).unwrap();
    std::fs::remove_file(temp.path().join("x1")).unwrap();

    let err = remove_matching(temp.path(), &files, &NameFilter::StartsWith("x".into()))
        .unwrap_err();

    assert!(format!("{:#}", err).contains("x1"));
    assert!(
        temp.path().join("x2").exists(),
        "batch stops at the failure"
    );
}

#[test]
fn test_filter_display() {
    assert_eq!(
        NameFilter::Contains("draft".into()).to_string(),
        "containing 'draft'"
    );
    assert_eq!(
        NameFilter::Extension(".log".into()).to_string(),
        "with extension 'log'"
    );
}

// =============================================================================
// Compression
// =============================================================================

#[test]
fn test_compress_jpeg_writes_prefixed_copy() {
    let temp = tempfile::TempDir::new().unwrap();
    common::write_image(temp.path(), "photo.jpg");

    let report = compress_image(temp.path(), "photo.jpg", 20).unwrap();

    assert_eq!(report.output, temp.path().join("compressed_photo.jpg"));
    assert!(report.output.is_file());
    assert!(temp.path().join("photo.jpg").is_file(), "original is kept");
    assert!(report.compressed_bytes > 0);
    image::open(&report.output).expect("output must be a readable image");
}

#[test]
fn test_compress_png_keeps_format() {
    let temp = tempfile::TempDir::new().unwrap();
    common::write_image(temp.path(), "shot.png");

    let report = compress_image(temp.path(), "shot.png", 80).unwrap();

    let format = image::ImageFormat::from_path(&report.output).unwrap();
    assert_eq!(format, image::ImageFormat::Png);
    assert_eq!(report.name, "shot.png");
}

#[test]
fn test_compress_all_reports_every_file() {
    let temp = tempfile::TempDir::new().unwrap();
    common::write_image(temp.path(), "a.png");
    common::write_image(temp.path(), "b.jpg");
    let names = vec!["a.png".to_string(), "b.jpg".to_string()];

    let reports = compress_all(temp.path(), &names, 50).unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(
        common::file_names(temp.path()),
        vec!["a.png", "b.jpg", "compressed_a.png", "compressed_b.jpg"]
    );
}

#[test]
fn test_compress_rejects_non_image() {
    let temp = common::dir_with_files(&["fake.png"]);
    assert!(compress_image(temp.path(), "fake.png", 50).is_err());
}

#[test]
fn test_quality_input_is_rounded_and_clamped() {
    assert_eq!(quality_from_input("75").unwrap(), 75);
    assert_eq!(quality_from_input(" 49.6 ").unwrap(), 50);
    assert_eq!(quality_from_input("0").unwrap(), 1);
    assert_eq!(quality_from_input("100").unwrap(), 100);
    assert!(quality_from_input("abc").is_err());
}

#[test]
fn test_output_name_prefix() {
    assert_eq!(output_name("cat.gif"), "compressed_cat.gif");
}

// =============================================================================
// Conversion
// =============================================================================

#[test]
fn test_convert_file_names_output_after_target() {
    let temp = common::dir_with_files(&["report.pdf"]);
    let converter = FakeConverter::default();

    let output =
        convert_file(&converter, ConversionKind::PdfToDocx, temp.path(), "report.pdf").unwrap();

    assert_eq!(output, temp.path().join("docx_report.docx"));
    assert!(output.is_file());

    let calls = converter.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, ConversionKind::PdfToDocx);
    assert_eq!(calls[0].1, temp.path().join("report.pdf"));
}

#[test]
fn test_convert_failure_carries_input_context() {
    let temp = common::dir_with_files(&["notes.docx"]);

    let err = convert_file(&FailingConverter, ConversionKind::DocxToPdf, temp.path(), "notes.docx")
        .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("notes.docx"), "got: {}", message);
    assert!(message.contains("office suite crashed"), "got: {}", message);
}
