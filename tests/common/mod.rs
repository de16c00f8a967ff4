//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// Create a temp directory holding empty files with the given names
pub fn dir_with_files(names: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in names {
        fs::write(temp.path().join(name), b"fixture").unwrap();
    }
    temp
}

/// Write a noisy RGB image so compression has something to work with
pub fn write_image(dir: &Path, name: &str) {
    let img = RgbImage::from_fn(64, 48, |x, y| {
        Rgb([
            (x * 4) as u8,
            (y * 5) as u8,
            ((x * 7 + y * 13) % 256) as u8,
        ])
    });
    img.save(dir.join(name)).unwrap();
}

/// Sorted file names currently in `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
