//! Summaries printed after bulk actions

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::actions::CompressionReport;
use crate::utils::format_bytes;

/// Summary of one bulk compression run
#[derive(Debug, Default)]
pub struct CompressionSummary {
    pub quality: u8,
    pub reports: Vec<CompressionReport>,
}

impl CompressionSummary {
    pub fn new(quality: u8, reports: Vec<CompressionReport>) -> Self {
        Self { quality, reports }
    }

    pub fn original_bytes(&self) -> u64 {
        self.reports.iter().map(|r| r.original_bytes).sum()
    }

    pub fn compressed_bytes(&self) -> u64 {
        self.reports.iter().map(|r| r.compressed_bytes).sum()
    }

    /// Render the summary as lines ready for the console
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            format!(
                "{} {}",
                style("📋").cyan(),
                style(format!("COMPRESSION SUMMARY (quality {})", self.quality))
                    .white()
                    .bold()
            ),
        ];

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Before").add_attribute(Attribute::Bold),
            Cell::new("After").add_attribute(Attribute::Bold),
            Cell::new("Saved").add_attribute(Attribute::Bold),
        ]);

        for report in &self.reports {
            let saved = report.saved_pct();
            table.add_row(vec![
                Cell::new(&report.name),
                Cell::new(format_bytes(report.original_bytes)),
                Cell::new(format_bytes(report.compressed_bytes)),
                Cell::new(format!("{:.1}%", saved)).fg(if saved > 0.0 {
                    Color::Green
                } else {
                    Color::Red
                }),
            ]);
        }

        table.add_row(vec![
            Cell::new("Total").add_attribute(Attribute::Bold),
            Cell::new(format_bytes(self.original_bytes())),
            Cell::new(format_bytes(self.compressed_bytes())),
            Cell::new(format_bytes(
                self.original_bytes().saturating_sub(self.compressed_bytes()),
            ))
            .add_attribute(Attribute::Bold),
        ]);

        lines.extend(table.to_string().lines().map(|line| format!("  {}", line)));
        lines
    }
}
