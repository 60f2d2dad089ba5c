//! Human-readable rendering of a statistics report
//!
//! Used by the CLI for text output and by anything that exports a report
//! to a file.

use std::fmt;

use crate::stats::types::{TextStatisticsReport, TokenCount};

impl fmt::Display for TokenCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenCount::Pending => write!(f, "pending"),
            TokenCount::Counted(n) => write!(f, "{}", n),
        }
    }
}

impl fmt::Display for TextStatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("Characters", self.total_chars),
            ("Characters (no spaces)", self.total_chars_no_spaces),
            ("Words", self.words),
            ("Lines", self.lines),
            ("Paragraphs", self.paragraphs),
            ("Chinese characters", self.chinese_chars),
            ("English letters", self.english_chars),
            ("Digits", self.numbers),
            ("Punctuation", self.punctuation),
            ("Spaces", self.spaces),
        ];

        for (i, (label, value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", label, value)?;
        }

        if let Some(tokens) = self.tokens {
            write!(f, "\nTokens: {}", tokens)?;
        }

        Ok(())
    }
}

/// Render a report as `label: value` lines, one per count
pub fn render_report(report: &TextStatisticsReport) -> String {
    report.to_string()
}
