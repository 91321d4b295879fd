//! Report persistence.
//!
//! The engine itself never touches storage. Callers that want a record of each
//! run hand a [`ReportSink`] to [`process_text_with`](crate::process_text_with);
//! [`FileSink`] writes one timestamped report file per run.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::{Error, Result};

/// Destination for processed text.
pub trait ReportSink {
    /// Persist `text`, produced at `at`.
    fn persist(&self, text: &str, at: NaiveDateTime) -> Result<()>;
}

const RULE_WIDTH: usize = 50;

const TITLE: &str = "تم التشكيل بواسطة برنامج التشكيل العربي المتقدم";
const AUTHOR: &str = "تطوير وتحسين: حُسام فَضْل قَدُّور";

const FEATURES: &[&str] = &[
    "معالجة الأسماء الخمسة",
    "معالجة الحروف الشمسية والقمرية",
    "تطبيق قواعد الإعراب الأساسية والمتقدمة",
    "معالجة التنوين بأنواعه",
    "معالجة الضمائر المتصلة",
    "معالجة الأفعال وأزمنتها",
    "معالجة النواسخ وأدوات الربط",
];

/// Writes `diacritized_text_YYYYMMDD_HHMMSS.txt` into a directory, creating
/// the directory on first use.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the report for a run at `at`.
    pub fn report_path(&self, at: NaiveDateTime) -> PathBuf {
        self.dir.join(format!("diacritized_text_{}.txt", at.format("%Y%m%d_%H%M%S")))
    }
}

impl ReportSink for FileSink {
    fn persist(&self, text: &str, at: NaiveDateTime) -> Result<()> {
        let path = self.report_path(at);
        fs::create_dir_all(&self.dir).map_err(|source| Error::Sink { path: self.dir.clone(), source })?;
        fs::write(&path, render_report(text, at)).map_err(|source| Error::Sink { path: path.clone(), source })?;
        log::info!("report written to {}", path.display());
        Ok(())
    }
}

/// The processed text followed by a decorative footer.
fn render_report(text: &str, at: NaiveDateTime) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!("{text}\n\n{rule}\n");
    out.push_str(&format!("{TITLE}\n{AUTHOR}\n"));
    out.push_str(&format!("تاريخ التشكيل: {}\n", at.format("%Y-%m-%d %H:%M:%S")));
    out.push_str("خصائص التشكيل المطبقة:\n");
    for feature in FEATURES {
        out.push_str(&format!("- {feature}\n"));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap().and_hms_opt(9, 5, 7).unwrap()
    }

    #[test]
    fn report_path_is_timestamped() {
        let sink = FileSink::new("outputs");
        assert_eq!(sink.report_path(at()), Path::new("outputs/diacritized_text_20240311_090507.txt"));
    }

    #[test]
    fn persist_creates_directory_and_footer() {
        let tmp = TempDir::new().unwrap();
        let sink = FileSink::new(tmp.path().join("outputs"));
        sink.persist("مُحَمَّدٍ", at()).unwrap();

        let written = fs::read_to_string(sink.report_path(at())).unwrap();
        assert!(written.starts_with("مُحَمَّدٍ\n"));
        assert!(written.contains(&"=".repeat(RULE_WIDTH)));
        assert!(written.contains("تاريخ التشكيل: 2024-03-11 09:05:07"));
        assert!(written.contains("- معالجة الأسماء الخمسة"));
    }

    #[test]
    fn footer_credits_the_author_after_the_title() {
        let report = render_report("نص", at());
        let lines: Vec<&str> = report.lines().collect();
        let title = lines.iter().position(|l| *l == TITLE).unwrap();
        assert_eq!(lines[title + 1], AUTHOR);
        assert!(lines[title + 2].starts_with("تاريخ التشكيل: "));
    }

    #[test]
    fn persist_reports_io_failure() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let sink = FileSink::new(blocker.join("outputs"));
        let err = sink.persist("نص", at()).unwrap_err();
        assert!(matches!(err, Error::Sink { .. }));
    }

    #[test]
    fn process_text_with_file_sink() {
        let tmp = TempDir::new().unwrap();
        let sink = FileSink::new(tmp.path());
        let ctx = crate::Context { reference_time: at() };
        let out = crate::process_text_with("في بيت", &ctx, &crate::Options::default(), Some(&sink));

        let written = fs::read_to_string(sink.report_path(at())).unwrap();
        assert!(written.starts_with(&out));
    }
}
