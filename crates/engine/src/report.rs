use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

pub const REPORT_TITLE: &str = "Project Review Bundle";

/// One file as it appears in the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the project directory.
    pub path: String,
    /// Size on disk, before truncation.
    pub size: u64,
    pub truncated: bool,
    /// Fence language tag; empty when the extension is unknown.
    pub lang: &'static str,
    pub content: Vec<u8>,
}

impl FileRecord {
    /// Content decoded as UTF-8 with CRLF line endings normalized to LF.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).replace("\r\n", "\n")
    }
}

#[derive(Debug, Clone)]
pub struct BundleReport {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub max_file_kib: u64,
    pub files: Vec<FileRecord>,
}

impl BundleReport {
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn truncated_count(&self) -> usize {
        self.files.iter().filter(|f| f.truncated).count()
    }

    /// Render the whole report as markdown.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.header();
        for file in &self.files {
            out.push_str(&file_section(file, self.max_file_kib));
        }
        out
    }

    fn header(&self) -> String {
        let mut out = heading(REPORT_TITLE, 2);
        out.push_str(&format!(
            "Generated: {}\n",
            self.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ));
        out.push_str(&format!("Tool: {}\n", self.tool_version));
        out.push_str(&format!("Files included: {}\n\n", self.file_count()));

        out.push_str(&heading("Notes", 3));
        out.push_str(
            "- Secrets redacted: PLEASE REMOVE tokens, passwords, keys from config and .env before sharing.\n",
        );
        out.push_str(&format!(
            "- Large files (> {} KB) are truncated with a note.\n\n",
            self.max_file_kib
        ));
        out
    }
}

fn file_section(file: &FileRecord, max_file_kib: u64) -> String {
    let mut out = heading(&file.path, 3);
    if file.truncated {
        out.push_str(&format!(
            "> File truncated for review (first {max_file_kib} KB)\n\n"
        ));
    }
    out.push_str(&format!("```{}\n", file.lang));
    out.push_str(&file.text());
    out.push_str("\n```\n\n");
    out
}

fn heading(title: &str, level: usize) -> String {
    format!("{} {title}\n\n", "#".repeat(level))
}

/// Fence language tag for a path, chosen by its (case-insensitive) extension.
#[must_use]
pub fn fence_lang(path: impl AsRef<Path>) -> &'static str {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "js" | "jsx" | "mjs" | "cjs" => "javascript",
        "ts" | "tsx" => "ts",
        "json" => "json",
        "md" => "md",
        "html" => "html",
        "css" => "css",
        "scss" => "scss",
        "yml" | "yaml" => "yaml",
        _ => "",
    }
}
