use std::path::{Path, PathBuf};

use derive_builder::Builder;
use hashbrown::HashSet;

use crate::error::{BundleError, Result};

pub const DEFAULT_OUTPUT: &str = "review-bundle.md";
pub const DEFAULT_MAX_FILE_KIB: u64 = 200;
pub const DEFAULT_FALLBACK_DIR: &str = "src";

const DEFAULT_ROOTS: &[&str] = &[
    "package.json",
    "README.md",
    "src",
    "public",
    "cypress",
    "jest.config.js",
    "jest.config.cjs",
    "jest.config.mjs",
    "jest.config.ts",
    "cypress.config.js",
    "cypress.config.cjs",
    "cypress.config.mjs",
    "cypress.config.ts",
    ".parcelrc",
    "parcel.config.js",
    "parcel.config.cjs",
    "parcel.config.mjs",
    "tsconfig.json",
    "jsconfig.json",
    ".eslintrc",
    ".eslintrc.js",
    ".eslintrc.cjs",
    ".eslintrc.json",
    ".stylelintrc",
    ".stylelintrc.js",
    ".stylelintrc.cjs",
    ".stylelintrc.json",
    ".linthtmlrc",
    ".linthtmlrc.js",
    ".linthtmlrc.cjs",
    ".linthtmlrc.json",
    ".prettierrc",
    ".prettierrc.js",
    ".prettierrc.cjs",
    ".prettierrc.json",
    ".editorconfig",
];

const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "coverage",
    ".parcel-cache",
    ".cache",
    ".git",
    "videos",
    "screenshots",
    "mochawesome-report",
];

const DEFAULT_EXTENSIONS: &[&str] = &[
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "json", "md", "html", "css", "scss", "yml", "yaml",
];

/// Inclusion rules for a bundle run.
///
/// `roots` keeps its configured order; root names double as an exact-name
/// allowlist for files found while walking (dotfiles, extensionless configs).
/// Extensions are stored lowercase and without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct RuleSet {
    #[builder(default, setter(each(name = "root", into)))]
    pub roots: Vec<String>,
    #[builder(default, setter(each(name = "exclude_dir", into)))]
    pub excluded_dirs: HashSet<String>,
    #[builder(default, setter(each(name = "extension", into)))]
    pub extensions: HashSet<String>,
    #[builder(default = "DEFAULT_FALLBACK_DIR.to_string()")]
    pub fallback_dir: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(|s| (*s).to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| (*s).to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
            fallback_dir: DEFAULT_FALLBACK_DIR.to_string(),
        }
    }
}

impl RuleSet {
    #[must_use]
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    #[must_use]
    pub fn is_root_name(&self, name: &str) -> bool {
        self.roots.iter().any(|r| r == name)
    }

    /// Whether a file found while walking a root directory belongs in the bundle.
    #[must_use]
    pub fn allows_file(&self, path: &Path) -> bool {
        let ext_allowed = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.contains(e.to_ascii_lowercase().as_str()));
        ext_allowed
            || path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| self.is_root_name(n))
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "PathBuf::from(\".\")")]
    pub project_dir: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT)")]
    pub output_path: PathBuf,
    #[builder(default = "DEFAULT_MAX_FILE_KIB")]
    pub max_file_kib: u64,
    #[builder(default)]
    pub rules: RuleSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            max_file_kib: DEFAULT_MAX_FILE_KIB,
            rules: RuleSet::default(),
        }
    }
}

impl Config {
    /// Per-file cap in bytes.
    ///
    /// # Errors
    /// Returns [`BundleError::InvalidConfig`] if the KiB value overflows a byte count.
    pub fn max_file_bytes(&self) -> Result<u64> {
        self.max_file_kib.checked_mul(1024).ok_or_else(|| {
            BundleError::InvalidConfig(format!(
                "max file size of {} KiB is too large",
                self.max_file_kib
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_cover_dotfiles_and_extensions() {
        let rules = RuleSet::default();
        assert!(rules.allows_file(Path::new("src/app.ts")));
        assert!(rules.allows_file(Path::new("src/App.JSX")));
        assert!(rules.allows_file(Path::new("src/nested/.eslintrc")));
        assert!(rules.allows_file(Path::new(".editorconfig")));
        assert!(!rules.allows_file(Path::new("src/logo.png")));
        assert!(!rules.allows_file(Path::new("src/Makefile")));
    }

    #[test]
    fn default_rules_exclude_build_output() {
        let rules = RuleSet::default();
        for dir in ["node_modules", "dist", ".git", "mochawesome-report"] {
            assert!(rules.is_excluded_dir(dir), "{dir} should be excluded");
        }
        assert!(!rules.is_excluded_dir("src"));
    }

    #[test]
    fn builder_starts_from_empty_rules() {
        let rules = RuleSetBuilder::default()
            .root("lib")
            .extension("rs")
            .exclude_dir("target")
            .build()
            .unwrap();
        assert_eq!(rules.roots, vec!["lib".to_string()]);
        assert!(rules.allows_file(Path::new("lib/main.rs")));
        assert!(!rules.allows_file(Path::new("lib/index.js")));
        assert!(rules.is_excluded_dir("target"));
        assert_eq!(rules.fallback_dir, DEFAULT_FALLBACK_DIR);
    }

    #[test]
    fn config_builder_defaults() {
        let config = ConfigBuilder::default().build().unwrap();
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.max_file_kib, 200);
        assert_eq!(config.max_file_bytes().unwrap(), 200 * 1024);
        assert_eq!(config.rules, RuleSet::default());
    }

    #[test]
    fn oversized_cap_is_rejected() {
        let config = Config {
            max_file_kib: u64::MAX,
            ..Config::default()
        };
        assert!(matches!(
            config.max_file_bytes(),
            Err(BundleError::InvalidConfig(_))
        ));
    }
}
