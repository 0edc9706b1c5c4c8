//! Task configuration for a single template generation run.
//!
//! The host integration layer (a build script, `twirl-ctl`, or other tooling)
//! constructs a [`GenerateConfig`] explicitly and passes it by value into the
//! task. There is no ambient or reflective configuration mechanism.

use std::path::{Path, PathBuf};

/// Template directory under the project base directory.
pub const DEFAULT_SOURCE_SUBDIR: &str = "src/main/twirl";

/// Generated-source directory under the project build directory.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "generated-sources/twirl";

/// Charset used for template sources when none is configured.
pub const DEFAULT_SOURCE_CHARSET: &str = "UTF-8";

/// Configuration for one template generation run.
///
/// Constructed fresh per invocation and discarded afterwards; the task never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Directory containing the template files.
    pub source_directory: PathBuf,
    /// Destination directory for generated source files.
    pub output_directory: PathBuf,
    /// Charset label used when reading templates and writing generated sources.
    pub source_charset: String,
    /// Additional imports made available to every template, in order.
    pub additional_imports: Vec<String>,
}

impl GenerateConfig {
    /// Build a config with explicit source and output directories and the
    /// remaining fields at their defaults.
    pub fn new(source_directory: impl Into<PathBuf>, output_directory: impl Into<PathBuf>) -> Self {
        Self {
            source_directory: source_directory.into(),
            output_directory: output_directory.into(),
            source_charset: DEFAULT_SOURCE_CHARSET.to_string(),
            additional_imports: Vec::new(),
        }
    }

    /// Build a config from a project's base and build directories using the
    /// documented default layout: templates under `<base>/src/main/twirl`,
    /// generated sources under `<build>/generated-sources/twirl`.
    pub fn for_project(base_dir: &Path, build_dir: &Path) -> Self {
        Self::new(
            base_dir.join(DEFAULT_SOURCE_SUBDIR),
            build_dir.join(DEFAULT_OUTPUT_SUBDIR),
        )
    }

    /// Override the source charset label.
    pub fn with_source_charset(mut self, charset: impl Into<String>) -> Self {
        self.source_charset = charset.into();
        self
    }

    /// Replace the list of additional template imports.
    pub fn with_additional_imports(mut self, imports: Vec<String>) -> Self {
        self.additional_imports = imports;
        self
    }
}
