//! Project-level defaults for `twirl-ctl`, loaded from `.twirl-ctl.toml`.

mod loader;

pub(crate) use loader::{expand_path, load_cli_config};

use serde::Deserialize;

/// Defaults a project can declare so invocations stay flag-free.
///
/// Every field is optional; command-line flags take precedence, and anything
/// still unset falls back to the documented layout defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct CliConfig {
    /// Directory containing the template files.
    pub source_dir: Option<String>,
    /// Destination directory for generated sources.
    pub output_dir: Option<String>,
    /// Charset label for template sources.
    pub charset: Option<String>,
    /// Additional imports made available to every template.
    #[serde(default)]
    pub additional_imports: Vec<String>,
    /// Path to the twirlc executable.
    pub compiler: Option<String>,
}
