//! Host integration for Cargo build scripts.
//!
//! The original build-lifecycle binding becomes an explicit call from a
//! crate's `build.rs`:
//!
//! ```no_run
//! fn main() {
//!     let root = twirl_build::build_script::compile_templates().unwrap();
//!     println!("generated sources in {}", root.display());
//! }
//! ```
//!
//! Defaults derive from `CARGO_MANIFEST_DIR` (templates under
//! `src/main/twirl`) and `OUT_DIR` (output under `generated-sources/twirl`),
//! and a `cargo:rerun-if-changed` directive is emitted for the source
//! directory so edits retrigger generation.

use std::path::PathBuf;

use crate::compiler::TwirlcCompiler;
use crate::config::GenerateConfig;
use crate::project::SourceRoots;
use crate::task::{GenerateError, GenerateTask};

/// Error running template generation from a build script.
#[derive(Debug, thiserror::Error)]
pub enum BuildScriptError {
    #[error("environment variable '{name}' is not set (not running inside a build script?)")]
    MissingEnv {
        name: &'static str,
        source: std::env::VarError,
    },

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Compile templates using the default project layout.
///
/// Returns the registered generated-source root for the caller to wire into
/// `include!` paths or module declarations.
pub fn compile_templates() -> Result<PathBuf, BuildScriptError> {
    let manifest_dir = env_path("CARGO_MANIFEST_DIR")?;
    let out_dir = env_path("OUT_DIR")?;
    compile_templates_with(GenerateConfig::for_project(&manifest_dir, &out_dir))
}

/// Compile templates with an explicit configuration.
pub fn compile_templates_with(config: GenerateConfig) -> Result<PathBuf, BuildScriptError> {
    // Emit rerun-if-changed for the template directory
    println!("cargo:rerun-if-changed={}", config.source_directory.display());

    let compiler = TwirlcCompiler::default();
    let mut roots = SourceRoots::new();
    GenerateTask::execute(&config, &compiler, Some(&mut roots))?;

    let root = roots
        .roots()
        .last()
        .cloned()
        .unwrap_or(config.output_directory);
    Ok(root)
}

fn env_path(name: &'static str) -> Result<PathBuf, BuildScriptError> {
    std::env::var(name)
        .map(PathBuf::from)
        .map_err(|e| BuildScriptError::MissingEnv { name, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_templates_with_empty_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("src/main/twirl");
        let output = dir.path().join("out/generated-sources/twirl");
        std::fs::create_dir_all(&source).unwrap();

        let root = compile_templates_with(GenerateConfig::new(&source, &output)).unwrap();
        assert_eq!(root, output);
        assert!(output.is_dir());
    }

    #[test]
    fn test_compile_templates_with_missing_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig::new(dir.path().join("no-such-dir"), dir.path().join("out"));
        let result = compile_templates_with(config);
        assert!(matches!(result, Err(BuildScriptError::Generate(_))));
    }
}
