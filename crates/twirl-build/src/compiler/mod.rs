//! The template compiler seam.
//!
//! [`TemplateCompiler`] is the collaborator the task delegates to; its only
//! shipped implementation, [`TwirlcCompiler`], drives the external `twirlc`
//! executable. The trait exists so hosts and tests can substitute a stub.

mod twirlc;

use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

pub use twirlc::TwirlcCompiler;

/// File suffixes recognized as Twirl templates.
const TEMPLATE_SUFFIXES: &[&str] = &[".scala.html", ".scala.txt", ".scala.xml", ".scala.js"];

/// Everything a compiler needs for one run, borrowed from the task config.
#[derive(Debug)]
pub struct CompileJob<'a> {
    /// Directory containing the template files.
    pub source_directory: &'a Path,
    /// Destination directory for generated sources (created as needed).
    pub output_directory: &'a Path,
    /// Resolved charset for reading templates and writing output.
    pub charset: &'static Encoding,
    /// Additional imports made available to every template, in order.
    pub additional_imports: &'a [String],
}

/// Outcome of a successful compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileSummary {
    /// Number of template files handed to the compiler.
    pub templates_compiled: usize,
}

/// Translates template files into generated source files on disk.
pub trait TemplateCompiler {
    fn compile(&self, job: &CompileJob<'_>) -> Result<CompileSummary, CompileError>;
}

/// Error surfaced by a template compiler.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("failed to enumerate templates under '{}': {source}", path.display())]
    Enumerate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create output directory '{}': {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to run template compiler '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("template compiler '{command}' failed: {stderr}")]
    Failed { command: String, stderr: String },
}

/// Recursively collect template files under `dir`, sorted for deterministic
/// compiler invocations.
pub(crate) fn discover_templates(dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
    let mut templates = Vec::new();
    collect_templates(dir, &mut templates)?;
    templates.sort();
    Ok(templates)
}

fn collect_templates(dir: &Path, templates: &mut Vec<PathBuf>) -> Result<(), CompileError> {
    let entries = std::fs::read_dir(dir).map_err(|e| CompileError::Enumerate {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| CompileError::Enumerate {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_templates(&path, templates)?;
        } else if is_template(&path) {
            templates.push(path);
        }
    }
    Ok(())
}

fn is_template(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| TEMPLATE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_templates_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zeta.scala.html"), "@(name: String)").unwrap();
        let nested = dir.path().join("views").join("admin");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("alpha.scala.txt"), "@(id: Long)").unwrap();

        let templates = discover_templates(dir.path()).unwrap();
        assert_eq!(templates.len(), 2);
        // Sorted: nested views/admin/alpha before top-level zeta
        assert!(templates[0].ends_with("views/admin/alpha.scala.txt"));
        assert!(templates[1].ends_with("zeta.scala.html"));
    }

    #[test]
    fn test_discover_ignores_non_templates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.scala.html"), "@()").unwrap();
        fs::write(dir.path().join("notes.txt"), "plain file").unwrap();
        fs::write(dir.path().join("main.scala"), "object Main").unwrap();

        let templates = discover_templates(dir.path()).unwrap();
        assert_eq!(templates.len(), 1);
        assert!(templates[0].ends_with("index.scala.html"));
    }

    #[test]
    fn test_discover_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_templates(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_missing_dir() {
        let result = discover_templates(Path::new("/nonexistent/twirl"));
        assert!(matches!(result, Err(CompileError::Enumerate { .. })));
    }
}
