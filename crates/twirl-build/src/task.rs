//! The build-phase task: resolve the charset, delegate compilation, register
//! the generated-source root.
//!
//! One linear call with two terminal outcomes. No retries, no partial-result
//! handling, no cleanup of partially written output — recovery belongs to the
//! external compiler and the host build tool.

use std::path::{Path, PathBuf};

use crate::charset::{self, CharsetError};
use crate::compiler::{CompileError, CompileJob, CompileSummary, TemplateCompiler};
use crate::config::GenerateConfig;
use crate::project::BuildProject;

/// Task-level error: either the configuration was invalid or the compiler
/// collaborator failed. Both abort the build phase unrecovered.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Charset(#[from] CharsetError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// The build-phase task. Stateless; all inputs arrive through
/// [`GenerateConfig`] and the collaborator arguments.
#[derive(Debug)]
pub struct GenerateTask;

impl GenerateTask {
    /// Run one template generation pass.
    ///
    /// Resolves the configured charset (failing before any file I/O if the
    /// label is unknown), delegates to `compiler`, and on success appends the
    /// absolute output-directory path to `project`'s compile-source roots if
    /// a project context was supplied.
    pub fn execute(
        config: &GenerateConfig,
        compiler: &dyn TemplateCompiler,
        project: Option<&mut dyn BuildProject>,
    ) -> Result<CompileSummary, GenerateError> {
        let charset = charset::resolve(&config.source_charset)?;

        tracing::info!(
            source = %config.source_directory.display(),
            "Compiling all twirl templates"
        );

        let job = CompileJob {
            source_directory: &config.source_directory,
            output_directory: &config.output_directory,
            charset,
            additional_imports: &config.additional_imports,
        };
        let summary = compiler.compile(&job)?;

        if let Some(project) = project {
            project.add_compile_source_root(absolute(&config.output_directory));
        }

        Ok(summary)
    }
}

/// Lexically absolute form of `path`, computed without touching the
/// filesystem (the output directory may not exist when the compiler was
/// stubbed out).
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
