//! External `twirlc` invocation.
//!
//! Uses the `twirlc` CLI via `std::process::Command`: the template language
//! grammar and code emission live entirely in that executable, this module
//! only assembles the invocation and interprets its exit status.

use std::path::PathBuf;
use std::process::Command;

use super::{discover_templates, CompileError, CompileJob, CompileSummary, TemplateCompiler};

/// [`TemplateCompiler`] backed by the external `twirlc` executable.
///
/// Invocation shape: `twirlc --output <dir> --charset <label>
/// [--import <import>]... <template>...`, one invocation per run. When the
/// source directory contains no templates the spawn is skipped entirely and
/// only the output directory is created.
#[derive(Debug, Clone)]
pub struct TwirlcCompiler {
    executable: PathBuf,
}

impl TwirlcCompiler {
    /// Use a specific compiler executable instead of `twirlc` on `PATH`.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Default for TwirlcCompiler {
    fn default() -> Self {
        Self::new("twirlc")
    }
}

impl TemplateCompiler for TwirlcCompiler {
    fn compile(&self, job: &CompileJob<'_>) -> Result<CompileSummary, CompileError> {
        let templates = discover_templates(job.source_directory)?;

        std::fs::create_dir_all(job.output_directory).map_err(|e| CompileError::OutputDir {
            path: job.output_directory.to_path_buf(),
            source: e,
        })?;

        if templates.is_empty() {
            tracing::debug!(
                source = %job.source_directory.display(),
                "No templates found, skipping compiler invocation"
            );
            return Ok(CompileSummary {
                templates_compiled: 0,
            });
        }

        let command = self.executable.display().to_string();

        let mut cmd = Command::new(&self.executable);
        cmd.arg("--output")
            .arg(job.output_directory)
            .arg("--charset")
            .arg(job.charset.name());
        for import in job.additional_imports {
            cmd.arg("--import").arg(import);
        }
        cmd.args(&templates);

        let output = cmd.output().map_err(|e| CompileError::Spawn {
            command: command.clone(),
            source: e,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CompileError::Failed { command, stderr });
        }

        tracing::debug!(count = templates.len(), "twirlc finished");
        Ok(CompileSummary {
            templates_compiled: templates.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn job<'a>(source: &'a Path, output: &'a Path, imports: &'a [String]) -> CompileJob<'a> {
        CompileJob {
            source_directory: source,
            output_directory: output,
            charset: encoding_rs::UTF_8,
            additional_imports: imports,
        }
    }

    #[test]
    fn test_zero_templates_skips_spawn() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("twirl");
        let output = dir.path().join("out");
        fs::create_dir(&source).unwrap();

        // Nonexistent executable — would fail if spawned
        let compiler = TwirlcCompiler::new("/nonexistent/twirlc");
        let summary = compiler.compile(&job(&source, &output, &[])).unwrap();
        assert_eq!(summary.templates_compiled, 0);
        assert!(output.is_dir());
    }

    #[test]
    fn test_missing_source_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out");

        let compiler = TwirlcCompiler::default();
        let result = compiler.compile(&job(Path::new("/nonexistent/twirl"), &output, &[]));
        assert!(matches!(result, Err(CompileError::Enumerate { .. })));
        // Fails during enumeration, before creating the output directory
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_executable_reports_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("twirl");
        let output = dir.path().join("out");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("index.scala.html"), "@(name: String)").unwrap();

        let compiler = TwirlcCompiler::new("/nonexistent/twirlc");
        let err = compiler
            .compile(&job(&source, &output, &[]))
            .unwrap_err();
        assert!(matches!(err, CompileError::Spawn { .. }));
    }

    #[cfg(unix)]
    fn write_script(path: &Path, body: &str) {
        use std::os::unix::fs::PermissionsExt;
        fs::write(path, body).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_invocation_counts_templates() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("twirl");
        let output = dir.path().join("out");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("index.scala.html"), "@(name: String)").unwrap();
        fs::write(source.join("mail.scala.txt"), "@(body: String)").unwrap();

        // Record the full argument list so the invocation shape is checked too
        let script = dir.path().join("fake-twirlc");
        write_script(&script, "#!/bin/sh\necho \"$@\" > \"$(dirname \"$0\")/args\"\n");

        let imports = vec!["models._".to_string()];
        let compiler = TwirlcCompiler::new(&script);
        let summary = compiler.compile(&job(&source, &output, &imports)).unwrap();
        assert_eq!(summary.templates_compiled, 2);

        let args = fs::read_to_string(dir.path().join("args")).unwrap();
        assert!(args.contains("--output"));
        assert!(args.contains("--charset UTF-8"));
        assert!(args.contains("--import models._"));
        assert!(args.contains("index.scala.html"));
        assert!(args.contains("mail.scala.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_captures_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("twirl");
        let output = dir.path().join("out");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("broken.scala.html"), "@(oops").unwrap();

        let script = dir.path().join("fake-twirlc");
        write_script(
            &script,
            "#!/bin/sh\necho 'broken.scala.html:1: unclosed parameter list' >&2\nexit 1\n",
        );

        let err = TwirlcCompiler::new(&script)
            .compile(&job(&source, &output, &[]))
            .unwrap_err();
        match err {
            CompileError::Failed { stderr, .. } => {
                assert!(stderr.contains("unclosed parameter list"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
