//! The `generate` command: resolve configuration and run the build-phase task.
//!
//! Precedence for every setting: command-line flag, then `.twirl-ctl.toml`,
//! then the documented layout default relative to the working directory.

use std::path::PathBuf;

use twirl_build::{GenerateConfig, GenerateError, GenerateTask, SourceRoots, TwirlcCompiler};

use crate::cli_config::{expand_path, CliConfig};
use crate::{output, GenerateArgs};

/// Build directory used for layout defaults when no output dir is configured.
const DEFAULT_BUILD_DIR: &str = "target";

pub(crate) fn handle_generate_command(
    args: GenerateArgs,
    cli_config: &CliConfig,
) -> Result<(), GenerateError> {
    let config = resolve_config(&args, cli_config);
    let compiler = resolve_compiler(&args, cli_config);

    let mut roots = SourceRoots::new();
    let summary = GenerateTask::execute(&config, &compiler, Some(&mut roots))?;

    if summary.templates_compiled == 0 {
        output::warning(format!(
            "No templates found in {}",
            config.source_directory.display()
        ));
        output::hint("Templates are files named *.scala.html, *.scala.txt, *.scala.xml, or *.scala.js");
    } else {
        output::success(format!(
            "Compiled {} template(s)",
            summary.templates_compiled
        ));
    }
    for root in roots.roots() {
        output::label("Source root", root.display());
    }

    Ok(())
}

fn resolve_config(args: &GenerateArgs, cli_config: &CliConfig) -> GenerateConfig {
    let defaults = GenerateConfig::for_project(
        &PathBuf::from("."),
        &PathBuf::from(DEFAULT_BUILD_DIR),
    );

    let source_directory = args
        .source_dir
        .clone()
        .or_else(|| cli_config.source_dir.as_deref().map(expand_path))
        .unwrap_or(defaults.source_directory);
    let output_directory = args
        .output_dir
        .clone()
        .or_else(|| cli_config.output_dir.as_deref().map(expand_path))
        .unwrap_or(defaults.output_directory);
    let charset = args
        .charset
        .clone()
        .or_else(|| cli_config.charset.clone())
        .unwrap_or(defaults.source_charset);
    let imports = if args.imports.is_empty() {
        cli_config.additional_imports.clone()
    } else {
        args.imports.clone()
    };

    GenerateConfig::new(source_directory, output_directory)
        .with_source_charset(charset)
        .with_additional_imports(imports)
}

fn resolve_compiler(args: &GenerateArgs, cli_config: &CliConfig) -> TwirlcCompiler {
    match (&args.compiler, &cli_config.compiler) {
        (Some(path), _) => TwirlcCompiler::new(path),
        (None, Some(path)) => TwirlcCompiler::new(expand_path(path)),
        (None, None) => TwirlcCompiler::default(),
    }
}
