//! Build-phase Twirl template generation.
//!
//! During a build's source-generation phase this crate locates Twirl template
//! files in a configured directory, invokes the external `twirlc` compiler to
//! translate them into generated source files, and registers the output
//! directory as an additional compile root with the enclosing build.
//!
//! The template language itself is out of scope: parsing, code emission, and
//! per-template import handling all live in the external compiler. What this
//! crate owns is the configuration surface, the delegation call, and the one
//! side effect of wiring the output directory back into the build.
//!
//! # Modules
//!
//! - [`config`] — Explicit task configuration with the documented defaults
//! - [`charset`] — Charset label resolution for template sources
//! - [`compiler`] — The `TemplateCompiler` seam and the `twirlc` invoker
//! - [`project`] — Narrow capability handle onto the enclosing build project
//! - [`task`] — The build-phase task tying the above together
//! - [`build_script`] — Host integration for Cargo build scripts

pub mod build_script;
pub mod charset;
pub mod compiler;
pub mod config;
pub mod project;
pub mod task;

pub use charset::CharsetError;
pub use compiler::{CompileError, CompileJob, CompileSummary, TemplateCompiler, TwirlcCompiler};
pub use config::GenerateConfig;
pub use project::{BuildProject, SourceRoots};
pub use task::{GenerateError, GenerateTask};
