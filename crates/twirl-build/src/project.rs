//! Narrow capability handle onto the enclosing build project.
//!
//! The task needs exactly one capability from the surrounding build system:
//! registering a directory as an additional compile source root. Modeling it
//! as a one-method trait keeps the task testable against a stub without
//! depending on any host build-model type.

use std::path::PathBuf;

/// The single capability the task consumes from the enclosing build project.
pub trait BuildProject {
    /// Register a directory as an additional compile source root.
    fn add_compile_source_root(&mut self, root: PathBuf);
}

/// Vec-backed [`BuildProject`] for hosts that only need to collect roots.
#[derive(Debug, Default)]
pub struct SourceRoots {
    roots: Vec<PathBuf>,
}

impl SourceRoots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered roots, in registration order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl BuildProject for SourceRoots {
    fn add_compile_source_root(&mut self, root: PathBuf) {
        self.roots.push(root);
    }
}
