//! Build Options

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Options for the build use case
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Project root, reported in the start event
    pub project_root: PathBuf,
    /// Set by the Ctrl-C handler; checked after every step
    pub interrupted: Arc<AtomicBool>,
}

impl BuildOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = flag;
        self
    }
}
