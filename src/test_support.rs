use crate::error::{QaError, Result};
use crate::llm::CompletionService;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Switches the process working directory for the lifetime of the guard.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; serialize tests that change it
        // even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// In-memory completion service that records every call.
pub(crate) struct FakeCompletion {
    reply: std::result::Result<String, String>,
    calls: RefCell<Vec<(String, f32)>>,
}

impl FakeCompletion {
    pub(crate) fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, f32)> {
        self.calls.borrow().clone()
    }
}

impl CompletionService for FakeCompletion {
    fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        self.calls
            .borrow_mut()
            .push((prompt.to_string(), temperature));
        self.reply
            .clone()
            .map_err(QaError::ConfigurationError)
    }
}
