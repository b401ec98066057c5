//! A token-based mechanism for stopping a scan early.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable, thread-safe cancellation flag.
///
/// All clones share one flag: cancelling any of them cancels all of them.
///
/// # Examples
///
/// ```
/// use pattern_break::CancellationToken;
/// use std::thread;
///
/// let token = CancellationToken::new();
/// let watcher = token.clone();
///
/// let handle = thread::spawn(move || {
///     let mut polls = 0u64;
///     while !watcher.is_cancelled() {
///         polls += 1;
///         thread::yield_now();
///     }
///     polls
/// });
///
/// token.cancel();
/// handle.join().unwrap();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token in the non-cancelled state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Cancels this token and every clone of it.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
