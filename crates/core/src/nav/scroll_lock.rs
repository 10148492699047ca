//! Scroll suppression for the document root while the mobile menu
//! overlay is shown, with guaranteed restoration.

use std::cell::Cell;
use std::rc::Rc;

/// The document's root scroll capability, shared between the controller
/// and the host's scroll handling. Single UI thread, so `Rc<Cell<_>>`.
#[derive(Debug, Clone, Default)]
pub struct DocumentScroll {
    locked: Rc<Cell<bool>>,
}

impl DocumentScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether scrolling is currently suppressed.
    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// Suppress scrolling until the returned guard is dropped. The guard
    /// restores the value that was in place at acquisition, so nesting
    /// and teardown mid-animation both land back where they started.
    pub fn lock(&self) -> ScrollLockGuard {
        let previous = self.locked.replace(true);
        ScrollLockGuard {
            locked: Rc::clone(&self.locked),
            previous,
        }
    }
}

/// RAII guard over [`DocumentScroll`]; releases on every exit path.
#[derive(Debug)]
pub struct ScrollLockGuard {
    locked: Rc<Cell<bool>>,
    previous: bool,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locked.set(self.previous);
    }
}
