//! Navigation controller: the mobile menu state machine.
//!
//! ```text
//! Closed --toggle--> Open      acquire scroll lock
//! Open   --toggle--> Closed    release scroll lock
//! Open   --close---> Closed    release scroll lock
//! Closed --close---> Closed    no-op
//! ```
//!
//! The document scroll lock is owned by the controller's [`ScrollLock`] and is
//! mutated in the same call as the state transition, so with an available
//! surface `lock_held() == is_open()` after every operation.

use tracing::{debug, trace, warn};

use crate::surface::SharedSurface;

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Menu hidden, page scrolls normally.
    #[default]
    Closed,
    /// Menu and backdrop visible, page scroll locked.
    Open,
}

impl MenuState {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// `true` for [`MenuState::Open`].
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Handle over the document-level scroll lock.
///
/// `acquire`/`release` form an idempotent pair; the lock is released on drop.
pub struct ScrollLock {
    surface: SharedSurface,
    held: bool,
}

impl ScrollLock {
    /// Unlocked handle over `surface`.
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            surface,
            held: false,
        }
    }

    /// Lock page scrolling unless already locked.
    pub fn acquire(&mut self) {
        if self.held {
            return;
        }
        if !self.surface.is_available() {
            debug!("scroll lock skipped: no display surface");
            return;
        }
        match self.surface.set_scroll_lock(true) {
            Ok(()) => self.held = true,
            Err(err) => warn!("scroll lock not applied: {err}"),
        }
    }

    /// Unlock page scrolling if this handle holds the lock.
    pub fn release(&mut self) {
        if !self.held {
            return;
        }
        // Dropped either way: a failed unlock must not pin the handle.
        self.held = false;
        if let Err(err) = self.surface.set_scroll_lock(false) {
            warn!("scroll unlock failed: {err}");
        }
    }

    /// Whether the lock is currently applied.
    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.release();
    }
}

/// Menu state plus the scroll lock that mirrors it.
pub struct NavController {
    state: MenuState,
    lock: ScrollLock,
}

impl NavController {
    /// Closed controller over `surface`.
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            state: MenuState::Closed,
            lock: ScrollLock::new(surface),
        }
    }

    /// Flip the menu from whatever state it is in right now.
    pub fn toggle(&mut self) -> MenuState {
        let next = self.state.toggled();
        self.transition(next);
        next
    }

    /// Force the menu closed. Safe to call repeatedly.
    pub fn close(&mut self) -> MenuState {
        self.transition(MenuState::Closed);
        MenuState::Closed
    }

    /// Current state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// `true` while the menu is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Whether the document scroll lock is applied.
    pub fn lock_held(&self) -> bool {
        self.lock.is_held()
    }

    fn transition(&mut self, next: MenuState) {
        if next != self.state {
            trace!(from = ?self.state, to = ?next, "menu transition");
        }
        self.state = next;
        match next {
            MenuState::Open => self.lock.acquire(),
            MenuState::Closed => self.lock.release(),
        }
    }
}

impl std::fmt::Debug for NavController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavController")
            .field("state", &self.state)
            .field("lock_held", &self.lock.is_held())
            .finish()
    }
}
