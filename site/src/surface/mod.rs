//! Display surface capability.
//!
//! Components never probe for `window`/`document` themselves. They are handed
//! a [`DisplaySurface`] at construction: [`HeadlessSurface`] while
//! pre-rendering, [`BrowserSurface`] (feature `csr`) in the browser.

#[cfg(feature = "csr")]
mod browser;

use std::fmt;
use std::rc::Rc;

use crate::error::SurfaceError;

#[cfg(feature = "csr")]
pub use browser::BrowserSurface;

/// Callback invoked with the new vertical scroll offset in pixels.
pub type ScrollCallback = Box<dyn Fn(i32)>;

/// Surface shared between the scroll observer and the scroll lock.
pub type SharedSurface = Rc<dyn DisplaySurface>;

/// What the header needs from the host document.
pub trait DisplaySurface {
    /// Whether a real window/document backs this surface.
    fn is_available(&self) -> bool;

    /// Lock (`true`) or unlock (`false`) page scrolling.
    ///
    /// Implementations must treat this as a boolean: locking twice leaves one
    /// lock, unlocking an unlocked page is a no-op.
    fn set_scroll_lock(&self, locked: bool) -> Result<(), SurfaceError>;

    /// Register `on_scroll` for the global scroll event.
    ///
    /// The listener stays attached until the returned handle is detached or
    /// dropped.
    fn listen_scroll(&self, on_scroll: ScrollCallback) -> Result<ListenerHandle, SurfaceError>;
}

/// Owns a registered listener; detaches it exactly once.
pub struct ListenerHandle {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ListenerHandle {
    /// Wrap the action that removes the listener from the host.
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Remove the listener now.
    pub fn detach(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// Surface for contexts without a display: server-side rendering, tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessSurface;

impl HeadlessSurface {
    /// Headless surface behind the shared handle type.
    pub fn shared() -> SharedSurface {
        Rc::new(Self)
    }
}

impl DisplaySurface for HeadlessSurface {
    fn is_available(&self) -> bool {
        false
    }

    fn set_scroll_lock(&self, _locked: bool) -> Result<(), SurfaceError> {
        Err(SurfaceError::EnvironmentUnavailable)
    }

    fn listen_scroll(&self, _on_scroll: ScrollCallback) -> Result<ListenerHandle, SurfaceError> {
        Err(SurfaceError::EnvironmentUnavailable)
    }
}
