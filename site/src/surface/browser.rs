//! web-sys backed display surface.

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use super::{DisplaySurface, ListenerHandle, ScrollCallback};
use crate::error::SurfaceError;

const SCROLL_EVENT: &str = "scroll";

/// The live browser window and document.
#[derive(Debug, Clone)]
pub struct BrowserSurface {
    window: Window,
    lock_class: String,
}

impl BrowserSurface {
    /// Bind to the current window, or `None` when running without one.
    pub fn detect(lock_class: impl Into<String>) -> Option<Self> {
        let window = web_sys::window()?;
        Some(Self {
            window,
            lock_class: lock_class.into(),
        })
    }

    fn body(&self) -> Result<web_sys::HtmlElement, SurfaceError> {
        self.window
            .document()
            .and_then(|doc| doc.body())
            .ok_or(SurfaceError::EnvironmentUnavailable)
    }
}

fn host_error(value: wasm_bindgen::JsValue) -> SurfaceError {
    SurfaceError::Host(format!("{value:?}"))
}

impl DisplaySurface for BrowserSurface {
    fn is_available(&self) -> bool {
        self.window.document().is_some()
    }

    fn set_scroll_lock(&self, locked: bool) -> Result<(), SurfaceError> {
        let classes = self.body()?.class_list();
        // Same class on both paths; DomTokenList add/remove are idempotent.
        let result = if locked {
            classes.add_1(&self.lock_class)
        } else {
            classes.remove_1(&self.lock_class)
        };
        result.map_err(host_error)
    }

    fn listen_scroll(&self, on_scroll: ScrollCallback) -> Result<ListenerHandle, SurfaceError> {
        let window = self.window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || match window.scroll_y() {
            Ok(y) => on_scroll(y.round() as i32),
            Err(err) => warn!("scrollY unavailable: {err:?}"),
        });

        self.window
            .add_event_listener_with_callback(SCROLL_EVENT, closure.as_ref().unchecked_ref())
            .map_err(host_error)?;
        debug!("scroll listener attached");

        let window = self.window.clone();
        Ok(ListenerHandle::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback(SCROLL_EVENT, closure.as_ref().unchecked_ref())
            {
                warn!("failed to remove scroll listener: {err:?}");
            }
            debug!("scroll listener detached");
            drop(closure);
        }))
    }
}
