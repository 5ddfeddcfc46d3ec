//! Scroll observer: tracks the viewport's vertical offset.
//!
//! The global scroll listener exists only while at least one [`Subscription`]
//! is alive. Dropping the last subscription detaches it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::surface::{ListenerHandle, SharedSurface};

type Subscriber = Rc<dyn Fn(i32)>;

/// Reports the latest vertical scroll offset to subscribers.
#[derive(Clone)]
pub struct ScrollObserver {
    inner: Rc<ObserverInner>,
}

struct ObserverInner {
    surface: SharedSurface,
    offset: Cell<i32>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, Subscriber)>>,
    listener: RefCell<Option<ListenerHandle>>,
}

impl ScrollObserver {
    /// Observer over `surface`; reports 0 until the first scroll event.
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            inner: Rc::new(ObserverInner {
                surface,
                offset: Cell::new(0),
                next_id: Cell::new(0),
                subscribers: RefCell::new(Vec::new()),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Latest known offset in pixels.
    pub fn current_scroll_y(&self) -> i32 {
        self.inner.offset.get()
    }

    /// Register `on_scroll`; it runs after the offset is updated.
    pub fn subscribe(&self, on_scroll: impl Fn(i32) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let first = {
            let mut subscribers = self.inner.subscribers.borrow_mut();
            subscribers.push((id, Rc::new(on_scroll)));
            subscribers.len() == 1
        };
        if first {
            ObserverInner::attach(&self.inner);
        }

        Subscription {
            id,
            observer: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Whether the global scroll listener is currently registered.
    pub fn is_listening(&self) -> bool {
        self.inner.listener.borrow().is_some()
    }
}

impl ObserverInner {
    fn attach(this: &Rc<Self>) {
        let weak = Rc::downgrade(this);
        let result = this.surface.listen_scroll(Box::new(move |y| {
            if let Some(inner) = weak.upgrade() {
                inner.publish(y);
            }
        }));
        match result {
            Ok(handle) => *this.listener.borrow_mut() = Some(handle),
            Err(err) => debug!("scroll observer inactive: {err}"),
        }
    }

    fn publish(&self, y: i32) {
        trace!(scroll_y = y, "scroll");
        self.offset.set(y);
        // Snapshot so callbacks may subscribe/unsubscribe re-entrantly.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for subscriber in subscribers {
            subscriber(y);
        }
    }

    fn unsubscribe(&self, id: u64) {
        let now_empty = {
            let mut subscribers = self.subscribers.borrow_mut();
            subscribers.retain(|(sid, _)| *sid != id);
            subscribers.is_empty()
        };
        if now_empty {
            let handle = self.listener.borrow_mut().take();
            if let Some(handle) = handle {
                handle.detach();
            }
        }
    }
}

/// Live registration with a [`ScrollObserver`]; unsubscribes on drop.
pub struct Subscription {
    id: u64,
    observer: Weak<ObserverInner>,
}

impl Subscription {
    /// Stop receiving updates now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.observer.upgrade() {
            inner.unsubscribe(self.id);
        }
    }
}
