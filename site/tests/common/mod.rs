//! In-memory display surface that records every host interaction.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use community_site::error::SurfaceError;
use community_site::surface::{DisplaySurface, ListenerHandle, ScrollCallback, SharedSurface};

type Listeners = Rc<RefCell<Vec<(u64, Rc<dyn Fn(i32)>)>>>;

pub struct FakeSurface {
    available: bool,
    lock_class: Option<String>,
    locked: Cell<bool>,
    lock_calls: RefCell<Vec<bool>>,
    listeners: Listeners,
    next_id: Cell<u64>,
    attached: Cell<usize>,
    detached: Rc<Cell<usize>>,
}

impl FakeSurface {
    pub fn available() -> Rc<Self> {
        Rc::new(Self::new(true))
    }

    pub fn unavailable() -> Rc<Self> {
        Rc::new(Self::new(false))
    }

    /// Behaves like a class list: the lock fails unless `class` is a
    /// single token.
    pub fn with_lock_class(class: &str) -> Rc<Self> {
        Rc::new(Self {
            lock_class: Some(class.to_string()),
            ..Self::new(true)
        })
    }

    fn new(available: bool) -> Self {
        Self {
            available,
            lock_class: None,
            locked: Cell::new(false),
            lock_calls: RefCell::new(Vec::new()),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
            attached: Cell::new(0),
            detached: Rc::new(Cell::new(0)),
        }
    }

    /// Deliver a scroll event to every registered listener.
    pub fn emit_scroll(&self, y: i32) {
        let listeners: Vec<Rc<dyn Fn(i32)>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for listener in listeners {
            listener(y);
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub fn lock_calls(&self) -> Vec<bool> {
        self.lock_calls.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn attached(&self) -> usize {
        self.attached.get()
    }

    pub fn detached(&self) -> usize {
        self.detached.get()
    }
}

impl DisplaySurface for FakeSurface {
    fn is_available(&self) -> bool {
        self.available
    }

    fn set_scroll_lock(&self, locked: bool) -> Result<(), SurfaceError> {
        if !self.available {
            return Err(SurfaceError::EnvironmentUnavailable);
        }
        if let Some(class) = &self.lock_class {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(SurfaceError::Host(format!("invalid token {class:?}")));
            }
        }
        self.lock_calls.borrow_mut().push(locked);
        self.locked.set(locked);
        Ok(())
    }

    fn listen_scroll(&self, on_scroll: ScrollCallback) -> Result<ListenerHandle, SurfaceError> {
        if !self.available {
            return Err(SurfaceError::EnvironmentUnavailable);
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(on_scroll)));
        self.attached.set(self.attached.get() + 1);

        let listeners = self.listeners.clone();
        let detached = self.detached.clone();
        Ok(ListenerHandle::new(move || {
            listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            detached.set(detached.get() + 1);
        }))
    }
}

pub fn shared(surface: &Rc<FakeSurface>) -> SharedSurface {
    surface.clone()
}
