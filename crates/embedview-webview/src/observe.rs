//! Push-based observation of engine-owned state.
//!
//! An `Observable` holds a value written by the browser engine (title,
//! progress, URL). Observers register a callback and get back an
//! `Observation`; dropping it unregisters the callback, so a torn-down
//! screen never receives notifications.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    callbacks: Vec<(u64, Callback<T>)>,
}

/// A value cell that notifies registered callbacks on every write.
pub struct Observable<T> {
    value: RefCell<T>,
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                callbacks: Vec::new(),
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Store `value` and notify every observer with it.
    ///
    /// Observers run after the value is stored and without any borrow held,
    /// so they may read the value, write it, or drop their `Observation`.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value.clone();
        let callbacks: Vec<Callback<T>> = self
            .registry
            .borrow()
            .callbacks
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(&value);
        }
    }

    /// Register `callback`. It stays registered until the returned
    /// `Observation` is dropped.
    #[must_use = "dropping the observation unregisters the callback"]
    pub fn observe(&self, callback: impl Fn(&T) + 'static) -> Observation {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.callbacks.push((id, Rc::new(callback)));
            id
        };

        let registry: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Observation {
            unregister: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.borrow_mut().callbacks.retain(|(cb_id, _)| *cb_id != id);
                }
            })),
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.registry.borrow().callbacks.len()
    }
}

impl<T: Clone + Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Registration token returned by `Observable::observe`.
pub struct Observation {
    unregister: Option<Box<dyn FnOnce()>>,
}

impl Observation {
    /// Unregister now instead of on drop.
    pub fn invalidate(mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}

impl std::fmt::Debug for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observation")
            .field("active", &self.unregister.is_some())
            .finish()
    }
}
