//! Progress notifications.
//!
//! Listeners are plain boxed closures registered by the host. Dispatch order
//! is fixed: change listeners first, then completion listeners.

use crate::range::ValueChange;

pub type ProgressCallback = Box<dyn FnMut(&ValueChange)>;

#[derive(Default)]
pub struct ProgressListeners {
    changed: Vec<ProgressCallback>,
    completed: Vec<ProgressCallback>,
}

impl ProgressListeners {
    /// Called whenever the stored value differs from its pre-mutation value
    pub fn connect_changed<F>(&mut self, callback: F)
    where
        F: FnMut(&ValueChange) + 'static,
    {
        self.changed.push(Box::new(callback));
    }

    /// Called whenever a mutation drives the value to the maximum
    pub fn connect_completed<F>(&mut self, callback: F)
    where
        F: FnMut(&ValueChange) + 'static,
    {
        self.completed.push(Box::new(callback));
    }

    pub fn dispatch(&mut self, change: &ValueChange) {
        if change.changed() {
            for callback in &mut self.changed {
                callback(change);
            }
        }
        if change.completed {
            for callback in &mut self.completed {
                callback(change);
            }
        }
    }
}

impl std::fmt::Debug for ProgressListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressListeners")
            .field("changed", &self.changed.len())
            .field("completed", &self.completed.len())
            .finish()
    }
}
