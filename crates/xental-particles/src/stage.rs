//! Single-threaded listener registry for pointer, resize and frame events.
//!
//! Registration hands back a [`Subscription`]; dropping it deregisters the
//! callback. Callbacks may drop subscriptions (their own included) while the
//! registry is dispatching.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use xental_core::{Size, Vec2};

use crate::surface::Surface;

pub type PointerListener = dyn FnMut(Vec2);
pub type ResizeListener = dyn FnMut(Size);
pub type FrameListener = dyn FnMut(&mut dyn Surface);

struct Slots<F: ?Sized> {
    next_id: u64,
    entries: Vec<(u64, Option<Box<F>>)>,
}

impl<F: ?Sized> Slots<F> {
    fn remove(&mut self, id: u64) -> Option<Box<F>> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        self.entries.remove(index).1
    }
}

/// A list of callbacks of one kind.
struct Registry<F: ?Sized> {
    slots: Rc<RefCell<Slots<F>>>,
}

impl<F: ?Sized + 'static> Registry<F> {
    fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    fn register(&self, callback: Box<F>) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.entries.push((id, Some(callback)));
            id
        };
        let weak: Weak<RefCell<Slots<F>>> = Rc::downgrade(&self.slots);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(slots) = weak.upgrade() {
                    let removed = slots.borrow_mut().remove(id);
                    // Dropped outside the borrow: the callback may own
                    // subscriptions to this same registry.
                    drop(removed);
                }
            })),
        }
    }

    /// Run `call` on every callback registered when dispatch starts.
    fn dispatch(&self, mut call: impl FnMut(&mut F)) {
        let ids: Vec<u64> = self.slots.borrow().entries.iter().map(|(id, _)| *id).collect();
        for id in ids {
            let taken = {
                let mut slots = self.slots.borrow_mut();
                slots
                    .entries
                    .iter_mut()
                    .find(|(entry, _)| *entry == id)
                    .and_then(|(_, callback)| callback.take())
            };
            let Some(mut callback) = taken else {
                continue;
            };
            call(&mut *callback);
            let orphan = {
                let mut slots = self.slots.borrow_mut();
                match slots.entries.iter_mut().find(|(entry, _)| *entry == id) {
                    Some((_, slot)) => {
                        *slot = Some(callback);
                        None
                    }
                    None => Some(callback),
                }
            };
            drop(orphan);
        }
    }

    fn len(&self) -> usize {
        self.slots.borrow().entries.len()
    }
}

/// Owned registration handle. Dropping it deregisters the callback.
#[must_use = "dropping a Subscription deregisters its callback"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Deregister now.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// The input and frame source a view mounts onto.
pub struct Stage {
    pointer: Registry<PointerListener>,
    resize: Registry<ResizeListener>,
    frame: Registry<FrameListener>,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage {
    pub fn new() -> Self {
        Self {
            pointer: Registry::new(),
            resize: Registry::new(),
            frame: Registry::new(),
        }
    }

    pub fn on_pointer_move(&self, listener: impl FnMut(Vec2) + 'static) -> Subscription {
        self.pointer.register(Box::new(listener))
    }

    pub fn on_resize(&self, listener: impl FnMut(Size) + 'static) -> Subscription {
        self.resize.register(Box::new(listener))
    }

    /// Called once per display frame until the subscription is dropped.
    pub fn on_frame(&self, listener: impl FnMut(&mut dyn Surface) + 'static) -> Subscription {
        self.frame.register(Box::new(listener))
    }

    pub fn pointer_moved(&self, position: Vec2) {
        self.pointer.dispatch(|listener| listener(position));
    }

    pub fn resized(&self, size: Size) {
        self.resize.dispatch(|listener| listener(size));
    }

    /// Run every frame listener against `surface`.
    pub fn frame(&self, surface: &mut dyn Surface) {
        self.frame.dispatch(|listener| listener(&mut *surface));
    }

    /// Registered (pointer, resize, frame) listener counts.
    pub fn listener_counts(&self) -> (usize, usize, usize) {
        (self.pointer.len(), self.resize.len(), self.frame.len())
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("listeners", &self.listener_counts())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Recorder;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_reaches_listeners() {
        let stage = Stage::new();
        let seen = Rc::new(Cell::new(Vec2::ZERO));
        let sink = Rc::clone(&seen);
        let _sub = stage.on_pointer_move(move |p| sink.set(p));
        stage.pointer_moved(Vec2::new(3.0, 4.0));
        assert_eq!(seen.get(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_drop_deregisters() {
        let stage = Stage::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let sub = stage.on_resize(move |_| counter.set(counter.get() + 1));
        stage.resized(Size::new(1.0, 1.0));
        assert_eq!(stage.listener_counts(), (0, 1, 0));
        drop(sub);
        stage.resized(Size::new(2.0, 2.0));
        assert_eq!(hits.get(), 1);
        assert_eq!(stage.listener_counts(), (0, 0, 0));
    }

    #[test]
    fn test_listener_can_cancel_itself() {
        let stage = Stage::new();
        let hits = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let counter = Rc::clone(&hits);
        let own = Rc::clone(&slot);
        let sub = stage.on_frame(move |_| {
            counter.set(counter.get() + 1);
            own.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        let mut surface = Recorder::new(Size::new(10.0, 10.0));
        stage.frame(&mut surface);
        stage.frame(&mut surface);
        assert_eq!(hits.get(), 1);
        assert_eq!(stage.listener_counts(), (0, 0, 0));
    }

    #[test]
    fn test_subscription_outlives_stage() {
        let stage = Stage::new();
        let sub = stage.on_pointer_move(|_| {});
        drop(stage);
        sub.cancel();
    }
}
