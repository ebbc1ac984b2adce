//! Mounting a particle field onto a stage.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use rand::Rng;
use tracing::{debug, info};
use xental_core::Size;

use crate::field::{FieldOptions, ParticleField};
use crate::stage::{Stage, Subscription};

/// A particle field wired to a stage's pointer, resize and frame events.
///
/// Dropping the animator deregisters all three listeners, which also halts
/// the frame loop.
#[derive(Debug)]
pub struct Animator {
    field: Rc<RefCell<ParticleField>>,
    _pointer: Subscription,
    _resize: Subscription,
    _frame: Subscription,
}

impl Animator {
    /// Mount onto `stage` with a surface of the given size.
    ///
    /// Returns `None` when the surface has no area.
    pub fn mount<R: Rng + ?Sized>(
        stage: &Stage,
        size: Size,
        options: FieldOptions,
        rng: &mut R,
    ) -> Option<Self> {
        if size.is_empty() {
            debug!("drawing surface unavailable, particle field not mounted");
            return None;
        }

        let field = Rc::new(RefCell::new(ParticleField::new(size, options, rng)));

        let pointer = {
            let field = Rc::clone(&field);
            stage.on_pointer_move(move |position| field.borrow_mut().set_pointer(position))
        };
        let resize = {
            let field = Rc::clone(&field);
            stage.on_resize(move |size| field.borrow_mut().resize(size))
        };
        let frame = {
            let field = Rc::clone(&field);
            stage.on_frame(move |surface| field.borrow_mut().step(surface))
        };

        info!(particles = options.particle_count, "particle field mounted");
        Some(Self {
            field,
            _pointer: pointer,
            _resize: resize,
            _frame: frame,
        })
    }

    /// Read access to the underlying field.
    pub fn field(&self) -> Ref<'_, ParticleField> {
        self.field.borrow()
    }

    /// Tear down explicitly.
    pub fn unmount(self) {
        debug!("particle field unmounted");
    }
}
