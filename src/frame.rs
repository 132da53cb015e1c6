use std::{cell::RefCell, rc::Rc};

use shared::{FrameHandle, Scheduler};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::console;

use crate::window;

/// Schedules one shared callback through `requestAnimationFrame`.
///
/// The callback is installed after construction, since it usually captures
/// whatever owns the scheduler. Releasing it drops the closure, after which no
/// more frames can be requested.
#[derive(Clone, Default)]
pub struct AnimationFrames {
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationFrames {
    pub fn set_callback(&self, callback: Closure<dyn FnMut()>) {
        self.callback.replace(Some(callback));
    }

    /// Must not be called from within the callback itself.
    pub fn release(&self) {
        self.callback.borrow_mut().take();
    }
}

impl Scheduler for AnimationFrames {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;

        match window().request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => Some(FrameHandle(handle)),
            Err(err) => {
                console::warn_1(&err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(err) = window().cancel_animation_frame(handle.0) {
            console::warn_1(&err);
        }
    }
}
