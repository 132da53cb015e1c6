use rand_chacha::rand_core::RngCore;

use crate::{Bounds, Notice, SpriteSettings, SpriteState, Viewport};

/// Handle of a pending frame callback, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// The element a sprite is drawn with.
pub trait Surface {
    fn viewport(&self) -> Viewport;
    fn bounds(&self) -> Bounds;
    fn place(&mut self, position: (f64, f64));
    fn remove(&mut self);
}

/// Runs the sprite's tick once before the next repaint. `None` means no frame
/// could be requested and the loop ends there.
pub trait Scheduler {
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Shows a notice without waiting for it to be dismissed.
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// The click or touch that catches a sprite.
pub trait CatchEvent {
    fn cancelable(&self) -> bool;
    fn prevent_default(&self);
}

/// A sprite bouncing inside its surface until it is caught.
///
/// Each [`Bouncer::tick`] moves the sprite once and re-arms exactly one frame.
/// The pending frame is the loop's cancellation token; [`Bouncer::catch`]
/// cancels it and the loop never resumes.
pub struct Bouncer<S, F, N> {
    sprite: SpriteState,
    surface: S,
    scheduler: F,
    notifier: N,
    notice: Notice,
    pending: Option<FrameHandle>,
}

impl<S, F, N> Bouncer<S, F, N>
where
    S: Surface,
    F: Scheduler,
    N: Notifier,
{
    pub fn spawn<R: RngCore>(
        surface: S,
        scheduler: F,
        notifier: N,
        settings: &SpriteSettings,
        notice: Notice,
        rng: &mut R,
    ) -> Bouncer<S, F, N> {
        let sprite = SpriteState::spawn(&surface.viewport(), settings, rng);

        Bouncer::new(sprite, surface, scheduler, notifier, notice)
    }

    pub fn new(
        sprite: SpriteState,
        surface: S,
        scheduler: F,
        notifier: N,
        notice: Notice,
    ) -> Bouncer<S, F, N> {
        Bouncer {
            sprite,
            surface,
            scheduler,
            notifier,
            notice,
            pending: None,
        }
    }

    pub fn tick(&mut self) {
        self.pending = None;

        if !self.sprite.is_alive() {
            return;
        }

        self.sprite.advance(&self.surface.bounds());
        self.surface.place(self.sprite.position);

        self.pending = self.scheduler.request_frame();
    }

    pub fn catch<E: CatchEvent>(&mut self, event: &E) {
        if !self.sprite.is_alive() {
            return;
        }

        if event.cancelable() {
            event.prevent_default();
        }

        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }

        self.sprite.catch();
        self.surface.remove();
        self.notifier.notify(&self.notice);
    }

    pub fn sprite(&self) -> &SpriteState {
        &self.sprite
    }

    #[cfg(test)]
    fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_alive(&self) -> bool {
        self.sprite.is_alive()
    }
}
