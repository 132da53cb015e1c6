use rand_chacha::rand_core::RngCore;
use serde::{Deserialize, Serialize};

/// Window measurements taken when a sprite is spawned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Client width of the document element.
    pub width: f64,
    /// Inner height of the window, i.e. the fold.
    pub height: f64,
    /// Full scrollable height of the document.
    pub document_height: f64,
}

/// The box a sprite bounces inside, re-read every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SpriteSettings {
    pub size: (f64, f64),
    /// Share of the viewport width the sprite may spawn in.
    pub spawn_width_ratio: f64,
    /// Each velocity component is drawn from `[-max_speed, max_speed]`.
    pub max_speed: f64,
}

impl Default for SpriteSettings {
    fn default() -> Self {
        SpriteSettings {
            size: (30.0, 30.0),
            spawn_width_ratio: 0.8,
            max_speed: 2.0,
        }
    }
}

impl SpriteSettings {
    /// Rejects settings that would spawn outside `[0, width]` or faster than
    /// two pixels per frame.
    pub fn validate(&self) -> Result<(), String> {
        let (width, height) = self.size;

        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(format!("sprite size {width}x{height} must be positive"));
        }

        if !(0.0..=1.0).contains(&self.spawn_width_ratio) {
            return Err(format!(
                "spawnWidthRatio {} must be within [0, 1]",
                self.spawn_width_ratio
            ));
        }

        if !(0.0..=2.0).contains(&self.max_speed) {
            return Err(format!("maxSpeed {} must be within [0, 2]", self.max_speed));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteStatus {
    Running,
    Caught,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteState {
    pub position: (f64, f64),
    pub velocity: (f64, f64),
    pub size: (f64, f64),
    status: SpriteStatus,
}

/// Uniform sample in `[0, 1)` built from the top 53 bits of the generator.
pub fn unit<R: RngCore>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}

impl SpriteState {
    pub fn new(position: (f64, f64), velocity: (f64, f64), size: (f64, f64)) -> SpriteState {
        SpriteState {
            position,
            velocity,
            size,
            status: SpriteStatus::Running,
        }
    }

    /// Places a sprite somewhere below the fold so it scrolls into view, moving
    /// in a random direction.
    pub fn spawn<R: RngCore>(
        viewport: &Viewport,
        settings: &SpriteSettings,
        rng: &mut R,
    ) -> SpriteState {
        let x = unit(rng) * viewport.width * settings.spawn_width_ratio;
        let below_fold = (viewport.document_height - viewport.height).max(0.0);
        let y = viewport.height + unit(rng) * below_fold;

        let speed = settings.max_speed;
        let dx = (unit(rng) - 0.5) * 2.0 * speed;
        // Only capped from above, the lower end is bounded by the draw itself.
        let dy = speed.min((unit(rng) - 0.5) * 2.0 * speed);

        SpriteState::new((x, y), (dx, dy), settings.size)
    }

    /// Moves the sprite by one frame and reverses every axis that touched the
    /// bounds after moving. Positions are not clamped.
    pub fn advance(&mut self, bounds: &Bounds) {
        if !self.is_alive() {
            return;
        }

        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;

        if self.position.0 + self.size.0 >= bounds.width || self.position.0 <= 0.0 {
            self.velocity.0 = -self.velocity.0;
        }

        if self.position.1 + self.size.1 >= bounds.height || self.position.1 <= 0.0 {
            self.velocity.1 = -self.velocity.1;
        }
    }

    pub fn catch(&mut self) {
        self.status = SpriteStatus::Caught;
    }

    #[cfg(test)]
    fn status(&self) -> SpriteStatus {
        self.status
    }

    pub fn is_alive(&self) -> bool {
        self.status == SpriteStatus::Running
    }
}
