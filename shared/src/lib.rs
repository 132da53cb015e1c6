mod bouncer;
pub use bouncer::*;

mod config;
pub use config::*;

mod notice;
pub use notice::*;

mod sprite;
pub use sprite::*;

mod typewriter;
pub use typewriter::*;
