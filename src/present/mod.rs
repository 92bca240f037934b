//! Presentation seam.
//!
//! The core never talks to a window or audio device. Each frame it hands
//! the platform a display list built by [`compose`], and it requests sounds
//! through [`AudioSink`]. Backends implement [`Platform`].

pub mod assets;
pub mod command;
pub mod compose;
pub mod headless;
pub mod platform;

pub use assets::{NoiseTexture, ResourceManifest, RESOURCE_DIR};
pub use command::{Color, DrawCommand, TextureId};
pub use compose::compose;
pub use headless::HeadlessPlatform;
pub use platform::{run, AudioEvent, AudioSink, FrameInput, Platform, Sound};
