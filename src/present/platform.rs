//! The seam between the game core and a windowing/audio backend.
//!
//! A backend implements [`Platform`]; [`run`] drives it with the fixed
//! frame order: poll input, update, compose, present.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::assets::ResourceManifest;
use super::command::DrawCommand;
use super::compose::compose;
use crate::core::{GameConfig, GameError, ResourceLoadError};
use crate::round::GameSession;

/// Sounds the game plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    /// Looping static noise during the intro.
    Static,
    /// Acknowledgement of the start click.
    GameStart,
}

impl Sound {
    /// Asset file name.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Sound::Static => "whitenoise.wav",
            Sound::GameStart => "GameStart.wav",
        }
    }
}

/// A play or stop request, as recorded by test backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioEvent {
    Play(Sound),
    Stop(Sound),
}

/// Audio output.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
    fn stop(&mut self, sound: Sound);
}

/// Input gathered for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub frame_time: f32,
    /// Primary pointer button went down this frame.
    pub pointer_pressed: bool,
}

impl FrameInput {
    /// A frame without a click.
    #[must_use]
    pub fn idle(frame_time: f32) -> Self {
        Self {
            frame_time,
            pointer_pressed: false,
        }
    }

    /// A frame with a click.
    #[must_use]
    pub fn click(frame_time: f32) -> Self {
        Self {
            frame_time,
            pointer_pressed: true,
        }
    }
}

/// Windowing, input, rendering and audio backend.
pub trait Platform: AudioSink {
    /// Open the window described by `config` and load every asset in the
    /// manifest. Called once before the first frame.
    fn load(
        &mut self,
        config: &GameConfig,
        manifest: &ResourceManifest,
    ) -> Result<(), ResourceLoadError>;

    /// The user asked to close the window.
    fn should_close(&self) -> bool;

    /// Input for the frame about to run.
    fn poll_input(&mut self) -> FrameInput;

    /// Draw one frame and wait for the frame-rate cap.
    fn present(&mut self, frame: &[DrawCommand]);

    /// Release assets and devices.
    fn shutdown(&mut self) {}
}

/// Run the game until the platform asks to close.
///
/// Returns the number of frames run. Asset failures abort before the first
/// frame.
#[instrument(skip_all, fields(seed = session.seed()))]
pub fn run<P: Platform>(session: &mut GameSession, platform: &mut P) -> Result<u64, GameError> {
    let manifest = ResourceManifest::for_board(session.board());
    platform.load(session.config(), &manifest)?;

    session.start(&mut *platform);

    let mut frames = 0u64;
    while !platform.should_close() {
        let input = platform.poll_input();
        session.update(input, &mut *platform);
        let frame = compose(session);
        platform.present(&frame);
        frames += 1;
    }

    platform.shutdown();
    info!(frames, state = %session.state(), "game loop finished");
    Ok(frames)
}
