//! Scripted backend with no window or audio device.
//!
//! Runs a fixed number of frames at a fixed frame time, clicks on chosen
//! frames, and records what the game drew and played.

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::assets::ResourceManifest;
use super::command::DrawCommand;
use super::platform::{AudioEvent, AudioSink, FrameInput, Platform, Sound};
use crate::core::{GameConfig, ResourceLoadError};

/// Headless [`Platform`].
#[derive(Clone, Debug)]
pub struct HeadlessPlatform {
    frame_time: f32,
    max_frames: u64,
    presses: BTreeSet<u64>,
    asset_root: Option<PathBuf>,
    frame: u64,
    last_frame: Vec<DrawCommand>,
    audio_log: Vec<AudioEvent>,
    config: Option<GameConfig>,
    shut_down: bool,
}

impl HeadlessPlatform {
    /// Run `max_frames` frames of `frame_time` seconds each.
    #[must_use]
    pub fn new(frame_time: f32, max_frames: u64) -> Self {
        Self {
            frame_time,
            max_frames,
            presses: BTreeSet::new(),
            asset_root: None,
            frame: 0,
            last_frame: Vec::new(),
            audio_log: Vec::new(),
            config: None,
            shut_down: false,
        }
    }

    /// Click on the given 0-based frame.
    #[must_use]
    pub fn with_press_at(mut self, frame: u64) -> Self {
        self.presses.insert(frame);
        self
    }

    /// Verify assets under this directory on load.
    #[must_use]
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(root.into());
        self
    }

    /// Frames presented so far.
    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frame
    }

    /// Display list of the most recent frame.
    #[must_use]
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Every play/stop request in order.
    #[must_use]
    pub fn audio_log(&self) -> &[AudioEvent] {
        &self.audio_log
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.config.is_some()
    }

    /// Window settings received on load.
    #[must_use]
    pub fn config(&self) -> Option<&GameConfig> {
        self.config.as_ref()
    }

    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}

impl AudioSink for HeadlessPlatform {
    fn play(&mut self, sound: Sound) {
        self.audio_log.push(AudioEvent::Play(sound));
    }

    fn stop(&mut self, sound: Sound) {
        self.audio_log.push(AudioEvent::Stop(sound));
    }
}

impl Platform for HeadlessPlatform {
    fn load(
        &mut self,
        config: &GameConfig,
        manifest: &ResourceManifest,
    ) -> Result<(), ResourceLoadError> {
        if let Some(root) = &self.asset_root {
            manifest.verify(root)?;
        }
        self.config = Some(config.clone());
        Ok(())
    }

    fn should_close(&self) -> bool {
        self.frame >= self.max_frames
    }

    fn poll_input(&mut self) -> FrameInput {
        FrameInput {
            frame_time: self.frame_time,
            pointer_pressed: self.presses.contains(&self.frame),
        }
    }

    fn present(&mut self, frame: &[DrawCommand]) {
        self.last_frame = frame.to_vec();
        self.frame += 1;
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }
}
