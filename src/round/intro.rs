//! Timers for the intro screens: the idle static animation and the delay
//! between the start click and playback.

use serde::{Deserialize, Serialize};

/// Outcome of an idle animation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdleStep {
    /// Still animating.
    Continue,
    /// The animation just went inactive.
    Finished,
}

/// Two-frame static animation shown before the title screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdleAnimation {
    frame_elapsed: f32,
    idle_elapsed: f32,
    frame: u8,
    active: bool,
}

impl Default for IdleAnimation {
    fn default() -> Self {
        Self {
            frame_elapsed: 0.0,
            idle_elapsed: 0.0,
            frame: 0,
            active: true,
        }
    }
}

impl IdleAnimation {
    /// Create an active animation on frame 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one frame of time.
    ///
    /// Idle time only grows when the frame sub-timer exceeds
    /// `frame_interval`, so the animation ends on the first such boundary
    /// past `duration`, not at `duration` itself.
    pub fn tick(&mut self, frame_time: f32, frame_interval: f32, duration: f32) -> IdleStep {
        if !self.active {
            return IdleStep::Continue;
        }

        self.frame_elapsed += frame_time;
        if self.frame_elapsed <= frame_interval {
            return IdleStep::Continue;
        }

        self.idle_elapsed += self.frame_elapsed;
        if self.idle_elapsed > duration {
            self.idle_elapsed = 0.0;
            self.active = false;
            return IdleStep::Finished;
        }

        self.frame_elapsed = 0.0;
        self.frame = if self.frame > 0 { 0 } else { 1 };
        IdleStep::Continue
    }

    /// Whether the static is still showing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Static frame to show (0 or 1).
    #[must_use]
    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Idle time accumulated so far (seconds).
    #[must_use]
    pub fn idle_elapsed(&self) -> f32 {
        self.idle_elapsed
    }
}

/// Delay between the start click and playback.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StartDelay {
    elapsed: f32,
    started: bool,
}

impl StartDelay {
    /// Start counting. Returns false if already counting.
    pub fn begin(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.elapsed = 0.0;
        true
    }

    /// Accumulate one frame. Returns true once `delay` is exceeded, after
    /// which the timer is idle again.
    pub fn tick(&mut self, frame_time: f32, delay: f32) -> bool {
        if !self.started {
            return false;
        }

        self.elapsed += frame_time;
        if self.elapsed > delay {
            *self = Self::default();
            return true;
        }
        false
    }

    /// Whether the start click has been registered.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Time since the start click (seconds).
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
