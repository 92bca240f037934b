//! The game session: all mutable game state and the per-frame update.

use tracing::{debug, info, warn};

use super::cursor::{Highlight, PlayCursor};
use super::intro::{IdleAnimation, IdleStep, StartDelay};
use super::state::GameState;
use crate::board::Board;
use crate::core::{GameConfig, GameError, GameRng};
use crate::levels::{Level, LevelTable};
use crate::present::{AudioSink, FrameInput, Sound};

/// Builder for creating a [`GameSession`].
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    config: GameConfig,
    seed: Option<u64>,
    levels: Option<LevelTable>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a fixed seed instead of the wall clock.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a prepared level table instead of generating one. The table is
    /// checked with [`LevelTable::validate`] on build.
    pub fn levels(mut self, levels: LevelTable) -> Self {
        self.levels = Some(levels);
        self
    }

    /// Build the board and level table and return a session in Idle.
    pub fn build(self) -> Result<GameSession, GameError> {
        self.config.validate()?;
        if let Some(levels) = &self.levels {
            levels.validate()?;
        }

        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_clock(),
        };

        let mut board = Board::build(&self.config.geometry);
        board.assign_images(&mut rng);

        let prepared = self.levels.is_some();
        let levels = self.levels.unwrap_or_else(|| {
            LevelTable::with_difficulties(&self.config.base_difficulties, self.config.level_count)
        });

        let mut session = GameSession {
            config: self.config,
            board,
            levels,
            rng,
            clock_seeded: self.seed.is_none(),
            state: GameState::Idle,
            cursor: PlayCursor::new(),
            idle: IdleAnimation::new(),
            start_delay: StartDelay::default(),
            frame_counter: 0,
        };

        if !prepared {
            session.generate_levels()?;
        }

        info!(
            seed = session.rng.seed(),
            levels = session.levels.len(),
            "game session created"
        );
        Ok(session)
    }
}

/// Everything the game mutates, owned by the frame loop.
///
/// `update` is the only method that changes state during play; rendering
/// borrows the session immutably.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    levels: LevelTable,
    rng: GameRng,
    /// Reseed from the clock before generating sequences.
    clock_seeded: bool,
    state: GameState,
    cursor: PlayCursor,
    idle: IdleAnimation,
    start_delay: StartDelay,
    frame_counter: u32,
}

impl GameSession {
    /// Start building a session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Generate every level's sequence.
    ///
    /// Only allowed while Idle. Clock-seeded sessions reseed first.
    pub fn generate_levels(&mut self) -> Result<(), GameError> {
        if self.state != GameState::Idle {
            return Err(GameError::NotIdle { state: self.state });
        }
        self.roll_sequences();
        Ok(())
    }

    /// Begin the intro: start the static noise loop.
    pub fn start(&mut self, audio: &mut impl AudioSink) {
        if self.state == GameState::Idle && self.idle.is_active() {
            audio.play(Sound::Static);
        }
        info!(state = %self.state, "game started");
    }

    /// Advance the game by one frame.
    pub fn update(&mut self, input: FrameInput, audio: &mut impl AudioSink) {
        match self.state {
            GameState::Idle => self.update_idle(input.frame_time, audio),
            GameState::Title => self.update_title(input, audio),
            GameState::Running => self.update_running(),
            GameState::Animating | GameState::Waiting | GameState::Over => {}
        }
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// Jump to a state directly. Debugging hook; skips all entry logic.
    pub fn force_state(&mut self, state: GameState) {
        warn!(from = %self.state, to = %state, "state forced");
        self.state = state;
    }

    fn update_idle(&mut self, frame_time: f32, audio: &mut impl AudioSink) {
        let step = self.idle.tick(
            frame_time,
            self.config.idle_frame_interval,
            self.config.idle_duration,
        );
        if step == IdleStep::Finished {
            audio.stop(Sound::Static);
            self.transition(GameState::Title);
        }
    }

    fn update_title(&mut self, input: FrameInput, audio: &mut impl AudioSink) {
        if input.pointer_pressed && self.start_delay.begin() {
            audio.play(Sound::GameStart);
            self.new_game();
        }
        if self.start_delay.tick(input.frame_time, self.config.start_delay) {
            self.transition(GameState::Running);
        }
    }

    fn update_running(&mut self) {
        // Tables are validated non-empty on build and the level never advances
        if let Some(level) = self.levels.get(self.cursor.level) {
            self.cursor.tick(level, &self.board, self.config.pace_ticks);
        }
    }

    fn new_game(&mut self) {
        self.cursor.reset();
        if self.config.regenerate_on_new_game {
            self.roll_sequences();
        }
        debug!(regenerated = self.config.regenerate_on_new_game, "new game");
    }

    fn roll_sequences(&mut self) {
        if self.clock_seeded {
            self.rng.reseed_from_clock();
        }
        self.levels.generate_sequences(&mut self.rng);
    }

    fn transition(&mut self, to: GameState) {
        info!(from = %self.state, to = %to, frame = self.frame_counter, "state transition");
        self.state = to;
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// The level being played.
    #[must_use]
    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.cursor.level)
    }

    #[must_use]
    pub fn cursor(&self) -> &PlayCursor {
        &self.cursor
    }

    /// Piece currently shown during playback.
    #[must_use]
    pub fn highlight(&self) -> Option<Highlight> {
        self.cursor.highlight
    }

    #[must_use]
    pub fn idle(&self) -> &IdleAnimation {
        &self.idle
    }

    #[must_use]
    pub fn start_delay(&self) -> &StartDelay {
        &self.start_delay
    }

    /// Updates run so far (wrapping).
    #[must_use]
    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Blink phase shared by the prompt and the highlight.
    #[must_use]
    pub fn blink_on(&self) -> bool {
        (self.frame_counter / self.config.blink_period) % 2 == 1
    }

    /// Seed of the current RNG stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellId;
    use crate::present::AudioEvent;

    #[derive(Default)]
    struct AudioLog(Vec<AudioEvent>);

    impl AudioSink for AudioLog {
        fn play(&mut self, sound: Sound) {
            self.0.push(AudioEvent::Play(sound));
        }

        fn stop(&mut self, sound: Sound) {
            self.0.push(AudioEvent::Stop(sound));
        }
    }

    fn frame(frame_time: f32) -> FrameInput {
        FrameInput {
            frame_time,
            pointer_pressed: false,
        }
    }

    fn click(frame_time: f32) -> FrameInput {
        FrameInput {
            frame_time,
            pointer_pressed: true,
        }
    }

    fn session() -> GameSession {
        SessionBuilder::new().seed(42).build().unwrap()
    }

    #[test]
    fn test_session_creation() {
        let session = session();

        assert_eq!(session.state(), GameState::Idle);
        assert_eq!(session.seed(), 42);
        assert_eq!(session.levels().len(), 10);
        assert_eq!(session.frame_counter(), 0);
        assert!(session.idle().is_active());
        for level in session.levels().iter() {
            assert_eq!(level.sequence().len(), level.difficulty() as usize);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = SessionBuilder::new()
            .config(GameConfig::default().with_levels(vec![], 3))
            .seed(1)
            .build();
        assert!(matches!(result, Err(GameError::InvalidConfig { .. })));
    }

    #[test]
    fn test_start_plays_static() {
        let mut session = session();
        let mut audio = AudioLog::default();

        session.start(&mut audio);

        assert_eq!(audio.0, vec![AudioEvent::Play(Sound::Static)]);
    }

    #[test]
    fn test_idle_to_title() {
        let mut session = session();
        let mut audio = AudioLog::default();

        for _ in 0..6 {
            session.update(frame(0.25), &mut audio);
        }
        assert_eq!(session.state(), GameState::Idle);

        session.update(frame(0.25), &mut audio);
        assert_eq!(session.state(), GameState::Title);
        assert!(!session.idle().is_active());
        assert_eq!(audio.0, vec![AudioEvent::Stop(Sound::Static)]);
    }

    #[test]
    fn test_generate_levels_only_while_idle() {
        let mut session = session();
        assert!(session.generate_levels().is_ok());

        session.force_state(GameState::Title);
        assert_eq!(
            session.generate_levels(),
            Err(GameError::NotIdle {
                state: GameState::Title
            })
        );
    }

    #[test]
    fn test_title_click_starts_game() {
        let mut session = session();
        let mut audio = AudioLog::default();
        session.force_state(GameState::Title);

        session.update(click(0.25), &mut audio);
        assert!(session.start_delay().is_started());
        assert_eq!(audio.0, vec![AudioEvent::Play(Sound::GameStart)]);

        // Press tick counts toward the delay: 12 ticks reach exactly 3.0
        for _ in 0..11 {
            session.update(frame(0.25), &mut audio);
        }
        assert_eq!(session.state(), GameState::Title);

        session.update(frame(0.25), &mut audio);
        assert_eq!(session.state(), GameState::Running);
    }

    #[test]
    fn test_title_ignores_clicks_while_starting() {
        let mut session = session();
        let mut audio = AudioLog::default();
        session.force_state(GameState::Title);

        session.update(click(1.0), &mut audio);
        session.update(click(1.0), &mut audio);

        assert_eq!(audio.0, vec![AudioEvent::Play(Sound::GameStart)]);
        assert_eq!(session.start_delay().elapsed(), 2.0);
    }

    #[test]
    fn test_title_without_click_waits() {
        let mut session = session();
        let mut audio = AudioLog::default();
        session.force_state(GameState::Title);

        for _ in 0..1000 {
            session.update(frame(0.25), &mut audio);
        }

        assert_eq!(session.state(), GameState::Title);
        assert!(audio.0.is_empty());
    }

    #[test]
    fn test_running_has_no_exit() {
        let mut session = session();
        let mut audio = AudioLog::default();
        session.force_state(GameState::Running);

        for _ in 0..10_000 {
            session.update(click(0.016), &mut audio);
        }

        assert_eq!(session.state(), GameState::Running);
        assert!(session.cursor().waiting);
        assert_eq!(session.cursor().pointer, 3);
    }

    #[test]
    fn test_running_plays_first_level() {
        let level = Level::with_sequence(&[CellId(0), CellId(8)]).unwrap();
        let levels = LevelTable::from_levels(vec![level]);
        let mut session = SessionBuilder::new().seed(1).levels(levels).build().unwrap();
        let mut audio = AudioLog::default();
        session.force_state(GameState::Running);

        session.update(frame(0.016), &mut audio);
        assert_eq!(session.highlight().unwrap().cell, CellId(0));

        for _ in 0..60 {
            session.update(frame(0.016), &mut audio);
        }
        assert_eq!(session.highlight().unwrap().cell, CellId(8));
        assert_eq!(session.cursor().pointer, 1);
    }

    #[test]
    fn test_prepared_table_must_be_playable() {
        let empty = SessionBuilder::new()
            .seed(1)
            .levels(LevelTable::from_levels(vec![]))
            .build();
        assert!(matches!(empty, Err(GameError::InvalidConfig { .. })));

        let ungenerated = SessionBuilder::new()
            .seed(1)
            .levels(LevelTable::from_levels(vec![Level::new(3)]))
            .build();
        assert!(matches!(ungenerated, Err(GameError::InvalidConfig { .. })));

        let zero = SessionBuilder::new()
            .seed(1)
            .levels(LevelTable::from_levels(vec![Level::new(0)]))
            .build();
        assert!(matches!(zero, Err(GameError::InvalidConfig { .. })));
    }

    #[test]
    fn test_over_is_inert() {
        let mut session = session();
        let mut audio = AudioLog::default();
        session.force_state(GameState::Over);
        let cursor = session.cursor().clone();

        for _ in 0..100 {
            session.update(click(0.5), &mut audio);
        }

        assert_eq!(session.state(), GameState::Over);
        assert_eq!(session.cursor(), &cursor);
        assert!(audio.0.is_empty());
        assert_eq!(session.frame_counter(), 100);
    }

    #[test]
    fn test_blink_phase() {
        let mut session = session();
        let mut audio = AudioLog::default();
        session.force_state(GameState::Over);

        assert!(!session.blink_on());
        for _ in 0..10 {
            session.update(frame(0.016), &mut audio);
        }
        assert!(session.blink_on());
        for _ in 0..10 {
            session.update(frame(0.016), &mut audio);
        }
        assert!(!session.blink_on());
    }
}
