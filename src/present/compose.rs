//! Builds each frame's display list from the session, read-only.

use super::command::{Color, DrawCommand, TextureId};
use crate::round::{GameSession, GameState};

/// Where the static noise and the backdrop are drawn.
const PLAYFIELD_ORIGIN: (f32, f32) = (50.0, 50.0);
/// Where the "click to start" prompt is drawn.
const PROMPT_ORIGIN: (f32, f32) = (220.0, 240.0);
/// Where the FPS counter is drawn.
const FPS_ORIGIN: (f32, f32) = (95.0, 70.0);

/// Compose the display list for the session's current state.
#[must_use]
pub fn compose(session: &GameSession) -> Vec<DrawCommand> {
    let mut frame = vec![
        DrawCommand::Clear(Color::BLACK),
        DrawCommand::texture(TextureId::Overlay, 0.0, 0.0),
    ];

    match session.state() {
        GameState::Idle => {
            if session.idle().is_active() {
                let (x, y) = PLAYFIELD_ORIGIN;
                frame.push(DrawCommand::texture(TextureId::Static(session.idle().frame()), x, y));
            }
        }
        GameState::Title => compose_title(session, &mut frame),
        GameState::Running => compose_running(session, &mut frame),
        GameState::Animating | GameState::Waiting | GameState::Over => {}
    }

    frame
}

fn compose_title(session: &GameSession, frame: &mut Vec<DrawCommand>) {
    let (x, y) = PLAYFIELD_ORIGIN;
    frame.push(DrawCommand::texture(TextureId::Background, x, y));

    // Steady until clicked, then blinks through the start delay.
    if !session.start_delay().is_started() || session.blink_on() {
        let (x, y) = PROMPT_ORIGIN;
        frame.push(DrawCommand::Texture {
            texture: TextureId::ClickToPlay,
            x,
            y,
            tint: Color::BLACK,
        });
    }
}

fn compose_running(session: &GameSession, frame: &mut Vec<DrawCommand>) {
    let (x, y) = PLAYFIELD_ORIGIN;
    frame.push(DrawCommand::texture(TextureId::Background, x, y));
    let (x, y) = FPS_ORIGIN;
    frame.push(DrawCommand::Fps { x, y });

    for cell in session.board().cells() {
        frame.push(DrawCommand::OutlineRect {
            rect: cell.hitbox(),
            color: Color::RED,
        });
    }
    for cell in session.board().cells() {
        if let Some(image) = cell.image {
            let rect = cell.hitbox();
            frame.push(DrawCommand::texture(TextureId::Piece(image), rect.x, rect.y));
        }
    }

    if let Some(highlight) = session.highlight() {
        if session.blink_on() {
            frame.push(DrawCommand::FillRect {
                rect: highlight.rect,
                color: Color::WHITE,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellId;
    use crate::levels::{Level, LevelTable};
    use crate::present::{AudioSink, FrameInput, Sound};
    use crate::round::SessionBuilder;

    struct Mute;

    impl AudioSink for Mute {
        fn play(&mut self, _: Sound) {}
        fn stop(&mut self, _: Sound) {}
    }

    fn textures(frame: &[DrawCommand]) -> Vec<TextureId> {
        frame.iter().filter_map(DrawCommand::texture_id).collect()
    }

    fn session() -> GameSession {
        SessionBuilder::new().seed(3).build().unwrap()
    }

    #[test]
    fn test_idle_frame() {
        let session = session();
        let frame = compose(&session);

        assert_eq!(frame[0], DrawCommand::Clear(Color::BLACK));
        assert_eq!(textures(&frame), vec![TextureId::Overlay, TextureId::Static(0)]);
    }

    #[test]
    fn test_title_prompt_steady_before_click() {
        let mut session = session();
        session.force_state(GameState::Title);

        for _ in 0..30 {
            session.update(FrameInput::idle(0.016), &mut Mute);
            let frame = compose(&session);
            assert!(textures(&frame).contains(&TextureId::ClickToPlay));
        }
    }

    #[test]
    fn test_title_prompt_blinks_after_click() {
        let mut session = session();
        session.force_state(GameState::Title);
        session.update(FrameInput::click(0.016), &mut Mute);

        let mut shown = Vec::new();
        for _ in 0..40 {
            shown.push(textures(&compose(&session)).contains(&TextureId::ClickToPlay));
            session.update(FrameInput::idle(0.016), &mut Mute);
        }

        assert!(shown.contains(&true));
        assert!(shown.contains(&false));
    }

    #[test]
    fn test_running_frame() {
        let mut session = session();
        session.force_state(GameState::Running);

        let frame = compose(&session);

        let outlines = frame
            .iter()
            .filter(|c| matches!(c, DrawCommand::OutlineRect { .. }))
            .count();
        let pieces = textures(&frame)
            .into_iter()
            .filter(|t| matches!(t, TextureId::Piece(_)))
            .count();
        assert_eq!(outlines, 9);
        assert_eq!(pieces, 9);
        assert!(frame.contains(&DrawCommand::Fps { x: 95.0, y: 70.0 }));
    }

    #[test]
    fn test_running_highlight_follows_blink() {
        let level = Level::with_sequence(&[CellId(4); 3]).unwrap();
        let levels = LevelTable::from_levels(vec![level]);
        let mut session = SessionBuilder::new().seed(3).levels(levels).build().unwrap();
        session.force_state(GameState::Running);
        let target = session.board().cell(CellId(4)).unwrap().hitbox();

        for tick in 1..=40u32 {
            session.update(FrameInput::idle(0.016), &mut Mute);
            let fills: Vec<_> = compose(&session)
                .into_iter()
                .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
                .collect();

            if (tick / 10) % 2 == 1 {
                assert_eq!(
                    fills,
                    vec![DrawCommand::FillRect {
                        rect: target,
                        color: Color::WHITE
                    }]
                );
            } else {
                assert!(fills.is_empty());
            }
        }
    }

    #[test]
    fn test_highlight_drawn_after_pointer_advance() {
        let level = Level::with_sequence(&[CellId(2), CellId(6)]).unwrap();
        let levels = LevelTable::from_levels(vec![level]);
        let mut session = SessionBuilder::new().seed(3).levels(levels).build().unwrap();
        session.force_state(GameState::Running);
        let second = session.board().cell(CellId(6)).unwrap().hitbox();

        // Tick 60 advances the pointer; tick 71 shows the second entry in a lit phase
        for _ in 0..71 {
            session.update(FrameInput::idle(0.016), &mut Mute);
        }

        assert_eq!(session.cursor().pointer, 1);
        assert!(session.blink_on());
        assert!(compose(&session).contains(&DrawCommand::FillRect {
            rect: second,
            color: Color::WHITE
        }));
    }

    #[test]
    fn test_no_highlight_once_waiting() {
        let level = Level::with_sequence(&[CellId(1)]).unwrap();
        let levels = LevelTable::from_levels(vec![level]);
        let mut session = SessionBuilder::new().seed(3).levels(levels).build().unwrap();
        session.force_state(GameState::Running);

        for _ in 0..70 {
            session.update(FrameInput::idle(0.016), &mut Mute);
        }

        assert!(session.cursor().waiting);
        assert!(session.blink_on());
        assert!(!compose(&session)
            .iter()
            .any(|c| matches!(c, DrawCommand::FillRect { .. })));
    }

    #[test]
    fn test_over_frame_is_overlay_only() {
        let mut session = session();
        session.force_state(GameState::Over);

        let frame = compose(&session);
        assert_eq!(textures(&frame), vec![TextureId::Overlay]);
        assert_eq!(frame.len(), 2);
    }
}
