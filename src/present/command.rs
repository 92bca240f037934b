//! Display-list commands handed to the platform each frame.

use serde::{Deserialize, Serialize};

use crate::board::ImageId;
use crate::core::Rect;

/// RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(230, 41, 55);

    /// Opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Textures the platform must provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureId {
    /// Screen frame drawn over everything else.
    Overlay,
    /// Playfield backdrop.
    Background,
    /// "Click to start" prompt.
    ClickToPlay,
    /// Procedural static noise, frame 0 or 1.
    Static(u8),
    /// Piece artwork.
    Piece(ImageId),
}

/// One drawing operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole frame.
    Clear(Color),
    /// Draw a texture with its top-left corner at (x, y).
    Texture {
        texture: TextureId,
        x: f32,
        y: f32,
        tint: Color,
    },
    /// Solid rectangle.
    FillRect { rect: Rect, color: Color },
    /// Rectangle outline.
    OutlineRect { rect: Rect, color: Color },
    /// Frames-per-second counter.
    Fps { x: f32, y: f32 },
}

impl DrawCommand {
    /// Untinted texture at a position.
    #[must_use]
    pub fn texture(texture: TextureId, x: f32, y: f32) -> Self {
        Self::Texture {
            texture,
            x,
            y,
            tint: Color::WHITE,
        }
    }

    /// The texture this command draws, if any.
    #[must_use]
    pub fn texture_id(&self) -> Option<TextureId> {
        match self {
            DrawCommand::Texture { texture, .. } => Some(*texture),
            _ => None,
        }
    }
}
