//! Asset manifest: every file the platform has to load before the first
//! frame, plus the procedural textures it has to generate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::command::TextureId;
use super::platform::Sound;
use crate::board::Board;
use crate::core::ResourceLoadError;

/// Directory holding the game's assets, relative to the asset root.
pub const RESOURCE_DIR: &str = "resources";

/// Parameters of a generated white-noise texture.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseTexture {
    pub texture: TextureId,
    pub width: u32,
    pub height: u32,
    /// Fraction of white pixels.
    pub factor: f32,
}

/// Files and generated textures required by a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceManifest {
    /// Texture files, relative to the asset root.
    pub textures: Vec<(TextureId, PathBuf)>,
    /// Sound files, relative to the asset root.
    pub sounds: Vec<(Sound, PathBuf)>,
    /// Static-noise frames generated at load time.
    pub noise: [NoiseTexture; 2],
}

impl ResourceManifest {
    /// Manifest for a board: fixed screens, one texture per assigned piece
    /// image (row-major), both sounds, and the two noise frames.
    #[must_use]
    pub fn for_board(board: &Board) -> Self {
        let dir = Path::new(RESOURCE_DIR);

        let mut textures = vec![
            (TextureId::Overlay, dir.join("overlay.png")),
            (TextureId::Background, dir.join("background.png")),
            (TextureId::ClickToPlay, dir.join("clicktoplay.png")),
        ];
        for image in board.cells().filter_map(|c| c.image) {
            textures.push((TextureId::Piece(image), dir.join(format!("{}.png", image.raw()))));
        }

        let sounds = [Sound::Static, Sound::GameStart]
            .into_iter()
            .map(|sound| (sound, dir.join(sound.file_name())))
            .collect();

        let noise = [
            NoiseTexture {
                texture: TextureId::Static(0),
                width: 550,
                height: 400,
                factor: 0.49,
            },
            NoiseTexture {
                texture: TextureId::Static(1),
                width: 550,
                height: 400,
                factor: 0.5,
            },
        ];

        Self {
            textures,
            sounds,
            noise,
        }
    }

    /// Relative path of a texture file.
    #[must_use]
    pub fn texture_path(&self, texture: TextureId) -> Option<&Path> {
        self.textures
            .iter()
            .find(|(id, _)| *id == texture)
            .map(|(_, path)| path.as_path())
    }

    /// Relative path of a sound file.
    #[must_use]
    pub fn sound_path(&self, sound: Sound) -> Option<&Path> {
        self.sounds
            .iter()
            .find(|(id, _)| *id == sound)
            .map(|(_, path)| path.as_path())
    }

    /// Every file path, textures first.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.textures
            .iter()
            .map(|(_, p)| p.as_path())
            .chain(self.sounds.iter().map(|(_, p)| p.as_path()))
    }

    /// Check that every file exists under `root` and is non-empty.
    ///
    /// Stops at the first missing or empty file.
    pub fn verify(&self, root: &Path) -> Result<(), ResourceLoadError> {
        for relative in self.files() {
            let path = root.join(relative);
            let metadata = std::fs::metadata(&path)
                .map_err(|err| ResourceLoadError::new(&path, err.to_string()))?;
            if !metadata.is_file() {
                return Err(ResourceLoadError::new(&path, "not a regular file"));
            }
            if metadata.len() == 0 {
                return Err(ResourceLoadError::new(&path, "file is empty"));
            }
            debug!(path = %path.display(), bytes = metadata.len(), "resource found");
        }
        Ok(())
    }
}
