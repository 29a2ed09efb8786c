//! Sprite catalog
//!
//! The simulation never touches pixels. It only needs each sprite's size (for
//! bounds, muzzle and layer math) and whether a background strip tiles. An
//! [`AssetSource`] supplies that per logical sprite; a missing sprite aborts startup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Logical sprite names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpriteId {
    Ship,
    Rock,
    Bullet,
    Sky,
    Ground,
    Cloud1,
    Cloud2,
    Mountain1,
    Mountain2,
    Mountain3,
    Mountain4,
}

impl SpriteId {
    pub const COUNT: usize = 11;

    pub const ALL: [SpriteId; Self::COUNT] = [
        SpriteId::Ship,
        SpriteId::Rock,
        SpriteId::Bullet,
        SpriteId::Sky,
        SpriteId::Ground,
        SpriteId::Cloud1,
        SpriteId::Cloud2,
        SpriteId::Mountain1,
        SpriteId::Mountain2,
        SpriteId::Mountain3,
        SpriteId::Mountain4,
    ];

    /// Manifest key
    pub fn name(&self) -> &'static str {
        match self {
            SpriteId::Ship => "ship",
            SpriteId::Rock => "rock",
            SpriteId::Bullet => "bullet",
            SpriteId::Sky => "sky",
            SpriteId::Ground => "ground",
            SpriteId::Cloud1 => "cloud-01",
            SpriteId::Cloud2 => "cloud-02",
            SpriteId::Mountain1 => "mountain-01",
            SpriteId::Mountain2 => "mountain-02",
            SpriteId::Mountain3 => "mountain-03",
            SpriteId::Mountain4 => "mountain-04",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// What the simulation needs to know about one sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteInfo {
    /// Source size in pixels (before scaling)
    pub size: Vec2,
    /// Background strip that loops seamlessly horizontally
    pub tileable: bool,
}

impl SpriteInfo {
    pub const fn new(width: f32, height: f32, tileable: bool) -> Self {
        Self {
            size: Vec2::new(width, height),
            tileable,
        }
    }
}

/// Supplies sprite info by logical name
pub trait AssetSource {
    fn load(&mut self, id: SpriteId) -> Result<SpriteInfo, AssetError>;
}

/// Dimensions of the stock art (ship sheet, 96px asteroid cell, 32px missile, 512x256 backgrounds)
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAssets;

impl AssetSource for BuiltinAssets {
    fn load(&mut self, id: SpriteId) -> Result<SpriteInfo, AssetError> {
        Ok(match id {
            SpriteId::Ship => SpriteInfo::new(256.0, 256.0, false),
            SpriteId::Rock => SpriteInfo::new(96.0, 96.0, false),
            SpriteId::Bullet => SpriteInfo::new(32.0, 32.0, false),
            SpriteId::Sky | SpriteId::Ground => SpriteInfo::new(512.0, 256.0, false),
            SpriteId::Cloud1 | SpriteId::Cloud2 => SpriteInfo::new(512.0, 256.0, true),
            SpriteId::Mountain1
            | SpriteId::Mountain2
            | SpriteId::Mountain3
            | SpriteId::Mountain4 => SpriteInfo::new(512.0, 256.0, false),
        })
    }
}

/// One manifest entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    /// Image path, relative to the manifest's directory
    pub file: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub tileable: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Manifest {
    sprites: HashMap<String, ManifestEntry>,
}

/// Sprites described by a JSON manifest next to the image files.
///
/// Image decoding belongs to the renderer; this only checks that each file exists.
#[derive(Debug, Clone)]
pub struct ManifestAssets {
    root: PathBuf,
    sprites: HashMap<String, ManifestEntry>,
}

impl ManifestAssets {
    /// Read a manifest file. Paths inside it resolve against its directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_json_str(&json, root)
    }

    pub fn from_json_str(json: &str, root: impl Into<PathBuf>) -> Result<Self, AssetError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Ok(Self {
            root: root.into(),
            sprites: manifest.sprites,
        })
    }
}

impl AssetSource for ManifestAssets {
    fn load(&mut self, id: SpriteId) -> Result<SpriteInfo, AssetError> {
        let name = id.name();
        let entry = self.sprites.get(name).ok_or(AssetError::Missing { name })?;
        let path = self.root.join(&entry.file);
        if !path.is_file() {
            return Err(AssetError::FileNotFound { name, path });
        }
        Ok(SpriteInfo::new(entry.width, entry.height, entry.tileable))
    }
}

/// Every sprite the game draws, loaded once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCatalog {
    sprites: [SpriteInfo; SpriteId::COUNT],
}

impl AssetCatalog {
    /// Load every sprite from `source`. The first failure is returned and nothing is kept.
    pub fn load(source: &mut impl AssetSource) -> Result<Self, AssetError> {
        let mut sprites = [SpriteInfo::new(0.0, 0.0, false); SpriteId::COUNT];
        for id in SpriteId::ALL {
            let info = source.load(id)?;
            let (width, height) = (info.size.x, info.size.y);
            if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
                return Err(AssetError::InvalidSize {
                    name: id.name(),
                    width,
                    height,
                });
            }
            sprites[id.index()] = info;
        }
        log::info!("Loaded {} sprites", SpriteId::COUNT);
        Ok(Self { sprites })
    }

    /// Catalog of the stock art sizes
    pub fn builtin() -> Self {
        let mut sprites = [SpriteInfo::new(0.0, 0.0, false); SpriteId::COUNT];
        for id in SpriteId::ALL {
            // BuiltinAssets never fails
            if let Ok(info) = BuiltinAssets.load(id) {
                sprites[id.index()] = info;
            }
        }
        Self { sprites }
    }

    pub fn get(&self, id: SpriteId) -> SpriteInfo {
        self.sprites[id.index()]
    }

    /// Override one sprite (tests, tooling)
    pub fn with_sprite(mut self, id: SpriteId, info: SpriteInfo) -> Self {
        self.sprites[id.index()] = info;
        self
    }
}
