use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::error::GridError;

/// A kind of cell the demo fills the grid with.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Tile {
    pub name: String,
    pub glyph: char,
    pub color: [u8; 3],
}

/// Demo parameters. Every field may be omitted from the JSON file.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Params {
    // Signed so negative sizes in a config surface as InvalidDimension.
    pub width: i64,
    pub height: i64,
    pub seed: Option<u64>,

    pub tiles: Vec<Tile>,
    /// How many empty entries join the tiles in the populate pool.
    pub empty_weight: usize,

    // Output
    pub ascii: bool,
    pub png: Option<PathBuf>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            seed: None,
            tiles: vec![
                Tile { name: "water".into(), glyph: '~', color: [38, 78, 120] },
                Tile { name: "grass".into(), glyph: '"', color: [70, 130, 62] },
                Tile { name: "rock".into(), glyph: '^', color: [140, 120, 100] },
            ],
            empty_weight: 1,
            ascii: true,
            png: None,
        }
    }
}

impl Params {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.width < 0 || self.height < 0 {
            return Err(GridError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.tiles.is_empty() && self.empty_weight == 0 {
            return Err(GridError::EmptyDomain("no tiles and no empty weight configured"));
        }
        Ok(())
    }

    /// Values to populate with: each tile index once, then `empty_weight`
    /// empty entries.
    pub fn value_pool(&self) -> Vec<Option<usize>> {
        (0..self.tiles.len())
            .map(Some)
            .chain(std::iter::repeat(None).take(self.empty_weight))
            .collect()
    }
}
