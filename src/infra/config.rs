use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Player;

/// Настройки игрока, хранятся в TOML.
///
/// ```toml
/// name = "Alice"
/// starting_chips = 100
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub starting_chips: Chips,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            starting_chips: Chips(1_000),
        }
    }
}

impl PlayerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing player config TOML")
    }

    /// Загрузить конфиг из файла.
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("in config file '{}'", path.display()))
    }

    /// Без пути – значения по умолчанию.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self).context("serializing player config to TOML")?;
        fs::write(path, text).with_context(|| format!("writing config to '{}'", path.display()))
    }

    pub fn build_player(&self) -> Player {
        Player::new(self.name.clone(), self.starting_chips)
    }
}
