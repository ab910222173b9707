use std::path::Path;

use anyhow::Context;
use modhunt_core::GameConfig;
use modhunt_runtime::AudioSettings;
use serde::Deserialize;

/// Contents of the `--config` file: a `[game]` table and an `[audio]` table, both optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,
    pub audio: AudioSettings,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_means_standard_settings() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn audio_preferences_are_read_from_their_own_table() {
        let settings = Settings::parse(
            r#"
            [game]
            starting_hp = 3

            [audio]
            muted = true
            music_volume = 0.2
            "#,
        )
        .unwrap();

        assert_eq!(settings.game.starting_hp, 3);
        assert_eq!(settings.game.size, GameConfig::STANDARD.size);
        assert!(settings.audio.muted);
        assert_eq!(settings.audio.music_volume, 0.2);
        assert_eq!(settings.audio.master_volume, AudioSettings::default().master_volume);
    }

    #[test]
    fn grid_size_reads_as_array() {
        let settings = Settings::parse("[game]\nsize = [5, 5]\n").unwrap();

        assert_eq!(settings.game, GameConfig::STANDARD);
    }

    #[test]
    fn unreadable_values_are_rejected() {
        assert!(Settings::parse("[audio]\nmuted = \"loud\"\n").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Settings::load(Some(Path::new("/nonexistent/modhunt.toml"))).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/modhunt.toml"));
    }
}
