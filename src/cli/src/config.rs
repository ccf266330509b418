use std::{fs, path::Path};

use color_eyre::eyre::WrapErr;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use twisty_core::{Color, Face};

/// User configuration, read from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub colors: ColorScheme,
}

/// Display colours for each face. Faces left out keep their official colour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(non_snake_case)]
pub struct ColorScheme {
    L: Option<Color>,
    R: Option<Color>,
    D: Option<Color>,
    U: Option<Color>,
    B: Option<Color>,
    F: Option<Color>,
}

impl ColorScheme {
    pub fn color(&self, face: Face) -> Color {
        let custom = match face {
            Face::L => self.L,
            Face::R => self.R,
            Face::D => self.D,
            Face::U => self.U,
            Face::B => self.B,
            Face::F => self.F,
        };

        custom.unwrap_or(face.color())
    }

    /// The display colour for a sticker of colour `sticker`.
    pub fn display(&self, sticker: Color) -> Color {
        Face::ALL
            .into_iter()
            .find(|face| face.color() == sticker)
            .map_or(sticker, |face| self.color(face))
    }
}

impl Config {
    /// Read the configuration at `path`, or the one in the user's
    /// configuration directory if there is no `path`. A missing default file
    /// gives the default configuration.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Config> {
        let default_path = dirs::config_dir().map(|dir| dir.join("twisty").join("config.toml"));

        let path = match (path, &default_path) {
            (Some(path), _) => path,
            (None, Some(path)) if path.exists() => path.as_path(),
            (None, _) => {
                debug!("No configuration file found, using the defaults");
                return Ok(Config::default());
            }
        };

        info!("Reading configuration from {}", path.display());
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read the configuration file {}", path.display()))?;

        Config::parse(&text)
            .wrap_err_with(|| format!("Failed to parse the configuration file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_keeps_official_colors() {
        let config = Config::parse("").unwrap();
        for face in Face::ALL {
            assert_eq!(config.colors.color(face), face.color());
            assert_eq!(config.colors.display(face.color()), face.color());
        }
    }

    #[test]
    fn overrides_colors() {
        let config = Config::parse(
            r##"
            [colors]
            U = "#eeeeee"
            F = "#00800080"
            "##,
        )
        .unwrap();

        assert_eq!(config.colors.color(Face::U), Color::rgb(0xee, 0xee, 0xee));
        assert_eq!(config.colors.color(Face::F), Color::rgba(0, 0x80, 0, 0x80));
        assert_eq!(config.colors.display(Face::F.color()), Color::rgba(0, 0x80, 0, 0x80));
        assert_eq!(config.colors.color(Face::R), Face::R.color());
    }

    #[test]
    fn rejects_bad_configs() {
        assert!(Config::parse("[colors]\nU = \"white\"").is_err());
        assert!(Config::parse("[colors]\nX = \"#ffffff\"").is_err());
        assert!(Config::parse("size = 3").is_err());
    }
}
