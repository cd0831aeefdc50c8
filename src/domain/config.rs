use std::path::Path;

use serde::{Deserialize, Serialize};

/// A room listed in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// The room number. Must be non-empty and unique.
    pub number: String,

    /// The room type, e.g. "Single" or "Double".
    #[serde(rename = "type")]
    pub room_type: String,
}

impl RoomConfig {
    fn new(number: &str, room_type: &str) -> Self {
        Self {
            number: number.to_string(),
            room_type: room_type.to_string(),
        }
    }
}

/// Configuration for a hotel.
///
/// Lists the rooms a [`Registry`](crate::Registry) starts out with.
/// Reservations are never stored here; they last only as long as the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The rooms to seed, in listing order.
    rooms: Vec<RoomConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rooms: default_rooms(),
        }
    }
}

impl Config {
    /// Create a configuration with the given rooms.
    #[must_use]
    pub const fn new(rooms: Vec<RoomConfig>) -> Self {
        Self { rooms }
    }

    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The rooms to seed.
    #[must_use]
    pub fn rooms(&self) -> &[RoomConfig] {
        &self.rooms
    }
}

fn default_rooms() -> Vec<RoomConfig> {
    vec![
        RoomConfig::new("101", "Single"),
        RoomConfig::new("102", "Double"),
    ]
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_rooms")]
        rooms: Vec<RoomConfig>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { rooms } => Self { rooms },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            rooms: config.rooms,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\n\n[[rooms]]\nnumber = \"201\"\ntype = \"Suite\"\n\n[[rooms]]\nnumber = \"202\"\ntype = \"Twin\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(
            config.rooms(),
            &[RoomConfig::new("201", "Suite"), RoomConfig::new("202", "Twin")]
        );
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nrooms = \"three\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load_preserves_rooms() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hotel.toml");
        let config = Config::new(vec![RoomConfig::new("7", "Cabin")]);

        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
