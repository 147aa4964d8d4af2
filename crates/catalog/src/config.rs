use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "media.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub players: PlayerSettings,
    pub media: Vec<MediaEntry>,
    pub groups: Vec<GroupEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub photo_viewer: String,
    pub video_player: String,
    /// When off, `play` only reports what it would open.
    pub launch: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaEntry {
    Photo {
        name: String,
        path: String,
        latitude: f64,
        longitude: f64,
    },
    Video {
        name: String,
        path: String,
        duration: u32,
    },
    Film {
        name: String,
        path: String,
        duration: u32,
        chapters: Vec<u32>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupEntry {
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            photo_viewer: "imagej".into(),
            video_player: "mpv".into(),
            launch: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            players: PlayerSettings::default(),
            media: vec![
                MediaEntry::Photo {
                    name: "test-photo".into(),
                    path: "media/test-photo.jpg".into(),
                    latitude: 10.0,
                    longitude: 10.0,
                },
                MediaEntry::Video {
                    name: "test-video".into(),
                    path: "media/test-video.mp4".into(),
                    duration: 10,
                },
                MediaEntry::Film {
                    name: "ToyStory".into(),
                    path: "media/ToyStory.mp4".into(),
                    duration: 20,
                    chapters: vec![10, 20, 30, 40, 50],
                },
            ],
            groups: vec![GroupEntry {
                name: "My favorites".into(),
                members: vec!["test-photo".into(), "test-video".into()],
            }],
        }
    }
}

/// Reads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] when it
/// exists, then applies `APP__*` environment overrides.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    let mut settings = match path {
        Some(path) => read_settings(path)?,
        None if default_path.exists() => read_settings(&default_path)?,
        None => Settings::default(),
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn read_settings(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    parse_settings(&raw).with_context(|| format!("invalid settings file '{}'", path.display()))
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str(raw)?)
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__PHOTO_VIEWER") {
        settings.players.photo_viewer = v;
    }
    if let Some(v) = lookup("APP__VIDEO_PLAYER") {
        settings.players.video_player = v;
    }
    if let Some(v) = lookup("APP__LAUNCH_PLAYERS") {
        if let Ok(parsed) = v.parse::<bool>() {
            settings.players.launch = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
