//! In-process multimedia catalog that answers the client's `search` and
//! `play` request lines.

use std::{collections::BTreeMap, rc::Rc};

use client_core::{
    windows::{self, WindowKind},
    CommandWindow, NoService, ServiceCollaborator,
};
use thiserror::Error;

pub mod config;
mod media;
mod service;

pub use media::{Group, Media, PlayerKind};
pub use service::CatalogService;

use crate::config::{MediaEntry, Settings};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("a media item named `{0}` already exists")]
    DuplicateMedia(String),
    #[error("a group named `{0}` already exists")]
    DuplicateGroup(String),
    #[error("film `{0}` has no chapters")]
    EmptyChapters(String),
    #[error("group `{group}` refers to unknown media `{media}`")]
    UnknownMember { group: String, media: String },
    #[error("no group named `{0}`")]
    UnknownGroup(String),
    #[error("No group or multimedia with this name exists!")]
    NotFound(String),
}

/// Window whose collaborator is chosen at runtime.
pub type DynWindow = CommandWindow<Box<dyn ServiceCollaborator>>;

/// Builds the requested window; the media window is backed by a
/// [`CatalogService`] configured from `settings`.
pub fn open_window(kind: WindowKind, settings: &Settings) -> anyhow::Result<DynWindow> {
    let window = match kind {
        WindowKind::Media => {
            let service: Box<dyn ServiceCollaborator> =
                Box::new(CatalogService::from_settings(settings)?);
            windows::media::window(service)?
        }
        WindowKind::Demo => {
            let service: Box<dyn ServiceCollaborator> = Box::new(NoService);
            windows::demo::window(service)?
        }
    };
    Ok(window)
}

/// Media items and groups, each keyed by a unique name.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    media: BTreeMap<String, Rc<Media>>,
    groups: BTreeMap<String, Group>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the catalog described by the settings' `media` and `groups`.
    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for entry in &settings.media {
            match entry {
                MediaEntry::Photo {
                    name,
                    path,
                    latitude,
                    longitude,
                } => catalog.add_photo(name, path, *latitude, *longitude)?,
                MediaEntry::Video {
                    name,
                    path,
                    duration,
                } => catalog.add_video(name, path, *duration)?,
                MediaEntry::Film {
                    name,
                    path,
                    duration,
                    chapters,
                } => catalog.add_film(name, path, *duration, chapters)?,
            };
        }
        for group in &settings.groups {
            catalog.add_group(&group.name)?;
            for member in &group.members {
                catalog.add_to_group(&group.name, member)?;
            }
        }
        Ok(catalog)
    }

    pub fn add_photo(
        &mut self,
        name: &str,
        path: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Rc<Media>, CatalogError> {
        self.insert(Media::Photo {
            name: name.to_string(),
            path: path.to_string(),
            latitude,
            longitude,
        })
    }

    pub fn add_video(
        &mut self,
        name: &str,
        path: &str,
        duration: u32,
    ) -> Result<Rc<Media>, CatalogError> {
        self.insert(Media::Video {
            name: name.to_string(),
            path: path.to_string(),
            duration,
        })
    }

    /// The chapter durations are copied; later changes to the caller's
    /// slice do not reach the catalog.
    pub fn add_film(
        &mut self,
        name: &str,
        path: &str,
        duration: u32,
        chapters: &[u32],
    ) -> Result<Rc<Media>, CatalogError> {
        if chapters.is_empty() {
            return Err(CatalogError::EmptyChapters(name.to_string()));
        }
        self.insert(Media::Film {
            name: name.to_string(),
            path: path.to_string(),
            duration,
            chapters: chapters.to_vec(),
        })
    }

    pub fn add_group(&mut self, name: &str) -> Result<(), CatalogError> {
        if self.groups.contains_key(name) {
            return Err(CatalogError::DuplicateGroup(name.to_string()));
        }
        self.groups.insert(name.to_string(), Group::new(name));
        Ok(())
    }

    pub fn add_to_group(&mut self, group: &str, media: &str) -> Result<(), CatalogError> {
        let Some(item) = self.media.get(media).cloned() else {
            return Err(CatalogError::UnknownMember {
                group: group.to_string(),
                media: media.to_string(),
            });
        };
        let Some(target) = self.groups.get_mut(group) else {
            return Err(CatalogError::UnknownGroup(group.to_string()));
        };
        target.push(item);
        Ok(())
    }

    pub fn media(&self, name: &str) -> Option<&Rc<Media>> {
        self.media.get(name)
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn len(&self) -> usize {
        self.media.len()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    /// Renders the media item called `name`, or failing that the group.
    pub fn search(&self, name: &str) -> Result<String, CatalogError> {
        if let Some(media) = self.media.get(name) {
            return Ok(media.to_string());
        }
        if let Some(group) = self.groups.get(name) {
            return Ok(group.to_string());
        }
        Err(CatalogError::NotFound(name.to_string()))
    }

    fn insert(&mut self, media: Media) -> Result<Rc<Media>, CatalogError> {
        if self.media.contains_key(media.name()) {
            return Err(CatalogError::DuplicateMedia(media.name().to_string()));
        }
        let media = Rc::new(media);
        self.media.insert(media.name().to_string(), Rc::clone(&media));
        Ok(media)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
