use std::process::{Command, Stdio};

use client_core::ServiceCollaborator;
use shared::{error::ServiceError, protocol::ParsedRequest};
use tracing::{debug, info};

use crate::{
    config::{PlayerSettings, Settings},
    Catalog, CatalogError, PlayerKind,
};

pub const SEARCH_ACTION: &str = "search";

/// Answers request lines from an in-process [`Catalog`].
///
/// `search <name>` renders the item or group; every other action plays the
/// named item.
pub struct CatalogService {
    catalog: Catalog,
    players: PlayerSettings,
}

impl CatalogService {
    pub fn new(catalog: Catalog, players: PlayerSettings) -> Self {
        Self { catalog, players }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        Ok(Self::new(
            Catalog::from_settings(settings)?,
            settings.players.clone(),
        ))
    }

    fn search(&self, name: &str) -> String {
        match self.catalog.search(name) {
            Ok(rendered) => rendered,
            Err(err) => {
                debug!(name, error = %err, "search miss");
                err.to_string()
            }
        }
    }

    fn play(&self, name: &str) -> Result<String, ServiceError> {
        let Some(media) = self.catalog.media(name) else {
            return Ok(format!("No multimedia found with the name: {name}"));
        };

        let program = match media.player() {
            PlayerKind::PhotoViewer => &self.players.photo_viewer,
            PlayerKind::VideoPlayer => &self.players.video_player,
        };

        if self.players.launch {
            Command::new(program)
                .arg(media.path())
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map_err(|err| {
                    ServiceError::rejected(format!("could not start {program} for {name}: {err}"))
                })?;
            info!(name, program = %program, "player started");
        } else {
            info!(name, program = %program, "player launch disabled");
        }

        Ok(format!("Playing {name}"))
    }
}

impl ServiceCollaborator for CatalogService {
    fn send(&mut self, request: &str) -> Result<String, ServiceError> {
        let parsed = ParsedRequest::parse(request);
        debug!(action = parsed.action, name = parsed.name, "handling request");
        if parsed.action == SEARCH_ACTION {
            Ok(self.search(parsed.name))
        } else {
            self.play(parsed.name)
        }
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
