//! The two windows shipped with the client.

use std::str::FromStr;

use shared::domain::{CommandKind, TriggerId};
use thiserror::Error;

use crate::{
    collaborator::ServiceCollaborator,
    registry::{CommandRegistry, RegistryError},
    window::{CommandWindow, WindowLayout},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Media,
    Demo,
}

impl WindowKind {
    pub fn layout(self) -> WindowLayout {
        match self {
            WindowKind::Media => media::LAYOUT,
            WindowKind::Demo => demo::LAYOUT,
        }
    }

    pub fn registry(self) -> Result<CommandRegistry, RegistryError> {
        match self {
            WindowKind::Media => media::registry(),
            WindowKind::Demo => demo::registry(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown window `{0}` (expected `media` or `demo`)")]
pub struct UnknownWindow(pub String);

impl FromStr for WindowKind {
    type Err = UnknownWindow;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "media" => Ok(WindowKind::Media),
            "demo" => Ok(WindowKind::Demo),
            other => Err(UnknownWindow(other.to_string())),
        }
    }
}

/// Search and play items held by the multimedia service.
pub mod media {
    use super::*;

    pub const SEARCH: &str = "search";
    pub const PLAY: &str = "play";
    pub const EXIT: &str = "exit";

    pub const SEARCH_BUTTON: TriggerId = TriggerId(1);
    pub const PLAY_BUTTON: TriggerId = TriggerId(2);
    pub const EXIT_BUTTON: TriggerId = TriggerId(3);

    pub const LAYOUT: WindowLayout = WindowLayout {
        title: "MainWindow",
        prompt: Some("Enter a multimedia name"),
        instructions: "Use the buttons to select action to perform!",
        menu_title: None,
    };

    pub fn registry() -> Result<CommandRegistry, RegistryError> {
        CommandRegistry::builder()
            .command(SEARCH, CommandKind::RemoteExchange)
            .command(PLAY, CommandKind::RemoteExchange)
            .command(EXIT, CommandKind::Terminate)
            .button(SEARCH_BUTTON, "Search", SEARCH)
            .button(PLAY_BUTTON, "Play", PLAY)
            .button(EXIT_BUTTON, "Exit", EXIT)
            .build()
    }

    pub fn window<C: ServiceCollaborator>(
        collaborator: C,
    ) -> Result<CommandWindow<C>, RegistryError> {
        Ok(CommandWindow::new(LAYOUT, registry()?, collaborator))
    }
}

/// Local demonstration: two buttons append canned text, a third exits. The
/// "Buttons" menu duplicates all three.
pub mod demo {
    use super::*;

    pub const APPEND_FIRST: &str = "append-first";
    pub const APPEND_SECOND: &str = "append-second";
    pub const EXIT: &str = "exit";

    pub const FIRST_TEXT: &str = "The first button appending..\n";
    pub const SECOND_TEXT: &str = "The second button appending..\n";

    pub const BUTTON1: TriggerId = TriggerId(11);
    pub const BUTTON2: TriggerId = TriggerId(12);
    pub const BUTTON3: TriggerId = TriggerId(13);
    pub const ITEM1: TriggerId = TriggerId(21);
    pub const ITEM2: TriggerId = TriggerId(22);
    pub const ITEM3: TriggerId = TriggerId(23);

    pub const LAYOUT: WindowLayout = WindowLayout {
        title: "MainWindow",
        prompt: None,
        instructions: "Use the buttons to control the text area!",
        menu_title: Some("Buttons"),
    };

    pub fn registry() -> Result<CommandRegistry, RegistryError> {
        CommandRegistry::builder()
            .command(APPEND_FIRST, CommandKind::LocalAppend { text: FIRST_TEXT })
            .command(APPEND_SECOND, CommandKind::LocalAppend { text: SECOND_TEXT })
            .command(EXIT, CommandKind::Terminate)
            .button(BUTTON1, "Button1", APPEND_FIRST)
            .button(BUTTON2, "Button2", APPEND_SECOND)
            .button(BUTTON3, "Exit", EXIT)
            .menu_item(ITEM1, "Button1", APPEND_FIRST)
            .menu_item(ITEM2, "Button2", APPEND_SECOND)
            .menu_item(ITEM3, "Button3", EXIT)
            .build()
    }

    pub fn window<C: ServiceCollaborator>(
        collaborator: C,
    ) -> Result<CommandWindow<C>, RegistryError> {
        Ok(CommandWindow::new(LAYOUT, registry()?, collaborator))
    }
}

#[cfg(test)]
#[path = "tests/windows_tests.rs"]
mod tests;
