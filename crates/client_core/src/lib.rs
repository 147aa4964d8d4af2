//! Command dispatch for the multimedia client windows.
//!
//! A UI event names the control that raised it; the [`CommandRegistry`]
//! resolves that control to exactly one command, and the
//! [`CommandExecutor`] runs it against the window's output surface, its input
//! field and, for remote commands, a [`ServiceCollaborator`].

use shared::error::ServiceError;
use thiserror::Error;

pub mod collaborator;
pub mod executor;
pub mod registry;
pub mod surface;
pub mod window;
pub mod windows;

pub use collaborator::{NoService, ServiceCollaborator};
pub use executor::{CommandExecutor, Flow};
pub use registry::{CommandRegistry, RegistryBuilder, RegistryError};
pub use surface::{InputLine, InputSource, OutputSurface, TextLog};
pub use window::{CommandWindow, WindowLayout};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("command `{command}` failed: {source}")]
    Service {
        command: &'static str,
        #[source]
        source: ServiceError,
    },
}
