use shared::{
    domain::{CommandKind, CommandSpec},
    error::ServiceError,
    protocol::{decode_response, RequestLine, LINE_TERMINATOR},
};
use tracing::{info, warn};

use crate::{
    collaborator::ServiceCollaborator,
    surface::{InputSource, OutputSurface},
    DispatchError,
};

/// What the caller should do once a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The command asked for the window to close. The front end owns the
    /// actual shutdown and reports a success status.
    Exit,
}

pub struct CommandExecutor<C> {
    collaborator: C,
}

impl<C: ServiceCollaborator> CommandExecutor<C> {
    pub fn new(collaborator: C) -> Self {
        Self { collaborator }
    }

    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    pub fn execute<I, S>(
        &mut self,
        command: &CommandSpec,
        input: &mut I,
        surface: &mut S,
    ) -> Result<Flow, DispatchError>
    where
        I: InputSource + ?Sized,
        S: OutputSurface + ?Sized,
    {
        match command.kind {
            CommandKind::LocalAppend { text } => {
                surface.append(text);
                Ok(Flow::Continue)
            }
            CommandKind::RemoteExchange => self.exchange(command.name, input, surface),
            CommandKind::Terminate => {
                info!(command = command.name, "shutting down");
                Ok(Flow::Exit)
            }
        }
    }

    fn exchange<I, S>(
        &mut self,
        command: &'static str,
        input: &mut I,
        surface: &mut S,
    ) -> Result<Flow, DispatchError>
    where
        I: InputSource + ?Sized,
        S: OutputSurface + ?Sized,
    {
        let request = RequestLine::encode(command, input.text());
        info!(%request, "sending request");

        match self.collaborator.send(request.as_str()) {
            Ok(response) => {
                info!(command, bytes = response.len(), "received response");
                surface.append(&decode_response(&response));
                input.set_text(String::new());
                Ok(Flow::Continue)
            }
            Err(source) => {
                warn!(command, error = %source, "request failed");
                surface.append(&render_failure(&source));
                Err(DispatchError::Service { command, source })
            }
        }
    }
}

fn render_failure(err: &ServiceError) -> String {
    format!("error: {err}{LINE_TERMINATOR}")
}

#[cfg(test)]
#[path = "tests/executor_tests.rs"]
mod tests;
