use shared::domain::TriggerEvent;
use tracing::debug;

use crate::{
    collaborator::ServiceCollaborator,
    executor::{CommandExecutor, Flow},
    registry::CommandRegistry,
    surface::{InputLine, TextLog},
    DispatchError,
};

/// Static presentation text for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    pub title: &'static str,
    /// Label next to the input field; windows without one have no input row.
    pub prompt: Option<&'static str>,
    pub instructions: &'static str,
    /// Title of the menu holding the menu-item triggers.
    pub menu_title: Option<&'static str>,
}

/// One window's worth of dispatch state: the trigger table, the executor and
/// the two text widgets commands operate on.
pub struct CommandWindow<C> {
    layout: WindowLayout,
    registry: CommandRegistry,
    executor: CommandExecutor<C>,
    input: InputLine,
    output: TextLog,
    terminated: bool,
}

impl<C: ServiceCollaborator> CommandWindow<C> {
    pub fn new(layout: WindowLayout, registry: CommandRegistry, collaborator: C) -> Self {
        Self {
            layout,
            registry,
            executor: CommandExecutor::new(collaborator),
            input: InputLine::new(),
            output: TextLog::new(),
            terminated: false,
        }
    }

    /// Runs the command behind `event`, if any. Once a terminate command has
    /// run every later event is dropped.
    pub fn handle(&mut self, event: TriggerEvent) -> Result<Flow, DispatchError> {
        if self.terminated {
            debug!(trigger = %event.source, "window closed; dropping event");
            return Ok(Flow::Exit);
        }

        let Some(&command) = self.registry.resolve(event) else {
            return Ok(Flow::Continue);
        };

        let flow = self
            .executor
            .execute(&command, &mut self.input, &mut self.output)?;
        if flow == Flow::Exit {
            self.terminated = true;
        }
        Ok(flow)
    }

    pub fn layout(&self) -> &WindowLayout {
        &self.layout
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn collaborator(&self) -> &C {
        self.executor.collaborator()
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputLine {
        &mut self.input
    }

    pub fn output(&self) -> &TextLog {
        &self.output
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}
