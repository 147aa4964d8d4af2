use std::collections::HashMap;

use shared::domain::{CommandKind, CommandSpec, Trigger, TriggerEvent, TriggerId, TriggerKind};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("command `{name}` registered twice")]
    DuplicateCommand { name: &'static str },
    #[error("trigger {id} bound more than once")]
    DuplicateTrigger { id: TriggerId },
    #[error("trigger {trigger} bound to unknown command `{command}`")]
    UnknownCommand {
        trigger: TriggerId,
        command: &'static str,
    },
}

/// Static table from trigger identity to command, built once per window.
///
/// Several triggers may share a command (a button and a menu item with the
/// same meaning); a trigger never maps to more than one command.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    triggers: Vec<Trigger>,
    bindings: HashMap<TriggerId, usize>,
}

impl CommandRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Looks up the command registered for the event's source. Unknown
    /// sources resolve to nothing and are otherwise ignored.
    pub fn resolve(&self, event: TriggerEvent) -> Option<&CommandSpec> {
        match self.bindings.get(&event.source) {
            Some(&index) => {
                let command = &self.commands[index];
                debug!(trigger = %event.source, command = command.name, "resolved trigger");
                Some(command)
            }
            None => {
                debug!(trigger = %event.source, "ignoring unregistered trigger");
                None
            }
        }
    }

    /// Triggers in registration order.
    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    pub fn triggers_of(&self, kind: TriggerKind) -> impl Iterator<Item = &Trigger> + '_ {
        self.triggers.iter().filter(move |trigger| trigger.kind == kind)
    }

    pub fn find_trigger(&self, kind: TriggerKind, label: &str) -> Option<&Trigger> {
        self.triggers_of(kind).find(|trigger| trigger.label == label)
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    commands: Vec<CommandSpec>,
    triggers: Vec<(Trigger, &'static str)>,
}

impl RegistryBuilder {
    pub fn command(mut self, name: &'static str, kind: CommandKind) -> Self {
        self.commands.push(CommandSpec { name, kind });
        self
    }

    pub fn button(self, id: TriggerId, label: &'static str, command: &'static str) -> Self {
        self.trigger(id, TriggerKind::Button, label, command)
    }

    pub fn menu_item(self, id: TriggerId, label: &'static str, command: &'static str) -> Self {
        self.trigger(id, TriggerKind::MenuItem, label, command)
    }

    pub fn trigger(
        mut self,
        id: TriggerId,
        kind: TriggerKind,
        label: &'static str,
        command: &'static str,
    ) -> Self {
        self.triggers.push((Trigger { id, kind, label }, command));
        self
    }

    pub fn build(self) -> Result<CommandRegistry, RegistryError> {
        let mut index_by_name: HashMap<&'static str, usize> = HashMap::new();
        for (index, command) in self.commands.iter().enumerate() {
            if index_by_name.insert(command.name, index).is_some() {
                return Err(RegistryError::DuplicateCommand { name: command.name });
            }
        }

        let mut bindings = HashMap::with_capacity(self.triggers.len());
        let mut triggers = Vec::with_capacity(self.triggers.len());
        for (trigger, command) in self.triggers {
            let Some(&index) = index_by_name.get(command) else {
                return Err(RegistryError::UnknownCommand {
                    trigger: trigger.id,
                    command,
                });
            };
            if bindings.insert(trigger.id, index).is_some() {
                return Err(RegistryError::DuplicateTrigger { id: trigger.id });
            }
            triggers.push(trigger);
        }

        Ok(CommandRegistry {
            commands: self.commands,
            triggers,
            bindings,
        })
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
