use std::{fmt, str::FromStr};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(TriggerId);

/// How a trigger is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Button,
    MenuItem,
}

impl TriggerKind {
    pub fn label(self) -> &'static str {
        match self {
            TriggerKind::Button => "button",
            TriggerKind::MenuItem => "menu",
        }
    }
}

impl FromStr for TriggerKind {
    type Err = UnknownTriggerKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "button" => Ok(TriggerKind::Button),
            "menu" => Ok(TriggerKind::MenuItem),
            other => Err(UnknownTriggerKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trigger kind `{0}` (expected `button` or `menu`)")]
pub struct UnknownTriggerKind(pub String);

/// A UI control that can originate a dispatch event. Carries no payload; the
/// id is the only thing resolution looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub id: TriggerId,
    pub kind: TriggerKind,
    pub label: &'static str,
}

/// Execution mode of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Append a fixed literal to the output surface.
    LocalAppend { text: &'static str },
    /// Send `<name> <input>` to the service collaborator and append its reply.
    RemoteExchange,
    /// Shut the window down.
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub kind: CommandKind,
}

/// Event raised by a control when the user activates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEvent {
    pub source: TriggerId,
}

impl From<TriggerId> for TriggerEvent {
    fn from(source: TriggerId) -> Self {
        Self { source }
    }
}
