use super::*;

const APPEND: CommandKind = CommandKind::LocalAppend { text: "x\n" };

fn two_triggers_one_command() -> CommandRegistry {
    CommandRegistry::builder()
        .command("append", APPEND)
        .command("exit", CommandKind::Terminate)
        .button(TriggerId(1), "Append", "append")
        .menu_item(TriggerId(2), "Append", "append")
        .button(TriggerId(3), "Exit", "exit")
        .build()
        .expect("registry")
}

#[test]
fn duplicate_triggers_resolve_to_the_same_command() {
    let registry = two_triggers_one_command();
    let from_button = registry.resolve(TriggerId(1).into()).expect("button");
    let from_menu = registry.resolve(TriggerId(2).into()).expect("menu item");
    assert_eq!(from_button, from_menu);
    assert_eq!(from_button.name, "append");
}

#[test]
fn resolution_does_not_depend_on_registration_order() {
    let reversed = CommandRegistry::builder()
        .command("exit", CommandKind::Terminate)
        .command("append", APPEND)
        .button(TriggerId(3), "Exit", "exit")
        .menu_item(TriggerId(2), "Append", "append")
        .button(TriggerId(1), "Append", "append")
        .build()
        .expect("registry");
    let forward = two_triggers_one_command();

    for id in 1..=3 {
        assert_eq!(
            reversed.resolve(TriggerId(id).into()),
            forward.resolve(TriggerId(id).into())
        );
    }
}

#[test]
fn unregistered_trigger_resolves_to_nothing() {
    let registry = two_triggers_one_command();
    assert!(registry.resolve(TriggerId(99).into()).is_none());
}

#[test]
fn rejects_trigger_bound_twice() {
    let err = CommandRegistry::builder()
        .command("append", APPEND)
        .command("exit", CommandKind::Terminate)
        .button(TriggerId(1), "Append", "append")
        .menu_item(TriggerId(1), "Exit", "exit")
        .build()
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateTrigger { id: TriggerId(1) });
}

#[test]
fn rejects_binding_to_unknown_command() {
    let err = CommandRegistry::builder()
        .command("append", APPEND)
        .button(TriggerId(7), "Play", "play")
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnknownCommand {
            trigger: TriggerId(7),
            command: "play",
        }
    );
}

#[test]
fn rejects_duplicate_command_names() {
    let err = CommandRegistry::builder()
        .command("exit", CommandKind::Terminate)
        .command("exit", APPEND)
        .build()
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateCommand { name: "exit" });
}

#[test]
fn finds_triggers_by_kind_and_label() {
    let registry = two_triggers_one_command();
    let menu = registry
        .find_trigger(TriggerKind::MenuItem, "Append")
        .expect("menu trigger");
    assert_eq!(menu.id, TriggerId(2));
    assert!(registry.find_trigger(TriggerKind::MenuItem, "Exit").is_none());
    assert_eq!(registry.triggers_of(TriggerKind::Button).count(), 2);
}
