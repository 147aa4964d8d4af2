//! Line grammar for driving a window from stdin.

use shared::domain::TriggerKind;

const SET_INPUT: &str = ":text";
const SHOW: &str = ":show";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLine<'a> {
    /// `:text <value>`: replace the input field with everything after the
    /// first space, untouched.
    SetInput(&'a str),
    /// `button <label>` or `menu <label>`.
    Fire { kind: TriggerKind, label: &'a str },
    /// `:show`: print the whole output surface.
    Show,
    Blank,
    Unknown(&'a str),
}

pub fn parse_line(line: &str) -> ConsoleLine<'_> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return ConsoleLine::Blank;
    }

    let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
    match head {
        SET_INPUT => ConsoleLine::SetInput(rest),
        SHOW if rest.trim().is_empty() => ConsoleLine::Show,
        _ => match head.parse::<TriggerKind>() {
            Ok(kind) => ConsoleLine::Fire {
                kind,
                label: rest.trim(),
            },
            Err(_) => ConsoleLine::Unknown(line),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_input_keeps_value_verbatim() {
        assert_eq!(parse_line(":text  Beethoven "), ConsoleLine::SetInput(" Beethoven "));
        assert_eq!(parse_line(":text"), ConsoleLine::SetInput(""));
    }

    #[test]
    fn fires_buttons_and_menu_items_by_label() {
        assert_eq!(
            parse_line("button Search"),
            ConsoleLine::Fire {
                kind: TriggerKind::Button,
                label: "Search",
            }
        );
        assert_eq!(
            parse_line("menu Button1\r"),
            ConsoleLine::Fire {
                kind: TriggerKind::MenuItem,
                label: "Button1",
            }
        );
    }

    #[test]
    fn recognises_show_and_blank_lines() {
        assert_eq!(parse_line(":show"), ConsoleLine::Show);
        assert_eq!(parse_line("   "), ConsoleLine::Blank);
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(parse_line("toolbar Save"), ConsoleLine::Unknown("toolbar Save"));
        assert_eq!(parse_line(":show me"), ConsoleLine::Unknown(":show me"));
    }
}
