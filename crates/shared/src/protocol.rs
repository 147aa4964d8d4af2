//! Single-line text protocol spoken with the multimedia service.
//!
//! A request is `<command> <argument>`: one space, no quoting, no escaping.
//! A response is an opaque block of text that the client renders followed by
//! a line terminator.

use std::fmt;

pub const FIELD_SEPARATOR: char = ' ';
pub const LINE_TERMINATOR: &str = "\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine(String);

impl RequestLine {
    /// Joins the command name and the argument verbatim. Whitespace inside
    /// the argument is left for the service to tokenize.
    pub fn encode(command: &str, argument: &str) -> Self {
        let mut line = String::with_capacity(command.len() + 1 + argument.len());
        line.push_str(command);
        line.push(FIELD_SEPARATOR);
        line.push_str(argument);
        Self(line)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Service-side reading of a request line: the action word and the first
/// token after it. Further tokens are ignored, a missing name is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedRequest<'a> {
    pub action: &'a str,
    pub name: &'a str,
}

impl<'a> ParsedRequest<'a> {
    pub fn parse(line: &'a str) -> Self {
        let mut tokens = line.split_whitespace();
        let action = tokens.next().unwrap_or_default();
        let name = tokens.next().unwrap_or_default();
        Self { action, name }
    }
}

/// Renders a service reply for the output surface.
pub fn decode_response(response: &str) -> String {
    let mut rendered = String::with_capacity(response.len() + LINE_TERMINATOR.len());
    rendered.push_str(response);
    rendered.push_str(LINE_TERMINATOR);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_command_and_argument_with_single_space() {
        assert_eq!(
            RequestLine::encode("search", "Beethoven").as_str(),
            "search Beethoven"
        );
    }

    #[test]
    fn keeps_empty_argument() {
        assert_eq!(RequestLine::encode("play", "").as_str(), "play ");
    }

    #[test]
    fn passes_argument_whitespace_through_untouched() {
        let line = RequestLine::encode("search", "  Moonlight  Sonata ");
        assert_eq!(line.into_string(), "search   Moonlight  Sonata ");
    }

    #[test]
    fn decoded_response_gains_one_terminator() {
        assert_eq!(decode_response("3 results found"), "3 results found\n");
        assert_eq!(decode_response(""), "\n");
        assert_eq!(decode_response("a\nb\n"), "a\nb\n\n");
    }

    #[test]
    fn parsed_request_takes_first_token_as_name() {
        let parsed = ParsedRequest::parse("search My favorites");
        assert_eq!(parsed.action, "search");
        assert_eq!(parsed.name, "My");
    }

    #[test]
    fn parsed_request_tolerates_missing_name() {
        let parsed = ParsedRequest::parse("play ");
        assert_eq!(parsed, ParsedRequest { action: "play", name: "" });
        assert_eq!(ParsedRequest::parse(""), ParsedRequest { action: "", name: "" });
    }
}
