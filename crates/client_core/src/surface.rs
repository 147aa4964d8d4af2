/// Append-only text sink the presentation layer renders.
pub trait OutputSurface {
    fn append(&mut self, text: &str);
}

/// Single-line editable field the remote commands read their argument from.
pub trait InputSource {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);
}

/// In-memory output surface. Fragments are kept in arrival order and never
/// rewritten.
#[derive(Debug, Default, Clone)]
pub struct TextLog {
    fragments: Vec<String>,
    rendered: String,
}

impl TextLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl OutputSurface for TextLog {
    fn append(&mut self, text: &str) {
        self.rendered.push_str(text);
        self.fragments.push(text.to_string());
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputLine {
    text: String,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct access for widgets that edit the field in place.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }
}

impl InputSource for InputLine {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_log_keeps_fragments_in_order() {
        let mut log = TextLog::new();
        log.append("one\n");
        log.append("two");
        log.append("\n");
        assert_eq!(log.fragments(), ["one\n", "two", "\n"]);
        assert_eq!(log.as_str(), "one\ntwo\n");
    }

    #[test]
    fn input_line_edits_in_place() {
        let mut input = InputLine::new();
        input.text_mut().push_str(" Beethoven ");
        assert_eq!(input.text(), " Beethoven ");
        input.set_text(String::new());
        assert_eq!(input.text(), "");
    }
}
