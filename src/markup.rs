//! Markdown-subset to structured inline nodes.
//!
//! Only `**strong**`, `*emphasis*` and line breaks are recognised; every other
//! character, including unmatched markers, stays literal text. Renderers
//! decide how each node looks, so model output is never injected as markup.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    LineBreak,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    nodes: Vec<Inline>,
}

impl Markup {
    /// Parse emphasis markers and line breaks.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text, parse_line)
    }

    /// Keep the text verbatim apart from line breaks.
    pub fn with_line_breaks(text: &str) -> Self {
        Self::from_lines(text, |line| text_node(line).into_iter().collect())
    }

    fn from_lines(text: &str, inline: impl Fn(&str) -> Vec<Inline>) -> Self {
        let mut nodes = Vec::new();
        for (i, line) in line_break_pattern().split(text).enumerate() {
            if i > 0 {
                nodes.push(Inline::LineBreak);
            }
            nodes.extend(inline(line));
        }
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Inline] {
        &self.nodes
    }

    /// The text with all markers removed; line breaks become `\n`.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        flatten(&self.nodes, &mut out);
        out
    }
}

fn flatten(nodes: &[Inline], out: &mut String) {
    for node in nodes {
        match node {
            Inline::Text(text) => out.push_str(text),
            Inline::Strong(children) | Inline::Emphasis(children) => flatten(children, out),
            Inline::LineBreak => out.push('\n'),
        }
    }
}

fn line_break_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r\n|\n|\r").expect("line break pattern is valid"))
}

fn strong_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("strong pattern is valid"))
}

fn emphasis_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.*?)\*").expect("emphasis pattern is valid"))
}

fn text_node(text: &str) -> Option<Inline> {
    (!text.is_empty()).then(|| Inline::Text(text.to_string()))
}

// Strong markers are resolved first, then emphasis inside and between them.
fn parse_line(line: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut last = 0;
    for caps in strong_pattern().captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        nodes.extend(parse_emphasis(&line[last..whole.start()]));
        nodes.push(Inline::Strong(parse_emphasis(inner.as_str())));
        last = whole.end();
    }
    nodes.extend(parse_emphasis(&line[last..]));
    nodes
}

fn parse_emphasis(text: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut last = 0;
    for caps in emphasis_pattern().captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        nodes.extend(text_node(&text[last..whole.start()]));
        nodes.push(Inline::Emphasis(text_node(inner.as_str()).into_iter().collect()));
        last = whole.end();
    }
    nodes.extend(text_node(&text[last..]));
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn strong_and_emphasis() {
        let markup = Markup::parse("**Tag 1:** Burg *Eisenhardt* besuchen");
        assert_eq!(
            markup.nodes(),
            &[
                Inline::Strong(vec![text("Tag 1:")]),
                text(" Burg "),
                Inline::Emphasis(vec![text("Eisenhardt")]),
                text(" besuchen"),
            ]
        );
    }

    #[test]
    fn emphasis_inside_strong() {
        let markup = Markup::parse("**ab *10 Uhr* geöffnet**");
        assert_eq!(
            markup.nodes(),
            &[Inline::Strong(vec![
                text("ab "),
                Inline::Emphasis(vec![text("10 Uhr")]),
                text(" geöffnet"),
            ])]
        );
    }

    #[test]
    fn every_line_ending_becomes_a_break() {
        let markup = Markup::parse("Vormittag\nNachmittag\r\nAbend\rNacht");
        assert_eq!(
            markup.nodes(),
            &[
                text("Vormittag"),
                Inline::LineBreak,
                text("Nachmittag"),
                Inline::LineBreak,
                text("Abend"),
                Inline::LineBreak,
                text("Nacht"),
            ]
        );
    }

    #[test]
    fn markers_do_not_span_lines() {
        let markup = Markup::parse("**offen\nzu**");
        assert_eq!(
            markup.nodes(),
            &[
                Inline::Emphasis(vec![]),
                text("offen"),
                Inline::LineBreak,
                text("zu"),
                Inline::Emphasis(vec![]),
            ]
        );
    }

    #[test]
    fn unmatched_marker_stays_literal() {
        let markup = Markup::parse("5 * 3 Sterne");
        assert_eq!(markup.nodes(), &[text("5 * 3 Sterne")]);
    }

    #[test]
    fn html_is_just_text() {
        let markup = Markup::parse("<script>alert(1)</script>");
        assert_eq!(markup.nodes(), &[text("<script>alert(1)</script>")]);
    }

    #[test]
    fn line_breaks_only_keeps_markers() {
        let markup = Markup::with_line_breaks("**Hallo**\nWelt");
        assert_eq!(
            markup.nodes(),
            &[text("**Hallo**"), Inline::LineBreak, text("Welt")]
        );
    }

    #[test]
    fn plain_text_drops_markers() {
        let markup = Markup::parse("## **Tag 1**\n- *Burg*");
        assert_eq!(markup.to_plain_text(), "## Tag 1\n- Burg");
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(Markup::parse("").nodes().is_empty());
    }
}
