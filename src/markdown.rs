//! Documentation Markdown Rendering
//!
//! Renders the short Markdown fragments used in the docs content and
//! syntax-highlights code samples with syntect.

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const THEME_NAME: &str = "InspiredGitHub";

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(THEME_NAME)
}

/// Parse markdown to HTML, highlighting fenced code blocks
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

/// Replace code blocks with highlighted HTML
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

/// Highlight `code` as `lang` (a syntect token such as "js"), plain `<pre>` otherwise
fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let plain = || format!("<pre><code>{}</code></pre>", escape_html(code));
    let Some(theme) = get_theme() else {
        return plain();
    };

    let ss = get_syntax_set();
    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|_| plain())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(parse_markdown_inline("Раздел **Установка**"), "Раздел <strong>Установка</strong>");
    }

    #[test]
    fn test_inline_escapes_html() {
        assert_eq!(parse_markdown_inline("a < b"), "a &lt; b");
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let html = parse_markdown("```js\nconst hub = 1;\n```\n");
        assert!(html.starts_with("<pre"));
        assert!(html.contains("hub"));
        assert!(!html.contains("<code class=\"language-js\">"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let html = parse_markdown("```no-such-lang\nx <y>\n```\n");
        assert!(html.starts_with("<pre"));
        assert!(html.contains("&lt;y&gt;"));
    }

    #[test]
    fn test_unfenced_text_is_untouched() {
        let html = parse_markdown("~~old~~ new");
        assert_eq!(html.trim(), "<p><del>old</del> new</p>");
    }
}
