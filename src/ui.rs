//! Terminal drawing helpers for the fetch panel

use ratatui::{prelude::*, widgets::*};

use crate::messages::{DisplayNode, DisplayTree, RenderState};

/// Convert a display tree into styled terminal lines
pub fn tree_lines(tree: &DisplayTree) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for node in &tree.children {
        match node {
            DisplayNode::Heading(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::Cyan).bold(),
                )));
                lines.push(Line::default());
            }
            DisplayNode::Preformatted(text) => lines.extend(highlight_json(text)),
        }
    }

    lines
}

/// Content pane for the current render state
pub fn render_panel(state: &RenderState, scroll: u16) -> Paragraph<'static> {
    let (lines, border) = match &state.tree {
        Some(tree) => (tree_lines(tree), Color::Yellow),
        None => (
            vec![Line::from(Span::styled(
                "(unmounted - press m to mount)",
                Style::default().fg(Color::DarkGray).italic(),
            ))],
            Color::DarkGray,
        ),
    };

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" Panel #{} ", state.generation)),
        )
        .scroll((scroll, 0))
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Token {
    Key,
    Str,
    Number,
    Literal,
    Punct,
    Plain,
}

impl Token {
    fn style(self) -> Style {
        match self {
            Token::Key => Style::default().fg(Color::Cyan),
            Token::Str => Style::default().fg(Color::Green),
            Token::Number => Style::default().fg(Color::Yellow),
            Token::Literal => Style::default().fg(Color::Magenta),
            Token::Punct => Style::default().fg(Color::White),
            Token::Plain => Style::default(),
        }
    }
}

/// Split one line of pretty-printed JSON into classified pieces
fn tokenize_line(line: &str) -> Vec<(Token, String)> {
    let chars: Vec<char> = line.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i] != '"' {
                if chars[i] == '\\' {
                    i += 1;
                }
                i += 1;
            }
            i = (i + 1).min(chars.len());
            let text: String = chars[start..i].iter().collect();
            let is_key = chars[i..].iter().find(|c| !c.is_whitespace()) == Some(&':');
            out.push((if is_key { Token::Key } else { Token::Str }, text));
        } else if c == '-' || c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || "+-.".contains(chars[i])) {
                i += 1;
            }
            out.push((Token::Number, chars[start..i].iter().collect()));
        } else if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let token = if matches!(word.as_str(), "true" | "false" | "null") {
                Token::Literal
            } else {
                Token::Plain
            };
            out.push((token, word));
        } else if "{}[]:,".contains(c) {
            out.push((Token::Punct, c.to_string()));
            i += 1;
        } else {
            let start = i;
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            if i == start {
                i += 1;
            }
            out.push((Token::Plain, chars[start..i].iter().collect()));
        }
    }

    out
}

/// Simple JSON syntax highlighting
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| {
            let spans: Vec<Span<'static>> = tokenize_line(line)
                .into_iter()
                .map(|(token, text)| Span::styled(text, token.style()))
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_key_value_line() {
        let tokens = tokenize_line(r#"  "name": "a:b","#);
        let kinds: Vec<Token> = tokens.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            kinds,
            vec![Token::Plain, Token::Key, Token::Punct, Token::Plain, Token::Str, Token::Punct]
        );
        assert_eq!(tokens[4].1, "\"a:b\"");
    }

    #[test]
    fn test_tokenize_escaped_quote_and_literals() {
        let tokens = tokenize_line(r#""say \"hi\"": [true, null, -1.5e3]"#);
        assert_eq!(tokens[0], (Token::Key, r#""say \"hi\"""#.to_string()));
        assert!(tokens.contains(&(Token::Literal, "true".to_string())));
        assert!(tokens.contains(&(Token::Literal, "null".to_string())));
        assert!(tokens.contains(&(Token::Number, "-1.5e3".to_string())));
    }

    #[test]
    fn test_highlight_preserves_text() {
        let text = "{\n  \"a\": 1,\n  \"b\": [\n    false\n  ]\n}";
        let rendered: Vec<String> = highlight_json(text)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(rendered.join("\n"), text);
    }

    #[test]
    fn test_heading_only_tree_has_no_body_lines() {
        let tree = DisplayTree::new(vec![DisplayNode::Heading("Data from API:".into())]);
        let lines = tree_lines(&tree);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, "Data from API:");
    }
}
