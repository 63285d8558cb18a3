//! Display tree - the abstract output the renderer hands to a host surface

/// One element of a rendered panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayNode {
    /// Title line
    Heading(String),
    /// Text shown verbatim, whitespace preserved
    Preformatted(String),
}

impl DisplayNode {
    pub fn text(&self) -> &str {
        match self {
            DisplayNode::Heading(text) | DisplayNode::Preformatted(text) => text,
        }
    }
}

/// Ordered children of the panel container
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DisplayTree {
    pub children: Vec<DisplayNode>,
}

impl DisplayTree {
    pub fn new(children: Vec<DisplayNode>) -> Self {
        DisplayTree { children }
    }

    pub fn heading(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            DisplayNode::Heading(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Preformatted content, if any
    pub fn body(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            DisplayNode::Preformatted(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Plain-text flattening: node texts joined by newlines
    pub fn to_text(&self) -> String {
        self.children
            .iter()
            .map(DisplayNode::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
