use serde::{Deserialize, Serialize};

/// Style given to tags that are not in the catalog.
pub const NEUTRAL_TAG_STYLE: &str = "#808080";

/// A labeled category attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub text: String,
    pub style: String,
}

/// A catalog entry: tag text and its display colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDef {
    pub text: String,
    pub style: String,
}

/// Fixed tag → style table. Order is the order chips are shown in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCatalog {
    defs: Vec<TagDef>,
}

impl TagCatalog {
    pub fn new(defs: Vec<TagDef>) -> Self {
        Self { defs }
    }

    pub fn defs(&self) -> &[TagDef] {
        &self.defs
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.defs.iter().map(|d| d.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.defs.iter().any(|d| d.text == text)
    }

    /// Style for a tag text, falling back to the neutral style.
    pub fn style_for(&self, text: &str) -> &str {
        self.defs
            .iter()
            .find(|d| d.text == text)
            .map(|d| d.style.as_str())
            .unwrap_or(NEUTRAL_TAG_STYLE)
    }

    /// Build a tag whose style is looked up in the catalog.
    pub fn tag(&self, text: &str) -> Tag {
        Tag {
            text: text.to_string(),
            style: self.style_for(text).to_string(),
        }
    }
}

impl Default for TagCatalog {
    fn default() -> Self {
        let defs = [
            ("High Priority", "rgba(255,99,71,0.2)"),
            ("Low Priority", "rgba(144,238,144,0.2)"),
            ("Bug", "rgba(255,215,0,0.2)"),
            ("Feature", "rgba(147,112,219,0.2)"),
            ("Documentation", "rgba(135,206,250,0.2)"),
        ]
        .into_iter()
        .map(|(text, style)| TagDef {
            text: text.to_string(),
            style: style.to_string(),
        })
        .collect();
        Self { defs }
    }
}
