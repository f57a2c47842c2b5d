//! The deck is the section registry: an ordered list of channels, each with a
//! display title and the chat-styled messages shown in its panel.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Stable identifier for a section; doubles as the address fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One chat-styled content block inside a section panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    pub author: String,
    pub body: String,
    /// Tags the message for the one-shot fade-up entrance effect.
    #[serde(default)]
    pub reveal: bool,
}

/// A single named content pane pairable with one sidebar entry. Ordinal
/// position is its declaration order in the deck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Channel-name label shown in the header. Optional: a section without a
    /// title leaves the label untouched when switched to.
    pub title: Option<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to parse deck: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("deck contains no sections")]
    Empty,

    #[error("duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("initial section `{0}` is not in the deck")]
    UnknownInitial(String),
}

#[derive(Debug, Deserialize)]
struct DeckFile {
    /// Section pre-marked active in the authored deck, if any.
    initial: Option<SectionId>,
    #[serde(default)]
    sections: Vec<Section>,
}

/// Ordered section registry. Ids are unique and ordinals are stable for the
/// lifetime of the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    sections: Vec<Section>,
    initial: Option<SectionId>,
}

/// Deck shipped with the binary; the VibeConnect landing copy.
const BUILTIN_DECK: &str = include_str!("../decks/vibeconnect.toml");

impl Deck {
    pub fn from_toml_str(raw: &str) -> Result<Self, DeckError> {
        let file: DeckFile = toml::from_str(raw)?;
        Self::from_sections(file.sections, file.initial)
    }

    pub fn from_sections(
        sections: Vec<Section>,
        initial: Option<SectionId>,
    ) -> Result<Self, DeckError> {
        if sections.is_empty() {
            return Err(DeckError::Empty);
        }
        for (idx, section) in sections.iter().enumerate() {
            if sections[..idx].iter().any(|s| s.id == section.id) {
                return Err(DeckError::DuplicateSection(section.id.to_string()));
            }
        }
        if let Some(initial) = &initial
            && !sections.iter().any(|s| &s.id == initial)
        {
            return Err(DeckError::UnknownInitial(initial.to_string()));
        }
        Ok(Self { sections, initial })
    }

    /// The deck embedded in the binary. The embedded copy is validated by
    /// tests, so a parse failure here is a packaging bug surfaced at startup.
    pub fn builtin() -> Result<Self, DeckError> {
        Self::from_toml_str(BUILTIN_DECK)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn get(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.get(id).is_some()
    }

    /// Display title for `id`, when the section exists and carries one.
    pub fn title(&self, id: &SectionId) -> Option<&str> {
        self.get(id).and_then(|s| s.title.as_deref())
    }

    /// Ordinal position of `id` in declaration order.
    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    pub fn section_at(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Section pre-marked active in the authored deck.
    pub fn initial(&self) -> Option<&SectionId> {
        self.initial.as_ref()
    }
}
