//! Navigation engine for the VibeConnect deck.
//!
//! This crate is deliberately free of any terminal or rendering concern: it
//! owns the section registry, the router state machine, the fragment history,
//! keyboard traversal, and the cosmetic key-sequence matcher. The `tui` crate
//! is a pure projection of the state held here.

pub mod deck;
pub mod history;
pub mod keyboard;
pub mod router;
pub mod sequence;

pub use deck::Deck;
pub use deck::DeckError;
pub use deck::Message;
pub use deck::Section;
pub use deck::SectionId;
pub use history::FragmentHistory;
pub use history::sync_fragment;
pub use keyboard::NavDirection;
pub use keyboard::navigate;
pub use router::NavItem;
pub use router::RouterState;
pub use router::ViewRouter;
pub use sequence::KeyToken;
pub use sequence::SequenceMatcher;
