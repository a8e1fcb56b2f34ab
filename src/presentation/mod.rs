//! Presentations: building decks from slide definitions and saving them.
//!
//! A [`PresentationFactory`] resolves the branding and each slide master
//! through its [`Catalog`](crate::registry::Catalog), renders the slides into
//! a [`Presentation`] and, on [`build_and_save`](PresentationFactory::build_and_save),
//! hands the finished document to the writer for its format.
//!
//! ```rust
//! use longan::presentation::{DeckDefinition, PresentationFactory};
//! use serde_json::json;
//!
//! let deck = DeckDefinition::new("Review")
//!     .slide("title", json!({"title": "Q3 Review"}))
//!     .slide("bullet-points", json!({"title": "Highlights", "bulletPoints": ["Revenue up"]}));
//! let prs = PresentationFactory::new().create_deck(&deck).unwrap();
//! assert_eq!(prs.slide_count(), 2);
//! ```

pub mod config;
pub mod deck;
pub mod factory;
pub mod prs;
pub mod sample;
pub mod storage;
pub mod types;

pub use config::{OutputConfig, PresentationConfig};
pub use deck::DeckDefinition;
pub use factory::{PresentationFactory, SaveOptions};
pub use prs::Presentation;
pub use storage::Disks;
pub use types::{Author, FileInfo};
