//! A sample deck showing every registered slide master.
use tracing::{debug, warn};

use super::deck::DeckDefinition;
use crate::registry::{Catalog, RegistryItem};
use crate::schema::validation_problems;

/// One slide per registered master, filled with its example payload.
///
/// Masters whose example does not satisfy their own schema are skipped.
pub fn sample_deck(catalog: &Catalog) -> DeckDefinition {
    let mut deck = DeckDefinition::new("Sample Presentation");
    for master in catalog.slide_masters().entries() {
        let example = master.example_data();
        let problems = validation_problems(&master.data_schema(), &example);
        if !problems.is_empty() {
            warn!(master = master.key(), ?problems, "skipping master with invalid example");
            continue;
        }
        deck = deck.slide(master.key(), example);
    }
    debug!(slides = deck.slides.len(), "built sample deck");
    deck
}
