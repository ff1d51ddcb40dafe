use mentor_core::model::Flashcard;

/// Front-end-only visibility state layered over the generated cards.
///
/// Rebuilt from scratch on regeneration, dropped on clear; nothing here
/// survives the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardsState {
    cards: Vec<Flashcard>,
    revealed: Vec<bool>,
    all_visible: bool,
}

impl FlashcardsState {
    #[must_use]
    pub fn new(cards: Vec<Flashcard>) -> Self {
        let revealed = vec![false; cards.len()];
        Self {
            cards,
            revealed,
            all_visible: false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Flip one card's answer side.
    pub fn toggle(&mut self, index: usize) {
        if let Some(slot) = self.revealed.get_mut(index) {
            *slot = !*slot;
        }
    }

    /// Flip the global control and align every card with it.
    pub fn toggle_all(&mut self) {
        self.all_visible = !self.all_visible;
        let visible = self.all_visible;
        for slot in &mut self.revealed {
            *slot = visible;
        }
    }

    #[must_use]
    pub fn all_visible(&self) -> bool {
        self.all_visible
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardVm {
    pub recto: String,
    pub verso: String,
    pub revealed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardsVm {
    pub header: String,
    pub cards: Vec<FlashcardVm>,
    pub toggle_all_label: &'static str,
}

#[must_use]
pub fn map_flashcards(state: &FlashcardsState) -> FlashcardsVm {
    let cards = state
        .cards
        .iter()
        .zip(&state.revealed)
        .map(|(card, revealed)| {
            let recto = if card.recto.is_empty() {
                "Pas de question"
            } else {
                card.recto.as_str()
            };
            let verso = if card.verso.is_empty() {
                "Pas de réponse"
            } else {
                card.verso.as_str()
            };
            FlashcardVm {
                recto: format!("📌 {recto}"),
                verso: verso.to_string(),
                revealed: *revealed,
            }
        })
        .collect::<Vec<_>>();

    FlashcardsVm {
        header: format!("{} flashcards générées:", cards.len()),
        cards,
        toggle_all_label: if state.all_visible {
            "🙈 Cacher toutes les réponses"
        } else {
            "👁️ Montrer toutes les réponses"
        },
    }
}
