use serde::Deserialize;

/// One generated flashcard: question side (`recto`) and answer side (`verso`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Flashcard {
    #[serde(default)]
    pub recto: String,
    #[serde(default)]
    pub verso: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_wire_shape() {
        let card: Flashcard =
            serde_json::from_str(r#"{"recto": "Qu'est-ce que Rust ?", "verso": "Un langage."}"#)
                .unwrap();
        assert_eq!(card.recto, "Qu'est-ce que Rust ?");
        assert_eq!(card.verso, "Un langage.");
    }

    #[test]
    fn missing_sides_default_to_empty() {
        let card: Flashcard = serde_json::from_str("{}").unwrap();
        assert!(card.recto.is_empty());
        assert!(card.verso.is_empty());
    }
}
