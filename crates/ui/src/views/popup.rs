use dioxus::prelude::*;

use mentor_core::model::SessionInput;

use crate::views::{FlashcardsPanel, QuizPanel, ResourcesPanel, SourceSection, SummaryPanel};

/// The whole popup surface: source picker, four generation flows, and the
/// blocking alert raised when a flow starts without a PDF selected.
///
/// Flows are independent: each owns its panel signal and may load while the
/// others do.
#[component]
pub fn PopupView() -> Element {
    let input = use_signal(SessionInput::default);
    let mut alert = use_signal(|| None::<String>);

    rsx! {
        div { class: "popup",
            header { class: "popup-header",
                h1 { "PDF Mentor IA" }
                p { class: "popup-subtitle",
                    "Résumé, quiz, flashcards et ressources à partir d'un PDF."
                }
            }

            SourceSection { input }

            SummaryPanel { input, alert }
            QuizPanel { input, alert }
            FlashcardsPanel { input, alert }
            ResourcesPanel { input, alert }

            if let Some(message) = alert() {
                div { class: "alert-overlay",
                    div { class: "alert-box",
                        p { class: "alert-message", "⚠️ {message}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| alert.set(None),
                            "OK"
                        }
                    }
                }
            }
        }
    }
}
