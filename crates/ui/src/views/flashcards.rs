use dioxus::prelude::*;

use mentor_core::model::SessionInput;

use crate::context::AppContext;
use crate::views::{PanelState, flow_error_message, scroll_into_view};
use crate::vm::{FlashcardsState, map_flashcards};

#[component]
pub fn FlashcardsPanel(input: Signal<SessionInput>, mut alert: Signal<Option<String>>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut state = use_signal(|| PanelState::<FlashcardsState>::Hidden);

    let on_generate = move |_: MouseEvent| {
        let snapshot = input.read().clone();
        if let Err(err) = snapshot.validate() {
            alert.set(Some(err.to_string()));
            return;
        }
        let generation = ctx.generation();
        state.set(PanelState::Loading);
        spawn(async move {
            match generation.generate_flashcards(&snapshot).await {
                Ok(cards) => state.set(PanelState::Ready(FlashcardsState::new(cards))),
                Err(err) => state.set(PanelState::Error(flow_error_message(&err))),
            }
        });
    };

    rsx! {
        section { class: "panel flashcards-panel",
            div { class: "panel-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: state().is_loading(),
                    onclick: on_generate,
                    if state().is_loading() { "⏳ Chargement..." } else { "🗂️ Flashcards" }
                }
                if state().is_visible() {
                    button {
                        class: "btn clear-btn",
                        r#type: "button",
                        onclick: move |_| state.set(PanelState::Hidden),
                        "Effacer"
                    }
                }
            }
            if state().is_visible() {
                div { class: "panel-body", onmounted: scroll_into_view,
                    match state() {
                        PanelState::Loading => rsx! {
                            div { class: "loading", "⏳ Génération des flashcards en cours..." }
                        },
                        PanelState::Error(message) => rsx! {
                            div { class: "error", "❌ {message}" }
                        },
                        PanelState::Ready(cards) => {
                            if cards.is_empty() {
                                rsx! {
                                    div { class: "empty-state", "Aucune flashcard générée." }
                                }
                            } else {
                                rsx! {
                                    FlashcardList { cards, state }
                                }
                            }
                        }
                        PanelState::Hidden => rsx! {},
                    }
                }
            }
        }
    }
}

#[component]
fn FlashcardList(cards: FlashcardsState, state: Signal<PanelState<FlashcardsState>>) -> Element {
    let vm = map_flashcards(&cards);

    let card_blocks = vm
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let mut state = state;
            rsx! {
                div { class: "flashcard",
                    div {
                        class: "flashcard-recto",
                        onclick: move |_| {
                            state.with_mut(|panel| {
                                if let PanelState::Ready(cards) = panel {
                                    cards.toggle(index);
                                }
                            });
                        },
                        "{card.recto}"
                    }
                    if card.revealed {
                        div { class: "flashcard-verso",
                            strong { "Réponse:" }
                            br {}
                            "{card.verso}"
                        }
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    let mut state = state;
    rsx! {
        div { class: "flashcards-list",
            h4 { class: "flashcards-header", "{vm.header}" }
            {card_blocks.into_iter()}
            button {
                class: "btn toggle-all-btn",
                r#type: "button",
                onclick: move |_| {
                    state.with_mut(|panel| {
                        if let PanelState::Ready(cards) = panel {
                            cards.toggle_all();
                        }
                    });
                },
                "{vm.toggle_all_label}"
            }
        }
    }
}
