use dioxus::prelude::*;

use mentor_core::model::SessionInput;

use crate::context::AppContext;
use crate::views::{PanelState, flow_error_message, scroll_into_view};

#[component]
pub fn SummaryPanel(input: Signal<SessionInput>, mut alert: Signal<Option<String>>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut state = use_signal(|| PanelState::<String>::Hidden);

    let on_generate = move |_: MouseEvent| {
        let snapshot = input.read().clone();
        if let Err(err) = snapshot.validate() {
            alert.set(Some(err.to_string()));
            return;
        }
        let generation = ctx.generation();
        state.set(PanelState::Loading);
        spawn(async move {
            match generation.generate_summary(&snapshot).await {
                Ok(summary) => state.set(PanelState::Ready(summary)),
                Err(err) => state.set(PanelState::Error(flow_error_message(&err))),
            }
        });
    };

    rsx! {
        section { class: "panel summary-panel",
            div { class: "panel-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: state().is_loading(),
                    onclick: on_generate,
                    if state().is_loading() { "⏳ Chargement..." } else { "📝 Résumé" }
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
                            div { class: "loading", "⏳ Génération du résumé en cours..." }
                        },
                        PanelState::Error(message) => rsx! {
                            div { class: "error", "❌ {message}" }
                        },
                        PanelState::Ready(summary) => rsx! {
                            div { class: "summary-text", "{summary}" }
                        },
                        PanelState::Hidden => rsx! {},
                    }
                }
            }
        }
    }
}
