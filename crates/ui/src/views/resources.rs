use dioxus::prelude::*;

use mentor_core::model::{Resource, SessionInput};

use crate::context::AppContext;
use crate::views::{PanelState, flow_error_message, scroll_into_view};
use crate::vm::map_resources;

#[component]
pub fn ResourcesPanel(input: Signal<SessionInput>, mut alert: Signal<Option<String>>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut state = use_signal(|| PanelState::<Vec<Resource>>::Hidden);

    let on_generate = move |_: MouseEvent| {
        let snapshot = input.read().clone();
        if let Err(err) = snapshot.validate() {
            alert.set(Some(err.to_string()));
            return;
        }
        let generation = ctx.generation();
        state.set(PanelState::Loading);
        spawn(async move {
            match generation.generate_resources(&snapshot).await {
                Ok(resources) => state.set(PanelState::Ready(resources)),
                Err(err) => state.set(PanelState::Error(flow_error_message(&err))),
            }
        });
    };

    rsx! {
        section { class: "panel resources-panel",
            div { class: "panel-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: state().is_loading(),
                    onclick: on_generate,
                    if state().is_loading() { "⏳ Chargement..." } else { "📚 Ressources" }
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
                            div { class: "loading", "⏳ Génération des ressources en cours..." }
                        },
                        PanelState::Error(message) => rsx! {
                            div { class: "error", "❌ {message}" }
                        },
                        PanelState::Ready(resources) => {
                            if resources.is_empty() {
                                rsx! {
                                    div { class: "empty-state", "Aucune ressource générée." }
                                }
                            } else {
                                let vm = map_resources(&resources);
                                let items = vm
                                    .items
                                    .iter()
                                    .map(|item| rsx! {
                                        div { class: "resource-item",
                                            span { class: "resource-type", "{item.kind}" }
                                            div { class: "resource-title", "{item.title}" }
                                            div { class: "resource-description", "{item.description}" }
                                            div { class: "resource-why",
                                                strong { "Pourquoi utile: " }
                                                "{item.why_useful}"
                                            }
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                rsx! {
                                    div { class: "resources-list",
                                        h4 { class: "resources-header", "{vm.header}" }
                                        {items.into_iter()}
                                    }
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
