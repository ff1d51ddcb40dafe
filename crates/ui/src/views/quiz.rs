use dioxus::prelude::*;

use mentor_core::model::{OptionMark, QuizAttempt, SessionInput};

use crate::context::AppContext;
use crate::views::{PanelState, flow_error_message, scroll_into_view};
use crate::vm::map_quiz;

#[component]
pub fn QuizPanel(input: Signal<SessionInput>, mut alert: Signal<Option<String>>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut state = use_signal(|| PanelState::<QuizAttempt>::Hidden);

    let on_generate = move |_: MouseEvent| {
        let snapshot = input.read().clone();
        if let Err(err) = snapshot.validate() {
            alert.set(Some(err.to_string()));
            return;
        }
        let generation = ctx.generation();
        // Regeneration replaces the attempt wholesale: answers and the
        // submitted flag go with it.
        state.set(PanelState::Loading);
        spawn(async move {
            match generation.generate_quiz(&snapshot).await {
                Ok(questions) => state.set(PanelState::Ready(QuizAttempt::new(questions))),
                Err(err) => state.set(PanelState::Error(flow_error_message(&err))),
            }
        });
    };

    rsx! {
        section { class: "panel quiz-panel",
            div { class: "panel-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: state().is_loading(),
                    onclick: on_generate,
                    if state().is_loading() { "⏳ Chargement..." } else { "❓ Quiz" }
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
                            div { class: "loading", "⏳ Génération du quiz en cours..." }
                        },
                        PanelState::Error(message) => rsx! {
                            div { class: "error", "❌ {message}" }
                        },
                        PanelState::Ready(attempt) => rsx! {
                            QuizForm { attempt, state }
                        },
                        PanelState::Hidden => rsx! {},
                    }
                }
            }
        }
    }
}

#[component]
fn QuizForm(attempt: QuizAttempt, state: Signal<PanelState<QuizAttempt>>) -> Element {
    let vm = map_quiz(&attempt);

    let questions = vm
        .questions
        .iter()
        .enumerate()
        .map(|(question_index, question)| {
            let options = question
                .options
                .iter()
                .map(|option| {
                    let text = option.text.clone();
                    let mut state = state;
                    let label_class = match option.mark {
                        OptionMark::Correct => "option-label correct",
                        OptionMark::Incorrect => "option-label incorrect",
                        OptionMark::Plain if option.selected => "option-label selected",
                        OptionMark::Plain => "option-label",
                    };
                    let suffix = match option.mark {
                        OptionMark::Correct => " ✓",
                        OptionMark::Incorrect => " ✗",
                        OptionMark::Plain => "",
                    };
                    rsx! {
                        label { class: "{label_class}",
                            input {
                                r#type: "radio",
                                name: "q{question_index}",
                                checked: option.selected,
                                disabled: vm.submitted,
                                onchange: move |_| {
                                    state.with_mut(|panel| {
                                        if let PanelState::Ready(attempt) = panel {
                                            attempt.select_answer(question_index, &text);
                                        }
                                    });
                                },
                            }
                            span { "{option.text}{suffix}" }
                        }
                    }
                })
                .collect::<Vec<_>>();
            rsx! {
                div { class: "question-block",
                    p { class: "question-text", strong { "{question.label}" } }
                    div { class: "options-container", {options.into_iter()} }
                }
            }
        })
        .collect::<Vec<_>>();

    let mut state = state;
    rsx! {
        form { class: "quiz-form",
            {questions.into_iter()}
            button {
                class: "btn submit-btn",
                r#type: "button",
                disabled: !vm.submit_enabled,
                onclick: move |_| {
                    state.with_mut(|panel| {
                        if let PanelState::Ready(attempt) = panel {
                            attempt.submit();
                        }
                    });
                },
                if vm.submitted { "Quiz soumis" } else { "Valider le quiz" }
            }
            if let Some(result) = vm.result {
                div { class: "quiz-result",
                    h3 { style: "color: {result.color};", "Résultats du Quiz" }
                    div { class: "quiz-score", style: "color: {result.color};",
                        "{result.score_label}"
                    }
                    div { class: "quiz-percentage", style: "color: {result.color};",
                        "{result.percentage_label}"
                    }
                    div { class: "quiz-message", "{result.message}" }
                }
            }
        }
    }
}
