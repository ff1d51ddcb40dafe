use dioxus::prelude::*;

use mentor_core::model::{PdfFile, SessionInput, is_http_url};

#[derive(Clone, Debug, PartialEq, Eq)]
struct StatusLine {
    message: String,
    kind: &'static str,
}

impl StatusLine {
    fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: "success",
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: "error",
        }
    }

    fn loading(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: "loading",
        }
    }
}

/// PDF selection: local file picker plus a URL field.
#[component]
pub fn SourceSection(mut input: Signal<SessionInput>) -> Element {
    let mut status = use_signal(|| None::<StatusLine>);

    rsx! {
        section { class: "source-section",
            div { class: "file-row",
                label { class: "field-label", r#for: "pdf-file", "📄 Fichier PDF" }
                input {
                    id: "pdf-file",
                    r#type: "file",
                    accept: ".pdf",
                    onchange: move |evt| {
                        let Some(file) = evt.files().into_iter().next() else {
                            return;
                        };
                        spawn(async move {
                            let name = file.name();
                            match file.read_bytes().await {
                                Ok(bytes) => {
                                    input.write().file = Some(PdfFile {
                                        name,
                                        bytes: bytes.to_vec(),
                                    });
                                    status.set(Some(StatusLine::success(
                                        "✅ PDF sélectionné - Prêt à générer du contenu",
                                    )));
                                }
                                Err(_) => {
                                    status.set(Some(StatusLine::error(
                                        "❌ Impossible de lire le fichier sélectionné",
                                    )));
                                }
                            }
                        });
                    },
                }
            }
            div { class: "url-row",
                input {
                    class: "url-field",
                    r#type: "text",
                    placeholder: "https://exemple.com/document.pdf",
                    value: "{input().url}",
                    oninput: move |evt| input.write().url = evt.value(),
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let url = input.read().url.trim().to_string();
                        if url.is_empty() {
                            status.set(Some(StatusLine::error("❌ Veuillez entrer une URL")));
                        } else if !is_http_url(&url) {
                            status.set(Some(StatusLine::error(
                                "❌ URL invalide. Doit commencer par http:// ou https://",
                            )));
                        } else {
                            // Remote fetch is not wired up; the relay stays idle.
                            status.set(Some(StatusLine::loading(
                                "⏳ Cette fonctionnalité est en cours de développement...",
                            )));
                        }
                    },
                    "🌐 Télécharger"
                }
            }
            if let Some(line) = status() {
                p { class: "status status-{line.kind}", "{line.message}" }
            }
        }
    }
}
