use dioxus::prelude::*;

use crate::views::PopupView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "PDF Mentor" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Une erreur est survenue" }
                        pre { "{errors:?}" }
                    }
                },
                PopupView {}
            }
        }
    }
}
