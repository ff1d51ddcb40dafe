use dioxus::prelude::*;
use services::GenerationError;

/// Fixed text shown when the request never reached the server.
pub const SERVER_UNAVAILABLE: &str =
    "Erreur: Serveur indisponible. Assurez-vous que le serveur est lancé.";

/// Lifecycle of one result panel. Exactly one variant is in effect per panel;
/// `Hidden` doubles as the cleared state, dropping the panel's slot with it.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelState<T> {
    Hidden,
    Loading,
    Error(String),
    Ready(T),
}

impl<T> PanelState<T> {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Map a flow failure to its panel text: transport problems collapse to the
/// fixed "server unavailable" line, everything else renders its own message.
#[must_use]
pub fn flow_error_message(err: &GenerationError) -> String {
    match err {
        GenerationError::Http(_) => SERVER_UNAVAILABLE.to_string(),
        other => other.to_string(),
    }
}

/// Smooth-scroll a freshly shown panel body into view.
pub fn scroll_into_view(event: Event<MountedData>) {
    spawn(async move {
        let _ = event.data().scroll_to(ScrollBehavior::Smooth).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_the_only_invisible_state() {
        assert!(!PanelState::<String>::Hidden.is_visible());
        assert!(PanelState::<String>::Loading.is_visible());
        assert!(PanelState::Error(String::from("x")).is_visible());
        assert!(PanelState::Ready(String::from("x")).is_visible());
    }

    #[test]
    fn server_errors_render_their_own_text() {
        let err = GenerationError::Server("Document illisible".into());
        assert_eq!(flow_error_message(&err), "Document illisible");

        let err = GenerationError::HttpStatus(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(flow_error_message(&err), "Erreur serveur: 404");
    }
}
