use std::sync::Arc;

use dioxus::prelude::*;
use services::{GenerationService, RelayHandle, RelayService, ServerConfig, spawn_relay};

use crate::context::{UiApp, build_app_context};
use crate::views::PopupView;

struct TestApp {
    generation: Arc<GenerationService>,
    relay: RelayHandle,
}

impl UiApp for TestApp {
    fn generation(&self) -> Arc<GenerationService> {
        Arc::clone(&self.generation)
    }

    fn relay(&self) -> RelayHandle {
        self.relay.clone()
    }
}

#[derive(Props, Clone)]
struct SmokeProps {
    app: Arc<TestApp>,
}

impl PartialEq for SmokeProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn SmokeRoot(props: SmokeProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! {
        PopupView {}
    }
}

#[tokio::test]
async fn popup_renders_all_four_actions_and_no_panels() {
    let config = ServerConfig::default();
    let app = Arc::new(TestApp {
        generation: Arc::new(GenerationService::new(config.clone())),
        relay: spawn_relay(RelayService::new(config)),
    });

    let mut dom = VirtualDom::new_with_props(SmokeRoot, SmokeProps { app });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("PDF Mentor IA"));
    assert!(html.contains("Résumé"));
    assert!(html.contains("Quiz"));
    assert!(html.contains("Flashcards"));
    assert!(html.contains("Ressources"));

    // Every panel starts hidden: no loading or result content yet.
    assert!(!html.contains("Génération"));
    assert!(!html.contains("panel-body"));
    assert!(!html.contains("alert-overlay"));
}
