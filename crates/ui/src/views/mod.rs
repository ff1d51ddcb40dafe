mod flashcards;
mod popup;
mod quiz;
mod resources;
mod source;
mod state;
mod summary;

pub use popup::PopupView;
pub use state::{PanelState, SERVER_UNAVAILABLE, flow_error_message};

pub(crate) use flashcards::FlashcardsPanel;
pub(crate) use quiz::QuizPanel;
pub(crate) use resources::ResourcesPanel;
pub(crate) use source::SourceSection;
pub(crate) use state::scroll_into_view;
pub(crate) use summary::SummaryPanel;

#[cfg(test)]
mod view_smoke;
