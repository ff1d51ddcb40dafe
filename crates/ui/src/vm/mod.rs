mod flashcards_vm;
mod quiz_vm;
mod resources_vm;

pub use flashcards_vm::{FlashcardVm, FlashcardsState, FlashcardsVm, map_flashcards};
pub use quiz_vm::{QuizOptionVm, QuizQuestionVm, QuizResultVm, QuizVm, map_quiz};
pub use resources_vm::{ResourceVm, ResourcesVm, map_resources};
