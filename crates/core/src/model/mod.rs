mod flashcard;
mod quiz;
mod resource;
mod source;

pub use flashcard::Flashcard;
pub use quiz::{OptionMark, Question, QuizAttempt, QuizReport, ScoreBand};
pub use resource::Resource;
pub use source::{PdfFile, PdfSource, SessionInput, SourceError, is_http_url, is_pdf_url};
