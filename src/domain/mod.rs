mod document;
mod flashcard;
mod quiz_item;
mod summary;

pub use document::{Document, DocumentFormat};
pub use flashcard::Flashcard;
pub use quiz_item::QuizItem;
pub use summary::Summary;
