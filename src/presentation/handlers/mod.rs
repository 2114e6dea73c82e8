mod error;
mod flashcards;
mod health;
mod quiz;
mod summarize;
mod upload;

pub use error::{ApiError, ErrorResponse};
pub use flashcards::{FlashcardsResponse, flashcards_handler};
pub use health::health_handler;
pub use quiz::{QuizResponse, quiz_handler};
pub use summarize::{SummaryResponse, summarize_handler};
pub use upload::FILE_FIELD;
