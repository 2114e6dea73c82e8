mod completion_parser;
mod prompts;
mod study_service;

pub use completion_parser::{parse_flashcards, parse_quiz};
pub use prompts::{
    FLASHCARDS_SYSTEM_PROMPT, QUIZ_SYSTEM_PROMPT, SUMMARY_SYSTEM_PROMPT, StudyAid,
};
pub use study_service::{StudyService, StudyServiceError};
