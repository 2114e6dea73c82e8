pub const SUMMARY_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes study material.";

pub const FLASHCARDS_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that creates flashcards from study material.";

pub const QUIZ_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that creates multiple-choice quiz questions from study material.";

const SUMMARY_INSTRUCTIONS: &str =
    "Summarize the following study material in a concise paragraph:\n";

const FLASHCARDS_INSTRUCTIONS: &str = "Generate a list of flashcards (question and answer pairs) from the following study material. \
Format each as: Q: <question>\nA: <answer>\n---\n";

const QUIZ_INSTRUCTIONS: &str = "Generate 5 quiz questions with 4 options each and the correct answer from the following study material. \
Format each as: Q: <question>\nA. <option1>\nB. <option2>\nC. <option3>\nD. <option4>\nAnswer: <correct option letter>\n---\n";

/// The three study aids the service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyAid {
    Summary,
    Flashcards,
    Quiz,
}

impl StudyAid {
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Summary => SUMMARY_SYSTEM_PROMPT,
            Self::Flashcards => FLASHCARDS_SYSTEM_PROMPT,
            Self::Quiz => QUIZ_SYSTEM_PROMPT,
        }
    }

    pub fn user_prompt(&self, material: &str) -> String {
        let instructions = match self {
            Self::Summary => SUMMARY_INSTRUCTIONS,
            Self::Flashcards => FLASHCARDS_INSTRUCTIONS,
            Self::Quiz => QUIZ_INSTRUCTIONS,
        };
        format!("{instructions}{material}")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Flashcards => "flashcards",
            Self::Quiz => "quiz",
        }
    }
}
