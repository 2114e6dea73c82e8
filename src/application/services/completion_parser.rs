//! Turns free-form completions into flashcard and quiz records.
//!
//! The model is asked to emit records separated by `---`. Each block is
//! compacted to its non-empty trimmed lines and accepted only when its first
//! lines carry the expected markers at the very start. Anything else is
//! dropped without error, so a sloppy completion yields fewer records rather
//! than a failed request.

use crate::domain::{Flashcard, QuizItem};

const BLOCK_DELIMITER: &str = "---";

const QUESTION_MARKER: &str = "Q:";
const ANSWER_MARKER: &str = "A:";
const QUIZ_ANSWER_MARKER: &str = "Answer:";
const OPTION_MARKERS: [&str; 4] = ["A.", "B.", "C.", "D."];

const MIN_FLASHCARD_LINES: usize = 2;
const MIN_QUIZ_LINES: usize = 6;
const OPTION_LINES: std::ops::Range<usize> = 1..5;

pub fn parse_flashcards(raw: &str) -> Vec<Flashcard> {
    compact_blocks(raw)
        .filter_map(|lines| flashcard_from_block(&lines))
        .collect()
}

pub fn parse_quiz(raw: &str) -> Vec<QuizItem> {
    compact_blocks(raw)
        .filter_map(|lines| quiz_item_from_block(&lines))
        .collect()
}

fn compact_blocks(raw: &str) -> impl Iterator<Item = Vec<&str>> {
    raw.split(BLOCK_DELIMITER).map(|block| {
        block
            .trim()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    })
}

/// Marker must open the line; `Q :` or ` Q:` after trimming never match.
fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.strip_prefix(marker).map(str::trim)
}

fn flashcard_from_block(lines: &[&str]) -> Option<Flashcard> {
    if lines.len() < MIN_FLASHCARD_LINES {
        return None;
    }

    let question = strip_marker(lines[0], QUESTION_MARKER)?;
    let answer = strip_marker(lines[1], ANSWER_MARKER)?;

    Some(Flashcard::new(question, answer))
}

fn quiz_item_from_block(lines: &[&str]) -> Option<QuizItem> {
    if lines.len() < MIN_QUIZ_LINES || !lines[1].starts_with(OPTION_MARKERS[0]) {
        return None;
    }

    let question = strip_marker(lines[0], QUESTION_MARKER)?;

    let options = lines[OPTION_LINES]
        .iter()
        .copied()
        .filter_map(option_text)
        .map(String::from)
        .collect();

    let answer = lines
        .iter()
        .find_map(|line| strip_marker(line, QUIZ_ANSWER_MARKER))
        .unwrap_or_default();

    Some(QuizItem {
        question: question.to_string(),
        options,
        answer: answer.to_string(),
    })
}

fn option_text(line: &str) -> Option<&str> {
    OPTION_MARKERS
        .iter()
        .find_map(|marker| strip_marker(line, marker))
}
