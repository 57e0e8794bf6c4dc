//! Line-oriented parser for quiz text produced by the model.
//!
//! Recognized lines (after trimming):
//! - `Q: ...` / `Question: ...` (case-sensitive) starts a question
//! - `A) ...` through `D) ...`, either case, adds an option
//! - `Answer: B` / `Correct answer: B` / `Correct: B` marks the correct option
//! - `Explanation: ...` attaches an explanation
//!
//! Answer and explanation markers may be wrapped in `*`/`_` emphasis. An answer
//! is either a letter (`B`, `b)`, `(C)`, `D. Paris`) or the full text of one of
//! the options. Without a usable answer marker the first option is assumed
//! correct; the format gives no other way to know.

use crate::domain::{QuizQuestion, MAX_OPTIONS};

const QUESTION_PREFIXES: [&str; 2] = ["Q:", "Question:"];
const OPTION_PREFIXES: [&str; 8] = ["A)", "B)", "C)", "D)", "a)", "b)", "c)", "d)"];
const ANSWER_PREFIXES: [&str; 3] = ["correct answer:", "answer:", "correct:"];
const EXPLANATION_PREFIX: &str = "explanation:";
const EMPHASIS: [char; 2] = ['*', '_'];

#[derive(Default)]
struct Pending {
    question: String,
    options: Vec<String>,
    /// Raw text after the answer marker, resolved once all options are known
    answer: Option<String>,
    explanation: Option<String>,
}

impl Pending {
    fn finish(mut self) -> Option<QuizQuestion> {
        if self.question.is_empty() {
            return None;
        }
        self.options.truncate(MAX_OPTIONS);

        let correct_answer = match self.answer.as_deref() {
            None => {
                tracing::debug!("No answer marker, defaulting to 0: {}", self.question);
                0
            }
            Some(raw) => match resolve_answer(raw, &self.options) {
                Some(i) if i < self.options.len() => i,
                Some(i) => {
                    tracing::warn!(
                        "Answer index {} out of range for {} options, defaulting to 0: {}",
                        i,
                        self.options.len(),
                        self.question
                    );
                    0
                }
                None => {
                    tracing::warn!(
                        "Unrecognized answer marker {:?}, defaulting to 0: {}",
                        raw,
                        self.question
                    );
                    0
                }
            },
        };

        let question = QuizQuestion {
            question: self.question,
            options: self.options,
            correct_answer,
            explanation: self.explanation,
        };
        debug_assert!(question.options.is_empty() || question.answer_in_range());

        Some(question)
    }
}

/// Split raw model output into questions, in the order they appear.
pub fn parse_questions(text: &str) -> Vec<QuizQuestion> {
    let mut questions = Vec::new();
    let mut current = Pending::default();

    for line in text.lines().map(str::trim) {
        let marker = line.trim_start_matches(EMPHASIS);

        if QUESTION_PREFIXES.iter().any(|p| line.starts_with(p)) {
            let previous = std::mem::take(&mut current);
            questions.extend(previous.finish());
            current.question = after_colon(line).to_string();
        } else if OPTION_PREFIXES.iter().any(|p| line.starts_with(p)) {
            current.options.push(line[2..].trim().to_string());
        } else if let Some(rest) = strip_prefix_ignore_case(marker, &ANSWER_PREFIXES) {
            current.answer = Some(rest.to_string());
        } else if let Some(rest) = strip_prefix_ignore_case(marker, &[EXPLANATION_PREFIX]) {
            let rest = strip_emphasis(rest);
            if !rest.is_empty() {
                current.explanation = Some(rest.to_string());
            }
        }
    }
    questions.extend(current.finish());

    questions
}

fn after_colon(line: &str) -> &str {
    line.split_once(':').map(|(_, rest)| rest.trim()).unwrap_or("")
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|p| {
        let head = line.get(..p.len())?;
        head.eq_ignore_ascii_case(p).then(|| &line[p.len()..])
    })
}

/// `** Foo bar **` -> `Foo bar`
fn strip_emphasis(text: &str) -> &str {
    text.trim().trim_matches(EMPHASIS).trim()
}

/// A standalone letter wins; otherwise the text must name one of the options.
fn resolve_answer(raw: &str, options: &[String]) -> Option<usize> {
    answer_letter(raw).or_else(|| {
        let wanted = comparable(raw);
        if wanted.is_empty() {
            return None;
        }
        options.iter().position(|o| comparable(o) == wanted)
    })
}

fn comparable(text: &str) -> String {
    strip_emphasis(text).trim_end_matches('.').trim().to_lowercase()
}

/// `B`, `b)`, `(C)`, `**D**`, `D. Paris` -> option index. The letter must stand
/// alone, so `Berlin` is not `B`.
fn answer_letter(raw: &str) -> Option<usize> {
    let rest =
        raw.trim_start_matches(|c: char| c.is_whitespace() || c == '(' || EMPHASIS.contains(&c));
    let mut chars = rest.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let standalone = match chars.next() {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, ')' | '.' | ':') || EMPHASIS.contains(&c),
    };
    match letter {
        'A'..='D' if standalone => Some(letter as usize - 'A' as usize),
        _ => None,
    }
}
