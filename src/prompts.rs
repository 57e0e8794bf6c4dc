//! Prompt text sent to the chat-completion provider.
//!
//! Request values are embedded verbatim. Nothing here escapes user input.

use crate::domain::{PlanParams, QuizParams};

/// System instruction shared by every call
pub const SYSTEM_PROMPT: &str = "You are a knowledgeable educational assistant.";

/// Single-pass study plan prompt.
pub fn plan_prompt(params: &PlanParams) -> String {
    format!(
        "Create a detailed {days}-day study plan for {topic} at {difficulty} difficulty level.\n\
         Include:\n\
         1. Daily topics and subtopics\n\
         2. Learning objectives\n\
         3. Practice exercises\n\
         4. Review points\n\
         \n\
         {format}",
        days = params.num_days,
        topic = params.topic,
        difficulty = params.difficulty,
        format = PLAN_FORMAT,
    )
}

/// First pass of the two-step plan flow: a rough lesson outline.
pub fn plan_draft_prompt(params: &PlanParams) -> String {
    format!(
        "Draft a lesson outline for {topic} at {difficulty} difficulty level, \
         covering enough material for {days} days of study.\n\
         For each lesson give a topic, its subtopics, and one or two learning objectives.\n\
         Keep it brief; it will be expanded later.",
        days = params.num_days,
        topic = params.topic,
        difficulty = params.difficulty,
    )
}

/// Second pass: turn the draft outline into the final day-by-day plan.
pub fn plan_refine_prompt(params: &PlanParams, draft: &str) -> String {
    format!(
        "Here is a draft lesson outline for {topic}:\n\
         \n\
         {draft}\n\
         \n\
         Refine it into a detailed {days}-day study plan at {difficulty} difficulty level.\n\
         Spread the material evenly across the days and add learning objectives, \
         practice exercises and review points for each day.\n\
         \n\
         {format}",
        days = params.num_days,
        topic = params.topic,
        difficulty = params.difficulty,
        draft = draft.trim(),
        format = PLAN_FORMAT,
    )
}

const PLAN_FORMAT: &str = "Format the response in Markdown with clear headers and bullet points.\n\
     Start each day's main topic on its own line as `**Topic:**-<topic>` and each subtopic \
     as `**Subtopic:**-<subtopic>`. Use `* ` for bullet points.";

/// Quiz prompt. Asks for explicit answer and explanation lines so the parser
/// can recover the correct option instead of guessing.
pub fn quiz_prompt(params: &QuizParams) -> String {
    let (option_rule, option_lines) = if is_true_false(&params.quiz_type) {
        (
            "Every question must have exactly two answer options, True and False.",
            "A) True\nB) False",
        )
    } else {
        (
            "Every question must have exactly four answer options.",
            "A) <option>\nB) <option>\nC) <option>\nD) <option>",
        )
    };

    format!(
        "Create {count} {quiz_type} questions about {topic}.\n\
         {option_rule}\n\
         Use exactly this layout for each question, with nothing else between questions:\n\
         \n\
         Question: <question text>\n\
         {option_lines}\n\
         Answer: <letter of the correct option>\n\
         Explanation: <one sentence on why it is correct>",
        count = params.num_questions,
        quiz_type = params.quiz_type,
        topic = params.topic,
    )
}

/// `True/False`, `true or false`, `True-False` ...
fn is_true_false(quiz_type: &str) -> bool {
    let lower = quiz_type.to_lowercase();
    lower.contains("true") && lower.contains("false")
}
