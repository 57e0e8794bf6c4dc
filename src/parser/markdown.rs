//! Study plan Markdown cleanup.
//!
//! Models asked for a plan tend to emit `**Topic:**-Foo` label lines. These are
//! promoted to headings and `* ` bullets become `- ` bullets. Anything else is
//! left alone.

use regex::Regex;
use std::sync::LazyLock;

static TOPIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\*\*Topic:\*\*-(.*)$").unwrap());
static SUBTOPIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\*\*Subtopic:\*\*-(.*)$").unwrap());
// Anchored at line start so the closing `** ` of a bold label is untouched.
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)\* ").unwrap());

/// Rewrite label lines into headings and normalize bullet markers.
pub fn reformat_plan(text: &str) -> String {
    let text = TOPIC_RE.replace_all(text, "### **Topic:** ${1}");
    let text = SUBTOPIC_RE.replace_all(&text, "#### **Subtopic:** ${1}");
    BULLET_RE.replace_all(&text, "${1}- ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_and_bullet() {
        let out = reformat_plan("**Topic:**-Intro\n* item");
        assert_eq!(out, "### **Topic:** Intro\n- item");
    }

    #[test]
    fn test_subtopic() {
        let out = reformat_plan("**Subtopic:**-Linear equations\nsolve for x\n");
        assert_eq!(out, "#### **Subtopic:** Linear equations\nsolve for x\n");
    }

    #[test]
    fn test_every_line_bullet_converted() {
        let out = reformat_plan("* a\n* b\n  * nested\ntext * not a bullet");
        assert_eq!(out, "- a\n- b\n  - nested\ntext * not a bullet");
    }

    #[test]
    fn test_idempotent_on_heading_form() {
        let once = reformat_plan("**Topic:**-Day 1\n**Subtopic:**-Basics\n* read\n* practice\n");
        let twice = reformat_plan(&once);
        assert_eq!(once, twice);
        assert_eq!(
            once,
            "### **Topic:** Day 1\n#### **Subtopic:** Basics\n- read\n- practice\n"
        );
    }

    #[test]
    fn test_plain_markdown_passes_through() {
        let text = "## Day 1\n**Focus:** variables\n1. Read chapter 1\n";
        assert_eq!(reformat_plan(text), text);
    }

    #[test]
    fn test_label_mid_line() {
        let out = reformat_plan("Day 1 **Topic:**-Sets\n");
        assert_eq!(out, "Day 1 ### **Topic:** Sets\n");
    }

    #[test]
    fn test_empty() {
        assert_eq!(reformat_plan(""), "");
    }
}
