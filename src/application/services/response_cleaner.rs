use std::sync::LazyLock;

use regex::Regex;

use super::prompt_builder::{ANSWER_MARKER, QUESTION_MARKER};

const MAX_REPEAT: usize = 3;
const INSTRUCTION_TOKENS: [&str; 4] = ["[INST]", "[/INST]", "<s>", "</s>"];
const COLLAPSED_RULE: &str = "═══";

static EXCESS_LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){3,}").unwrap());
static EXCESS_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Normalizes a raw completion and drops any echoed prompt preamble.
///
/// The result is a substring of a fully normalized text, so cleaning an
/// already cleaned completion returns it unchanged. An empty result means
/// the completion carried nothing usable.
pub fn clean_completion(raw: &str) -> String {
    let mut text = normalize(raw);

    for marker in [ANSWER_MARKER, QUESTION_MARKER, COLLAPSED_RULE] {
        match text.rfind(marker) {
            Some(idx) if idx > 0 => text = text[idx + marker.len()..].trim().to_string(),
            _ => {}
        }
    }

    text.trim_start_matches(|c: char| c == '═' || c.is_whitespace())
        .trim_end()
        .to_string()
}

fn normalize(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let next = normalize_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn normalize_once(text: &str) -> String {
    let mut text = text.trim().to_string();
    for token in INSTRUCTION_TOKENS {
        text = text.replace(token, "");
    }
    let text = collapse_repeats(&text, MAX_REPEAT);
    let text = EXCESS_LINE_BREAKS.replace_all(&text, "\n\n");
    EXCESS_SPACES.replace_all(&text, " ").into_owned()
}

fn collapse_repeats(text: &str, max_repeat: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = None;
    let mut run = 0;

    for c in text.chars() {
        if Some(c) == last {
            run += 1;
        } else {
            last = Some(c);
            run = 1;
        }
        if run <= max_repeat {
            out.push(c);
        }
    }

    out
}
