use bizadvisor::application::services::{build_prompt, clean_completion};
use bizadvisor::domain::AdviceRequest;

#[test]
fn given_echoed_prompt_when_cleaning_then_keeps_only_the_answer() {
    let prompt = build_prompt(&AdviceRequest::new("How do I grow?", "growth"));
    let raw = format!("{prompt}Open a second location.");

    assert_eq!(clean_completion(&raw), "Open a second location.");
}

#[test]
fn given_question_marker_in_answer_when_cleaning_then_keeps_text_after_it() {
    let raw = "Preamble\nBUSINESS OWNER'S QUESTION:\n  Raise prices by 5%.";

    assert_eq!(clean_completion(raw), "Raise prices by 5%.");
}

#[test]
fn given_instruction_tokens_when_cleaning_then_removes_them() {
    assert_eq!(clean_completion("<s>[INST] Hello [/INST]</s>"), "Hello");
}

#[test]
fn given_runs_and_blank_lines_when_cleaning_then_collapses_them() {
    let raw = "Great!!!!!!\n\n\n\n\nNext    step";

    assert_eq!(clean_completion(raw), "Great!!!\n\nNext step");
}

#[test]
fn given_leading_rule_when_cleaning_then_strips_it() {
    assert_eq!(clean_completion("══════════\n  Answer"), "Answer");
}

#[test]
fn given_blank_completion_when_cleaning_then_returns_empty() {
    assert_eq!(clean_completion("  \n <s></s> "), "");
}

#[test]
fn given_cleaned_text_when_cleaning_again_then_unchanged() {
    let samples = [
        "Plain answer.",
        "aa<s>aa and !!!!!! with     spaces\n\n\n\nend",
        "x START YOUR ANSWER: ═══ y START YOUR ANSWER: z",
        "══ START YOUR ANSWER:\n\nBUSINESS OWNER'S QUESTION: q ═══════ tail",
        "<s>[INST] nested [/INST]</s>\r\n\r\n\r\nmore",
    ];

    for raw in samples {
        let once = clean_completion(raw);
        assert_eq!(clean_completion(&once), once, "input {raw:?}");
    }
}
