use std::fmt::Write;

use crate::domain::AdviceRequest;

/// Horizontal rule framing the prompt sections.
pub const SECTION_RULE: &str = "═══════════════════════════════════════════════════════";
pub const QUESTION_MARKER: &str = "BUSINESS OWNER'S QUESTION:";
pub const ANSWER_MARKER: &str = "START YOUR ANSWER:";

const PREAMBLE: &str = "You are a professional business consultant experienced with small \
businesses. Your task is to give specific, practical and useful advice based on real data.";

/// Renders the full prompt for one chat turn. Missing profile fields, files
/// or category simply leave their section out.
pub fn build_prompt(request: &AdviceRequest) -> String {
    let mut prompt = String::new();

    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n");

    push_identity(&mut prompt, request);
    push_available_data(&mut prompt, &request.file_texts);

    if let Some(category) = request.parsed_category() {
        let _ = write!(prompt, "QUESTION CATEGORY: {}\n\n", category.label());
    }

    let _ = write!(prompt, "{QUESTION_MARKER}\n{}\n\n", request.question);

    let _ = writeln!(prompt, "{SECTION_RULE}");
    prompt.push_str("ANSWER REQUIREMENTS:\n");
    let _ = write!(prompt, "{SECTION_RULE}\n\n");

    push_requirements(&mut prompt, request);

    let _ = writeln!(prompt, "{SECTION_RULE}");
    let _ = writeln!(prompt, "{ANSWER_MARKER}");
    let _ = writeln!(prompt, "{SECTION_RULE}");

    prompt
}

fn push_identity(prompt: &mut String, request: &AdviceRequest) {
    if !request.username.is_empty() {
        let _ = writeln!(prompt, "BUSINESS OWNER: {}", request.username);
    }
    if !request.business_name.is_empty() {
        let _ = writeln!(prompt, "BUSINESS NAME: {}", request.business_name);
    }
    if !request.specialization.is_empty() {
        let _ = writeln!(prompt, "BUSINESS SPECIALIZATION: {}", request.specialization);
    }
    if request.has_identity() {
        prompt.push('\n');
    }
}

fn push_available_data(prompt: &mut String, file_texts: &[String]) {
    if file_texts.is_empty() {
        prompt.push_str("NOTE: No files with business data have been uploaded.\n");
        prompt.push_str(
            "If the question needs data from files, politely ask the user to upload them.\n\n",
        );
        return;
    }

    let _ = writeln!(prompt, "{SECTION_RULE}");
    prompt.push_str("AVAILABLE BUSINESS DATA:\n");
    let _ = writeln!(prompt, "{SECTION_RULE}");

    let separator = "-".repeat(55);
    for (index, text) in file_texts.iter().enumerate() {
        let _ = writeln!(prompt, "\n[File {}]", index + 1);
        prompt.push_str(text);
        let _ = writeln!(prompt, "\n{separator}");
    }

    prompt.push_str(
        "\nCRITICAL: Study ALL of the file data above carefully before writing your answer!\n\n",
    );
}

fn push_requirements(prompt: &mut String, request: &AdviceRequest) {
    prompt.push_str("1. BE SPECIFIC:\n");
    prompt.push_str("   - Use EXACT figures, names and dates from the files\n");
    prompt.push_str("   - Give examples taken from the uploaded data\n");
    prompt.push_str("   - Avoid generic statements that are not tied to the data\n\n");

    prompt.push_str("2. BE STRUCTURED:\n");
    prompt.push_str("   - Start with a short conclusion or summary\n");
    prompt.push_str("   - Use lists and bullet points for readability\n");
    prompt.push_str("   - Highlight the key points\n\n");

    prompt.push_str("3. BE PRACTICAL:\n");
    prompt.push_str("   - Give concrete recommendations that can be applied\n");
    prompt.push_str("   - Suggest steps to solve the problem\n");
    let _ = write!(prompt, "   - {}\n\n", business_context(request));

    prompt.push_str("4. BE ANALYTICAL:\n");
    prompt.push_str("   - Compare data across periods and categories\n");
    prompt.push_str("   - Identify trends and patterns\n");
    prompt.push_str("   - Point out problems and opportunities\n\n");

    prompt.push_str("5. BE PROFESSIONAL:\n");
    prompt.push_str("   - Write in a businesslike but clear style\n");
    prompt.push_str("   - Avoid boilerplate phrases\n");
    prompt.push_str("   - Be honest: if the data is insufficient, say so\n\n");

    prompt.push_str("6. FORMAT:\n");
    prompt.push_str("   - Answer in the language of the question\n");
    prompt.push_str("   - Use paragraphs for structure\n");
    prompt.push_str("   - Do NOT repeat the question at the start of the answer\n");
    prompt.push_str("   - Get straight to the point\n\n");
}

fn business_context(request: &AdviceRequest) -> String {
    if !request.has_identity() {
        return "Take the specifics of small businesses into account".to_string();
    }

    let mut line = String::from("Take into account the specifics of ");
    if !request.username.is_empty() {
        let _ = write!(line, "{}'s business", request.username);
    }
    if !request.business_name.is_empty() {
        if request.username.is_empty() {
            let _ = write!(line, "the business \"{}\"", request.business_name);
        } else {
            let _ = write!(line, " (\"{}\")", request.business_name);
        }
    }
    if !request.specialization.is_empty() {
        if request.username.is_empty() && request.business_name.is_empty() {
            let _ = write!(line, "a business in {}", request.specialization);
        } else {
            let _ = write!(line, " in {}", request.specialization);
        }
    }
    line
}
