//! Deterministic answers assembled from keyword hits in the uploaded files.
//!
//! Used whenever no completion provider is configured or every provider
//! failed. Matching is case-insensitive substring search over English and
//! Russian keyword sets; excerpts are always copied from the original text.

use std::fmt::Write;

use crate::domain::{AdviceRequest, Category};

/// Present in every answer given without uploaded files.
pub const NO_FILES_NOTICE: &str = "No files uploaded yet.";

const PROFIT: &[&str] = &["profit", "прибыль"];
const REVENUE: &[&str] = &["revenue", "выручка"];
const INCOME: &[&str] = &["income", "доход"];
const EXPENSE: &[&str] = &["expense", "cost", "расход", "затрат"];
const SALES: &[&str] = &["sales", "продаж"];
const GROWTH: &[&str] = &["growth", "grew", "increase", "рост", "вырос", "увеличил"];
const COMPARISON: &[&str] = &["comparison", "сравнение"];
const STAFF: &[&str] = &[
    "employee",
    "staff",
    "worker",
    "сотрудник",
    "работник",
    "персонал",
];
const FIRST_PERIOD: &[&str] = &["november", "ноябрь"];
const SECOND_PERIOD: &[&str] = &["december", "декабрь"];
const HOW: &[&str] = &["how", "как"];

const FINANCIAL_HEADING: &str = "**Financial analysis:**\n\n";
const STAFF_HEADING: &str = "**Staff information:**\n\n";

const SECTION_LINE_LIMIT: usize = 200;
const COMPARISON_LINE_LIMIT: usize = 150;
const EMPLOYEE_BLOCK_LIMIT: usize = 300;
const EMPLOYEE_FOLLOWING_LINES: usize = 4;
const EMPLOYEE_BLOCKS_COLLECTED: usize = 3;
const EMPLOYEE_BLOCKS_RENDERED: usize = 2;

/// Builds the fallback answer. Never fails and never returns an empty string.
pub fn heuristic_answer(request: &AdviceRequest) -> String {
    let corpus = Corpus::new(&request.file_texts);
    let question = request.question.to_lowercase();
    let category = request.parsed_category();
    let mut out = String::new();

    let asks_financial = contains_any(&question, PROFIT)
        || contains_any(&question, REVENUE)
        || contains_any(&question, INCOME)
        || contains_any(&question, EXPENSE);
    if category == Some(Category::Financial) || asks_financial {
        push_financial_section(&mut out, &corpus);
    }

    if category == Some(Category::Hr) || contains_any(&question, STAFF) {
        push_staff_section(&mut out, &corpus);
    }

    if category == Some(Category::Legal) {
        out.push_str("**Legal question:**\n\n");
        out.push_str("For precise answers to legal questions I recommend consulting a lawyer.\n");
        out.push_str("I can help with general questions but cannot give legal advice.\n\n");
    }

    let general = request.category.is_empty() || category == Some(Category::Marketing);
    if general || out.is_empty() {
        push_general_section(&mut out, &corpus, &question);
    }

    if corpus.is_empty() && !out.contains(NO_FILES_NOTICE) {
        let _ = write!(
            out,
            "{NO_FILES_NOTICE} Upload your business data to get answers based on it.\n\n"
        );
    }

    if !request.business_name.is_empty() || !request.specialization.is_empty() {
        out.push_str("**About your business:**\n");
        if !request.business_name.is_empty() {
            let _ = writeln!(out, "- Name: {}", request.business_name);
        }
        if !request.specialization.is_empty() {
            let _ = writeln!(out, "- Specialization: {}", request.specialization);
        }
    }

    out.trim_end().to_string()
}

struct Corpus<'a> {
    files: &'a [String],
    text: String,
    lower: String,
}

impl<'a> Corpus<'a> {
    fn new(files: &'a [String]) -> Self {
        let text = files.join("\n\n");
        let lower = text.to_lowercase();
        Self { files, text, lower }
    }

    fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn mentions(&self, keywords: &[&str]) -> bool {
        contains_any(&self.lower, keywords)
    }

    fn lines_with(&self, keywords: &[&str]) -> Vec<&str> {
        lines_containing(&self.text, keywords)
    }
}

fn push_financial_section(out: &mut String, corpus: &Corpus<'_>) {
    out.push_str(FINANCIAL_HEADING);

    if corpus.is_empty() {
        let _ = write!(
            out,
            "{NO_FILES_NOTICE} Upload sales reports to analyse your financial data.\n\n"
        );
        return;
    }

    let has_profit = corpus.mentions(PROFIT);
    let has_revenue = corpus.mentions(REVENUE);

    if has_profit {
        push_excerpts(out, "Profit analysis", &corpus.lines_with(PROFIT), 3, SECTION_LINE_LIMIT);
    }
    if has_revenue {
        push_excerpts(out, "Revenue analysis", &corpus.lines_with(REVENUE), 3, SECTION_LINE_LIMIT);
    }
    if corpus.mentions(GROWTH) {
        push_excerpts(out, "Growth dynamics", &corpus.lines_with(GROWTH), 3, SECTION_LINE_LIMIT);
    }

    if !has_profit && !has_revenue {
        out.push_str("I analysed your files but found no detailed financial data.\n");
        out.push_str("Please upload sales reports for a more accurate analysis.\n\n");
    }
}

fn push_staff_section(out: &mut String, corpus: &Corpus<'_>) {
    out.push_str(STAFF_HEADING);

    if corpus.is_empty() {
        let _ = write!(
            out,
            "{NO_FILES_NOTICE} Upload a file with staff information to work with personnel data.\n\n"
        );
        return;
    }

    if !corpus.mentions(STAFF) {
        out.push_str("No staff information was found in the uploaded files.\n");
        out.push_str("Upload a file with staff data to get details.\n\n");
        return;
    }

    match employee_info(&corpus.text) {
        Some(info) => out.push_str(&info),
        None => out.push_str(
            "Staff information was found in the uploaded files but needs a closer look.\n\n",
        ),
    }
}

fn push_general_section(out: &mut String, corpus: &Corpus<'_>, question: &str) {
    if corpus.is_empty() {
        let _ = write!(
            out,
            "{NO_FILES_NOTICE} Upload files with data about your business for more precise answers.\n\n"
        );
        out.push_str("**Recommended files:**\n");
        out.push_str("- Sales reports\n");
        out.push_str("- Staff information\n");
        out.push_str("- Financial statements\n\n");
        return;
    }

    let financial_intent = [PROFIT, REVENUE, INCOME, EXPENSE, SALES]
        .iter()
        .any(|keywords| contains_any(question, keywords));
    let employee_intent = contains_any(question, STAFF);
    let growth_intent = (contains_any(question, HOW) && contains_any(question, GROWTH))
        || (contains_any(question, FIRST_PERIOD) && contains_any(question, SECOND_PERIOD));

    if financial_intent {
        push_heading_once(out, FINANCIAL_HEADING);
        match financial_info(&corpus.text, question) {
            Some(info) => out.push_str(&info),
            None => {
                out.push_str(
                    "I analysed your files but found no exact information for your question.\n",
                );
                out.push_str("Try asking more specifically, for example:\n");
                out.push_str("- What was the profit in November?\n");
                out.push_str("- How much revenue was there in December?\n\n");
            }
        }
    } else if employee_intent {
        match employee_info(&corpus.text) {
            Some(info) => out.push_str(&info),
            None => {
                push_heading_once(out, STAFF_HEADING);
                out.push_str("I could not find staff records in your files.\n");
                out.push_str("Ask a specific question, for example:\n");
                out.push_str("- How many employees do I have?\n");
                out.push_str("- What is the barista's salary?\n\n");
            }
        }
    } else if growth_intent {
        match growth_info(&corpus.text) {
            Some(info) => out.push_str(&info),
            None => out.push_str(
                "I analysed your files. Upload reports for different periods for a precise answer about growth.\n\n",
            ),
        }
    } else {
        let _ = write!(
            out,
            "I analysed your files ({} files). I can help analyse your business data.\n\n",
            corpus.files.len()
        );
        if corpus.mentions(PROFIT) || corpus.mentions(REVENUE) {
            out.push_str("- Financial data found\n");
        }
        if corpus.mentions(STAFF) {
            out.push_str("- Staff information found\n");
        }
        if corpus.mentions(FIRST_PERIOD) || corpus.mentions(SECOND_PERIOD) {
            out.push_str("- Period reports found\n");
        }
        out.push_str("\n**Ask a specific question, for example:**\n");
        out.push_str("- How did profit grow?\n");
        out.push_str("- How many employees do I have?\n");
        out.push_str("- What was the revenue in December?\n\n");
    }
}

/// Excerpts for the groups the question asks about, up to five lines each.
fn financial_info(text: &str, question: &str) -> Option<String> {
    let mut groups = String::new();

    if contains_any(question, PROFIT) {
        let lines = lines_containing(text, PROFIT);
        push_excerpts(&mut groups, "Profit", &lines, 5, SECTION_LINE_LIMIT);
    }
    if contains_any(question, REVENUE) || contains_any(question, INCOME) {
        let lines = lines_containing(text, &[REVENUE, INCOME].concat());
        push_excerpts(&mut groups, "Revenue", &lines, 5, SECTION_LINE_LIMIT);
    }
    if contains_any(question, EXPENSE) {
        let lines = lines_containing(text, EXPENSE);
        push_excerpts(&mut groups, "Expenses", &lines, 5, SECTION_LINE_LIMIT);
    }
    if contains_any(question, SALES) {
        let lines = lines_containing(text, SALES);
        push_excerpts(&mut groups, "Sales", &lines, 5, SECTION_LINE_LIMIT);
    }

    if groups.is_empty() { None } else { Some(groups) }
}

/// The top-level sections may already have opened the same heading.
fn push_heading_once(out: &mut String, heading: &str) {
    if !out.contains(heading) {
        out.push_str(heading);
    }
}

/// A matched staff line plus the next four non-blank lines, per block.
fn employee_info(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut mentions = 0;
    let mut blocks = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if !contains_any(&line.to_lowercase(), STAFF) {
            continue;
        }
        mentions += 1;

        let block: String = lines[index..]
            .iter()
            .filter(|l| !l.trim().is_empty())
            .take(1 + EMPLOYEE_FOLLOWING_LINES)
            .map(|l| format!("{l}\n"))
            .collect();
        if block.chars().count() < EMPLOYEE_BLOCK_LIMIT {
            blocks.push(block);
        }
        if blocks.len() >= EMPLOYEE_BLOCKS_COLLECTED {
            break;
        }
    }

    if mentions == 0 {
        return None;
    }

    let mut out = String::from("**Staff records found:**\n");
    out.push_str("- Staff are mentioned in your files\n");
    for (index, block) in blocks.iter().take(EMPLOYEE_BLOCKS_RENDERED).enumerate() {
        let _ = write!(out, "\n**Employee {}:**\n{block}", index + 1);
    }
    out.push('\n');
    Some(out)
}

fn growth_info(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let mut out = String::new();

    if contains_any(&lower, GROWTH) {
        let lines = lines_containing(text, &[GROWTH, COMPARISON].concat());
        if !lines.is_empty() {
            out.push_str("**Growth analysis:**\n\n");
            for line in excerpts(&lines, 5, SECTION_LINE_LIMIT) {
                let _ = writeln!(out, "- {line}");
            }
            out.push('\n');
        }
    }

    if contains_any(&lower, FIRST_PERIOD) && contains_any(&lower, SECOND_PERIOD) {
        push_period_comparison(&mut out, text);
    }

    if out.is_empty() { None } else { Some(out) }
}

#[derive(Default)]
struct PeriodFigures<'a> {
    profit: Option<&'a str>,
    revenue: Option<&'a str>,
}

impl<'a> PeriodFigures<'a> {
    fn record(&mut self, line_lower: &str, line: &'a str) {
        if contains_any(line_lower, PROFIT) {
            self.profit = Some(line.trim());
        }
        if contains_any(line_lower, REVENUE) {
            self.revenue = Some(line.trim());
        }
    }
}

fn push_period_comparison(out: &mut String, text: &str) {
    out.push_str("**Period comparison:**\n\n");

    let mut first = PeriodFigures::default();
    let mut second = PeriodFigures::default();

    for line in text.split('\n') {
        let lower = line.to_lowercase();
        if contains_any(&lower, FIRST_PERIOD) {
            first.record(&lower, line);
        }
        if contains_any(&lower, SECOND_PERIOD) {
            second.record(&lower, line);
        }
    }

    push_pair(out, "Profit", first.profit, second.profit);
    push_pair(out, "Revenue", first.revenue, second.revenue);

    let mut dynamics_keywords = GROWTH.to_vec();
    dynamics_keywords.push("+");
    let lines = lines_containing(text, &dynamics_keywords);
    if !lines.is_empty() {
        out.push_str("**Dynamics:**\n");
        for line in excerpts(&lines, 3, COMPARISON_LINE_LIMIT) {
            let _ = writeln!(out, "- {line}");
        }
        out.push('\n');
    }
}

fn push_pair(out: &mut String, title: &str, first: Option<&str>, second: Option<&str>) {
    if first.is_none() && second.is_none() {
        return;
    }
    let _ = writeln!(out, "**{title}:**");
    if let Some(line) = first {
        let _ = writeln!(out, "November: {line}");
    }
    if let Some(line) = second {
        let _ = writeln!(out, "December: {line}");
    }
    out.push('\n');
}

/// Writes a titled bullet list of excerpts; nothing at all when no line survives.
fn push_excerpts(out: &mut String, title: &str, lines: &[&str], take: usize, max_chars: usize) {
    let kept = excerpts(lines, take, max_chars);
    if kept.is_empty() {
        return;
    }
    let _ = writeln!(out, "**{title}:**");
    for line in kept {
        let _ = writeln!(out, "- {line}");
    }
    out.push('\n');
}

/// First `take` matches, minus blank lines and lines of `max_chars` or more.
/// Long lines are dropped, never cut.
fn excerpts<'a>(lines: &[&'a str], take: usize, max_chars: usize) -> Vec<&'a str> {
    lines
        .iter()
        .take(take)
        .filter(|line| !line.trim().is_empty() && line.chars().count() < max_chars)
        .map(|line| line.trim())
        .collect()
}

fn lines_containing<'a>(text: &'a str, keywords: &[&str]) -> Vec<&'a str> {
    text.split('\n')
        .filter(|line| contains_any(&line.to_lowercase(), keywords))
        .collect()
}

fn contains_any(haystack_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack_lower.contains(k))
}
