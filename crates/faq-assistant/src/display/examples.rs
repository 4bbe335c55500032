use std::fmt::Write as _;

pub const EXAMPLE_QUESTIONS: [&str; 5] = [
    "What is the expense ratio of SBI Bluechip Fund?",
    "What is the lock-in period for SBI Long Term Equity Fund?",
    "What is the minimum SIP amount for SBI Flexicap Fund?",
    "What is the riskometer rating for SBI Magnum Gilt Fund?",
    "How to download statements for SBI Mutual Fund?",
];

/// Example question by its 1-based chip number.
pub fn example(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|index| EXAMPLE_QUESTIONS.get(index))
        .copied()
}

pub fn render_examples(out: &mut String) {
    let _ = writeln!(out, "Try an example:");
    for (index, question) in EXAMPLE_QUESTIONS.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {}", index + 1, question);
    }
}
