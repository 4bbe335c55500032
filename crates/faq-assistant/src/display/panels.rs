use std::fmt::Write as _;

use super::result_card::source_link;
use crate::response::FaqResponse;

pub const APP_TITLE: &str = "Mutual Fund FAQ Assistant";

pub fn render_header(out: &mut String) {
    let _ = writeln!(out, "{APP_TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(APP_TITLE.len()));
}

pub fn render_intro(out: &mut String) {
    let _ = writeln!(out, "Ask a Question");
    let _ = writeln!(out, "Get factual information about SBI Mutual Fund schemes");
}

pub fn render_refusal(out: &mut String, response: &FaqResponse) {
    if let Some(message) = &response.message {
        let _ = writeln!(out, "{message}");
    }
    if let Some(source) = response.source.as_deref().filter(|source| !source.is_empty()) {
        let _ = writeln!(out, "Learn more at AMFI \u{2192} {}", source_link(source));
    }
}

pub fn render_no_match(out: &mut String, response: &FaqResponse) {
    if let Some(message) = &response.message {
        let _ = writeln!(out, "{message}");
    }
}

pub fn render_footer(out: &mut String, year: i32) {
    let _ = writeln!(
        out,
        "\u{a9} {year} {APP_TITLE}. Facts-only. No investment advice."
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_links_source_when_present() {
        let response = FaqResponse::refusal(
            "I can only provide factual information, not investment advice.",
            Some("https://www.amfiindia.com/investor-corner".to_string()),
        );
        let mut out = String::new();
        render_refusal(&mut out, &response);
        assert!(out.contains("not investment advice"));
        assert!(out.contains("Learn more at AMFI \u{2192} https://www.amfiindia.com/investor-corner"));
    }

    #[test]
    fn refusal_without_source_has_no_link() {
        let response = FaqResponse::refusal("Facts only.", None);
        let mut out = String::new();
        render_refusal(&mut out, &response);
        assert_eq!(out, "Facts only.\n");
    }

    #[test]
    fn footer_carries_year() {
        let mut out = String::new();
        render_footer(&mut out, 2026);
        assert_eq!(
            out,
            "\u{a9} 2026 Mutual Fund FAQ Assistant. Facts-only. No investment advice.\n"
        );
    }
}
