use std::fmt::Write as _;

pub const PLACEHOLDER: &str = "Ask a question about SBI Mutual Fund schemes...";

/// Trimmed query to submit, or `None` when the box is blank or a request is in flight.
pub fn prepare_submission(raw: &str, loading: bool) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || loading {
        return None;
    }
    Some(trimmed.to_string())
}

pub fn render_query_box(out: &mut String, query: &str, error: Option<&str>, loading: bool) {
    if query.is_empty() {
        let _ = writeln!(out, "> {PLACEHOLDER}");
    } else {
        let _ = writeln!(out, "> {query}");
    }

    if let Some(error) = error {
        let _ = writeln!(out, "  ! {error}");
    }

    if loading {
        let _ = writeln!(out, "Loading...");
    }
}
