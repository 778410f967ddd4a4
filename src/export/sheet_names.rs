// src/export/sheet_names.rs

use std::collections::HashSet;

/// Excel limit on worksheet name length, in characters.
const MAX_SHEET_NAME: usize = 31;

const FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Hands out valid, workbook-unique worksheet names.
/// Uniqueness is case-insensitive, as in Excel.
#[derive(Debug, Default)]
pub(crate) struct SheetNamer {
    used: HashSet<String>,
}

impl SheetNamer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn assign(&mut self, wanted: &str) -> String {
        let base = sanitize_sheet_name(wanted);

        let mut candidate = base.clone();
        let mut n = 2;
        while self.used.contains(&candidate.to_lowercase()) {
            let suffix = format!(" ({n})");
            let keep = MAX_SHEET_NAME - suffix.chars().count();
            let stem = truncate_chars(&base, keep);
            candidate = format!("{}{}", stem.trim_end_matches('\''), suffix);
            n += 1;
        }

        self.used.insert(candidate.to_lowercase());
        candidate
    }
}

pub(crate) fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect();

    // cut first: the cut may expose an apostrophe, and names may not
    // start or end with one
    let truncated = truncate_chars(&cleaned, MAX_SHEET_NAME);
    let trimmed = truncated.trim_matches('\'');

    if trimmed.is_empty() {
        return "Sheet".to_string();
    }

    trimmed.to_string()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
