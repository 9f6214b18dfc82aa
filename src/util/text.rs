//! Text normalization for booking titles and descriptions.

/// Title-cases each whitespace-separated word. Words that look like URLs are
/// lowercased wholesale instead, so links stay clickable.
pub fn normalize_title(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            if is_url_like(word) {
                word.to_lowercase()
            } else {
                title_case_word(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Descriptions get the same treatment as titles.
pub fn normalize_description(input: &str) -> String {
    normalize_title(input)
}

fn is_url_like(word: &str) -> bool {
    word.contains("://") || word.to_ascii_lowercase().starts_with("www.")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
