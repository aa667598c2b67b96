//! CLI commands

pub mod cache;
pub mod compile;
pub mod config;
pub mod generate;
pub mod view;

/// Collapse a topic to a single short line for listings
pub fn one_line(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let truncated: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
