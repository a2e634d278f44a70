//! Command implementations

pub mod completions;
pub mod doctor;
pub mod flags;
pub mod modules;
pub mod resolve;
pub mod variants;

/// Join a list for one-line display.
fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
