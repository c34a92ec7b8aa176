//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes error messages, button labels and the preview placeholder.

pub const BUTTON_NEXT: &str = "Next";
pub const BUTTON_SAVE: &str = "Save Character";

pub const PREVIEW_PLACEHOLDER: &str = "Complete Step 1 to see your character preview.";

pub const FILL_ALL_FIELDS: &str = "Fill all fields correctly.";
pub const LOAD_FAILED: &str = "Failed to load data";
pub const CONNECTION_ERROR: &str = "Connection error";
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub const SESSION_CLOSED: &str = "✅ Character saved. Session closed.";

pub fn unknown_option(target: &str, label: &str) -> String {
    format!("❓ '{label}' is not an option for {target}. Try `.options {target}`.")
}

pub fn unknown_field(key: &str) -> String {
    format!("❓ Unknown field '{key}'. Try `.options`.")
}

pub fn inactive_field(field: &str) -> String {
    format!("⚠️ {field} cannot be changed on this step.")
}

pub fn step_header(number: u8, title: &str) -> String {
    format!("### Step {number}: {title}")
}

pub const STILL_WORKING: &str = "⏳ Still working on the previous action.";
pub const UNKNOWN_COMMAND: &str = "❓ Unknown command. Type `.help` for the list.";
pub const BYE: &str = "👋 Leaving without saving.";

pub fn usage(command: &str, args: &str) -> String {
    format!("Usage: `.{command} {args}`")
}

pub fn step_incomplete(missing: &[&str]) -> String {
    format!("⚠️ Step 1 is not complete. Still needed: {}", missing.join(", "))
}

pub fn option_picked(field: &str, label: &str) -> String {
    format!("✅ {field}: {label}")
}

pub fn option_toggled(field: &str, label: &str, selected: bool) -> String {
    if selected {
        format!("➕ {label} added to {field}")
    } else {
        format!("➖ {label} removed from {field}")
    }
}
