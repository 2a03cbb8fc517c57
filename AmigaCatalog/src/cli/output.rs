//! CLI output helpers
//!
//! Step indicators and headings in the style of the other commands.

use std::time::Duration;

use console::{Emoji, style};

/// Magnifying glass - for probing candidate files
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Document - for catalog files
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
/// Cross - for rejected candidates
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "x ");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/3] 🔍 Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2ms`
pub fn print_done(elapsed: Duration) {
    println!("{SPARKLE} Done in {elapsed:.2?}");
}

/// Print a bold section heading
pub fn print_heading(text: &str) {
    println!("{}", style(text).bold());
}

/// Truncate text for display
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let text = text.replace('\n', "\\n").replace('\0', "\\0");
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text
    }
}
