pub mod banner;
pub mod tui;

/// Prints the welcome banner (when enabled) and applies the theme for all subsequent
/// inquire prompts. Call once at startup, before the first prompt.
pub fn init_ui(show_banner: bool) {
    if show_banner {
        banner::print_welcome();
    }
    tui::apply_theme();
}
