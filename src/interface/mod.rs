pub mod prompts;
pub mod render;
pub mod screen;

pub use prompts::{
    fuzzy_candidates, prompt_action, prompt_draft, prompt_yes_no, resolve_entry, select_entry,
    ScreenAction,
};
pub use render::{
    action_label, active_warnings, display_screen, format_entry, format_goal, format_total,
    screen_lines,
};
pub use screen::run_screen;
