pub mod prompts;
pub mod render;

pub use prompts::{prompt_drink, prompt_field, prompt_unit, prompt_yes_no, suggest_unit};
pub use render::{
    apply_color_mode, display_batch_summary, display_history, display_outcome, display_rejection,
    display_session, history_lines, paint_grade,
};
