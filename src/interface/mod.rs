pub mod prompts;
pub mod render;

pub use prompts::{fuzzy_matches, prompt_yes_no, resolve_food, run_swap_session};
pub use render::{
    display_alternatives, display_evaluation, display_food_list, display_original, format_macros,
};
