pub mod prompts;
pub mod render;

pub use prompts::{
    SessionAction, prompt_catalog_item, prompt_extra_to_remove, prompt_profile, prompt_search_pick,
    prompt_search_query, prompt_session_action, prompt_slot_category, prompt_yes_no,
};
pub use render::{
    display_catalog, display_energy, display_generation_report, display_menu,
    display_search_results,
};
