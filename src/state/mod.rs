mod persistence;

pub use persistence::{load_profile, save_menu_json, save_profile, write_menu_csv};
