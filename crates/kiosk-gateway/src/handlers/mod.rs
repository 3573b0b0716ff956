mod file;
mod health;
mod shorturl;
mod timestamp;
mod tools;
mod tracker;
mod whoami;

pub use file::file_analyse_handler;
pub use health::{
    fallback_handler, health_handler, hello_handler, method_not_allowed_handler,
};
pub use shorturl::{redirect_handler, shorten_handler};
pub use timestamp::{now_handler, timestamp_handler};
pub use tools::{calculate_handler, conversion_options_handler, convert_handler};
pub use tracker::{add_exercise_handler, create_user_handler, exercise_log_handler, list_users_handler};
pub use whoami::whoami_handler;
