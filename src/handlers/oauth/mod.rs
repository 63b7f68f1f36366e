pub mod auth_url_handler;
pub mod callback_handler;
pub mod token_exchange;
pub mod token_handler;
pub mod user_info_handler;

pub use auth_url_handler::auth_url_handler;
pub use callback_handler::callback_handler;
pub use token_handler::token_handler;
pub use user_info_handler::user_info_handler;
