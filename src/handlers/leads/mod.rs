pub mod crm_api;
pub mod submit_lead_handler;
pub mod update_lead_status_handler;

pub use submit_lead_handler::submit_lead_handler;
pub use update_lead_status_handler::update_lead_status_handler;
