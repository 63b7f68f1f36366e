pub mod home_handler;
pub mod leads;
pub mod oauth;
pub mod upstream;

pub use home_handler::{home_handler, not_found_handler};
pub use leads::{submit_lead_handler, update_lead_status_handler};
pub use oauth::{auth_url_handler, callback_handler, token_handler, user_info_handler};

/// Runs an outbound call on its own task.
///
/// The call keeps going if the inbound client disconnects, and a panic inside it
/// surfaces as a `JoinError` instead of unwinding through the handler.
pub(crate) async fn detached<F>(task: F) -> Result<F::Output, tokio::task::JoinError>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(task).await
}
