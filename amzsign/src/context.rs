use amzsign_core::{Context, OsEnv};
use amzsign_http_send_reqwest::ReqwestHttpSend;

/// Create a [`Context`] that sends requests with reqwest and reads the OS environment.
///
/// ```no_run
/// let ctx = amzsign::default_context();
/// assert!(ctx.env_var("HOME").is_some());
/// ```
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
