//! Bridge between async mock servers and the blocking client.
//!
//! `wiremock` needs a tokio runtime while `reqwest::blocking` refuses to run on
//! a runtime thread, so client calls are shipped to the blocking pool.

use anyhow::Result;

/// Run `f` on tokio's blocking thread pool and wait for its result.
pub async fn run_blocking<F, T>(f: F) -> Result<T>
where
  F: FnOnce() -> T + Send + 'static,
  T: Send + 'static,
{
  Ok(tokio::task::spawn_blocking(f).await?)
}
