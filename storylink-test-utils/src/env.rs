//! Environment variable management for testing
//!
//! Tests that touch process-wide environment variables should also be marked
//! `#[serial]`; the guard only restores state, it does not isolate threads.

use std::env;

/// RAII guard that restores one environment variable when dropped.
pub struct EnvVarGuard {
  name: &'static str,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Remember the current value of `name` so it can be restored later.
  pub fn new(name: &'static str) -> Self {
    Self {
      name,
      original: env::var(name).ok(),
    }
  }

  /// Set the variable for the lifetime of the guard.
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(self.name, value);
    }
  }

  /// Unset the variable for the lifetime of the guard.
  pub fn remove(&self) {
    unsafe {
      env::remove_var(self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(self.name, val);
      },
      None => unsafe {
        env::remove_var(self.name);
      },
    }
  }
}
