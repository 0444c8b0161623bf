//! Environment isolation utilities for testing
//!
//! Tests that read or modify environment variables must hold [`ENV_LOCK`]
//! so they do not observe each other's changes.

use std::sync::Mutex;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with the given variables set (`Some`) or removed (`None`)
///
/// Previous values are restored afterwards, even if `f` panics.
///
/// # Examples
///
/// ```rust
/// use htmlify_testkit::with_env_vars;
///
/// with_env_vars(&[("HTMLIFY_DOC_EXAMPLE", Some("1"))], || {
///     assert_eq!(std::env::var("HTMLIFY_DOC_EXAMPLE").unwrap(), "1");
/// });
/// assert!(std::env::var("HTMLIFY_DOC_EXAMPLE").is_err());
/// ```
pub fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| {
        // Environment variables remain valid after a panic; the lock only
        // serializes access
        poisoned.into_inner()
    });

    let _restore = Restore {
        saved: vars
            .iter()
            .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
            .collect(),
    };

    // SAFETY: We hold ENV_LOCK, ensuring no other test is modifying env vars concurrently.
    unsafe {
        for (key, value) in vars {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }

    f()
}

/// Restores saved variables on drop
struct Restore {
    saved: Vec<(String, Option<String>)>,
}

impl Drop for Restore {
    fn drop(&mut self) {
        // SAFETY: Dropped while the caller still holds ENV_LOCK.
        unsafe {
            for (key, value) in &self.saved {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
