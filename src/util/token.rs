//! Bearer token persistence.
//!
//! The browser build stores the token in `localStorage` under a fixed
//! key. Host builds (tests, SSR) use a thread-local in-memory slot with
//! the same contract, so session logic can be exercised without a
//! browser. Presence-based only: no expiry tracking, no validation.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

pub const STORAGE_KEY: &str = "ai_screener_token";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static MEMORY_SLOT: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

/// Persist the bearer token.
pub fn set(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY_SLOT.with(|slot| *slot.borrow_mut() = Some(token.to_owned()));
    }
}

/// Read the persisted token, if any.
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY_SLOT.with(|slot| slot.borrow().clone())
    }
}

/// Remove the persisted token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY_SLOT.with(|slot| *slot.borrow_mut() = None);
    }
}

/// Whether a token is stored. Treated as a proxy for "authenticated";
/// it is only actually validated by the next backend request.
pub fn is_present() -> bool {
    get().is_some()
}

/// Format a token as an `Authorization` header value.
pub fn auth_header_value(token: &str) -> String {
    format!("Bearer {token}")
}
