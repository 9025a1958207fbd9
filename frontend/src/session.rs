use crate::services::api::ApiClient;
use shared::Shift;
use std::str::FromStr;
use yew::prelude::*;

const USER_ID_KEY: &str = "userId";
const SHIFT_KEY: &str = "selectedShift";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Values read back from persistent storage at startup.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StoredSession {
    pub user_id: Option<i64>,
    pub shift: Shift,
}

pub fn load() -> StoredSession {
    let storage = match storage() {
        Some(s) => s,
        None => return StoredSession::default(),
    };
    let user_id = sanitize_user_id(storage.get_item(USER_ID_KEY).ok().flatten());
    let shift = storage
        .get_item(SHIFT_KEY)
        .ok()
        .flatten()
        .and_then(|raw| Shift::from_str(&raw).ok())
        .unwrap_or_default();
    StoredSession { user_id, shift }
}

/// Login contract: every previously stored key is dropped, then only the
/// new id is written.
pub fn store_login(user_id: i64) {
    if let Some(storage) = storage() {
        let _ = storage.clear();
        let _ = storage.set_item(USER_ID_KEY, &user_id.to_string());
    }
}

pub fn store_shift(shift: Shift) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(SHIFT_KEY, shift.as_str());
    }
}

/// Logout removes every persisted key, not just the id.
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.clear();
    }
}

/// Stored ids left behind by older builds can be empty, "null" or
/// "undefined"; those read as logged out, as does anything that does not
/// parse as an id.
fn sanitize_user_id(raw: Option<String>) -> Option<i64> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
        return None;
    }
    trimmed.parse().ok()
}

/// Session state provided once at the app root and read by every view
/// through `use_session`. Views mutate it only through the callbacks, which
/// persist before updating state.
#[derive(Clone, PartialEq)]
pub struct Session {
    pub user_id: Option<i64>,
    pub shift: Shift,
    pub api: ApiClient,
    pub on_login: Callback<i64>,
    pub on_shift_change: Callback<Shift>,
    pub on_logout: Callback<()>,
}

#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().expect("session context missing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_rejects_placeholder_values() {
        assert_eq!(sanitize_user_id(None), None);
        assert_eq!(sanitize_user_id(Some(String::new())), None);
        assert_eq!(sanitize_user_id(Some("  ".to_string())), None);
        assert_eq!(sanitize_user_id(Some("null".to_string())), None);
        assert_eq!(sanitize_user_id(Some("undefined".to_string())), None);
        assert_eq!(sanitize_user_id(Some("not-a-number".to_string())), None);
    }

    #[test]
    fn sanitize_accepts_stored_ids() {
        assert_eq!(sanitize_user_id(Some("7".to_string())), Some(7));
        assert_eq!(sanitize_user_id(Some(" 42 ".to_string())), Some(42));
    }
}
