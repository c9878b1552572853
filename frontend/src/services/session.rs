use gloo::storage::{LocalStorage, Storage};

/// Number of the logged-in user, if any.
///
/// The login flow stores it in LocalStorage under `storage_key`; a missing or
/// non-numeric value means nobody is logged in.
pub fn load_user_num(storage_key: &str) -> Option<u64> {
    let raw = LocalStorage::raw().get_item(storage_key).ok()??;
    parse_user_num(&raw)
}

fn parse_user_num(raw: &str) -> Option<u64> {
    raw.trim().trim_matches('"').parse::<u64>().ok()
}
