use std::collections::HashMap;

/// Project id → display name, as resolved by the entry source.
pub type ProjectNames = HashMap<i64, String>;

/// Display name for `id`, empty when the source did not resolve it.
pub fn project_name(names: &ProjectNames, id: i64) -> &str {
    names.get(&id).map(String::as_str).unwrap_or("")
}
