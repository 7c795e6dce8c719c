use uuid::Uuid;

/// Derive a collision-resistant storage key from the original file name.
///
/// The key is `<uuid-v4>.<ext>` where the extension is everything after the
/// last `.` in the original name. A name with no dot yields a bare token with
/// no extension suffix. A trailing dot ("photo.") yields a key ending in `.`,
/// since the empty extension is passed through as-is.
pub fn generate_storage_key(original_name: &str) -> String {
    let token = Uuid::new_v4();

    match original_name.rsplit_once('.') {
        Some((_, ext)) => format!("{token}.{ext}"),
        None => token.to_string(),
    }
}
