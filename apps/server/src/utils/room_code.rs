//! Room code normalization.
//!
//! Room codes are chosen by clients, not generated: they are trimmed,
//! uppercased, and restricted to short alphanumeric ASCII so every client
//! naming the same table lands in the same room.

use crate::error::AppError;

pub const MAX_CODE_LEN: usize = 16;

pub fn normalize_room_code(raw: &str) -> Result<String, AppError> {
    let code = raw.trim().to_uppercase();
    if code.is_empty() {
        return Err(AppError::room("room code must not be empty"));
    }
    if code.len() > MAX_CODE_LEN || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::room(
            "room codes are up to 16 letters and digits",
        ));
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_uppercases() {
        assert_eq!(normalize_room_code("  table1 ").unwrap(), "TABLE1");
        assert_eq!(normalize_room_code("x").unwrap(), "X");
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert!(normalize_room_code("   ").is_err());
        assert!(normalize_room_code("").is_err());
        assert!(normalize_room_code("A2345678901234567").is_err());
    }

    #[test]
    fn rejects_non_alphanumeric() {
        assert!(normalize_room_code("room code").is_err());
        assert!(normalize_room_code("café").is_err());
        assert!(normalize_room_code("a-b").is_err());
    }
}
