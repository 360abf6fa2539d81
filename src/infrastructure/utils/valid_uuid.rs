use uuid::Uuid;

use crate::errors::AppError;

/// Parses a row id. A malformed id cannot match any row, so it is reported as not found.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::NotFound("No row matches the given id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_ids_are_not_found() {
        assert!(matches!(valid_uuid("not-a-uuid"), Err(AppError::NotFound(_))));
        assert!(valid_uuid("6f1c1c3e-4c1b-4a55-9a53-0c0c9a0f2e11").is_ok());
    }
}
