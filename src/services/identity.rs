use anyhow::{anyhow, Result};

use crate::db::Database;
use crate::models::Identity;
use crate::services::validation::ValidationError;

const IDENTITY_KEY: &str = "identity";

/// Reads the persisted identity. Malformed or incomplete data is logged and
/// treated as "not saved yet"; the user never sees an error here.
pub fn load(db: &Database) -> Option<Identity> {
    let raw = match db.get_setting(IDENTITY_KEY) {
        Ok(value) => value?,
        Err(err) => {
            tracing::warn!("identity read failed: {}", err);
            return None;
        }
    };

    match serde_json::from_str::<Identity>(&raw) {
        Ok(identity)
            if !identity.full_name.trim().is_empty()
                && !identity.employee_id.trim().is_empty() =>
        {
            Some(identity)
        }
        Ok(_) => {
            tracing::warn!("persisted identity has empty fields, ignoring");
            None
        }
        Err(err) => {
            tracing::warn!("persisted identity is malformed, ignoring: {}", err);
            None
        }
    }
}

/// Validates and persists the pair wholesale. Full name is checked first;
/// only one validation message is produced at a time.
pub fn save(db: &Database, full_name: &str, employee_id: &str) -> Result<Identity> {
    let full_name = full_name.trim();
    let employee_id = employee_id.trim();

    if full_name.is_empty() {
        return Err(ValidationError::EmptyFullName.into());
    }
    if employee_id.is_empty() {
        return Err(ValidationError::EmptyEmployeeId.into());
    }

    let identity = Identity {
        full_name: full_name.to_string(),
        employee_id: employee_id.to_string(),
    };
    let encoded = serde_json::to_string(&identity)?;
    db.set_setting(IDENTITY_KEY, &encoded)
        .map_err(|e| anyhow!("identity write failed: {}", e))?;

    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("spesen.sqlite")).unwrap();
        (dir, db)
    }

    #[test]
    fn empty_name_is_rejected_and_nothing_is_written() {
        let (_dir, db) = open_temp_db();
        let err = save(&db, "   ", "4711").unwrap_err();
        assert!(err.to_string().contains("Namen"));
        assert_eq!(db.get_setting("identity").unwrap(), None);
    }

    #[test]
    fn empty_employee_id_is_rejected() {
        let (_dir, db) = open_temp_db();
        let err = save(&db, "Erika Musterfrau", "").unwrap_err();
        assert!(err.to_string().contains("Personalnummer"));
        assert_eq!(db.get_setting("identity").unwrap(), None);
    }

    #[test]
    fn save_trims_and_roundtrips() {
        let (_dir, db) = open_temp_db();
        let saved = save(&db, "  Erika Musterfrau ", " 4711 ").unwrap();
        assert_eq!(saved.full_name, "Erika Musterfrau");
        assert_eq!(saved.employee_id, "4711");

        let loaded = load(&db).unwrap();
        assert_eq!(loaded.full_name, "Erika Musterfrau");
        assert_eq!(loaded.employee_id, "4711");
    }

    #[test]
    fn malformed_persisted_identity_is_ignored() {
        let (_dir, db) = open_temp_db();
        db.set_setting("identity", "not json at all").unwrap();
        assert!(load(&db).is_none());
    }

    #[test]
    fn incomplete_persisted_identity_is_ignored() {
        let (_dir, db) = open_temp_db();
        db.set_setting("identity", "{\"fullName\":\"Erika\",\"employeeId\":\"\"}")
            .unwrap();
        assert!(load(&db).is_none());
    }
}
