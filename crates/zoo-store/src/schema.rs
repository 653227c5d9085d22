//! Relational schema for the `animals` table.

/// Character limit of the `name` and `class` columns.
pub const MAX_TEXT_LEN: usize = 50;

/// Idempotent table creation, run once at process start.
pub const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS animals (
    id SERIAL PRIMARY KEY,
    name VARCHAR(50) NOT NULL UNIQUE,
    class VARCHAR(50) NOT NULL,
    legs INT NOT NULL
)";

/// Whether `public.animals` exists.
pub const TABLE_EXISTS: &str = "\
SELECT EXISTS (
    SELECT 1
    FROM information_schema.tables
    WHERE table_schema = 'public'
    AND table_name = 'animals'
)";

pub const INSERT: &str = "INSERT INTO animals (name, class, legs) VALUES ($1, $2, $3) RETURNING id";
pub const SELECT_ALL: &str = "SELECT id, name, class, legs FROM animals";
pub const SELECT_BY_ID: &str = "SELECT id, name, class, legs FROM animals WHERE id = $1";
pub const UPDATE: &str = "UPDATE animals SET name = $1, class = $2, legs = $3 WHERE id = $4";
pub const DELETE: &str = "DELETE FROM animals WHERE id = $1";

/// Result of the startup schema bootstrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The table was already there; nothing changed.
    AlreadyPresent,
    /// The table was created by this run.
    Created,
}

impl MigrationOutcome {
    pub fn from_existed(existed: bool) -> Self {
        if existed {
            Self::AlreadyPresent
        } else {
            Self::Created
        }
    }
}

impl std::fmt::Display for MigrationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyPresent => write!(f, "models already migrated"),
            Self::Created => write!(f, "migration completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_existed() {
        assert_eq!(MigrationOutcome::from_existed(true), MigrationOutcome::AlreadyPresent);
        assert_eq!(MigrationOutcome::from_existed(false), MigrationOutcome::Created);
    }

    #[test]
    fn create_table_is_idempotent_ddl() {
        assert!(CREATE_TABLE.starts_with("CREATE TABLE IF NOT EXISTS animals"));
        assert!(CREATE_TABLE.contains(&format!("name VARCHAR({MAX_TEXT_LEN}) NOT NULL UNIQUE")));
        assert!(CREATE_TABLE.contains(&format!("class VARCHAR({MAX_TEXT_LEN}) NOT NULL")));
    }

    #[test]
    fn list_has_no_ordering() {
        assert!(!SELECT_ALL.contains("ORDER BY"));
    }
}
