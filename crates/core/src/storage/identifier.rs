use super::{Result, StoreError};

/// Validates a keyspace name before it is used in a statement.
///
/// Identifiers cannot be bound as statement parameters, so they end up
/// quoted inside CQL text; this check is the injection guard and must run
/// before any statement is built.
pub fn validate_keyspace_name(name: &str) -> Result<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(StoreError::InvalidKeyspaceName {
            name: name.to_string(),
        })
    }
}

/// Validates a table name before it is used in a statement.
pub fn validate_table_name(name: &str) -> Result<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(StoreError::InvalidTableName {
            name: name.to_string(),
        })
    }
}

/// Schema object names are restricted to `[0-9a-zA-Z_]+`.
fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_alphanumerics_and_underscore() {
        for name in ["users", "Users", "users_2", "_", "0", "UPPER_lower_09"] {
            assert!(validate_keyspace_name(name).is_ok(), "rejected {name:?}");
            assert!(validate_table_name(name).is_ok(), "rejected {name:?}");
        }
    }

    #[test]
    fn test_accepts_cql_reserved_words() {
        // Reserved words are fine as long as the characters are; they are
        // always double-quoted in the statements we build.
        assert!(validate_table_name("table").is_ok());
        assert!(validate_keyspace_name("keyspace").is_ok());
    }

    #[test]
    fn test_rejects_invalid_characters() {
        for name in ["5&@abc", "no-dashes", "no spaces", "semi;colon", "a\"b", "é"] {
            assert_eq!(
                validate_keyspace_name(name),
                Err(StoreError::InvalidKeyspaceName {
                    name: name.to_string()
                })
            );
            assert_eq!(
                validate_table_name(name),
                Err(StoreError::InvalidTableName {
                    name: name.to_string()
                })
            );
        }
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(validate_keyspace_name("").is_err());
        assert!(validate_table_name("").is_err());
    }
}
