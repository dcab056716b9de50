use thiserror::Error;

/// Error returned when a lookup falls outside a taxonomy table.
///
/// Both variants indicate a caller or integration defect; they are never
/// defaulted away by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// The symbolic key is not one of the table's defined identities.
    #[error("unknown key '{key}' in {table}")]
    UnknownKey { table: &'static str, key: String },

    /// Reverse lookup by label or discriminator found no entry.
    #[error("unknown value '{value}' in {table}")]
    UnknownValue { table: &'static str, value: String },
}

impl TaxonomyError {
    /// Name of the table the failed lookup was made against.
    pub fn table(&self) -> &'static str {
        match self {
            Self::UnknownKey { table, .. } | Self::UnknownValue { table, .. } => table,
        }
    }
}

pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_table_and_key() {
        let err = TaxonomyError::UnknownKey {
            table: "USER_FILTER_FIELD",
            key: "NONEXISTENT".to_string(),
        };
        assert_eq!(err.to_string(), "unknown key 'NONEXISTENT' in USER_FILTER_FIELD");
        assert_eq!(err.table(), "USER_FILTER_FIELD");
    }
}
