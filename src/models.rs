//! Method record model.

use std::fmt;

use serde::Serialize;

/// A method record.
///
/// `id` and `created_at` are zero until the record has been committed;
/// the database assigns both on insert. `created_at` is stored as
/// milliseconds since Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Method {
    /// Database id (0 until committed)
    pub id: i64,
    /// Owning user
    pub user_id: u64,
    /// Method payload
    pub value: String,
    /// Insert time in milliseconds since Unix epoch (0 until committed)
    pub created_at: i64,
}

impl Method {
    /// Creates an uncommitted record.
    pub fn new(user_id: u64, value: impl Into<String>) -> Self {
        Method {
            id: 0,
            user_id,
            value: value.into(),
            created_at: 0,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id[{}], user_id[{}], value[{}], created_at[{}]",
            self.id, self.user_id, self.value, self.created_at
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_method_is_uncommitted() {
        let method = Method::new(7, "GET");
        assert_eq!(method.id, 0);
        assert_eq!(method.created_at, 0);
        assert_eq!(method.user_id, 7);
        assert_eq!(method.value, "GET");
    }

    #[test]
    fn test_display() {
        let method = Method {
            id: 3,
            user_id: 1,
            value: "POST".to_string(),
            created_at: 1704067200000,
        };
        assert_eq!(
            method.to_string(),
            "id[3], user_id[1], value[POST], created_at[1704067200000]"
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let method = Method::new(2, "PUT");
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(
            json,
            r#"{"id":0,"user_id":2,"value":"PUT","created_at":0}"#
        );
    }
}
