use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::AppError;

macro_rules! define_id {
    ($id_type: ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
        #[serde(into = "String")]
        #[sqlx(transparent)]
        pub struct $id_type(uuid::Uuid);

        impl $id_type {
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn raw(self) -> uuid::Uuid {
                self.0
            }
        }

        impl Default for $id_type {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<uuid::Uuid> for $id_type {
            fn from(id: uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl FromStr for $id_type {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(uuid::Uuid::parse_str(s)?))
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<$id_type> for String {
            fn from(id: $id_type) -> Self {
                id.0.to_string()
            }
        }
    };
}

define_id!(BookId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_its_own_display() -> anyhow::Result<()> {
        let id = BookId::new();
        let parsed: BookId = id.to_string().parse()?;
        assert_eq!(id, parsed);
        Ok(())
    }

    #[test]
    fn rejects_malformed_id() {
        let res = "5a1b-not-a-book".parse::<BookId>();
        assert!(matches!(res, Err(AppError::ConvertToUuidError(_))));
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(BookId::new(), BookId::new());
    }
}
