use auraflow_sdk::{Id, PageRequest, QueryString, Timestamp};
use serde::{Deserialize, Serialize};

/// Named privilege rank; a lower `level` is more privileged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: Id,
    pub name: String,
    pub level: i32,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Role {
    /// Whether someone at `actor_level` may hand this role out
    ///
    /// Only strictly less privileged roles are assignable.
    #[must_use]
    pub const fn is_assignable_by(&self, actor_level: i32) -> bool {
        self.level > actor_level
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    pub name: String,
    pub level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleQuery {
    pub page: PageRequest,
    pub id: Option<Id>,
    pub name: Option<String>,
    pub level: Option<i32>,
}

impl RoleQuery {
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        QueryString::paged(self.page)
            .value("id", self.id)
            .text("name", self.name.as_deref())
            .value("level", self.level)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn role(level: i32) -> Role {
        Role {
            id: 1,
            name: "Manager".to_owned(),
            level,
            description: None,
            created_at: Timestamp::new("2025-01-01T00:00:00"),
            updated_at: Timestamp::new("2025-01-01T00:00:00"),
        }
    }

    #[test]
    fn test_only_less_privileged_roles_are_assignable() {
        assert!(role(3).is_assignable_by(2));
        assert!(!role(2).is_assignable_by(2));
        assert!(!role(1).is_assignable_by(2));
    }

    #[test]
    fn test_level_zero_is_sent() {
        let query = RoleQuery {
            level: Some(0),
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(query.to_query().encode().unwrap(), "page=0&size=10&level=0");
    }

    #[test]
    fn test_null_description_decodes() {
        let role: Role = serde_json::from_value(serde_json::json!({
            "id": 2,
            "name": "Staff",
            "level": 4,
            "description": null,
            "createdAt": "2025-01-01T00:00:00",
            "updatedAt": "2025-01-01T00:00:00",
        }))
        .unwrap();
        assert_eq!(role.description, None);
    }
}
