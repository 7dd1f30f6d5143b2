use auraflow_sdk::{Id, PageRequest, QueryString, StatusFilter, Timestamp};
use serde::{Deserialize, Serialize};

auraflow_sdk::wire_enum! {
    pub enum ProjectStatus {
        Draft => "DRAFT",
        Active => "ACTIVE",
        Closed => "CLOSED",
        OnHold => "ON_HOLD",
    }
}

/// Project owned by a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub department_id: Id,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub division_id: Option<Id>,
    #[serde(default)]
    pub division_name: Option<String>,
    #[serde(default)]
    pub created_by_id: Option<Id>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub begin_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub department_id: Id,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub page: PageRequest,
    /// `Some(0)` is sent as no filter
    pub department_id: Option<Id>,
    pub name: Option<String>,
    pub status: StatusFilter<ProjectStatus>,
}

impl ProjectQuery {
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        QueryString::paged(self.page)
            .value("departmentId", self.department_id.filter(|&id| id != 0))
            .text("name", self.name.as_deref())
            .status("status", &self.status)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_on_hold_wire_name() {
        assert_eq!("on_hold".parse::<ProjectStatus>().unwrap(), ProjectStatus::OnHold);
        let query = ProjectQuery {
            department_id: Some(3),
            status: ProjectStatus::OnHold.into(),
            ..Default::default()
        };
        assert_eq!(
            query.to_query().encode().unwrap(),
            "page=0&size=10&departmentId=3&status=ON_HOLD"
        );
    }

    #[test]
    fn test_zero_department_is_unfiltered() {
        let query = ProjectQuery {
            department_id: Some(0),
            ..Default::default()
        };
        assert_eq!(query.to_query().encode().unwrap(), "page=0&size=10");
    }

    #[test]
    fn test_project_with_open_dates() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Migration",
            "description": null,
            "status": "DRAFT",
            "departmentId": 3,
            "departmentName": "Platform",
            "divisionId": null,
            "divisionName": null,
            "createdById": 1,
            "createdByName": "Ann Lee",
            "beginDate": "2025-04-01T00:00:00Z",
            "endDate": null,
            "createdAt": "2025-03-01T00:00:00",
            "updatedAt": "2025-03-01T00:00:00",
        }))
        .unwrap();
        assert!(project.begin_date.unwrap().parse().is_ok());
        assert!(project.end_date.is_none());
    }
}
