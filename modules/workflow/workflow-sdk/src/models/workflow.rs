use auraflow_sdk::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::DefinitionError;

auraflow_sdk::wire_enum! {
    pub enum WorkflowStepType {
        Start => "START",
        UserTask => "USER_TASK",
        Review => "REVIEW",
        End => "END",
    }
}

/// Workflow as listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub step_type: WorkflowStepType,
    #[serde(default)]
    pub step_order: Option<i32>,
}

/// Named action leading from one step to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTransition {
    pub id: Id,
    pub from_step_id: Id,
    pub to_step_id: Id,
    pub action: String,
}

/// Workflow with its step graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDetail {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
    #[serde(default)]
    pub transitions: Vec<WorkflowTransition>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WorkflowDetail {
    #[must_use]
    pub fn start_step(&self) -> Option<&WorkflowStep> {
        self.steps
            .iter()
            .find(|s| s.step_type == WorkflowStepType::Start)
    }

    /// Action names available while a task sits at `step_id`
    #[must_use]
    pub fn actions_from(&self, step_id: Id) -> Vec<&str> {
        self.transitions
            .iter()
            .filter(|t| t.from_step_id == step_id)
            .map(|t| t.action.as_str())
            .collect()
    }
}

/// Step of a definition being created or replaced
///
/// `client_id` is chosen by the caller and only used to wire up
/// transitions; the backend assigns the real step ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDefinition {
    pub client_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub step_type: WorkflowStepType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_order: Option<i32>,
}

impl StepDefinition {
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        name: impl Into<String>,
        step_type: WorkflowStepType,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            name: name.into(),
            description: None,
            step_type,
            step_order: None,
        }
    }
}

/// Transition between two [`StepDefinition`]s, by client id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDefinition {
    pub from: String,
    pub to: String,
    pub action: String,
}

impl TransitionDefinition {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflowRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub steps: Vec<StepDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<TransitionDefinition>,
}

impl CreateWorkflowRequest {
    /// # Errors
    /// Returns the first rule the definition breaks.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        validate_definition(&self.steps, &self.transitions)
    }
}

/// Full replacement of a workflow's definition
///
/// The backend refuses it while tasks still use the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkflowRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    pub steps: Vec<StepDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<TransitionDefinition>,
}

impl UpdateWorkflowRequest {
    /// # Errors
    /// Returns the first rule the definition breaks.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        validate_definition(&self.steps, &self.transitions)
    }
}

/// Same rules the backend enforces, checked in the same order
fn validate_definition(
    steps: &[StepDefinition],
    transitions: &[TransitionDefinition],
) -> Result<(), DefinitionError> {
    if steps.is_empty() {
        return Err(DefinitionError::NoSteps);
    }

    let starts = steps
        .iter()
        .filter(|s| s.step_type == WorkflowStepType::Start)
        .count();
    if starts != 1 {
        return Err(DefinitionError::StartSteps(starts));
    }
    if !steps.iter().any(|s| s.step_type == WorkflowStepType::End) {
        return Err(DefinitionError::NoEndStep);
    }

    let mut client_ids = HashSet::with_capacity(steps.len());
    for step in steps {
        if !client_ids.insert(step.client_id.as_str()) {
            return Err(DefinitionError::DuplicateClientId(step.client_id.clone()));
        }
    }

    for transition in transitions {
        if !client_ids.contains(transition.from.as_str()) {
            return Err(DefinitionError::UnknownSource(transition.from.clone()));
        }
        if !client_ids.contains(transition.to.as_str()) {
            return Err(DefinitionError::UnknownTarget(transition.to.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn approval() -> CreateWorkflowRequest {
        CreateWorkflowRequest {
            name: "Approval".to_owned(),
            description: None,
            steps: vec![
                StepDefinition::new("s", "Submit", WorkflowStepType::Start),
                StepDefinition::new("r", "Manager review", WorkflowStepType::Review),
                StepDefinition::new("e", "Done", WorkflowStepType::End),
            ],
            transitions: vec![
                TransitionDefinition::new("s", "r", "submit"),
                TransitionDefinition::new("r", "e", "approve"),
                TransitionDefinition::new("r", "s", "reject"),
            ],
        }
    }

    #[test]
    fn test_valid_definition() {
        assert_eq!(approval().validate(), Ok(()));
    }

    #[test]
    fn test_start_step_count() {
        let mut request = approval();
        request.steps[0].step_type = WorkflowStepType::UserTask;
        assert_eq!(request.validate(), Err(DefinitionError::StartSteps(0)));

        let mut request = approval();
        request.steps[1].step_type = WorkflowStepType::Start;
        assert_eq!(request.validate(), Err(DefinitionError::StartSteps(2)));
    }

    #[test]
    fn test_missing_end_and_empty() {
        let mut request = approval();
        request.steps[2].step_type = WorkflowStepType::UserTask;
        assert_eq!(request.validate(), Err(DefinitionError::NoEndStep));

        request.steps.clear();
        assert_eq!(request.validate(), Err(DefinitionError::NoSteps));
    }

    #[test]
    fn test_duplicate_client_id() {
        let mut request = approval();
        request.steps[1].client_id = "s".to_owned();
        assert_eq!(
            request.validate(),
            Err(DefinitionError::DuplicateClientId("s".to_owned()))
        );
    }

    #[test]
    fn test_dangling_transitions() {
        let mut request = approval();
        request.transitions.push(TransitionDefinition::new("x", "e", "skip"));
        assert_eq!(
            request.validate(),
            Err(DefinitionError::UnknownSource("x".to_owned()))
        );

        let mut request = approval();
        request.transitions.push(TransitionDefinition::new("s", "y", "skip"));
        assert_eq!(
            request.validate(),
            Err(DefinitionError::UnknownTarget("y".to_owned()))
        );
    }

    #[test]
    fn test_step_type_field_name() {
        let body = serde_json::to_value(StepDefinition::new("s", "Submit", WorkflowStepType::Start))
            .unwrap();
        assert_eq!(body, json!({"clientId": "s", "name": "Submit", "type": "START"}));
    }

    #[test]
    fn test_detail_navigation() {
        let detail: WorkflowDetail = serde_json::from_value(json!({
            "id": 1,
            "name": "Approval",
            "isActive": true,
            "steps": [
                {"id": 10, "name": "Submit", "type": "START", "stepOrder": 1},
                {"id": 11, "name": "Review", "type": "REVIEW", "stepOrder": 2},
                {"id": 12, "name": "Done", "type": "END", "stepOrder": 3}
            ],
            "transitions": [
                {"id": 1, "fromStepId": 10, "toStepId": 11, "action": "submit"},
                {"id": 2, "fromStepId": 11, "toStepId": 12, "action": "approve"},
                {"id": 3, "fromStepId": 11, "toStepId": 10, "action": "reject"}
            ],
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(detail.start_step().unwrap().id, 10);
        assert_eq!(detail.actions_from(11), vec!["approve", "reject"]);
        assert!(detail.actions_from(12).is_empty());
    }
}
