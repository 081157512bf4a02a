//! Frontend Models
//!
//! Data structures matching the task API payloads.

use serde::{Deserialize, Serialize};

/// Task workflow status as exchanged with the API.
///
/// Older records may lack this field entirely; [`TaskStatus::resolve`] folds
/// the legacy `completed` flag into a canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Wire/CSS token for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Display label (French UI).
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "À faire",
            TaskStatus::InProgress => "En cours",
            TaskStatus::Completed => "Terminé",
        }
    }

    pub fn from_value(value: &str) -> Option<TaskStatus> {
        match value {
            "todo" => Some(TaskStatus::Todo),
            "in-progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    /// Canonical status from the dual representation: an explicit status is
    /// authoritative, otherwise the legacy `completed` flag decides.
    pub fn resolve(status: Option<TaskStatus>, completed: bool) -> TaskStatus {
        status.unwrap_or(if completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Todo
        })
    }
}

/// Task data structure (matches the API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Task {
    pub fn resolved_status(&self) -> TaskStatus {
        TaskStatus::resolve(self.status, self.completed)
    }
}

/// Partial update sent to the API and merged into the local copy after the
/// server acknowledges it. Absent fields are left untouched on both sides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Patch renaming a task.
    pub fn title(title: impl Into<String>) -> TaskPatch {
        TaskPatch {
            title: Some(title.into()),
            ..TaskPatch::default()
        }
    }

    /// Patch moving a task to `status`, with the legacy `completed` flag
    /// kept consistent (`completed == (status == Completed)`).
    pub fn for_status(status: TaskStatus) -> TaskPatch {
        TaskPatch {
            completed: Some(status == TaskStatus::Completed),
            status: Some(status),
            ..TaskPatch::default()
        }
    }

    /// Shallow merge into `task`.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(status) = self.status {
            task.status = Some(status);
        }
    }
}

/// Trimmed title, or `None` when the input is empty or whitespace-only.
pub fn normalized_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Tasks whose resolved status is `status`, in collection order.
pub fn tasks_with_status(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.resolved_status() == status)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, completed: bool, status: Option<TaskStatus>) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            completed,
            status,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_resolve_without_status_follows_completed_flag() {
        assert_eq!(make_task(1, false, None).resolved_status(), TaskStatus::Todo);
        assert_eq!(
            make_task(2, true, None).resolved_status(),
            TaskStatus::Completed
        );
    }

    #[test]
    fn test_resolve_explicit_status_wins() {
        // Inconsistent record: status present, flag contradicting it
        let task = make_task(1, true, Some(TaskStatus::InProgress));
        assert_eq!(task.resolved_status(), TaskStatus::InProgress);
        let task = make_task(2, false, Some(TaskStatus::Completed));
        assert_eq!(task.resolved_status(), TaskStatus::Completed);
    }

    #[test]
    fn test_status_patch_keeps_flag_consistent() {
        let patch = TaskPatch::for_status(TaskStatus::InProgress);
        assert_eq!(patch.status, Some(TaskStatus::InProgress));
        assert_eq!(patch.completed, Some(false));
        assert_eq!(patch.title, None);

        let patch = TaskPatch::for_status(TaskStatus::Completed);
        assert_eq!(patch.completed, Some(true));
    }

    #[test]
    fn test_patch_merge_touches_only_sent_fields() {
        let mut task = make_task(7, false, Some(TaskStatus::Todo));
        task.description = Some("before".to_string());

        TaskPatch::title("renamed").apply_to(&mut task);

        assert_eq!(task.title, "renamed");
        assert_eq!(task.description.as_deref(), Some("before"));
        assert_eq!(task.completed, false);
        assert_eq!(task.status, Some(TaskStatus::Todo));
    }

    #[test]
    fn test_normalized_title() {
        assert_eq!(normalized_title(""), None);
        assert_eq!(normalized_title("   \t"), None);
        assert_eq!(normalized_title("  courses  "), Some("courses".to_string()));
    }

    #[test]
    fn test_status_filter_partitions_collection() {
        let tasks = vec![
            make_task(1, false, None),
            make_task(2, true, None),
            make_task(3, false, Some(TaskStatus::InProgress)),
            make_task(4, false, Some(TaskStatus::Todo)),
            make_task(5, true, Some(TaskStatus::Completed)),
        ];

        let todo = tasks_with_status(&tasks, TaskStatus::Todo);
        let in_progress = tasks_with_status(&tasks, TaskStatus::InProgress);
        let completed = tasks_with_status(&tasks, TaskStatus::Completed);

        assert_eq!(todo.len() + in_progress.len() + completed.len(), tasks.len());
        let mut ids: Vec<u32> = todo
            .iter()
            .chain(&in_progress)
            .chain(&completed)
            .map(|t| t.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_task_deserializes_without_optional_fields() {
        // Legacy record: no status, no description, no timestamps
        let task: Task =
            serde_json::from_str(r#"{"id":1,"title":"A","completed":false}"#).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.status, None);
        assert_eq!(task.resolved_status(), TaskStatus::Todo);
    }

    #[test]
    fn test_fresh_load_counts() {
        // A server with only legacy fields populated
        let tasks: Vec<Task> =
            serde_json::from_str(r#"[{"id":1,"title":"A","completed":false}]"#).unwrap();
        assert_eq!(tasks_with_status(&tasks, TaskStatus::Todo).len(), 1);
        assert_eq!(tasks_with_status(&tasks, TaskStatus::Completed).len(), 0);
    }

    #[test]
    fn test_status_round_trips_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            r#""in-progress""#
        );
        let status: TaskStatus = serde_json::from_str(r#""in-progress""#).unwrap();
        assert_eq!(status, TaskStatus::InProgress);
        assert_eq!(TaskStatus::from_value("in-progress"), Some(status));
    }
}
