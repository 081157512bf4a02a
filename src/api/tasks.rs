//! Task Endpoints
//!
//! Frontend bindings for the `/api/tasks` resource. Mutating calls return
//! the server echo; whether callers trust it or merge their own patch is up
//! to them.

use serde::Serialize;

use super::{api_base, client, ApiError};
use crate::models::{Task, TaskPatch, TaskStatus};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub completed: bool,
    pub status: TaskStatus,
}

impl<'a> CreateTaskArgs<'a> {
    /// New-task defaults: only the title comes from the user.
    pub fn with_title(title: &'a str) -> Self {
        Self {
            title,
            description: "",
            completed: false,
            status: TaskStatus::Todo,
        }
    }
}

#[derive(Serialize)]
struct ToggleArgs {
    completed: bool,
}

fn collection_url() -> String {
    format!("{}/api/tasks", api_base())
}

fn task_url(id: u32) -> String {
    format!("{}/api/tasks/{}", api_base(), id)
}

// ========================
// Endpoints
// ========================

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    let tasks = client()
        .get(collection_url())
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(tasks)
}

pub async fn create_task(args: &CreateTaskArgs<'_>) -> Result<Task, ApiError> {
    let task = client()
        .post(collection_url())
        .json(args)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(task)
}

pub async fn update_task(id: u32, patch: &TaskPatch) -> Result<Task, ApiError> {
    let task = client()
        .patch(task_url(id))
        .json(patch)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(task)
}

/// Flip the legacy completion flag alone, trusting the server echo.
pub async fn toggle_task(id: u32, completed: bool) -> Result<Task, ApiError> {
    let task = client()
        .patch(task_url(id))
        .json(&ToggleArgs { completed })
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(task)
}

pub async fn delete_task(id: u32) -> Result<(), ApiError> {
    client()
        .delete(task_url(id))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_args_carry_new_task_defaults() {
        let args = CreateTaskArgs::with_title("Acheter du pain");
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "title": "Acheter du pain",
                "description": "",
                "completed": false,
                "status": "todo",
            })
        );
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = TaskPatch::title("renommée");
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "title": "renommée" })
        );
    }

    #[test]
    fn test_status_patch_serializes_both_representations() {
        let patch = TaskPatch::for_status(TaskStatus::InProgress);
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "status": "in-progress", "completed": false })
        );
    }

    #[test]
    fn test_urls_nest_under_api_base() {
        assert_eq!(collection_url(), format!("{}/api/tasks", api_base()));
        assert_eq!(task_url(42), format!("{}/api/tasks/42", api_base()));
    }
}
