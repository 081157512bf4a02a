//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskPatch};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, newest first; unique by id
    pub tasks: Vec<Task>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Collection Operations
// ========================

/// Merge a confirmed patch into the task with `id`; other tasks untouched.
pub fn merge_task_patch(tasks: &mut Vec<Task>, id: u32, patch: &TaskPatch) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
        patch.apply_to(task);
    }
}

/// Remove the task with `id`; no-op if absent.
pub fn remove_task(tasks: &mut Vec<Task>, id: u32) {
    tasks.retain(|task| task.id != id);
}

// ========================
// Store Helper Functions
// ========================

/// Prepend a newly created task to the store
pub fn store_prepend_task(store: &AppStore, task: Task) {
    store.tasks().write().insert(0, task);
}

/// Merge a confirmed patch into the matching task in the store
pub fn store_merge_task_patch(store: &AppStore, id: u32, patch: &TaskPatch) {
    merge_task_patch(&mut store.tasks().write(), id, patch);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, id: u32) {
    remove_task(&mut store.tasks().write(), id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn make_task(id: u32) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            completed: false,
            status: Some(TaskStatus::Todo),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_merge_updates_only_matching_task() {
        let mut tasks = vec![make_task(1), make_task(2), make_task(3)];

        merge_task_patch(&mut tasks, 2, &TaskPatch::title("changée"));

        assert_eq!(tasks[0].title, "Task 1");
        assert_eq!(tasks[1].title, "changée");
        assert_eq!(tasks[2].title, "Task 3");
        // Untouched fields keep their prior values
        assert_eq!(tasks[1].status, Some(TaskStatus::Todo));
        assert_eq!(tasks[1].completed, false);
    }

    #[test]
    fn test_merge_missing_id_is_a_noop() {
        let mut tasks = vec![make_task(1)];
        let before = tasks.clone();

        merge_task_patch(&mut tasks, 99, &TaskPatch::title("fantôme"));

        assert_eq!(tasks, before);
    }

    #[test]
    fn test_remove_deletes_exactly_one() {
        let mut tasks = vec![make_task(1), make_task(2), make_task(3)];

        remove_task(&mut tasks, 2);

        let ids: Vec<u32> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_id_is_a_noop() {
        let mut tasks = vec![make_task(1), make_task(2)];

        remove_task(&mut tasks, 99);

        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_created_task_goes_first_preserving_order() {
        let mut tasks = vec![make_task(1), make_task(2)];

        tasks.insert(0, make_task(3));

        let ids: Vec<u32> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
