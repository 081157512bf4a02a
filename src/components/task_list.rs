//! Task List Component
//!
//! Renders the rows of the active view, with a per-view empty state.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::models::{Task, TaskStatus};

/// Task list view component
#[component]
pub fn TaskListView(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] empty_message: Signal<&'static str>,
    #[prop(into)] on_rename: Callback<(u32, String)>,
    #[prop(into)] on_status_change: Callback<(u32, TaskStatus)>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_view_details: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="task-list">
            <Show when=move || tasks.get().is_empty()>
                <div class="empty-state">{move || empty_message.get()}</div>
            </Show>

            <For
                each=move || tasks.get()
                key=|task| {
                    // Use a tuple of all mutable fields so edits recreate the
                    // row and reset its transient edit buffer
                    (
                        task.id,
                        task.title.clone(),
                        task.description.clone(),
                        task.completed,
                        task.status,
                    )
                }
                children=move |task| {
                    view! {
                        <TaskItem
                            task=task
                            on_rename=on_rename
                            on_status_change=on_status_change
                            on_delete=on_delete
                            on_view_details=on_view_details
                        />
                    }
                }
            />
        </div>
    }
}
