//! Task Item Component
//!
//! One task row: status selector, title with inline quick-edit, and the
//! view/edit/delete actions. Emits intents upward; never talks to the API.

use leptos::prelude::*;

use crate::components::StatusSelect;
use crate::models::{normalized_title, Task, TaskStatus};

/// A single task row
#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] on_rename: Callback<(u32, String)>,
    #[prop(into)] on_status_change: Callback<(u32, TaskStatus)>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_view_details: Callback<u32>,
) -> impl IntoView {
    let id = task.id;
    let status = task.resolved_status();
    let title = StoredValue::new(task.title.clone());
    let description = StoredValue::new(task.description.clone().unwrap_or_default());
    let has_description = !description.get_value().is_empty();

    // Transient edit buffer, seeded from the title prop
    let (is_editing, set_is_editing) = signal(false);
    let (edit_text, set_edit_text) = signal(task.title.clone());

    let save_edit = move || {
        // Empty text keeps the row in edit mode, matching the quick-edit
        // behavior of the add form (no empty titles reach the server)
        let Some(text) = normalized_title(&edit_text.get()) else {
            return;
        };
        if text != title.get_value() {
            on_rename.run((id, text));
        }
        set_is_editing.set(false);
    };

    let cancel_edit = move || {
        set_edit_text.set(title.get_value());
        set_is_editing.set(false);
    };

    let title_class = move || {
        if status == TaskStatus::Completed {
            "task-title struck"
        } else {
            "task-title"
        }
    };

    view! {
        <div class="task-row">
            <div class="task-status">
                <StatusSelect
                    value=Signal::derive(move || status)
                    on_change=move |new_status: TaskStatus| {
                        log::debug!("statut: #{} {} -> {}", id, status.as_str(), new_status.as_str());
                        on_status_change.run((id, new_status));
                    }
                />
            </div>

            <div class="task-body">
                <Show
                    when=move || is_editing.get()
                    fallback=move || view! {
                        <p class=title_class>{title.get_value()}</p>
                        <Show when=move || has_description>
                            <p class="task-description">{description.get_value()}</p>
                        </Show>
                    }
                >
                    <input
                        type="text"
                        class="task-edit-input"
                        autofocus
                        prop:value=move || edit_text.get()
                        on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                save_edit();
                            }
                            if ev.key() == "Escape" {
                                cancel_edit();
                            }
                        }
                    />
                </Show>
            </div>

            <div class="task-actions">
                <Show
                    when=move || is_editing.get()
                    fallback=move || view! {
                        <button
                            class="action-btn view-btn"
                            title="Voir les détails"
                            on:click=move |_| on_view_details.run(id)
                        >
                            "👁"
                        </button>
                        <button
                            class="action-btn edit-btn"
                            title="Édition rapide"
                            on:click=move |_| set_is_editing.set(true)
                        >
                            "✎"
                        </button>
                        <button
                            class="action-btn delete-btn"
                            title="Supprimer"
                            on:click=move |_| on_delete.run(id)
                        >
                            "×"
                        </button>
                    }
                >
                    <button class="action-btn confirm-btn" on:click=move |_| save_edit()>"✓"</button>
                    <button class="action-btn cancel-btn" on:click=move |_| cancel_edit()>"✗"</button>
                </Show>
            </div>
        </div>
    }
}
