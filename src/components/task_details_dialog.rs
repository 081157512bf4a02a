//! Task Details Dialog Component
//!
//! Modal editor for one task: title, description, status, plus a read-only
//! info box. Emits a single consolidated save intent; the shell decides what
//! to send.

use chrono::DateTime;
use leptos::prelude::*;

use crate::components::StatusSelect;
use crate::models::{Task, TaskStatus};

/// `fr`-style numeric date, or `None` when the value does not parse.
fn format_date(raw: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(raw).ok()?;
    Some(parsed.format("%d/%m/%Y %H:%M").to_string())
}

/// Modal dialog for viewing and editing a task
#[component]
pub fn TaskDetailsDialog(
    task: Task,
    #[prop(into)] on_save: Callback<Task>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    // The component is recreated per selected task, so these buffers reset
    // whenever the task identity changes
    let base = StoredValue::new(task.clone());
    let (title, set_title) = signal(task.title.clone());
    let (description, set_description) = signal(task.description.clone().unwrap_or_default());
    let (completed, set_completed) = signal(task.completed);
    // Stays None until the user touches the selector, so saving an untouched
    // legacy record still goes through the resolver
    let (status, set_status) = signal(task.status);

    let shown_status =
        Signal::derive(move || TaskStatus::resolve(status.get(), completed.get()));

    let change_status = move |new_status: TaskStatus| {
        set_status.set(Some(new_status));
        set_completed.set(new_status == TaskStatus::Completed);
    };

    let handle_save = move || {
        let mut edited = base.get_value();
        edited.title = title.get();
        edited.description = Some(description.get());
        edited.completed = completed.get();
        edited.status = status.get();
        on_save.run(edited);
        on_close.run(());
    };

    let created_label = task
        .created_at
        .as_deref()
        .and_then(format_date)
        .unwrap_or_else(|| "N/A".to_string());
    let id_label = task.id.to_string();

    view! {
        <div class="dialog-overlay" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <div class="dialog-header">
                    <h2 class="dialog-title">"Détails de la tâche"</h2>
                    <p class="dialog-subtitle">
                        "Consultez et modifiez les informations de votre tâche"
                    </p>
                </div>

                <div class="dialog-field">
                    <label for="title">"Titre"</label>
                    <input
                        id="title"
                        type="text"
                        placeholder="Titre de la tâche"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>

                <div class="dialog-field">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="4"
                        placeholder="Ajoutez une description détaillée..."
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="dialog-field">
                    <label>"Statut"</label>
                    <StatusSelect value=shown_status on_change=change_status/>
                </div>

                <div class="dialog-info">
                    <p class="dialog-info-line">"📅 Créée le " {created_label}</p>
                    <p class="dialog-info-line">"ID: " <span class="dialog-info-id">{id_label}</span></p>
                </div>

                <div class="dialog-actions">
                    <button class="dialog-cancel-btn" on:click=move |_| on_close.run(())>
                        "Annuler"
                    </button>
                    <button class="dialog-save-btn" on:click=move |_| handle_save()>
                        "Enregistrer"
                    </button>
                </div>
            </div>
        </div>
    }
}
