//! Status Select Component
//!
//! Reusable status selector, shared by the task row and the details dialog.

use leptos::prelude::*;

use crate::models::TaskStatus;

/// Status dropdown, tinted by the current value
#[component]
pub fn StatusSelect(
    #[prop(into)] value: Signal<TaskStatus>,
    #[prop(into)] on_change: Callback<TaskStatus>,
) -> impl IntoView {
    view! {
        <select
            class=move || format!("status-select {}", value.get().as_str())
            prop:value=move || value.get().as_str()
            on:change=move |ev| {
                if let Some(status) = TaskStatus::from_value(&event_target_value(&ev)) {
                    on_change.run(status);
                }
            }
        >
            {TaskStatus::ALL.iter().map(|status| {
                let status = *status;
                view! {
                    <option value=status.as_str() selected=move || value.get() == status>
                        {status.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
