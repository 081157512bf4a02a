//! Error Banner Component
//!
//! Dismissible banner for failed operations, with a manual retry action.

use leptos::prelude::*;

use crate::context::AppContext;

/// Operation-failure banner
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.error.get().map(|op| view! {
            <div class="error-banner">
                <span class="error-icon">"⚠"</span>
                <div class="error-body">
                    <h3 class="error-title">"Erreur"</h3>
                    <p class="error-message">{op.message()}</p>
                    <button class="error-retry-btn" on:click=move |_| ctx.reload()>
                        "Réessayer"
                    </button>
                </div>
                <button class="error-dismiss-btn" on:click=move |_| ctx.dismiss_error()>
                    "×"
                </button>
            </div>
        })}
    }
}
