//! Footer Component

use leptos::prelude::*;

/// Page footer with copyright and link row
#[component]
pub fn Footer() -> impl IntoView {
    let current_year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="app-footer">
            <div class="footer-inner">
                <p class="footer-copyright">
                    {format!("© {} TASKMASTER. Tous droits réservés.", current_year)}
                </p>
                <div class="footer-links">
                    <a href="#" class="footer-link">"Confidentialité"</a>
                    <a href="#" class="footer-link">"Conditions d'utilisation"</a>
                    <a href="#" class="footer-link">"Contact"</a>
                </div>
            </div>
        </footer>
    }
}
