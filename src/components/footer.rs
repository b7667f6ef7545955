//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <p>{format!("© {} Portfolio. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}
