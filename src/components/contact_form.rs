//! Contact Form Component
//!
//! Validates locally, then hands the message to the configured backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{contact_backend, ContactBackend};
use crate::config::SiteConfig;
use crate::controllers::{ContactFormState, Feedback};

/// Blocking notice, like the browser's own form errors
fn notify(feedback: &Feedback) {
    if let Some(text) = feedback.message() {
        let _ = window().alert_with_message(&text);
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig should be provided");
    let backend = StoredValue::new_local(contact_backend(&config));
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let message = match form.try_update(|f| f.begin()) {
            Some(Ok(message)) => message,
            Some(Err(feedback)) => {
                notify(&feedback);
                return;
            }
            None => return,
        };

        let backend = backend.get_value();
        spawn_local(async move {
            let result = backend.submit(&message).await;
            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("[CONTACT] Error submitting contact form via {}: {}", backend.name(), e).into(),
                );
            }
            let feedback = form.try_update(|f| f.finish(result)).unwrap_or(Feedback::Failed);
            notify(&feedback);
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="form-group">
                <input
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    prop:value=move || form.with(|f| f.fields.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.fields.name = value);
                    }
                />
            </div>
            <div class="form-group">
                <input
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    prop:value=move || form.with(|f| f.fields.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.fields.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <textarea
                    name="message"
                    rows="5"
                    placeholder="Your Message"
                    prop:value=move || form.with(|f| f.fields.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.fields.message = value);
                    }
                ></textarea>
            </div>
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || form.with(|f| f.button_disabled())
            >
                {move || form.with(|f| f.button_label().to_string())}
            </button>
        </form>
    }
}
