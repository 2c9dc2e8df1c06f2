//! Profile Panel
//!
//! Form for creating a user profile.

use leptos::*;

use crate::api;
use crate::pages::form::apply_submit_outcome;

/// Profile creation form. `on_saved` fires after a successful submit so
/// the shell can advance to the next tab.
#[component]
pub fn ProfileForm(on_saved: impl Fn() + 'static + Clone) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (age, set_age) = create_signal(String::new());
    let (gender, set_gender) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (message, set_message) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_message.set(String::new());
        set_submitting.set(true);

        let payload = api::NewUser {
            name: name.get(),
            email: email.get(),
            age: api::opt_number(&age.get()),
            gender: api::opt_text(&gender.get()),
        };

        let on_saved = on_saved.clone();
        spawn_local(async move {
            let result = api::create_user(&payload).await;
            if apply_submit_outcome(
                result,
                set_message,
                "Profile saved",
                &[set_name, set_email, set_age, set_gender],
            ) {
                on_saved();
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-3">
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                <input
                    type="text"
                    placeholder="Full name"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="input"
                />
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="input"
                />
                <input
                    type="number"
                    placeholder="Age"
                    min="0"
                    max="120"
                    prop:value=move || age.get()
                    on:input=move |ev| set_age.set(event_target_value(&ev))
                    class="input"
                />
                <select
                    prop:value=move || gender.get()
                    on:change=move |ev| set_gender.set(event_target_value(&ev))
                    class="input"
                >
                    <option value="">"Gender"</option>
                    <option value="male">"male"</option>
                    <option value="female">"female"</option>
                    <option value="non-binary">"non-binary"</option>
                    <option value="other">"other"</option>
                </select>
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="btn-primary w-full"
            >
                {move || if submitting.get() { "Saving..." } else { "Save profile" }}
            </button>

            {move || {
                let msg = message.get();
                if msg.is_empty() {
                    view! {}.into_view()
                } else {
                    view! {
                        <p class="text-sm text-center text-gray-600">{msg}</p>
                    }.into_view()
                }
            }}
        </form>
    }
}
