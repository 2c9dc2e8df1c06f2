//! Health Log Panel
//!
//! Form for logging a daily wellness entry against an existing user.

use leptos::*;

use crate::api;
use crate::pages::form::apply_submit_outcome;

/// Daily health log form. `on_logged` fires after a successful submit.
#[component]
pub fn HealthLogForm(on_logged: impl Fn() + 'static + Clone) -> impl IntoView {
    let (user_email, set_user_email) = create_signal(String::new());
    let (mood, set_mood) = create_signal(String::new());
    let (sleep, set_sleep) = create_signal(String::new());
    let (hydration, set_hydration) = create_signal(String::new());
    let (activity, set_activity) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (message, set_message) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_message.set(String::new());
        set_submitting.set(true);

        let payload = api::NewHealthLog {
            user_email: user_email.get(),
            mood: api::opt_text(&mood.get()),
            sleep_hours: api::opt_number(&sleep.get()),
            hydration_ml: api::opt_number(&hydration.get()),
            activity_minutes: api::opt_number(&activity.get()),
        };

        let on_logged = on_logged.clone();
        spawn_local(async move {
            let result = api::create_log(&payload).await;
            if apply_submit_outcome(
                result,
                set_message,
                "Log added",
                &[set_user_email, set_mood, set_sleep, set_hydration, set_activity],
            ) {
                on_logged();
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-3">
            <input
                type="text"
                placeholder="User email"
                required=true
                prop:value=move || user_email.get()
                on:input=move |ev| set_user_email.set(event_target_value(&ev))
                class="input"
            />

            <div class="grid grid-cols-2 gap-3">
                <select
                    prop:value=move || mood.get()
                    on:change=move |ev| set_mood.set(event_target_value(&ev))
                    class="input"
                >
                    <option value="">"Mood"</option>
                    <option value="low">"low"</option>
                    <option value="okay">"okay"</option>
                    <option value="good">"good"</option>
                    <option value="great">"great"</option>
                </select>
                <input
                    type="number"
                    placeholder="Sleep (hrs)"
                    min="0"
                    max="24"
                    step="0.1"
                    prop:value=move || sleep.get()
                    on:input=move |ev| set_sleep.set(event_target_value(&ev))
                    class="input"
                />
                <input
                    type="number"
                    placeholder="Hydration (ml)"
                    min="0"
                    max="10000"
                    prop:value=move || hydration.get()
                    on:input=move |ev| set_hydration.set(event_target_value(&ev))
                    class="input"
                />
                <input
                    type="number"
                    placeholder="Activity (min)"
                    min="0"
                    max="1440"
                    prop:value=move || activity.get()
                    on:input=move |ev| set_activity.set(event_target_value(&ev))
                    class="input"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="btn-primary w-full"
            >
                {move || if submitting.get() { "Logging..." } else { "Add log" }}
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
