//! Creation form. Disabled while a note is being edited so an in-progress
//! edit cannot race a create, the app's only duplicate-submit guard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use notes_app::AppState;

use crate::app::api;

#[component]
pub fn NoteForm(state: RwSignal<AppState>) -> impl IntoView {
    let editing = move || state.get().editing.is_some();
    let busy = move || {
        let s = state.get();
        s.loading || s.editing.is_some()
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let mut s = state.get_untracked();
            s.submit_create(&api()).await;
            state.set(s);
        });
    };

    view! {
        <form class="note-form" on:submit=submit>
            <h2>{move || if editing() { "Finish editing first..." } else { "Add a note" }}</h2>
            <label for="title">"Title"</label>
            <input
                id="title"
                type="text"
                placeholder="Note title..."
                prop:value=move || state.get().title
                prop:disabled=editing
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_title(value));
                }
            />
            <label for="description">"Description"</label>
            <textarea
                id="description"
                placeholder="Optional description..."
                prop:value=move || state.get().description
                prop:disabled=editing
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_description(value));
                }
            />
            <button type="submit" prop:disabled=busy>
                {move || if state.get().loading { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}
