//! Root component: owns the app-state signal and kicks off the first
//! fetch. All behavior lives in `notes-app`; the components here only
//! render state and dispatch its operations.

use leptos::prelude::*;
use leptos::task::spawn_local;

use notes_app::AppState;
use notes_store::ProxyApi;

use crate::components::{NoteForm, NoteList};

/// Store client pointed at the page's own origin; the proxy serves the API
/// under `/api/notes` next to the static files.
pub(crate) fn api() -> ProxyApi {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".to_string());
    ProxyApi::new(origin)
}

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(AppState::new());

    // First fetch on mount.
    Effect::new(move |_| {
        spawn_local(async move {
            let mut s = state.get_untracked();
            s.refresh(&api()).await;
            state.set(s);
        });
    });

    view! {
        <div class="app">
            <header>
                <h1>"Secure Notes"</h1>
                <p>"Client-server architecture: the store credential stays on the proxy."</p>
            </header>

            <Show when=move || state.get().backend_unreachable>
                <div class="server-error" role="alert">
                    <h3>"Backend unreachable"</h3>
                    <p>{move || state.get().error.clone().unwrap_or_default()}</p>
                </div>
            </Show>

            <main>
                <NoteForm state=state />
                <Show when=move || {
                    let s = state.get();
                    s.error.is_some() && !s.backend_unreachable
                }>
                    <div class="error" role="alert">
                        {move || state.get().error.clone().unwrap_or_default()}
                    </div>
                </Show>
                <NoteList state=state />
            </main>
        </div>
    }
}
