//! Searchable note list with inline editing, expand/collapse for long
//! descriptions, and a two-step delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use notes_app::{AppState, ListView, collapsed_description, list_view};
use notes_store::Note;

use crate::app::api;

#[component]
pub fn NoteList(state: RwSignal<AppState>) -> impl IntoView {
    view! {
        <section class="note-list">
            <h2>"Notes"</h2>
            <input
                type="search"
                placeholder="Search by title or description..."
                aria-label="Search notes"
                prop:value=move || state.get().search
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_search(value));
                }
            />
            {move || {
                let s = state.get();
                if s.loading && s.notes.is_empty() {
                    // First fetch: nothing to show yet.
                    return view! { <p class="placeholder">"Loading notes..."</p> }.into_any();
                }
                match list_view(&s) {
                    ListView::Empty { heading, detail } | ListView::NoMatches { heading, detail } => {
                        view! {
                            <div class="empty-state">
                                <h3>{heading}</h3>
                                <p>{detail}</p>
                            </div>
                        }
                        .into_any()
                    }
                    ListView::Notes(notes) => {
                        let rows = notes
                            .into_iter()
                            .map(|note| {
                                let editing = s.is_editing(&note.id);
                                let delete_pending =
                                    s.pending_delete.as_deref() == Some(note.id.as_str());
                                let note = note.clone();
                                view! {
                                    <NoteRow
                                        state=state
                                        note=note
                                        editing=editing
                                        delete_pending=delete_pending
                                    />
                                }
                            })
                            .collect_view();
                        view! { <div class="rows">{rows}</div> }.into_any()
                    }
                }
            }}
        </section>
    }
}

/// One note row. The row is a snapshot: the whole list is rebuilt whenever
/// the app state changes, so `editing` and `delete_pending` arrive as
/// plain props; only the expand/collapse toggle is row-local.
#[component]
fn NoteRow(
    state: RwSignal<AppState>,
    note: Note,
    editing: bool,
    delete_pending: bool,
) -> impl IntoView {
    if editing {
        return edit_form(state).into_any();
    }

    let (expanded, set_expanded) = signal(false);
    let description = note.description.clone();
    let preview = description.as_deref().and_then(collapsed_description);
    let has_toggle = preview.is_some();
    let shown = {
        let description = description.clone();
        move || {
            if expanded.get() {
                description.clone()
            } else {
                preview.clone().or_else(|| description.clone())
            }
        }
    };

    let description_block = description.is_some().then(move || {
        view! {
            <div class="description">
                <p>{shown}</p>
                {has_toggle
                    .then(|| {
                        view! {
                            <button
                                class="toggle"
                                on:click=move |_| set_expanded.update(|e| *e = !*e)
                            >
                                {move || if expanded.get() { "Show less" } else { "Show more" }}
                            </button>
                        }
                    })}
            </div>
        }
    });

    let begin = {
        let note = note.clone();
        move |_: leptos::ev::MouseEvent| state.update(|s| s.begin_edit(&note))
    };
    let request = {
        let id = note.id.clone();
        move |_: leptos::ev::MouseEvent| state.update(|s| s.request_remove(id.clone()))
    };
    let confirm = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            let mut s = state.get_untracked();
            s.confirm_remove(&api()).await;
            state.set(s);
        });
    };
    let cancel = move |_: leptos::ev::MouseEvent| state.update(|s| s.cancel_remove());

    let created = note.created_at.format("%Y-%m-%d %H:%M").to_string();

    view! {
        <article class="note">
            <h3>{note.title.clone()}</h3>
            {description_block}
            <footer>
                <span class="created-at">{created}</span>
                <span class="actions">
                    <button class="edit" title="Edit note" on:click=begin>
                        "Edit"
                    </button>
                    {if delete_pending {
                        view! {
                            <span class="delete-confirm">
                                <span>"Delete?"</span>
                                <button class="confirm" on:click=confirm>"Yes"</button>
                                <button class="cancel" on:click=cancel>"No"</button>
                            </span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button class="delete" title="Delete note" on:click=request>
                                "Delete"
                            </button>
                        }
                            .into_any()
                    }}
                </span>
            </footer>
        </article>
    }
    .into_any()
}

/// Inline edit form bound to the staged edit draft. The save button is
/// disabled while the submission is outstanding.
fn edit_form(state: RwSignal<AppState>) -> impl IntoView {
    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let mut s = state.get_untracked();
            s.submit_update(&api()).await;
            state.set(s);
        });
    };
    let cancel = move |_: leptos::ev::MouseEvent| state.update(|s| s.cancel_edit());

    view! {
        <form class="note-edit" on:submit=save>
            <label>"Title"</label>
            <input
                type="text"
                prop:value=move || state.get().editing.map(|e| e.title).unwrap_or_default()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_edit_title(value));
                }
            />
            <label>"Description"</label>
            <textarea
                prop:value=move || {
                    state.get().editing.map(|e| e.description).unwrap_or_default()
                }
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_edit_description(value));
                }
            />
            <div class="edit-actions">
                <button type="button" on:click=cancel>
                    "Cancel"
                </button>
                <button type="submit" prop:disabled=move || state.get().loading>
                    "Save changes"
                </button>
            </div>
        </form>
    }
}
