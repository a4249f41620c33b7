//! Dropdown selector over the streams or datasets of the active namespace.
//!
//! On every selection the widget fetches the resource's detail and emits the
//! record schema JSON on the `dataset.selected` topic of the [`EventPipe`],
//! where sibling components pick it up.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use contracts::domain::common::{ListParams, ResourceKind, ResourceSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use crate::domain;
use crate::shared::components::ui::Select;
use crate::shared::event_pipe::{topics, EventPipe};
use crate::shared::query_state;

/// Tracks which detail request is current.
///
/// Every selection opens a new generation; a response may only publish while
/// its generation is still the latest and the widget has not been torn down.
#[derive(Debug, Default)]
struct FlightGuard {
    generation: AtomicU64,
    closed: AtomicBool,
}

impl FlightGuard {
    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        !self.closed.load(Ordering::Relaxed)
            && self.generation.load(Ordering::Relaxed) == generation
    }

    fn close(&self) {
        self.closed.store(true, Ordering::Relaxed);
    }
}

#[component]
pub fn DatasetOrStreamSelector(
    /// Resource kind to offer: "stream" or "dataset"
    #[prop(into)]
    dataset_type: String,
) -> impl IntoView {
    let pipe = use_context::<EventPipe>().expect("EventPipe not provided in context");

    let (list, set_list) = signal(Vec::<ResourceSummary>::new());
    let (selected, set_selected) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);

    // The kind is fixed for the widget's lifetime. An unknown attribute value
    // is a configuration error, surfaced instead of leaving the widget
    // silently inert.
    let kind = match dataset_type.parse::<ResourceKind>() {
        Ok(kind) => Some(kind),
        Err(e) => {
            log::error!("Dataset selector misconfigured: {}", e);
            set_error.set(Some(e));
            set_loading.set(false);
            None
        }
    };

    // Namespace is read once; the widget does not follow later navigation.
    let namespace = query_state::current_namespace();

    let guard = Arc::new(FlightGuard::default());
    let in_flight = StoredValue::new_local(None::<AbortController>);

    if let Some(kind) = kind {
        let params = ListParams::new(namespace.clone());
        wasm_bindgen_futures::spawn_local(async move {
            match domain::list_resources(kind, &params).await {
                Ok(items) => set_list.set(items),
                Err(e) => {
                    log::error!(
                        "Failed to list {}s in namespace '{}': {}",
                        kind,
                        params.namespace,
                        e
                    );
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    }

    // Watch the selection, including the transition from "nothing selected".
    {
        let guard = guard.clone();
        let pipe = pipe.clone();
        let namespace = namespace.clone();
        Effect::new(move |_| {
            let name = selected.get();
            if name.is_empty() {
                return;
            }
            let Some(kind) = kind else {
                return;
            };

            // Latest selection wins: abort the previous fetch and open a new
            // generation before spawning.
            if let Some(previous) = in_flight.try_update_value(|slot| slot.take()).flatten() {
                previous.abort();
            }
            let generation = guard.begin();
            let controller = AbortController::new().ok();
            let abort_signal = controller.as_ref().map(|c| c.signal());
            let _ = in_flight.try_update_value(|slot| *slot = controller);

            let params = kind.detail_params(&namespace, &name);
            let guard = guard.clone();
            let pipe = pipe.clone();
            spawn_local(async move {
                let result = domain::fetch_detail(kind, &params, abort_signal.as_ref()).await;
                if !guard.is_current(generation) {
                    // Superseded or torn down; aborted requests land here too.
                    return;
                }
                match result.and_then(|detail| detail.schema_payload()) {
                    Ok(schema) => {
                        set_error.set(None);
                        pipe.emit(topics::DATASET_SELECTED, &schema);
                    }
                    Err(e) => {
                        log::error!("Failed to load {} '{}': {}", kind, name, e);
                        set_error.set(Some(e));
                    }
                }
            });
        });
    }

    {
        let guard = guard.clone();
        on_cleanup(move || {
            guard.close();
            if let Some(pending) = in_flight.try_update_value(|slot| slot.take()).flatten() {
                pending.abort();
            }
        });
    }

    let caption = kind.map(|k| k.label()).unwrap_or("Resource");
    let placeholder = move || {
        if loading.get() {
            "Loading...".to_string()
        } else {
            format!("Select a {}", caption.to_lowercase())
        }
    };

    view! {
        <div class="dataset-selector">
            {move || error.get().map(|e| view! {
                <div class="form__error">{e}</div>
            })}
            {kind.map(|k| view! {
                <Select
                    label=format!("{} name", k.label())
                    value=selected
                    on_change=Callback::new(move |value: String| set_selected.set(value))
                    options=Signal::derive(move || {
                        list.get().into_iter().map(|r| r.name).collect::<Vec<_>>()
                    })
                    placeholder=Signal::derive(placeholder)
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_guard_single_flight() {
        let guard = FlightGuard::default();
        let generation = guard.begin();
        assert!(guard.is_current(generation));
    }

    #[test]
    fn test_flight_guard_latest_selection_wins() {
        let guard = FlightGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_flight_guard_closed_after_teardown() {
        let guard = FlightGuard::default();
        let generation = guard.begin();
        guard.close();
        assert!(!guard.is_current(generation));
        // A late begin (races the teardown) must not reopen the guard.
        let late = guard.begin();
        assert!(!guard.is_current(late));
    }
}
