use leptos::prelude::*;

use crate::shared::event_pipe::{topics, EventPipe};

/// Показывает схему последнего выбранного ресурса.
///
/// Слушает топик `dataset.selected`; подписка снимается при размонтировании
/// компонента.
#[component]
pub fn SchemaPreview() -> impl IntoView {
    let pipe = use_context::<EventPipe>().expect("EventPipe not provided in context");

    let (schema, set_schema) = signal(None::<String>);

    let subscription = pipe.subscribe(topics::DATASET_SELECTED, move |payload| {
        set_schema.set(Some(pretty_schema(payload)));
    });
    on_cleanup(move || subscription.cancel());

    view! {
        <div class="schema-preview">
            <h3>"Schema"</h3>
            {move || match schema.get() {
                Some(text) => view! {
                    <pre class="schema-preview__body">{text}</pre>
                }.into_any(),
                None => view! {
                    <p class="text-muted">"Select a stream or dataset to see its schema"</p>
                }.into_any(),
            }}
        </div>
    }
}

/// Re-indent a schema payload for display. Payloads that are not valid JSON
/// are shown as-is.
fn pretty_schema(payload: &str) -> String {
    serde_json::from_str::<serde_json::Value>(payload)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| payload.to_string())
}
