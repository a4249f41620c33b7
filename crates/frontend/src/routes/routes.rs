use contracts::domain::common::ResourceKind;
use leptos::prelude::*;

use crate::shared::components::dataset_selector::DatasetOrStreamSelector;
use crate::shared::components::schema_preview::SchemaPreview;
use crate::shared::query_state;

#[component]
fn StudioPage() -> impl IntoView {
    let namespace = query_state::current_namespace();

    view! {
        <div class="studio">
            <header class="studio__header">
                <h1>"Schema studio"</h1>
                <span class="studio__namespace">"Namespace: " {namespace}</span>
            </header>
            <div class="studio__grid">
                <div class="studio__selectors">
                    <DatasetOrStreamSelector dataset_type=ResourceKind::Stream.as_str() />
                    <DatasetOrStreamSelector dataset_type=ResourceKind::Dataset.as_str() />
                </div>
                <SchemaPreview />
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <StudioPage /> }
}
