use crate::routes::routes::AppRoutes;
use crate::shared::event_pipe::EventPipe;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the event channel to the whole component tree via context.
    // Subscriptions live and die with the components that hold them.
    provide_context(EventPipe::new());

    view! {
        <AppRoutes />
    }
}
