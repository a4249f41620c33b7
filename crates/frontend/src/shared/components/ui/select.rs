use leptos::prelude::*;

/// Select component with label and placeholder row support
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Currently selected value; empty string means nothing is selected
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Selectable values, shown in order
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Text of the non-selectable placeholder row
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {l}
                </label>
            })}
            <select
                class="form__select"
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|text| view! {
                    <option value="" selected=move || value.get().is_empty()>
                        {text}
                    </option>
                })}
                <For
                    each=move || options.get()
                    key=|name| name.clone()
                    children=move |name| {
                        let option_value = name.clone();
                        let for_selected = name.clone();
                        let is_selected = move || value.get() == for_selected;
                        view! {
                            <option value=option_value selected=is_selected>
                                {name}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
