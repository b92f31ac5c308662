use leptos::prelude::*;

/// Select component with label support.
///
/// Options are (value, label) tuples; the filter schema's option tables are
/// mapped into this shape by the caller.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <select
                class="form__select"
                on:change=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            >
                {options.into_iter().map(|(val, option_label)| {
                    let val_clone = val.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=val selected=is_selected>
                            {option_label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
