use leptos::prelude::*;

/// Checkbox component
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form__checkbox-wrapper">
            <label class="form__checkbox-label">
                <input
                    type="checkbox"
                    class="form__checkbox"
                    checked=move || checked.get()
                    on:change=move |ev| {
                        on_change.run(event_target_checked(&ev));
                    }
                />
                <span>{label}</span>
            </label>
        </div>
    }
}
