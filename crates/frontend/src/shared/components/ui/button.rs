use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost).
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    view! {
        <button
            type="button"
            class=move || format!("button {}", variant_class())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
