use leptos::prelude::*;

/// PageHeader component - reusable header for dashboard pages.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Children content (pass empty fragment if not needed)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
