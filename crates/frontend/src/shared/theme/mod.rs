//! Theme management module.
//!
//! Context-based theme system with light and dark themes. The preference is
//! persisted in localStorage (filter selections never are).

use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme name used for the CSS class and the localStorage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// The CSS file for this theme.
    pub fn css_path(&self) -> &'static str {
        match self {
            Theme::Light => "/static/themes/light.css",
            Theme::Dark => "/static/themes/dark.css",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

const THEME_STORAGE_KEY: &str = "trebami-theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Applies the theme by swapping the theme stylesheet link.
fn apply_theme_css(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    let head = match document.head() {
        Some(h) => h,
        None => return,
    };

    if let Ok(Some(existing)) = document.query_selector("#theme-stylesheet") {
        let _ = existing.remove();
    }

    if let Ok(link) = document.create_element("link") {
        let _ = link.set_attribute("id", "theme-stylesheet");
        let _ = link.set_attribute("rel", "stylesheet");
        let _ = link.set_attribute("href", theme.css_path());
        let _ = head.append_child(&link);
    }

    // data-theme attribute on body for additional styling hooks
    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist it.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme_css(theme);
    }
}

/// Provides the theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);

    apply_theme_css(initial_theme);

    provide_context(ThemeContext { theme });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap the app with ThemeProvider.")
}

/// Theme selector dropdown for the top header.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_theme();
    let (dropdown_open, set_dropdown_open) = signal(false);

    let select_theme = move |theme: Theme| {
        ctx.set_theme(theme);
        set_dropdown_open.set(false);
    };

    // Close the dropdown on any outside click
    Effect::new(move |_| {
        if dropdown_open.get() {
            use wasm_bindgen::prelude::*;
            use wasm_bindgen::JsCast;

            let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
                set_dropdown_open.set(false);
            }) as Box<dyn FnMut(_)>);

            if let Some(window) = window() {
                let _ = window
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget(); // keep the listener alive
            }
        }
    });

    view! {
        <div class="theme-selector" style="position: relative;">
            <button
                class="top-header__icon-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_dropdown_open.update(|open| *open = !*open);
                }
                title="Theme"
            >
                {crate::shared::icons::icon("palette")}
            </button>

            <Show when=move || dropdown_open.get()>
                <div class="theme-dropdown" on:click=move |ev| ev.stop_propagation()>
                    {Theme::all().into_iter().map(|theme| {
                        let is_active = move || ctx.theme.get() == theme;
                        view! {
                            <button
                                class=move || if is_active() { "theme-dropdown-item active" } else { "theme-dropdown-item" }
                                on:click=move |_| select_theme(theme)
                            >
                                {theme.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
