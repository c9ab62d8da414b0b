use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn current(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("switching to {} theme", next.as_class());
        self.set_theme.set(next);
    }
}

/// Installs the theme context. In the browser the choice is kept in local storage.
pub fn provide_theme() -> ThemeContext {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(STORAGE_KEY);

    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-charcoal-700 transition-colors"
            aria-label="Toggle theme"
            on:click=move |_| ctx.toggle()
        >
            {move || ctx.current().icon()}
        </button>
    }
}
