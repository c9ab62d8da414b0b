use leptos::{ev, prelude::*, web_sys::HtmlElement};
use leptos_use::{use_event_listener, use_window, use_window_scroll};
use wasm_bindgen::JsCast;

use crate::portfolio::{active_section, is_scrolled, SectionBounds, NAV_ITEMS, OWNER_NAME};

use super::theme::ThemeToggle;

const ACTIVE_LINK_CLASS: &str = "text-teal-600 dark:text-teal-400";

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// Where each nav target currently sits on the page. Browser only.
fn measure_sections() -> Vec<SectionBounds<'static>> {
    let document = document();
    NAV_ITEMS
        .iter()
        .filter_map(|item| {
            let section = document
                .get_element_by_id(item.section_id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                id: item.section_id(),
                top: section.offset_top().into(),
                height: section.client_height().into(),
            })
        })
        .collect()
}

fn nav_links(
    link_class: &'static str,
    active: ReadSignal<&'static str>,
    on_pick: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    NAV_ITEMS
        .iter()
        .map(|item| {
            let id = item.section_id();
            let is_active = move || active.get() == id;
            view! {
                <a
                    href=item.href
                    class=move || {
                        if is_active() {
                            format!("{link_class} {ACTIVE_LINK_CLASS}")
                        } else {
                            link_class.to_string()
                        }
                    }
                    aria-current=move || is_active().then_some("true")
                    on:click=move |_| on_pick()
                >
                    {item.label}
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(NAV_ITEMS[0].section_id());
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        if let Some(id) = active_section(y, &measure_sections()) {
            if active.get_untracked() != id {
                set_active.set(id);
            }
        }
    });

    let _ = use_event_listener(use_window(), ev::keydown, move |e| {
        if e.key() == "Escape" {
            set_menu_open.set(false);
        }
    });

    let header_class = move || {
        if is_scrolled(scroll_y.get()) {
            "fixed top-0 inset-x-0 z-40 transition-all duration-500 backdrop-blur-xl bg-white/90 dark:bg-charcoal-800/90 shadow-lg border-b border-gray-200/50 dark:border-charcoal-700/50"
        } else {
            "fixed top-0 inset-x-0 z-40 transition-all duration-500 backdrop-blur-lg bg-white/60 dark:bg-charcoal-800/60 border-b border-transparent"
        }
    };

    view! {
        <header class=header_class>
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a href="#hero" class="text-2xl font-bold text-teal-600 dark:text-teal-400">
                    {initials(OWNER_NAME)}
                </a>
                <nav class="hidden md:flex items-center gap-6">
                    {nav_links(
                        "font-medium hover:text-teal-600 dark:hover:text-teal-400 transition-colors",
                        active,
                        || {},
                    )}
                </nav>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-charcoal-700"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden flex flex-col gap-1 px-4 pb-4">
                    {nav_links(
                        "py-2 px-3 rounded-lg hover:bg-gray-100 dark:hover:bg-charcoal-700",
                        active,
                        move || set_menu_open.set(false),
                    )}
                </nav>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Arunpandian C"), "AC");
        assert_eq!(initials("  ada   lovelace "), "AL");
        assert_eq!(initials(""), "");
    }
}
