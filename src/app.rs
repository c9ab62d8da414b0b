mod about;
mod contact;
mod header;
mod hero;
mod homepage;
mod notification;
mod projects;
mod resume;
mod theme;
mod typing;

pub use notification::{NotificationKind, Notifications};
pub use theme::ThemeContext;
pub use typing::{use_typing_text, TypingText};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::{build_date, build_year, OWNER_NAME};
use header::Header;
use homepage::HomePage;
use notification::Toasts;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = theme::provide_theme();
    notification::provide_notifications();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Router>
            <div class=move || {
                format!(
                    "{} min-h-screen flex flex-col bg-cream-50 text-gray-900 dark:bg-charcoal-800 dark:text-gray-100 transition-colors duration-300",
                    theme.current().as_class(),
                )
            }>
                <Header />
                <main class="flex-grow">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
                <Toasts />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-sm text-gray-600 dark:text-gray-400 border-t border-gray-200 dark:border-charcoal-700">
            <p>{format!("© {} {OWNER_NAME}. All rights reserved.", build_year())}</p>
            <p class="mt-1 text-xs opacity-70">{format!("Built {}", build_date())}</p>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found" />
        <section class="min-h-[60vh] flex flex-col items-center justify-center gap-4 pt-24">
            <h1 class="text-6xl font-bold text-teal-600 dark:text-teal-400">"404"</h1>
            <p class="text-lg">"The page you're looking for doesn't exist."</p>
            <a href="/" class="px-6 py-3 rounded-lg bg-teal-600 text-white hover:bg-teal-700">
                "Back to Home"
            </a>
        </section>
    }
}

#[component]
fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold mb-3">{title}</h2>
            <div class="mx-auto h-1 w-20 rounded bg-gradient-to-r from-teal-500 to-cyan-500"></div>
            {subtitle.map(|s| view! { <p class="mt-4 text-gray-600 dark:text-gray-400">{s}</p> })}
        </div>
    }
}
