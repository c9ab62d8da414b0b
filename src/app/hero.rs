use leptos::prelude::*;

use crate::portfolio::{hero_typing_config, HERO_TAGLINE, OWNER_NAME};

use super::typing::TypingText;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-br from-cream-50 via-gray-50 to-gray-100 dark:from-charcoal-700 dark:via-charcoal-800 dark:to-slate-900"
        >
            <div class="relative z-10 text-center px-4 max-w-4xl">
                <p class="text-lg text-gray-600 dark:text-gray-400 mb-4">"Hello, I'm"</p>
                <h1 class="text-5xl md:text-7xl font-bold mb-6 tracking-tight">
                    {OWNER_NAME.to_uppercase()}
                </h1>
                <div class="text-2xl md:text-3xl mb-8 h-10">
                    "I'm a "
                    <TypingText
                        config=hero_typing_config()
                        class="text-teal-600 dark:text-teal-400 font-bold"
                    />
                </div>
                <p class="text-base sm:text-lg text-gray-600 dark:text-gray-400 mb-10 max-w-2xl mx-auto leading-relaxed">
                    {HERO_TAGLINE}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <a
                        href="#projects"
                        class="px-8 py-3 rounded-lg bg-teal-600 text-white font-medium hover:bg-teal-700 transition-colors"
                    >
                        "View My Work →"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 rounded-lg border border-teal-600 text-teal-600 dark:text-teal-400 font-medium hover:bg-teal-600/10 transition-colors"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
