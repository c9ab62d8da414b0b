use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::{About, Skills},
    contact::Contact,
    hero::Hero,
    projects::Projects,
    resume::{Education, Experience},
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Education />
        <Projects />
        <Experience />
        <Contact />
    }
}
