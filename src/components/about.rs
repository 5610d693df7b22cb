use leptos::prelude::*;

use crate::content::ABOUT_PARAGRAPHS;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about-section">
            <h2>"About Me"</h2>
            {ABOUT_PARAGRAPHS
                .iter()
                .map(|paragraph| view! { <p>{*paragraph}</p> })
                .collect::<Vec<_>>()}
        </section>
    }
}
