use leptos::prelude::*;

use super::ProjectCard;
use crate::content::PROJECTS;

#[component]
pub fn ProjectGrid() -> impl IntoView {
    view! {
        <section id="projects" class="projects-section">
            <h2>"Projects"</h2>
            <div class="projects-grid">
                {PROJECTS
                    .iter()
                    .map(|p| {
                        view! {
                            <ProjectCard
                                title=p.title
                                description=p.description
                                live_url=p.live_url
                                repo_url=p.repo_url
                                image=p.image
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
