use leptos::prelude::*;

#[component]
pub fn ProjectCard(
    title: &'static str,
    description: &'static str,
    live_url: &'static str,
    repo_url: &'static str,
    image: &'static str,
) -> impl IntoView {
    view! {
        <div class="project-card" data-project=title>
            <div class="project-image">
                <img src=image alt=title />
                <div class="overlay">
                    <a href=live_url target="_blank" rel="noopener noreferrer" class="btn btn-live">
                        "View Project"
                    </a>
                    <a href=repo_url target="_blank" rel="noopener noreferrer" class="btn btn-code">
                        "View Code"
                    </a>
                </div>
            </div>
            <div class="project-content">
                <h3>{title}</h3>
                <p>{description}</p>
            </div>
        </div>
    }
}
