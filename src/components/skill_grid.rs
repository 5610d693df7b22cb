use leptos::prelude::*;

use crate::content::{Skill, SKILLS};

#[component]
pub fn SkillGrid() -> impl IntoView {
    view! {
        <section id="skills" class="section section-dark">
            <h2 class="section-title">"Skills"</h2>
            <div class="skills-grid">
                {SKILLS
                    .iter()
                    .map(|skill| view! { <SkillCard skill=*skill /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Proficiency bar filled to the skill's level; widens to full and reveals
/// the experience label on hover.
#[component]
pub fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="skill-card" data-skill=skill.name>
            <h3 class="skill-card__name">{skill.name}</h3>
            <div class="skill-card__track">
                <div class="skill-card__bar" style:width=skill.bar_width()></div>
            </div>
            <span class="skill-card__label">{skill.hover_label()}</span>
        </div>
    }
}
