use leptos::{html, prelude::*};
use leptos_use::{use_element_bounding, UseElementBoundingReturn};

use crate::app::SiteSettings;
use crate::content::{FLOATING_BADGES, PROFILE};
use crate::motion::{
    badge_motion, hero_transform, parallax_offset, scroll_progress, BADGE_KEYFRAMES,
};
use crate::placement::{BadgePosition, BadgeRng};

#[component]
pub fn Hero() -> impl IntoView {
    let hero_ref = NodeRef::<html::Section>::new();
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(hero_ref);

    let offset = move || parallax_offset(scroll_progress(top.get(), height.get()));

    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let mut rng = BadgeRng::new(settings.badge_seed);
    let badges = FLOATING_BADGES
        .iter()
        .enumerate()
        .map(|(index, label)| {
            view! { <FloatingBadge label=*label index=index position=rng.place() /> }
        })
        .collect::<Vec<_>>();

    view! {
        <section node_ref=hero_ref id="home" class="hero">
            <div class="hero-content" style:transform=move || hero_transform(offset())>
                <h1 class="hero-title">
                    "Hi, I'm " <span class="text-gradient animate-gradient">{PROFILE.name}</span>
                </h1>
                <p class="hero-subtitle">{PROFILE.subtitle}</p>
                <div class="hero-buttons">
                    <a href="#projects" class="btn btn-gradient">"View Projects"</a>
                    <a href="#contact" class="btn btn-dark">"Contact Me"</a>
                </div>
            </div>

            <div class="blob blob1"></div>
            <div class="blob blob2"></div>

            {badges}
        </section>
    }
}

/// Skill label drifting on a loop at a random spot in the hero.
#[component]
pub fn FloatingBadge(label: &'static str, index: usize, position: BadgePosition) -> impl IntoView {
    let animation = badge_motion(index).animation_css(BADGE_KEYFRAMES);

    view! {
        <div
            class="floating-skill"
            data-badge=label
            style=format!("{} animation: {animation};", position.style())
        >
            {label}
        </div>
    }
}
