//! Server-side render tests.
//!
//! Run with: cargo test --features ssr

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::*;
use crate::app::{SiteSettings, ThemeContext};
use crate::content::{FLOATING_BADGES, PROJECTS, SKILLS};
use crate::theme::ColorMode;

fn render<V: IntoView>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| view().into_view().to_html())
}

fn with_theme(mode: ColorMode) {
    let (mode, set_mode) = signal(mode);
    provide_context(ThemeContext { mode, set_mode });
}

/// Byte offsets of the needles found in `html`, in needle order.
fn offsets(html: &str, needles: impl IntoIterator<Item = String>) -> Vec<usize> {
    needles
        .into_iter()
        .filter_map(|needle| html.find(&needle))
        .collect()
}

fn assert_ascending(positions: &[usize]) {
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1], "out of order: {positions:?}");
    }
}

#[test]
fn skills_render_in_declared_order() {
    let html = render(|| view! { <SkillGrid /> });
    let positions = offsets(
        &html,
        SKILLS.iter().map(|s| format!("data-skill=\"{}\"", s.name)),
    );
    assert_eq!(positions.len(), 8);
    assert_ascending(&positions);
}

#[test]
fn skill_bar_width_matches_level() {
    for skill in SKILLS {
        let html = render(move || view! { <SkillCard skill=skill /> });
        let bar = format!("class=\"skill-card__bar\" style=\"width:{}%;\"", skill.level);
        assert!(html.contains(&bar), "{} bar missing in {html}", skill.name);
        assert!(html.contains(&skill.hover_label()));
    }
}

#[test]
fn projects_render_in_declared_order_with_links() {
    let html = render(|| view! { <ProjectGrid /> });
    let positions = offsets(
        &html,
        PROJECTS.iter().map(|p| format!("data-project=\"{}\"", p.title)),
    );
    assert_eq!(positions.len(), 3);
    assert_ascending(&positions);

    for project in PROJECTS {
        assert!(html.contains(project.live_url));
        assert!(html.contains(project.repo_url));
    }
    assert_eq!(html.matches("View Project").count(), 3);
    assert_eq!(html.matches("View Code").count(), 3);
}

#[test]
fn hero_renders_every_badge_in_order() {
    let html = render(|| {
        provide_context(SiteSettings { badge_seed: Some(3) });
        view! { <Hero /> }
    });
    let positions = offsets(
        &html,
        FLOATING_BADGES.iter().map(|b| format!("data-badge=\"{b}\"")),
    );
    assert_eq!(positions.len(), 8);
    assert_ascending(&positions);

    assert!(html.contains("float-badge 8s ease-in-out infinite"));
    assert!(html.contains("float-badge 15s ease-in-out infinite"));
    assert!(html.contains("translateY(0px)"));
}

#[test]
fn theme_toggle_offers_the_other_mode() {
    let dark = render(|| {
        with_theme(ColorMode::Dark);
        view! { <ThemeToggle /> }
    });
    assert!(dark.contains("🌞"));
    assert!(dark.contains("Switch to light mode"));

    let light = render(|| {
        with_theme(ColorMode::Light);
        view! { <ThemeToggle /> }
    });
    assert!(light.contains("🌙"));
    assert!(light.contains("Switch to dark mode"));
}

#[test]
fn header_and_footer_share_navigation() {
    let header = render(|| {
        with_theme(ColorMode::Dark);
        view! { <Header /> }
    });
    let footer = render(|| view! { <Footer /> });
    for html in [&header, &footer] {
        let positions = offsets(
            html,
            ["#home", "#about", "#skills", "#projects", "#contact"]
                .map(|href| format!("href=\"{href}\"")),
        );
        assert_eq!(positions.len(), 5);
        assert_ascending(&positions);
    }
    assert!(footer.contains("fa-github"));
}

#[test]
fn contact_form_requires_every_field() {
    let html = render(|| view! { <ContactForm /> });
    assert_eq!(html.matches("required").count(), 3);
    assert!(!html.contains("action="));
    assert!(html.contains("type=\"submit\""));
    assert!(html.contains("Send Message"));
}
