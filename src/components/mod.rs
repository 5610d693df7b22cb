mod about;
mod contact_form;
mod footer;
mod header;
mod hero;
mod project_card;
mod project_grid;
mod skill_grid;
mod theme_toggle;

#[cfg(all(test, feature = "ssr"))]
mod tests;

pub use about::About;
pub use contact_form::ContactForm;
pub use footer::Footer;
pub use header::Header;
pub use hero::{FloatingBadge, Hero};
pub use project_card::ProjectCard;
pub use project_grid::ProjectGrid;
pub use skill_grid::{SkillCard, SkillGrid};
pub use theme_toggle::ThemeToggle;
