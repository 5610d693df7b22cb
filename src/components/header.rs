use leptos::prelude::*;

use super::ThemeToggle;
use crate::content::{NAV_LINKS, PROFILE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="container">
                <h1 class="logo">{PROFILE.logo}</h1>
                <nav>
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect::<Vec<_>>()}
                </nav>
                <ThemeToggle />
            </div>
        </header>
    }
}
