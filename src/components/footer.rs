use leptos::prelude::*;

use crate::content::{NAV_LINKS, PROFILE, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <h2 class="footer-logo">{PROFILE.footer_logo}</h2>
                <p class="footer-tagline">{PROFILE.footer_tagline}</p>

                <div class="footer-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="social-icons">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href
                                    target="_blank"
                                    rel="noreferrer"
                                    aria-label=social.name
                                >
                                    <i class=social.icon></i>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <p class="footer-copy">{PROFILE.copyright}</p>
            </div>
        </footer>
    }
}
