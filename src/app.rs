use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Style, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use serde::{Deserialize, Serialize};

use crate::components::{About, ContactForm, Footer, Header, Hero, ProjectGrid, SkillGrid};
use crate::motion::{badge_motion, BADGE_KEYFRAMES};
pub use crate::theme::ColorMode;

/// Current theme and its setter, provided by [`App`].
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: ReadSignal<ColorMode>,
    pub set_mode: WriteSignal<ColorMode>,
}

/// Render settings supplied by the server. Absent on the client, where the
/// defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Seed for hero badge placement; unseeded when `None`
    pub badge_seed: Option<u64>,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class=ColorMode::default().root_class()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (mode, set_mode) = signal(ColorMode::default());
    provide_context(ThemeContext { mode, set_mode });

    #[cfg(target_arch = "wasm32")]
    {
        Effect::new(move |_| {
            crate::theme::sync_root(&mut crate::theme::DocumentRoot, mode.get());
        });
    }

    let keyframes = badge_motion(0).keyframes_css(BADGE_KEYFRAMES);

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Style>{keyframes}</Style>

        <Title text="Sadik | Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <div class=move || if theme.mode.get().is_dark() { "app dark" } else { "app" }>
            <Header/>
            <main>
                <Hero/>
                <About/>
                <SkillGrid/>
                <ProjectGrid/>
                <ContactForm/>
            </main>
            <Footer/>
        </div>
    }
}
