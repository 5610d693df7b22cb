use leptos::prelude::*;

use crate::app::ThemeContext;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    let toggle = move |_| theme.set_mode.update(|mode| *mode = mode.toggled());

    let label = move || {
        if theme.mode.get().is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <button
            class="theme-btn"
            on:click=toggle
            aria-label=label
            title=label
        >
            {move || theme.mode.get().toggle_icon()}
        </button>
    }
}
