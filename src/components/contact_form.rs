use leptos::prelude::*;

/// Placeholder form: fields are browser-validated and submitting keeps the
/// visitor on the page without sending anything.
#[component]
pub fn ContactForm() -> impl IntoView {
    view! {
        <section id="contact" class="section section-dark">
            <h2>"Contact Me"</h2>
            <form
                class="contact-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()
            >
                <input type="text" name="name" placeholder="Your Name" required />
                <input type="email" name="email" placeholder="Your Email" required />
                <textarea name="message" placeholder="Message" rows="5" required></textarea>
                <button type="submit" class="btn btn-gradient">"Send Message"</button>
            </form>
        </section>
    }
}
