//! Footer newsletter signup.

use leptos::prelude::*;

#[component]
pub fn NewsletterForm() -> impl IntoView {
    view! {
        <form class="newsletter-form">
            <input
                type="email"
                class="newsletter-input"
                placeholder="Your email address"
                aria-label="Email address"
            />
            <button type="submit" class="newsletter-submit">"Subscribe"</button>
        </form>
    }
}
