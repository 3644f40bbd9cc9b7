//! Header with brand, navigation links, account button, and drawer trigger.

use leptos::prelude::*;

/// Top navigation bar plus the mobile drawer overlay.
///
/// On narrow screens `.nav-links` becomes the drawer; the hamburger opens it
/// and `#mobileOverlay` closes it.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="logo">"Beha"</a>
            <nav class="site-nav">
                <ul class="nav-links">
                    <li><a href="/">"Home"</a></li>
                    <li><a href="/shop">"Shop"</a></li>
                    <li><a href="/about">"About"</a></li>
                    <li><a href="/contact">"Contact"</a></li>
                </ul>
            </nav>
            <div class="header-actions">
                <button class="icon-btn" aria-label="User account">
                    <span class="icon-user"></span>
                </button>
                <a href="/cart" class="icon-btn" aria-label="Cart">
                    <span class="icon-cart"></span>
                </a>
                <button class="hamburger" aria-label="Open menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
        <div id="mobileOverlay" class="mobile-overlay"></div>
    }
}
