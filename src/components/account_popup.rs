//! Account popup with signed-out and signed-in views.

use leptos::prelude::*;

/// Popup opened from the header's account button.
///
/// Both views are rendered; the account controller shows exactly one of them
/// and fills `#userEmail`. The signed-in view starts hidden.
#[component]
pub fn AccountPopup() -> impl IntoView {
    view! {
        <div id="accountPopup" class="account-popup">
            <div id="loggedOutState">
                <p class="account-popup__title">"Welcome"</p>
                <a href="/login" class="btn">"Sign in"</a>
                <a href="/register" class="btn btn-secondary">"Create account"</a>
            </div>
            <div id="loggedInState" style="display: none">
                <p class="account-popup__title">
                    "Signed in as " <span id="userEmail"></span>
                </p>
                <a href="/orders.html" class="account-popup__link">"My orders"</a>
                <a href="/profile.html" class="account-popup__link">"Profile"</a>
                <button class="btn" data-action="sign-out">"Sign out"</button>
            </div>
        </div>
    }
}
