//! SSR shell, root components, and the controller composition root.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::auth::AuthSlot;
use crate::components::{
    account_popup::AccountPopup, newsletter_form::NewsletterForm, site_header::SiteHeader,
};
use crate::config::StorefrontConfig;
use crate::controllers::account_popup::AccountPopupController;
use crate::controllers::navigation::NavigationController;
use crate::controllers::newsletter::{NewsletterController, SubscriptionApi};
use crate::controllers::notifications::{Notifier, ToastNotifier};
use crate::dom::Page;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Beha"</title>
                <link rel="stylesheet" href="/pkg/storefront.css"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: the storefront chrome around the landing content.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <StorefrontChrome>
            <section class="hero">
                <h1>"New season, new staples"</h1>
                <a href="/shop" class="btn">"Shop now"</a>
            </section>
        </StorefrontChrome>
    }
}

/// Header, account popup, page content, and footer shared by every
/// storefront page.
#[component]
pub fn StorefrontChrome(children: Children) -> impl IntoView {
    view! {
        <SiteHeader/>
        <AccountPopup/>
        <main class="site-main">{children()}</main>
        <footer class="site-footer">
            <div class="newsletter">
                <h3>"Stay in the loop"</h3>
                <p>"New arrivals and offers, straight to your inbox."</p>
                <NewsletterForm/>
            </div>
        </footer>
    }
}

/// One instance of each controller, wired to a single page.
pub struct Storefront<P: Page> {
    pub navigation: Rc<NavigationController<P>>,
    pub account: Rc<AccountPopupController<P>>,
    pub newsletter: Rc<NewsletterController<P>>,
    pub notifier: Rc<ToastNotifier<P>>,
}

impl<P: Page> Storefront<P> {
    /// Build every controller against `page` and bind its events.
    pub fn mount(
        page: Rc<P>,
        config: &StorefrontConfig,
        auth: AuthSlot,
        subscriptions: Rc<dyn SubscriptionApi>,
    ) -> Self {
        let notifier = Rc::new(ToastNotifier::new(Rc::clone(&page), &config.notifications));
        let navigation = NavigationController::new(Rc::clone(&page), &config.navigation);
        let account = AccountPopupController::new(
            Rc::clone(&page),
            &config.account,
            auth,
            Some(Rc::clone(&notifier) as Rc<dyn Notifier>),
        );
        let newsletter =
            NewsletterController::new(page, &config.newsletter, subscriptions, notifier.clone());

        navigation.initialize();
        account.initialize();
        newsletter.initialize();
        log::debug!("storefront mounted");

        Self {
            navigation,
            account,
            newsletter,
            notifier,
        }
    }
}

/// Browser entry point: hydrate the server-rendered markup, then bind the
/// controllers to it.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use crate::auth::SessionAuth;
    use crate::controllers::newsletter::HttpSubscriptionApi;
    use crate::dom::browser::BrowserPage;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);

    let Some(page) = BrowserPage::new() else {
        log::warn!("no browser document; storefront not mounted");
        return;
    };
    let page = Rc::new(page);
    let config = StorefrontConfig::from_page_or_default(page.as_ref());
    let session = Rc::new(SessionAuth::new(config.auth.clone()));
    let subscriptions = Rc::new(HttpSubscriptionApi::new(config.newsletter.endpoint.clone()));

    // Event listeners own the controllers from here on.
    let auth = AuthSlot::with(session.clone());
    let _storefront = Storefront::mount(page, &config, auth, subscriptions);

    crate::util::task::spawn_local(async move {
        session.refresh().await;
    });
}
