//! Spawning local (`!Send`) futures from event handlers.
//!
//! In the browser the future goes to the Leptos executor, which runs on the JS
//! event loop once hydration has started. Elsewhere there is no event loop, so
//! it is driven to completion before returning.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

/// Run `future` on the current thread's event loop.
pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(future);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        futures::executor::block_on(future);
    }
}
