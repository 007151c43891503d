//! Task spawning that works the same on web and desktop.

use std::future::Future;

/// Run a future on the Dioxus runtime of the calling component.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}
