// CursorFocus landing page, browser entry point (trunk serve / trunk build)

use cursorfocus_landing::{App, logging};
use leptos::prelude::*;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init(logging::default_level()) {
        warn!(%err, "keeping existing log subscriber");
    }

    info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");
    leptos::mount::mount_to_body(|| view! { <App /> });
}
