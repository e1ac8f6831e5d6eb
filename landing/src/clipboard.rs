//! Copy-to-clipboard for commands and code snippets.
//!
//! Writes are fire-and-forget: the promise returned by the browser is
//! dropped and nothing is reported to the visitor.

use leptos::prelude::*;
use tracing::debug;

use crate::error::{LandingError, Result};
use crate::icons::{Icon, IconKind};

/// Destination for copied text.
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// `navigator.clipboard` of the current tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl ClipboardSink for BrowserClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        let _ = window.navigator().clipboard().write_text(text);
        Ok(())
    }
}

/// Hand `text` to `sink` verbatim. Failures are logged, never surfaced.
pub fn copy_text(sink: &dyn ClipboardSink, text: &str) {
    match sink.write_text(text) {
        Ok(()) => debug!(bytes = text.len(), "copied to clipboard"),
        Err(err) => debug!(%err, "clipboard write skipped"),
    }
}

/// Small icon button that copies a literal string.
#[component]
pub fn CopyButton(
    text: &'static str,
    #[prop(default = "copy-btn")] class: &'static str,
    #[prop(default = IconKind::Clipboard)] icon: IconKind,
) -> impl IntoView {
    let copy = move |_| copy_text(&BrowserClipboard, text);

    view! {
        <button class=class title="Copy to clipboard" on:click=copy>
            <Icon kind=icon class="icon-sm" />
        </button>
    }
}
