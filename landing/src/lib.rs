//! # cursorfocus-landing
//!
//! Landing page for [CursorFocus](https://github.com/RenjiYuusei/CursorFocus),
//! built with [Leptos](https://leptos.dev/) 0.8.
//!
//! The browser build (`csr` feature, served by Trunk) mounts [`App`]: every
//! section starts as a skeleton and is swapped in on a later browser task,
//! and each section fades into place the first time it scrolls into view.
//!
//! ## Sections
//!
//! - Hero: product name, tagline, calls to action, drifting particles
//! - Features: four capability cards
//! - Installation: Windows / macOS step lists with copyable commands
//! - Usage: guides with code samples and checklists
//! - Footer: documentation and community links, copyright
//!
//! ## Architecture
//!
//! - [`content`] - all page copy as static data
//! - [`sections`] - one component per section
//! - [`loader`] - skeletons and deferred section rendering
//! - [`reveal`] - one-shot viewport entrance animations
//! - [`clipboard`] - copy-to-clipboard
//! - [`meta`], [`styles`] - document head and stylesheet
//!
//! ## Static rendering
//!
//! The default `ssr` feature renders any view to a string, which is how the
//! test-suite inspects the page:
//!
//! ```rust
//! let html = cursorfocus_landing::render_page();
//! assert!(html.contains("Quick Installation"));
//! ```

pub mod clipboard;
pub mod content;
pub mod error;
pub mod icons;
pub mod loader;
pub mod logging;
pub mod meta;
pub mod page;
pub mod reveal;
pub mod sections;
pub mod styles;

pub use error::{LandingError, Result};
pub use loader::{LazySection, PageSkeleton, SectionSlot};
pub use meta::{DocumentHead, SiteMeta};
pub use page::{LandingPage, LazyLandingPage};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use leptos_meta::provide_meta_context;

/// Root component mounted into `<body>`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <DocumentHead />
        <Suspense fallback=|| view! { <PageSkeleton /> }>
            <LazyLandingPage />
        </Suspense>
    }
}

/// The fully resolved page (no skeletons) as an HTML fragment.
pub fn render_page() -> String {
    view! { <LandingPage /> }.to_html()
}

/// Every slot's skeleton, in page order, as an HTML fragment.
pub fn render_skeleton() -> String {
    view! { <PageSkeleton /> }.to_html()
}
