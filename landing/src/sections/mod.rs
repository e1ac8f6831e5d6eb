//! Landing page sections, top to bottom.

mod features;
mod footer;
mod hero;
mod installation;
mod usage;

pub use features::{FeatureCard, Features};
pub use footer::{Footer, LinkGroupCard, copyright_year};
pub use hero::Hero;
pub use installation::{InstallSteps, Installation, PlatformSelector, select_platform};
pub use usage::{GuideCard, Usage};

use leptos::prelude::*;

use crate::loader::SectionSlot;

/// The resolved component for a slot.
pub fn render_section(slot: SectionSlot) -> AnyView {
    match slot {
        SectionSlot::Hero => view! { <Hero /> }.into_any(),
        SectionSlot::Features => view! { <Features /> }.into_any(),
        SectionSlot::Installation => view! { <Installation /> }.into_any(),
        SectionSlot::Usage => view! { <Usage /> }.into_any(),
        SectionSlot::Footer => view! { <Footer /> }.into_any(),
    }
}

/// Shared centered heading block of the content sections.
#[component]
fn SectionHeader(
    title: &'static str,
    description: &'static str,
    entered: ReadSignal<bool>,
) -> impl IntoView {
    let title_reveal = crate::reveal::Reveal::up(0);
    let description_reveal = crate::reveal::Reveal::up(200);

    view! {
        <div class="section-header">
            <h2
                class=move || format!("section-title shimmer {}", title_reveal.class(entered.get()))
                style=title_reveal.style()
            >
                {title}
            </h2>
            <p
                class=move || format!("section-description {}", description_reveal.class(entered.get()))
                style=description_reveal.style()
            >
                {description}
            </p>
        </div>
    }
}
