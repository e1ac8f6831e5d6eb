//! Page composition: every [`SectionSlot`] in order, the footer after `<main>`.

use leptos::prelude::*;

use crate::loader::{LazySection, SectionSlot};
use crate::sections::render_section;

fn main_slots() -> impl Iterator<Item = SectionSlot> {
    SectionSlot::ORDER.into_iter().filter(|slot| slot.in_main())
}

fn trailing_slots() -> impl Iterator<Item = SectionSlot> {
    SectionSlot::ORDER.into_iter().filter(|slot| !slot.in_main())
}

/// All sections rendered immediately.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <main>{main_slots().map(render_section).collect_view()}</main>
            {trailing_slots().map(render_section).collect_view()}
        </div>
    }
}

/// Same layout, each slot deferred behind its own skeleton.
#[component]
pub fn LazyLandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <main>
                {main_slots().map(|section| view! { <LazySection section=section /> }).collect_view()}
            </main>
            {trailing_slots().map(|section| view! { <LazySection section=section /> }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn sections_in(html: &str) -> Vec<&str> {
        html.split("data-section=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn sections_follow_slot_order() {
        let html = view! { <LandingPage /> }.to_html();
        let expected: Vec<&str> = SectionSlot::ORDER.iter().map(|slot| slot.key()).collect();
        assert_eq!(sections_in(&html), expected);
    }

    #[test]
    fn footer_sits_after_main() {
        let html = view! { <LandingPage /> }.to_html();
        let main_end = html.find("</main>").expect("main rendered");
        let footer = html.find("<footer").expect("footer rendered");
        let usage = html.find("data-section=\"usage\"").expect("usage rendered");
        assert!(usage < main_end);
        assert!(main_end < footer);
    }
}
