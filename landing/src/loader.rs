//! Deferred section rendering.
//!
//! Each page section sits in a [`SectionSlot`]. A [`LazySection`] paints the
//! slot's skeleton synchronously, resolves the section on a later browser
//! task and swaps it in place inside a `Suspense` boundary:
//!
//! ```text
//! Placeholder ──first render──▶ Resolving ──resource ready──▶ Rendered
//! ```
//!
//! There is no cancellation, retry or timeout; a failed load is whatever the
//! browser does with it.

use leptos::prelude::*;
use tracing::debug;

use crate::content::{FEATURES, LINK_GROUPS, PlatformId, USAGE_GUIDES};
use crate::sections::render_section;

/// Fixed vertical positions on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionSlot {
    Hero,
    Features,
    Installation,
    Usage,
    Footer,
}

impl SectionSlot {
    /// Top-to-bottom page order, shared by the resolved page and its skeleton.
    pub const ORDER: [SectionSlot; 5] = [
        SectionSlot::Hero,
        SectionSlot::Features,
        SectionSlot::Installation,
        SectionSlot::Usage,
        SectionSlot::Footer,
    ];

    /// Stable key for `data-slot` attributes and log fields.
    pub const fn key(self) -> &'static str {
        match self {
            SectionSlot::Hero => "hero",
            SectionSlot::Features => "features",
            SectionSlot::Installation => "installation",
            SectionSlot::Usage => "usage",
            SectionSlot::Footer => "footer",
        }
    }

    /// Everything except the footer lives inside `<main>`.
    pub const fn in_main(self) -> bool {
        !matches!(self, SectionSlot::Footer)
    }

    /// Placeholder layout approximating the resolved section.
    pub fn skeleton(self) -> SkeletonShape {
        match self {
            SectionSlot::Hero => SkeletonShape::Banner,
            SectionSlot::Features => SkeletonShape::CardGrid {
                cards: FEATURES.len(),
            },
            SectionSlot::Installation => SkeletonShape::CardStack {
                cards: PlatformId::default().platform().steps.len(),
            },
            SectionSlot::Usage => SkeletonShape::CardStack {
                cards: USAGE_GUIDES.len(),
            },
            SectionSlot::Footer => SkeletonShape::Columns {
                columns: 1 + LINK_GROUPS.len(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonShape {
    /// Logo block, title bar, two text lines
    Banner,
    /// Heading plus a grid of cards
    CardGrid { cards: usize },
    /// Heading plus a vertical stack of cards
    CardStack { cards: usize },
    /// Row of footer columns
    Columns { columns: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Placeholder,
    Resolving,
    Rendered,
}

/// Load progress of one slot. Out-of-order transitions are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLoad {
    slot: SectionSlot,
    state: LoadState,
}

impl SectionLoad {
    pub const fn new(slot: SectionSlot) -> Self {
        Self {
            slot,
            state: LoadState::Placeholder,
        }
    }

    pub const fn slot(&self) -> SectionSlot {
        self.slot
    }

    pub const fn state(&self) -> LoadState {
        self.state
    }

    /// Placeholder → Resolving. Returns whether the transition happened.
    pub fn schedule(&mut self) -> bool {
        if self.state != LoadState::Placeholder {
            return false;
        }
        self.state = LoadState::Resolving;
        debug!(section = self.slot.key(), "section resolving");
        true
    }

    /// Resolving → Rendered. Returns whether the transition happened.
    pub fn resolve(&mut self) -> bool {
        if self.state != LoadState::Resolving {
            return false;
        }
        self.state = LoadState::Rendered;
        debug!(section = self.slot.key(), "section rendered");
        true
    }
}

/// Render `section` lazily behind its skeleton.
#[component]
pub fn LazySection(section: SectionSlot) -> impl IntoView {
    let load = StoredValue::new(SectionLoad::new(section));
    let resource = LocalResource::new(move || {
        load.update_value(|load| {
            load.schedule();
        });
        resolve_section(section)
    });

    view! {
        <Suspense fallback=move || view! { <SectionSkeleton section=section /> }>
            {move || Suspend::new(async move {
                let slot = resource.await;
                load.update_value(|load| {
                    load.resolve();
                });
                render_section(slot)
            })}
        </Suspense>
    }
}

/// Resolves on the next browser task so the skeletons get painted first.
async fn resolve_section(slot: SectionSlot) -> SectionSlot {
    yield_to_browser().await;
    slot
}

#[cfg(target_arch = "wasm32")]
async fn yield_to_browser() {
    use wasm_bindgen::JsValue;

    let tick = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|window| window.set_timeout_with_callback(&resolve).is_ok())
            .unwrap_or(false);
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(tick).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn yield_to_browser() {}

/// Placeholder for one slot.
#[component]
pub fn SectionSkeleton(section: SectionSlot) -> impl IntoView {
    let body = match section.skeleton() {
        SkeletonShape::Banner => view! {
            <div class="skeleton-banner">
                <div class="skeleton skeleton-logo"></div>
                <div class="skeleton skeleton-title"></div>
                <div class="skeleton skeleton-line"></div>
                <div class="skeleton skeleton-line short"></div>
            </div>
        }
        .into_any(),
        SkeletonShape::CardGrid { cards } => view! {
            <div class="container">
                <SkeletonHeading />
                <div class="skeleton-grid">
                    {(0..cards).map(|_| view! { <div class="skeleton skeleton-card"></div> }).collect_view()}
                </div>
            </div>
        }
        .into_any(),
        SkeletonShape::CardStack { cards } => view! {
            <div class="container narrow">
                <SkeletonHeading />
                <div class="skeleton-stack">
                    {(0..cards).map(|_| view! { <div class="skeleton skeleton-card"></div> }).collect_view()}
                </div>
            </div>
        }
        .into_any(),
        SkeletonShape::Columns { columns } => view! {
            <div class="container skeleton-columns">
                {(0..columns).map(|_| view! { <div class="skeleton skeleton-column"></div> }).collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="skeleton-slot" data-slot=section.key() aria-hidden="true">
            {body}
        </div>
    }
}

#[component]
fn SkeletonHeading() -> impl IntoView {
    view! {
        <div class="skeleton skeleton-heading"></div>
        <div class="skeleton skeleton-subheading"></div>
    }
}

/// Full-page fallback: every slot's skeleton in page order.
#[component]
pub fn PageSkeleton() -> impl IntoView {
    view! {
        <div class="page-skeleton" aria-busy="true">
            {SectionSlot::ORDER
                .into_iter()
                .map(|section| view! { <SectionSkeleton section=section /> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn slot_keys_in(html: &str) -> Vec<&str> {
        html.split("data-slot=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn load_walks_forward_only() {
        let mut load = SectionLoad::new(SectionSlot::Features);
        assert_eq!(load.state(), LoadState::Placeholder);

        assert!(!load.resolve(), "cannot render before resolving");
        assert!(load.schedule());
        assert_eq!(load.state(), LoadState::Resolving);
        assert!(!load.schedule());

        assert!(load.resolve());
        assert_eq!(load.state(), LoadState::Rendered);
        assert!(!load.resolve());
        assert!(!load.schedule());
        assert_eq!(load.state(), LoadState::Rendered);
        assert_eq!(load.slot(), SectionSlot::Features);
    }

    #[test]
    fn footer_is_the_only_slot_outside_main() {
        let outside: Vec<_> = SectionSlot::ORDER
            .into_iter()
            .filter(|slot| !slot.in_main())
            .collect();
        assert_eq!(outside, vec![SectionSlot::Footer]);
    }

    #[test]
    fn skeleton_shapes_follow_content() {
        assert_eq!(SectionSlot::Hero.skeleton(), SkeletonShape::Banner);
        assert_eq!(
            SectionSlot::Features.skeleton(),
            SkeletonShape::CardGrid { cards: 4 }
        );
        assert_eq!(
            SectionSlot::Installation.skeleton(),
            SkeletonShape::CardStack { cards: 3 }
        );
        assert_eq!(
            SectionSlot::Usage.skeleton(),
            SkeletonShape::CardStack { cards: 4 }
        );
        assert_eq!(
            SectionSlot::Footer.skeleton(),
            SkeletonShape::Columns { columns: 3 }
        );
    }

    #[test]
    fn page_skeleton_lists_every_slot_in_order() {
        let html = view! { <PageSkeleton /> }.to_html();
        let expected: Vec<&str> = SectionSlot::ORDER.iter().map(|slot| slot.key()).collect();
        assert_eq!(slot_keys_in(&html), expected);
    }

    #[test]
    fn section_skeleton_draws_one_card_per_item() {
        let html = view! { <SectionSkeleton section=SectionSlot::Features /> }.to_html();
        assert_eq!(html.matches("skeleton skeleton-card\"").count(), FEATURES.len());
        assert!(html.contains("data-slot=\"features\""));
    }

    #[test]
    fn lazy_section_starts_as_its_skeleton() {
        let html = Owner::new().with(|| view! { <LazySection section=SectionSlot::Usage /> }.to_html());
        assert_eq!(slot_keys_in(&html), vec!["usage"]);
        assert_eq!(html.matches("skeleton skeleton-card\"").count(), USAGE_GUIDES.len());
        assert!(!html.contains("data-section"));
    }

    #[test]
    fn section_skeleton_footer_draws_columns() {
        let html = view! { <SectionSkeleton section=SectionSlot::Footer /> }.to_html();
        assert_eq!(html.matches("skeleton skeleton-column\"").count(), 3);
    }
}
