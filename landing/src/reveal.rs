//! One-shot entrance animations.
//!
//! A section observes its own visibility; the first time at least
//! [`REVEAL_THRESHOLD`] of it is on screen the [`EntranceLatch`] closes and
//! the section's children transition in. The latch never reopens.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::error::{LandingError, Result};

/// Fraction of the target that must be visible to trigger the entrance.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Trigger-once visibility flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntranceLatch {
    entered: bool,
}

impl EntranceLatch {
    pub const fn new() -> Self {
        Self { entered: false }
    }

    pub const fn has_entered(&self) -> bool {
        self.entered
    }

    /// Feed one visibility observation. Returns `true` only for the
    /// observation that closes the latch.
    pub fn observe(&mut self, visible_ratio: f64, intersecting: bool) -> bool {
        if self.entered {
            return false;
        }
        if intersecting && visible_ratio >= REVEAL_THRESHOLD {
            self.entered = true;
            return true;
        }
        false
    }
}

/// Where an element starts before it transitions into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealFrom {
    /// 20px below, faded out
    Up,
    /// 20px to the left, faded out
    Left,
    /// Faded out, no offset
    Fade,
}

/// One entrance transition: origin, delay and duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub from: RevealFrom,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Reveal {
    const DURATION_MS: u32 = 500;

    pub const fn up(delay_ms: u32) -> Self {
        Self {
            from: RevealFrom::Up,
            delay_ms,
            duration_ms: Self::DURATION_MS,
        }
    }

    pub const fn left(delay_ms: u32) -> Self {
        Self {
            from: RevealFrom::Left,
            delay_ms,
            duration_ms: Self::DURATION_MS,
        }
    }

    pub const fn fade(delay_ms: u32) -> Self {
        Self {
            from: RevealFrom::Fade,
            delay_ms,
            duration_ms: Self::DURATION_MS,
        }
    }

    /// `base + index * step`, for list items entering one after another.
    pub const fn stagger(self, base_ms: u32, step_ms: u32, index: usize) -> Self {
        Self {
            delay_ms: base_ms + step_ms * index as u32,
            ..self
        }
    }

    pub const fn with_duration(self, duration_ms: u32) -> Self {
        Self { duration_ms, ..self }
    }

    /// Class list for the current visibility.
    pub const fn class(&self, entered: bool) -> &'static str {
        match (self.from, entered) {
            (RevealFrom::Up, false) => "reveal reveal-up",
            (RevealFrom::Left, false) => "reveal reveal-left",
            (RevealFrom::Fade, false) => "reveal reveal-fade",
            (_, true) => "reveal is-visible",
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms;",
            self.duration_ms, self.delay_ms
        )
    }
}

/// Watch `target` and flip the returned signal once it scrolls into view.
///
/// The observer is attached after mount and disconnected as soon as the
/// latch closes. If the browser refuses to create an observer the content
/// is shown straight away.
pub fn use_entrance(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);

    Effect::new(move || {
        if entered.get_untracked() {
            return;
        }
        let Some(node) = target.get() else {
            return;
        };
        if let Err(err) = observe_once(&node, set_entered) {
            warn!(%err, "entrance animation disabled, revealing immediately");
            set_entered.set(true);
        }
    });

    entered
}

fn observe_once(element: &web_sys::Element, on_enter: WriteSignal<bool>) -> Result<()> {
    let latch = Rc::new(RefCell::new(EntranceLatch::new()));

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                let closed = latch
                    .borrow_mut()
                    .observe(entry.intersection_ratio(), entry.is_intersecting());
                if closed {
                    debug!(ratio = entry.intersection_ratio(), "section entered viewport");
                    on_enter.set(true);
                    observer.disconnect();
                    break;
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|err| LandingError::Observer(format!("{err:?}")))?;
    observer.observe(element);

    callback.forget(); // The page never unmounts its sections
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn latch_starts_open() {
        assert!(!EntranceLatch::new().has_entered());
        assert_eq!(EntranceLatch::default(), EntranceLatch::new());
    }

    #[test]
    fn below_threshold_does_not_trigger() {
        let mut latch = EntranceLatch::new();
        assert!(!latch.observe(0.05, true));
        assert!(!latch.observe(0.5, false));
        assert!(!latch.has_entered());
    }

    #[test]
    fn latch_fires_once_and_never_reverts() {
        let mut latch = EntranceLatch::new();
        assert!(latch.observe(0.1, true));
        assert!(latch.has_entered());

        let later = [(0.0, false), (1.0, true), (0.02, true), (0.0, false)];
        for (ratio, intersecting) in later {
            assert!(!latch.observe(ratio, intersecting));
            assert!(latch.has_entered());
        }
    }

    #[test]
    fn stagger_offsets_by_index() {
        let steps: Vec<u32> = (0..3)
            .map(|i| Reveal::left(0).stagger(400, 100, i).delay_ms)
            .collect();
        assert_eq!(steps, vec![400, 500, 600]);

        let detail = Reveal::left(0).stagger(500, 100, 2).with_duration(300);
        assert_eq!(detail.delay_ms, 700);
        assert_eq!(detail.duration_ms, 300);
        assert_eq!(detail.from, RevealFrom::Left);
    }

    #[test]
    fn class_switches_on_entry() {
        let reveal = Reveal::up(200);
        assert_eq!(reveal.class(false), "reveal reveal-up");
        assert_eq!(reveal.class(true), "reveal is-visible");
        assert_eq!(Reveal::fade(0).class(false), "reveal reveal-fade");
    }

    #[test]
    fn style_carries_timing() {
        assert_eq!(
            Reveal::up(200).style(),
            "transition-duration: 500ms; transition-delay: 200ms;"
        );
    }
}
