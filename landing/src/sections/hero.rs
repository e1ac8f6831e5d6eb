use leptos::prelude::*;

use crate::content::{PRODUCT_NAME, REPOSITORY_URL};
use crate::icons::{Icon, IconKind};

const PARTICLE_COUNT: usize = 50;

/// One drifting dot of the hero background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Start position, percent of the hero box
    pub from: (f64, f64),
    /// End position, percent of the hero box
    pub to: (f64, f64),
    /// One drift cycle, 5-15s
    pub duration_s: f64,
}

impl Particle {
    fn style(&self) -> String {
        format!(
            "--from-x: {:.2}%; --from-y: {:.2}%; --to-x: {:.2}%; --to-y: {:.2}%; animation-duration: {:.2}s;",
            self.from.0, self.from.1, self.to.0, self.to.1, self.duration_s
        )
    }
}

/// Evenly scattered particles (additive recurrence with irrational steps),
/// identical on every render so static and client output agree.
pub fn particle_field(count: usize) -> Vec<Particle> {
    const STEPS: [f64; 5] = [
        0.618_033_988_749_895,
        0.754_877_666_246_693,
        0.569_840_290_998_053,
        0.414_213_562_373_095,
        0.732_050_807_568_877,
    ];
    let frac = |value: f64| value - value.floor();

    (1..=count)
        .map(|i| {
            let n = i as f64;
            Particle {
                from: (frac(n * STEPS[0]) * 100.0, frac(n * STEPS[1]) * 100.0),
                to: (frac(n * STEPS[2]) * 100.0, frac(n * STEPS[3]) * 100.0),
                duration_s: 5.0 + frac(n * STEPS[4]) * 10.0,
            }
        })
        .collect()
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" data-section="hero">
            <div class="hero-particles" aria-hidden="true">
                {particle_field(PARTICLE_COUNT)
                    .into_iter()
                    .map(|particle| view! { <span class="particle" style=particle.style()></span> })
                    .collect_view()}
            </div>
            <div class="container hero-content">
                <div class="hero-mark pop-in">
                    <Icon kind=IconKind::CodeBracket class="icon-fill" />
                </div>
                <h1 class="hero-title enter-up">
                    <span class="gradient-text">{PRODUCT_NAME}</span>
                </h1>
                <p class="hero-description enter-up delay-200">
                    "A powerful tool that maintains a focused view of your project structure."
                    <br />
                    "Track files, functions, and environment variables with ease."
                </p>
                <div class="hero-actions enter-up delay-400">
                    <a href="#installation" class="btn btn-primary">
                        "Get Started"
                        <Icon kind=IconKind::ArrowDown class="icon-sm nudge-down" />
                    </a>
                    <a href=REPOSITORY_URL target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                        <Icon kind=IconKind::GitHub class="icon-sm" />
                        "View on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn particles_stay_inside_the_box() {
        let field = particle_field(PARTICLE_COUNT);
        assert_eq!(field.len(), PARTICLE_COUNT);
        for particle in &field {
            for value in [particle.from.0, particle.from.1, particle.to.0, particle.to.1] {
                assert!((0.0..100.0).contains(&value), "{value} out of range");
            }
            assert!((5.0..15.0).contains(&particle.duration_s));
        }
    }

    #[test]
    fn particle_field_is_deterministic() {
        assert_eq!(particle_field(8), particle_field(8));
    }

    #[test]
    fn renders_title_and_calls_to_action() {
        let html = view! { <Hero /> }.to_html();

        assert!(html.contains("CursorFocus"));
        assert!(html.contains("href=\"#installation\""));
        assert!(html.contains("href=\"https://github.com/RenjiYuusei/CursorFocus\""));
        assert_eq!(html.matches("class=\"particle\"").count(), PARTICLE_COUNT);
    }
}
