use leptos::html;
use leptos::prelude::*;

use super::SectionHeader;
use crate::content::{FEATURES, Feature};
use crate::icons::Icon;
use crate::reveal::{Reveal, use_entrance};

#[component]
pub fn Features() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let entered = use_entrance(container);

    view! {
        <section id="features" class="features" data-section="features">
            <div class="container" node_ref=container>
                <SectionHeader
                    title="Key Features"
                    description="Discover powerful tools to enhance your project management efficiency"
                    entered=entered
                />
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            let reveal = Reveal::up(0).stagger(0, 100, index);
                            view! {
                                <div
                                    class=move || reveal.class(entered.get())
                                    style=reveal.style()
                                >
                                    <FeatureCard feature=*feature />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class=format!("feature-card hover-glow {}", feature.accent.card_class())>
            <div class=format!("{} float", feature.accent.icon_class())>
                <Icon kind=feature.icon class="icon-fill" />
            </div>
            <h3 class="feature-title">{feature.name}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
