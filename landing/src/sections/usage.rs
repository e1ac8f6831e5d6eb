use leptos::html;
use leptos::prelude::*;

use super::SectionHeader;
use crate::clipboard::CopyButton;
use crate::content::{USAGE_GUIDES, UsageGuide};
use crate::icons::{Icon, IconKind};
use crate::reveal::{Reveal, use_entrance};

#[component]
pub fn Usage() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let entered = use_entrance(container);

    view! {
        <section id="usage" class="usage" data-section="usage">
            <div class="container narrow" node_ref=container>
                <SectionHeader
                    title="How to Use"
                    description="Learn how to use CursorFocus effectively to maintain a clear view of your project structure."
                    entered=entered
                />
                <div class="guide-list">
                    {USAGE_GUIDES
                        .iter()
                        .enumerate()
                        .map(|(index, guide)| view! { <GuideCard index=index guide=*guide entered=entered /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn GuideCard(index: usize, guide: UsageGuide, entered: ReadSignal<bool>) -> impl IntoView {
    let reveal = Reveal::up(0).stagger(0, 200, index);

    view! {
        <article
            class=move || format!("guide-card hover-glow {} {}", guide.accent.card_class(), reveal.class(entered.get()))
            style=reveal.style()
        >
            <div class=format!("{} float", guide.accent.icon_class())>
                <Icon kind=guide.icon class="icon-fill" />
            </div>
            <div class="guide-body">
                <h3 class="guide-title">{guide.title}</h3>
                <p class="guide-description">{guide.description}</p>
                {guide.code.map(|code| view! {
                    <div class="code-block code-block-dark">
                        <pre class="guide-code">{code}</pre>
                        <CopyButton text=code class="copy-btn glass" icon=IconKind::ClipboardDocumentCheck />
                    </div>
                })}
                {(!guide.details.is_empty()).then(|| view! {
                    <ul class="guide-details">
                        {guide
                            .details
                            .iter()
                            .enumerate()
                            .map(|(i, detail)| {
                                let item = Reveal::left(0).stagger(500, 100, i).with_duration(300);
                                view! {
                                    <li class=move || format!("guide-detail {}", item.class(entered.get())) style=item.style()>
                                        <span class=format!("{} check", guide.accent.icon_class())>
                                            <Icon kind=IconKind::Check class="icon-xs" />
                                        </span>
                                        {*detail}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                })}
                {guide.note.map(|note| view! {
                    <div class="guide-note fade-in">
                        <Icon kind=IconKind::Info class="icon-sm" />
                        <span>{note}</span>
                    </div>
                })}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render_guide(index: usize) -> String {
        let (entered, _) = signal(false);
        view! { <GuideCard index=index guide=USAGE_GUIDES[index] entered=entered /> }.to_html()
    }

    #[test]
    fn renders_every_guide_in_order() {
        let html = view! { <Usage /> }.to_html();
        let positions: Vec<usize> = USAGE_GUIDES
            .iter()
            .map(|guide| html.find(guide.title).expect("guide rendered"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains("id=\"usage\""));
    }

    #[test]
    fn optional_blocks_render_only_when_authored() {
        let running = render_guide(0);
        assert!(running.contains("python focus.py"));
        assert!(running.contains("update every 60 seconds"));
        assert!(!running.contains("guide-details"));

        let docs = render_guide(2);
        assert!(!docs.contains("guide-code"));
        assert!(!docs.contains("guide-note"));
        assert_eq!(docs.matches("guide-detail ").count(), 5);
        for detail in USAGE_GUIDES[2].details {
            assert!(docs.contains(detail));
        }
    }

    #[test]
    fn config_sample_is_shown_with_copy_button() {
        let html = render_guide(3);
        assert!(html.contains("update_interval"));
        assert!(html.contains("ignored_directories"));
        assert_eq!(html.matches("title=\"Copy to clipboard\"").count(), 1);
    }
}
