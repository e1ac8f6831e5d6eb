use chrono::{Datelike, Utc};
use leptos::html;
use leptos::prelude::*;

use crate::content::{LINK_GROUPS, LinkGroup, SOCIAL_LINKS};
use crate::icons::{Icon, IconKind};
use crate::reveal::{Reveal, use_entrance};

/// Year printed in the copyright line.
pub fn copyright_year() -> i32 {
    Utc::now().year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let entered = use_entrance(container);
    let brand = Reveal::up(0);
    let copyright = Reveal::fade(300);

    view! {
        <footer class="footer" data-section="footer">
            <div class="container" node_ref=container>
                <div class="footer-grid">
                    <div class=move || format!("footer-brand {}", brand.class(entered.get())) style=brand.style()>
                        <h3 class="footer-title">
                            "Cursor"<span class="gradient-text">"Focus"</span>
                        </h3>
                        <p class="footer-description">
                            "A powerful tool that maintains a focused view of your project structure and environment."
                        </p>
                        <div class="footer-social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| view! {
                                    <a href=social.href target="_blank" rel="noopener noreferrer" class="social-link">
                                        <span class="sr-only">{social.name}</span>
                                        <Icon kind=social.icon class="icon-md" />
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>
                    {LINK_GROUPS
                        .iter()
                        .enumerate()
                        .map(|(index, group)| view! { <LinkGroupCard group=*group index=index entered=entered /> })
                        .collect_view()}
                </div>
                <div class="footer-bottom">
                    <p class=move || format!("footer-copyright {}", copyright.class(entered.get())) style=copyright.style()>
                        {format!("© {} CursorFocus. All rights reserved.", copyright_year())}
                    </p>
                </div>
            </div>
        </footer>
    }
}

/// A titled column of footer links. Columns enter 100ms apart.
#[component]
pub fn LinkGroupCard(group: LinkGroup, index: usize, entered: ReadSignal<bool>) -> impl IntoView {
    let reveal = Reveal::up(0).stagger(0, 100, index);

    view! {
        <div class=move || format!("footer-group {}", reveal.class(entered.get())) style=reveal.style()>
            <h4 class="footer-group-title">{group.title}</h4>
            <ul class="footer-links">
                {group
                    .links
                    .iter()
                    .map(|link| {
                        let target = link.is_external().then_some("_blank");
                        let rel = link.is_external().then_some("noopener noreferrer");
                        view! {
                            <li>
                                <a href=link.href target=target rel=rel class="footer-link">
                                    <Icon kind=IconKind::ChevronRight class="icon-xs" />
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
