use leptos::html;
use leptos::prelude::*;
use tracing::debug;

use super::SectionHeader;
use crate::clipboard::CopyButton;
use crate::content::{InstallStep, PlatformId};
use crate::icons::Icon;
use crate::reveal::{Reveal, use_entrance};

/// Platform tabs plus the selected platform's steps. Windows unless
/// `selected` says otherwise.
#[component]
pub fn Installation(#[prop(optional)] selected: Option<RwSignal<PlatformId>>) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let entered = use_entrance(container);
    let platform = selected.unwrap_or_else(|| RwSignal::new(PlatformId::default()));
    let selector_reveal = Reveal::up(300);

    view! {
        <section id="installation" class="installation" data-section="installation">
            <div class="container narrow" node_ref=container>
                <SectionHeader
                    title="Quick Installation"
                    description="Get started with CursorFocus in minutes. Choose your platform and follow the steps below."
                    entered=entered
                />
                <div
                    class=move || selector_reveal.class(entered.get())
                    style=selector_reveal.style()
                >
                    <PlatformSelector selected=platform on_select=select_platform(platform) />
                </div>
                {move || view! { <InstallSteps platform=platform.get() revealed=entered.get() /> }}
            </div>
        </section>
    }
}

/// Click handler storing the chosen platform.
pub fn select_platform(platform: RwSignal<PlatformId>) -> Callback<PlatformId> {
    Callback::new(move |id: PlatformId| {
        debug!(platform = id.key(), "platform selected");
        platform.set(id);
    })
}

/// One button per platform; the selected one is marked active.
#[component]
pub fn PlatformSelector(
    #[prop(into)] selected: Signal<PlatformId>,
    #[prop(into)] on_select: Callback<PlatformId>,
) -> impl IntoView {
    view! {
        <div class="platform-selector" role="group" aria-label="Platform">
            {PlatformId::ALL
                .into_iter()
                .map(|id| {
                    let platform = id.platform();
                    view! {
                        <button
                            class=move || {
                                if selected.get() == id { "platform-btn active" } else { "platform-btn" }
                            }
                            aria-pressed=move || (selected.get() == id).to_string()
                            data-platform=id.key()
                            on:click=move |_| on_select.run(id)
                        >
                            <Icon kind=platform.icon class="icon-sm" />
                            {platform.name}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// The selected platform's steps, numbered, in authored order.
#[component]
pub fn InstallSteps(platform: PlatformId, revealed: bool) -> impl IntoView {
    let steps = platform.platform().steps;

    view! {
        <ol class="install-steps" data-platform=platform.key()>
            {steps
                .iter()
                .enumerate()
                .map(|(index, step)| view! { <StepCard index=index step=*step revealed=revealed /> })
                .collect_view()}
        </ol>
    }
}

#[component]
fn StepCard(index: usize, step: InstallStep, revealed: bool) -> impl IntoView {
    let reveal = Reveal::left(0).stagger(400, 100, index);
    let heading = format!("{}. {}", index + 1, step.title);

    view! {
        <li class=format!("install-step {}", reveal.class(revealed)) style=reveal.style()>
            <h3 class="step-title">{heading}</h3>
            <div class="code-block">
                <pre class="step-command">{step.command}</pre>
                <CopyButton text=step.command />
            </div>
            {step.note.map(|note| view! { <p class="step-note">{format!("Note: {note}")}</p> })}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    /// `&&` is escaped in text nodes; compare on the HTML form.
    fn escaped(text: &str) -> String {
        text.replace('&', "&amp;")
    }

    fn commands_in(html: &str) -> Vec<String> {
        html.split("<pre class=\"step-command\">")
            .skip(1)
            .filter_map(|rest| rest.split("</pre>").next())
            .map(|command| command.replace("&amp;", "&"))
            .collect()
    }

    #[test]
    fn each_platform_shows_exactly_its_own_steps() {
        for id in PlatformId::ALL {
            let html = view! { <InstallSteps platform=id revealed=true /> }.to_html();
            let expected: Vec<String> = id
                .platform()
                .steps
                .iter()
                .map(|step| step.command.to_owned())
                .collect();
            assert_eq!(commands_in(&html), expected, "{id:?}");

            for other in PlatformId::ALL.into_iter().filter(|other| *other != id) {
                for step in other.platform().steps {
                    let shared = id.platform().steps.iter().any(|own| own.command == step.command);
                    if !shared {
                        assert!(
                            !html.contains(&escaped(step.command)),
                            "{id:?} leaked {:?}",
                            step.command
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn steps_are_numbered_with_notes() {
        let html = view! { <InstallSteps platform=PlatformId::Windows revealed=false /> }.to_html();
        assert!(html.contains("1. Clone Repository"));
        assert!(html.contains("2. Install Dependencies"));
        assert!(html.contains("3. Configure Project"));
        assert_eq!(html.matches("Note: This will create necessary configuration files").count(), 1);
        assert_eq!(html.matches("reveal reveal-left").count(), 3);
    }

    #[test]
    fn section_defaults_to_windows() {
        let html = view! { <Installation /> }.to_html();
        let list = html.split("<ol").nth(1).expect("step list rendered");
        let open_tag = list.split('>').next().unwrap_or_default();
        assert!(open_tag.contains("data-platform=\"windows\""));
        assert!(html.contains(&escaped("cd CursorFocus && pip install -r requirements.txt")));
        assert!(!html.contains("pip3 install"));
    }

    #[test]
    fn choosing_macos_swaps_the_step_list() {
        let platform = RwSignal::new(PlatformId::default());
        let before = view! { <Installation selected=platform /> }.to_html();
        assert_eq!(commands_in(&before), vec![
            "git clone https://github.com/RenjiYuusei/CursorFocus.git",
            "cd CursorFocus && pip install -r requirements.txt",
            "python setup.py --scan",
        ]);

        select_platform(platform).run(PlatformId::MacOs);
        assert_eq!(platform.get_untracked(), PlatformId::MacOs);

        let after = view! { <Installation selected=platform /> }.to_html();
        assert_eq!(commands_in(&after), vec![
            "git clone https://github.com/RenjiYuusei/CursorFocus.git",
            "cd CursorFocus && pip3 install -r requirements.txt",
            "python3 setup.py --scan",
        ]);
        assert_eq!(after.matches("platform-btn active").count(), 1);
        assert!(!after.contains("python setup.py --scan"));
    }

    #[test]
    fn selector_marks_the_active_platform() {
        let (selected, _) = signal(PlatformId::MacOs);
        let html = view! { <PlatformSelector selected=selected on_select=|_: PlatformId| {} /> }.to_html();

        assert!(html.contains("Windows"));
        assert!(html.contains("macOS"));
        assert_eq!(html.matches("platform-btn active").count(), 1);
        let active: Vec<&str> = html
            .split("<button")
            .skip(1)
            .filter(|button| button.contains("platform-btn active"))
            .collect();
        assert_eq!(active.len(), 1);
        assert!(active[0].contains("data-platform=\"mac\""));
        assert!(html.contains("aria-pressed=\"true\""));
    }
}
