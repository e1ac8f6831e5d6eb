//! Inline SVG icons.
//!
//! Every icon the page uses is a variant of [`IconKind`]; the lookup table
//! below maps it to SVG path data. Outline icons follow Heroicons (24px,
//! stroke), brand marks are filled glyphs.

use leptos::prelude::*;

/// The closed set of icons rendered anywhere on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Folder,
    CommandLine,
    Cog,
    ArrowPath,
    CodeBracket,
    ArrowDown,
    Window,
    Document,
    Cog6Tooth,
    ClipboardDocumentCheck,
    Clipboard,
    Check,
    Info,
    ChevronRight,
    GitHub,
    Discord,
}

/// How a glyph is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    /// `fill="none" stroke="currentColor"`
    Outline,
    /// `fill="currentColor"`
    Solid,
}

impl IconKind {
    /// Every variant, for exhaustiveness checks.
    pub const ALL: [IconKind; 16] = [
        IconKind::Folder,
        IconKind::CommandLine,
        IconKind::Cog,
        IconKind::ArrowPath,
        IconKind::CodeBracket,
        IconKind::ArrowDown,
        IconKind::Window,
        IconKind::Document,
        IconKind::Cog6Tooth,
        IconKind::ClipboardDocumentCheck,
        IconKind::Clipboard,
        IconKind::Check,
        IconKind::Info,
        IconKind::ChevronRight,
        IconKind::GitHub,
        IconKind::Discord,
    ];

    /// SVG `d` attributes, one per `<path>`.
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Folder => &[ICON_FOLDER],
            IconKind::CommandLine => &[ICON_COMMAND_LINE],
            IconKind::Cog => &[ICON_COG],
            IconKind::ArrowPath => &[ICON_ARROW_PATH],
            IconKind::CodeBracket => &[ICON_CODE_BRACKET],
            IconKind::ArrowDown => &[ICON_ARROW_DOWN],
            IconKind::Window => &[ICON_WINDOW],
            IconKind::Document => &[ICON_DOCUMENT],
            IconKind::Cog6Tooth => &[ICON_COG_6_TOOTH, ICON_COG_6_TOOTH_HUB],
            IconKind::ClipboardDocumentCheck => &[ICON_CLIPBOARD_DOCUMENT_CHECK],
            IconKind::Clipboard => &[ICON_CLIPBOARD],
            IconKind::Check => &[ICON_CHECK],
            IconKind::Info => &[ICON_INFO],
            IconKind::ChevronRight => &[ICON_CHEVRON_RIGHT],
            IconKind::GitHub => &[ICON_GITHUB],
            IconKind::Discord => &[ICON_DISCORD],
        }
    }

    pub const fn style(self) -> IconStyle {
        match self {
            IconKind::GitHub | IconKind::Discord => IconStyle::Solid,
            _ => IconStyle::Outline,
        }
    }
}

/// Renders an [`IconKind`] as an inline `<svg>`.
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Folder class="icon-fill" /> }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    /// Extra CSS classes on the `<svg>`
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let (fill, stroke) = match kind.style() {
        IconStyle::Outline => ("none", "currentColor"),
        IconStyle::Solid => ("currentColor", "none"),
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill=fill
            stroke=stroke
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {kind.paths().iter().copied().map(|d| view! { <path d=d></path> }).collect_view()}
        </svg>
    }
}

// =============================================================================
// Outline icons
// =============================================================================

const ICON_FOLDER: &str = "M2.25 12.75V12A2.25 2.25 0 0 1 4.5 9.75h15A2.25 2.25 0 0 1 21.75 12v.75m-8.69-6.44-2.12-2.12a1.5 1.5 0 0 0-1.061-.44H4.5A2.25 2.25 0 0 0 2.25 6v12a2.25 2.25 0 0 0 2.25 2.25h15A2.25 2.25 0 0 0 21.75 18V9a2.25 2.25 0 0 0-2.25-2.25h-5.379a1.5 1.5 0 0 1-1.06-.44Z";

const ICON_COMMAND_LINE: &str = "m6.75 7.5 3 2.25-3 2.25m4.5 0h3m-9 8.25h13.5A2.25 2.25 0 0 0 21 18V6a2.25 2.25 0 0 0-2.25-2.25H5.25A2.25 2.25 0 0 0 3 6v12a2.25 2.25 0 0 0 2.25 2.25Z";

const ICON_COG: &str = "M4.5 12a7.5 7.5 0 0 0 15 0m-15 0a7.5 7.5 0 1 1 15 0m-15 0H3m16.5 0H21m-1.5 0H12m-8.457 3.077 1.41-.513m14.095-5.13 1.41-.513M5.106 17.785l1.15-.964m11.49-9.642 1.149-.964M7.501 19.795l.75-1.3m7.5-12.99.75-1.3m-6.063 16.658.26-1.477m2.605-14.772.26-1.477m0 17.726-.26-1.477M10.698 4.614l-.26-1.477M16.5 19.794l-.75-1.299M7.5 4.205 12 12m6.894 5.785-1.149-.964M6.256 7.178l-1.15-.964m15.352 8.864-1.41-.513M4.954 9.435l-1.41-.514M12.002 12l-3.75 6.495";

const ICON_ARROW_PATH: &str = "M16.023 9.348h4.992v-.001M2.985 19.644v-4.992m0 0h4.992m-4.993 0 3.181 3.183a8.25 8.25 0 0 0 13.803-3.7M4.031 9.865a8.25 8.25 0 0 1 13.803-3.7l3.181 3.182m0-4.991v4.99";

const ICON_CODE_BRACKET: &str = "M17.25 6.75 22.5 12l-5.25 5.25m-10.5 0L1.5 12l5.25-5.25m7.5-3-4.5 16.5";

const ICON_ARROW_DOWN: &str = "M19.5 13.5 12 21m0 0-7.5-7.5M12 21V3";

const ICON_WINDOW: &str = "M3 8.25V18a2.25 2.25 0 0 0 2.25 2.25h13.5A2.25 2.25 0 0 0 21 18V8.25m-18 0V6a2.25 2.25 0 0 1 2.25-2.25h13.5A2.25 2.25 0 0 1 21 6v2.25m-18 0h18M5.25 6h.008v.008H5.25V6ZM7.5 6h.008v.008H7.5V6Zm2.25 0h.008v.008H9.75V6Z";

const ICON_DOCUMENT: &str = "M19.5 14.25v-2.625a3.375 3.375 0 0 0-3.375-3.375h-1.5A1.125 1.125 0 0 1 13.5 7.125v-1.5a3.375 3.375 0 0 0-3.375-3.375H8.25m2.25 0H5.625c-.621 0-1.125.504-1.125 1.125v17.25c0 .621.504 1.125 1.125 1.125h12.75c.621 0 1.125-.504 1.125-1.125V11.25a9 9 0 0 0-9-9Z";

const ICON_COG_6_TOOTH: &str = "M9.594 3.94c.09-.542.56-.94 1.11-.94h2.593c.55 0 1.02.398 1.11.94l.213 1.281c.063.374.313.686.645.87.074.04.147.083.22.127.325.196.72.257 1.075.124l1.217-.456a1.125 1.125 0 0 1 1.37.49l1.296 2.247a1.125 1.125 0 0 1-.26 1.431l-1.003.827c-.293.241-.438.613-.43.992a7.723 7.723 0 0 1 0 .255c-.008.378.137.75.43.991l1.004.827c.424.35.534.955.26 1.43l-1.298 2.247a1.125 1.125 0 0 1-1.369.491l-1.217-.456c-.355-.133-.75-.072-1.076.124a6.47 6.47 0 0 1-.22.128c-.331.183-.581.495-.644.869l-.213 1.281c-.09.543-.56.94-1.11.94h-2.594c-.55 0-1.019-.398-1.11-.94l-.213-1.281c-.062-.374-.312-.686-.644-.87a6.52 6.52 0 0 1-.22-.127c-.325-.196-.72-.257-1.076-.124l-1.217.456a1.125 1.125 0 0 1-1.369-.49l-1.297-2.247a1.125 1.125 0 0 1 .26-1.431l1.004-.827c.292-.24.437-.613.43-.991a6.932 6.932 0 0 1 0-.255c.007-.38-.138-.751-.43-.992l-1.004-.827a1.125 1.125 0 0 1-.26-1.43l1.297-2.247a1.125 1.125 0 0 1 1.37-.491l1.216.456c.356.133.751.072 1.076-.124.072-.044.146-.086.22-.128.332-.183.582-.495.644-.869l.214-1.28Z";

const ICON_COG_6_TOOTH_HUB: &str = "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z";

const ICON_CLIPBOARD_DOCUMENT_CHECK: &str = "M11.35 3.836c-.065.21-.1.433-.1.664 0 .414.336.75.75.75h4.5a.75.75 0 0 0 .75-.75 2.25 2.25 0 0 0-.1-.664m-5.8 0A2.251 2.251 0 0 1 13.5 2.25H15c1.012 0 1.867.668 2.15 1.586m-5.8 0c-.376.023-.75.05-1.124.08C9.095 4.01 8.25 4.973 8.25 6.108V8.25m8.9-4.414c.376.023.75.05 1.124.08 1.131.094 1.976 1.057 1.976 2.192V16.5A2.25 2.25 0 0 1 18 18.75h-2.25m-7.5-10.5H4.875c-.621 0-1.125.504-1.125 1.125v11.25c0 .621.504 1.125 1.125 1.125h9.75c.621 0 1.125-.504 1.125-1.125V18.75m-7.5-10.5h6.375c.621 0 1.125.504 1.125 1.125v9.375m-8.25-3 1.5 1.5 3-3.75";

const ICON_CLIPBOARD: &str = "M8 5H6a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2v-1M8 5a2 2 0 002 2h2a2 2 0 002-2M8 5a2 2 0 012-2h2a2 2 0 012 2m0 0h2a2 2 0 012 2v3m2 4H10m0 0l3-3m-3 3l3 3";

const ICON_CHECK: &str = "M5 13l4 4L19 7";

const ICON_INFO: &str = "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z";

const ICON_CHEVRON_RIGHT: &str = "M9 5l7 7-7 7";

// =============================================================================
// Brand marks (filled)
// =============================================================================

const ICON_GITHUB: &str = "M12 2C6.477 2 2 6.484 2 12.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0112 6.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.202 2.398.1 2.651.64.7 1.028 1.595 1.028 2.688 0 3.848-2.339 4.695-4.566 4.943.359.309.678.92.678 1.855 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.019 10.019 0 0022 12.017C22 6.484 17.522 2 12 2z";

const ICON_DISCORD: &str = "M20.317 4.37a19.791 19.791 0 0 0-4.885-1.515a.074.074 0 0 0-.079.037c-.21.375-.444.864-.608 1.25a18.27 18.27 0 0 0-5.487 0a12.64 12.64 0 0 0-.617-1.25a.077.077 0 0 0-.079-.037A19.736 19.736 0 0 0 3.677 4.37a.07.07 0 0 0-.032.027C.533 9.046-.32 13.58.099 18.057a.082.082 0 0 0 .031.057a19.9 19.9 0 0 0 5.993 3.03a.078.078 0 0 0 .084-.028a14.09 14.09 0 0 0 1.226-1.994a.076.076 0 0 0-.041-.106a13.107 13.107 0 0 1-1.872-.892a.077.077 0 0 1-.008-.128a10.2 10.2 0 0 0 .372-.292a.074.074 0 0 1 .077-.01c3.928 1.793 8.18 1.793 12.062 0a.074.074 0 0 1 .078.01c.12.098.246.198.373.292a.077.077 0 0 1-.006.127a12.299 12.299 0 0 1-1.873.892a.077.077 0 0 0-.041.107c.36.698.772 1.362 1.225 1.993a.076.076 0 0 0 .084.028a19.839 19.839 0 0 0 6.002-3.03a.077.077 0 0 0 .032-.054c.5-5.177-.838-9.674-3.549-13.66a.061.061 0 0 0-.031-.03zM8.02 15.33c-1.183 0-2.157-1.085-2.157-2.419c0-1.333.956-2.419 2.157-2.419c1.21 0 2.176 1.096 2.157 2.42c0 1.333-.956 2.418-2.157 2.418zm7.975 0c-1.183 0-2.157-1.085-2.157-2.419c0-1.333.955-2.419 2.157-2.419c1.21 0 2.176 1.096 2.157 2.42c0 1.333-.946 2.418-2.157 2.418z";
