use super::{CHANGELOG_URL, DISCORD_URL, ISSUES_URL, REPOSITORY_URL, SHOWCASE_URL};
use crate::icons::IconKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl FooterLink {
    /// In-page anchors stay in the tab, everything else opens a new one.
    pub fn is_external(&self) -> bool {
        !self.href.starts_with('#')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: IconKind,
}

pub const LINK_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Documentation",
        links: &[
            FooterLink { label: "Installation", href: "#installation" },
            FooterLink { label: "Usage Guide", href: "#usage" },
            FooterLink { label: "Features", href: "#features" },
            FooterLink { label: "GitHub", href: REPOSITORY_URL },
        ],
    },
    LinkGroup {
        title: "Community",
        links: &[
            FooterLink { label: "Discord", href: DISCORD_URL },
            FooterLink { label: "Issues", href: ISSUES_URL },
            FooterLink { label: "Showcase", href: SHOWCASE_URL },
            FooterLink { label: "Changelog", href: CHANGELOG_URL },
        ],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        href: REPOSITORY_URL,
        icon: IconKind::GitHub,
    },
    SocialLink {
        name: "Discord",
        href: DISCORD_URL,
        icon: IconKind::Discord,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_internal() {
        let docs = LINK_GROUPS[0];
        assert!(!docs.links[0].is_external());
        assert!(docs.links[3].is_external());
    }
}
