//! Static page content.
//!
//! Hand-authored descriptor tables, one module per section. Nothing in here
//! is mutated at runtime; position in a table is the only identity.

mod features;
mod install;
mod links;
mod usage;

pub use features::{Accent, FEATURES, Feature};
pub use install::{InstallStep, PLATFORMS, Platform, PlatformId};
pub use links::{FooterLink, LINK_GROUPS, LinkGroup, SOCIAL_LINKS, SocialLink};
pub use usage::{USAGE_GUIDES, UsageGuide};

/// Product name used across the page (single source of truth)
pub const PRODUCT_NAME: &str = "CursorFocus";

/// One-line pitch, used as the document description.
pub const TAGLINE: &str =
    "A lightweight tool that maintains a focused view of your project structure and environment";

pub const REPOSITORY_URL: &str = "https://github.com/RenjiYuusei/CursorFocus";
pub const ISSUES_URL: &str = "https://github.com/RenjiYuusei/CursorFocus/issues";
pub const SHOWCASE_URL: &str = "https://github.com/RenjiYuusei/CursorFocus/blob/main/SHOWCASE.md";
pub const CHANGELOG_URL: &str = "https://github.com/RenjiYuusei/CursorFocus/blob/main/CHANGELOG.md";
pub const DISCORD_URL: &str = "https://discord.gg/7MjqwynP";
