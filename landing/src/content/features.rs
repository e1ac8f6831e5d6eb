use crate::icons::IconKind;

/// Colour family of a card: icon gradient plus card background tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Yellow,
    Indigo,
}

impl Accent {
    /// Gradient class for the icon tile.
    pub const fn icon_class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-icon accent-blue",
            Accent::Purple => "accent-icon accent-purple",
            Accent::Green => "accent-icon accent-green",
            Accent::Yellow => "accent-icon accent-yellow",
            Accent::Indigo => "accent-icon accent-indigo",
        }
    }

    /// Tinted background class for the card body.
    pub const fn card_class(self) -> &'static str {
        match self {
            Accent::Blue => "tint-blue",
            Accent::Purple => "tint-purple",
            Accent::Green => "tint-green",
            Accent::Yellow => "tint-yellow",
            Accent::Indigo => "tint-indigo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub accent: Accent,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        name: "Project Structure Management",
        description: "Track and manage your project directory structure efficiently with real-time updates.",
        icon: IconKind::Folder,
        accent: Accent::Blue,
    },
    Feature {
        name: "Integrated Terminal",
        description: "Built-in terminal allows you to execute commands directly from the interface.",
        icon: IconKind::CommandLine,
        accent: Accent::Purple,
    },
    Feature {
        name: "Flexible Configuration",
        description: "Customize settings according to your specific project requirements.",
        icon: IconKind::Cog,
        accent: Accent::Green,
    },
    Feature {
        name: "Auto Synchronization",
        description: "Automatically synchronize changes in real-time across your project.",
        icon: IconKind::ArrowPath,
        accent: Accent::Yellow,
    },
];
