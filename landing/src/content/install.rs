use crate::icons::IconKind;

/// The two installation instruction sets. Anything else is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlatformId {
    #[default]
    Windows,
    MacOs,
}

impl PlatformId {
    /// Selector order on the page.
    pub const ALL: [PlatformId; 2] = [PlatformId::Windows, PlatformId::MacOs];

    pub fn platform(self) -> &'static Platform {
        match self {
            PlatformId::Windows => &PLATFORMS[0],
            PlatformId::MacOs => &PLATFORMS[1],
        }
    }

    /// Stable key for `data-platform` attributes.
    pub const fn key(self) -> &'static str {
        match self {
            PlatformId::Windows => "windows",
            PlatformId::MacOs => "mac",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallStep {
    pub title: &'static str,
    pub command: &'static str,
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub id: PlatformId,
    pub name: &'static str,
    pub icon: IconKind,
    pub steps: &'static [InstallStep],
}

const CONFIGURE_NOTE: &str = "This will create necessary configuration files";

/// Indexed by [`PlatformId`] in `ALL` order.
pub static PLATFORMS: [Platform; 2] = [
    Platform {
        id: PlatformId::Windows,
        name: "Windows",
        icon: IconKind::Window,
        steps: &[
            InstallStep {
                title: "Clone Repository",
                command: "git clone https://github.com/RenjiYuusei/CursorFocus.git",
                note: None,
            },
            InstallStep {
                title: "Install Dependencies",
                command: "cd CursorFocus && pip install -r requirements.txt",
                note: None,
            },
            InstallStep {
                title: "Configure Project",
                command: "python setup.py --scan",
                note: Some(CONFIGURE_NOTE),
            },
        ],
    },
    Platform {
        id: PlatformId::MacOs,
        name: "macOS",
        icon: IconKind::CommandLine,
        steps: &[
            InstallStep {
                title: "Clone Repository",
                command: "git clone https://github.com/RenjiYuusei/CursorFocus.git",
                note: None,
            },
            InstallStep {
                title: "Install Dependencies",
                command: "cd CursorFocus && pip3 install -r requirements.txt",
                note: None,
            },
            InstallStep {
                title: "Configure Project",
                command: "python3 setup.py --scan",
                note: Some(CONFIGURE_NOTE),
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_platform_is_windows() {
        assert_eq!(PlatformId::default(), PlatformId::Windows);
        assert_eq!(PlatformId::ALL[0], PlatformId::default());
    }

    #[test]
    fn lookup_matches_table_position() {
        for id in PlatformId::ALL {
            assert_eq!(id.platform().id, id);
        }
    }

    #[test]
    fn both_platforms_have_three_steps() {
        for id in PlatformId::ALL {
            assert_eq!(id.platform().steps.len(), 3, "{:?}", id);
        }
    }
}
