use super::Accent;
use crate::icons::IconKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageGuide {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    /// Copyable snippet shown in a code block
    pub code: Option<&'static str>,
    /// Checklist items; empty when the guide has none
    pub details: &'static [&'static str],
    pub note: Option<&'static str>,
    pub accent: Accent,
}

/// Shown as documentation only; the page never parses it.
const SAMPLE_CONFIG: &str = r#"{
  "project_path": "",
  "update_interval": 60,
  "max_depth": 3,
  "ignored_directories": [
    "node_modules",
    "venv",
    ".git"
  ]
}"#;

pub const USAGE_GUIDES: &[UsageGuide] = &[
    UsageGuide {
        title: "Running CursorFocus",
        description: "Start tracking your project structure with a simple command.",
        icon: IconKind::CommandLine,
        code: Some("python focus.py"),
        details: &[],
        note: Some("CursorFocus will start monitoring your project and update every 60 seconds."),
        accent: Accent::Green,
    },
    UsageGuide {
        title: "Generated .cursorrules",
        description: "CursorFocus generates a .cursorrules file in your project directory.",
        icon: IconKind::Document,
        code: None,
        details: &["Create rules for your Ai to follow"],
        note: None,
        accent: Accent::Blue,
    },
    UsageGuide {
        title: "Generated Documentation",
        description: "CursorFocus generates comprehensive documentation in Focus.md.",
        icon: IconKind::Document,
        code: None,
        details: &[
            "Project Overview",
            "Directory Structure",
            "File Descriptions",
            "Function Listings",
            "Code Analysis",
        ],
        note: None,
        accent: Accent::Indigo,
    },
    UsageGuide {
        title: "Configuration",
        description: "Customize CursorFocus behavior through config.json.",
        icon: IconKind::Cog6Tooth,
        code: Some(SAMPLE_CONFIG),
        details: &[],
        note: None,
        accent: Accent::Purple,
    },
];
