/// Company profile constants: placeholders, static reminders, palette
///
/// The placeholders are what every fresh view starts from, since edits are
/// never written anywhere.

use ratatui::style::Color;

pub const APP_NAME: &str = "company-profile";

pub const PLACEHOLDER_NAME: &str = "Company Name";
pub const PLACEHOLDER_ABOUT: &str = "Short description of the company, its mission and vision.";
pub const PLACEHOLDER_HOURS: &str = "24-hour emergencies, etc.";
pub const PLACEHOLDER_ADDRESS: &str = "Gómez Bolaños 736";

/// Services shown when no services file is configured
pub const DEFAULT_SERVICES: &[&str] = &[
    "General consultation",
    "Vaccination",
    "Deworming",
    "Surgery",
    "Grooming",
];

/// Entry in the "Today's reminders" block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reminder {
    pub author: &'static str,
    pub text: &'static str,
}

pub const REMINDERS_TITLE: &str = "Today's reminders";
pub const REMINDERS_LINK: &str = "All updates";

pub const REMINDERS: &[Reminder] = &[
    Reminder {
        author: "@username",
        text: "Some representative placeholder content, with some information about this user. Imagine this being some sort of status update, perhaps?",
    },
    Reminder {
        author: "@username",
        text: "Some more representative placeholder content, related to this other user. Another status update, perhaps.",
    },
    Reminder {
        author: "@username",
        text: "This user also gets some representative placeholder content. Maybe they did something interesting, and you really want to highlight this in the recent updates.",
    },
];

// Palette (#006D77 teal, #E29578 salmon)
pub const ACCENT: Color = Color::Rgb(0x00, 0x6D, 0x77);
pub const HIGHLIGHT: Color = Color::Rgb(0xE2, 0x95, 0x78);
pub const INPUT_BG: Color = Color::White;
pub const INPUT_FG: Color = Color::Black;
pub const MUTED: Color = Color::Gray;

pub const EDIT_LABEL: &str = " ✎ Edit ";
pub const SAVE_LABEL: &str = "[ Save ]";
pub const CURSOR: &str = "█";

/// Environment variable overriding the configured services file
pub const SERVICES_ENV: &str = "COMPANY_PROFILE_SERVICES";
