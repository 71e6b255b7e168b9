//! Customer modes sent with every quote request.

use anyhow::Result;
use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

/// Customer segment selector, passed verbatim to the quote service.
///
/// Exactly one mode is active per session; it can be switched at any
/// point without affecting the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Residential,
    Commercial,
    Tender,
    Insurance,
}

/// All customer modes and their descriptions, in display order.
pub const MODES: &[(Mode, &str)] = &[
    (Mode::Residential, "Home audio and multi-room installations"),
    (Mode::Commercial, "Shops, restaurants and office spaces"),
    (Mode::Tender, "Formal tender and procurement pricing"),
    (Mode::Insurance, "Replacement quotes for insurance claims"),
];

impl Mode {
    /// Canonical string form, as the service expects it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Tender => "Tender",
            Self::Insurance => "Insurance",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    /// Parses a mode name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            "tender" => Ok(Self::Tender),
            "insurance" => Ok(Self::Insurance),
            _ => anyhow::bail!(
                "Invalid mode: '{s}'\n\n\
                 Valid modes: Residential, Commercial, Tender, Insurance\n\
                 Run 'quo modes' to see their descriptions."
            ),
        }
    }
}

/// Prints all customer modes to stdout.
pub fn print_modes() {
    println!("{}", Style::header("Customer modes"));
    for (mode, description) in MODES {
        // Pad before styling so the color codes don't break alignment.
        println!(
            "  {}  {}",
            Style::value(format!("{mode:<12}")),
            Style::secondary(description)
        );
    }
}
