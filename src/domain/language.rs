use std::str::FromStr;

/// Display language for the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Kn,
    Hi,
}

impl Language {
    /// Maps the interactive language-menu answer. Anything that is not
    /// an explicit 2 or 3 falls back to English.
    pub fn from_menu_choice(choice: &str) -> Self {
        match choice.trim() {
            "2" => Language::Kn,
            "3" => Language::Hi,
            _ => Language::En,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "kn" => Ok(Language::Kn),
            "hi" => Ok(Language::Hi),
            other => Err(format!("unknown language '{other}' (expected en, kn or hi)")),
        }
    }
}
