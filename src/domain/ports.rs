use crate::domain::language::Language;
use crate::domain::transaction::PaymentStatus;
use crate::error::Result;
use async_trait::async_trait;

/// Abstract message keys the session flow emits. The Localization
/// Provider turns a key + language into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    LanguageMenu,
    LanguagePrompt,
    Terms,
    AcceptTerms,
    Welcome,
    Menu,
    EnterChoice,
    EnterName,
    AvailableDestinations,
    SelectDestination,
    PriceLine,
    SelectPaymentMethod,
    TransactionIdLine,
    UpiPayLine,
    UpiLinkLine,
    UpiConfirmLine,
    PaymentCompletedPrompt,
    PaymentConfirmed,
    PaymentNotConfirmed,
    TicketBooked,
    TicketIdLine,
    EnterTicketId,
    StatusLine,
    TicketNotFound,
    TicketCancelled,
    NoTicketForId,
    Goodbye,
    InvalidChoice,
    InvalidNumber,
    PaymentFailed,
}

/// Replaces successive `{}` placeholders in a resolved template.
pub fn fill(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for arg in args {
        out = out.replacen("{}", arg, 1);
    }
    out
}

/// Maps an abstract message key + language to display text.
///
/// Keys missing from a non-English table resolve to the English text.
pub trait Localizer: Send + Sync {
    fn text(&self, language: Language, key: Text) -> &str;

    /// Localized destination name; unknown names come back unchanged.
    fn destination<'a>(&'a self, language: Language, name: &'a str) -> &'a str;

    /// Localized payment-status word.
    fn status(&self, language: Language, status: PaymentStatus) -> &str;

    fn line(&self, language: Language, key: Text, args: &[&str]) -> String {
        fill(self.text(language, key), args)
    }
}

/// Turns a payment URI into a viewable, scannable artifact.
#[async_trait]
pub trait CodeRenderer: Send + Sync {
    async fn render(&self, uri: &str) -> Result<()>;
}

/// Interactive terminal: prompts for single-line answers and prints.
#[async_trait]
pub trait Console: Send + Sync {
    async fn read_line(&mut self, prompt: &str) -> Result<String>;
    fn print(&mut self, line: &str);
}

pub type LocalizerBox = Box<dyn Localizer>;
pub type RendererBox = Box<dyn CodeRenderer>;
pub type ConsoleBox = Box<dyn Console>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_in_order() {
        assert_eq!(fill("The price for {} is Rs{}.", &["X", "150"]), "The price for X is Rs150.");
    }

    #[test]
    fn test_fill_without_placeholders() {
        assert_eq!(fill("no holes", &["ignored"]), "no holes");
    }
}
