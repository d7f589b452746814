use crate::application::correlator;
use crate::application::input::{parse_choice_index, parse_ticket_id};
use crate::application::payment::{PaymentMethod, collect_payment};
use crate::application::session::Session;
use crate::domain::catalog::Catalog;
use crate::domain::language::Language;
use crate::domain::ports::{ConsoleBox, LocalizerBox, RendererBox, Text};
use crate::error::{BookingError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Drives one interactive session: language selection, terms screen,
/// then the book / query / cancel / exit menu loop.
///
/// Owns the session state and the presentation ports, so presentation
/// never leaks into the trackers and tests can script the whole flow.
pub struct SessionFlow {
    session: Session,
    catalog: Catalog,
    localizer: LocalizerBox,
    renderer: RendererBox,
    console: ConsoleBox,
    rng: StdRng,
    language: Option<Language>,
}

impl SessionFlow {
    pub fn new(
        catalog: Catalog,
        localizer: LocalizerBox,
        renderer: RendererBox,
        console: ConsoleBox,
    ) -> Self {
        Self::with_rng(catalog, localizer, renderer, console, StdRng::from_entropy())
    }

    /// Like `new`, but with a caller-supplied rng so tests can make id
    /// generation deterministic.
    pub fn with_rng(
        catalog: Catalog,
        localizer: LocalizerBox,
        renderer: RendererBox,
        console: ConsoleBox,
        rng: StdRng,
    ) -> Self {
        Self {
            session: Session::new(),
            catalog,
            localizer,
            renderer,
            console,
            rng,
            language: None,
        }
    }

    /// Presets the language, skipping the interactive language menu.
    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn run(&mut self) -> Result<()> {
        let language = match self.language {
            Some(language) => language,
            None => self.select_language().await?,
        };
        self.language = Some(language);

        self.accept_terms(language).await?;
        self.console
            .print(self.localizer.text(language, Text::Welcome));

        loop {
            self.console.print(self.localizer.text(language, Text::Menu));
            let choice = self
                .console
                .read_line(self.localizer.text(language, Text::EnterChoice))
                .await?;

            match choice.trim() {
                "1" => self.book(language).await?,
                "2" => self.query_status(language).await?,
                "3" => self.cancel_ticket(language).await?,
                "4" => {
                    self.console
                        .print(self.localizer.text(language, Text::Goodbye));
                    break;
                }
                _ => self
                    .console
                    .print(self.localizer.text(language, Text::InvalidChoice)),
            }
        }

        Ok(())
    }

    /// The language menu itself is printed trilingually, before any
    /// language is known.
    async fn select_language(&mut self) -> Result<Language> {
        self.console
            .print(self.localizer.text(Language::En, Text::LanguageMenu));
        let choice = self
            .console
            .read_line(self.localizer.text(Language::En, Text::LanguagePrompt))
            .await?;
        Ok(Language::from_menu_choice(&choice))
    }

    /// The answer is not inspected; acknowledging is enough.
    async fn accept_terms(&mut self, language: Language) -> Result<()> {
        self.console.print(self.localizer.text(language, Text::Terms));
        self.console
            .read_line(self.localizer.text(language, Text::AcceptTerms))
            .await?;
        Ok(())
    }

    async fn book(&mut self, language: Language) -> Result<()> {
        let name = self
            .console
            .read_line(self.localizer.text(language, Text::EnterName))
            .await?;
        let name = name.trim().to_string();

        self.console
            .print(self.localizer.text(language, Text::AvailableDestinations));
        for (position, entry) in self.catalog.iter().enumerate() {
            let line = format!(
                "{}: {}",
                position + 1,
                self.localizer.destination(language, &entry.name)
            );
            self.console.print(&line);
        }

        let raw = self
            .console
            .read_line(self.localizer.text(language, Text::SelectDestination))
            .await?;
        let index = match parse_choice_index(&raw, self.catalog.len()) {
            Ok(index) => index,
            Err(_) => {
                self.console
                    .print(self.localizer.text(language, Text::InvalidNumber));
                return Ok(());
            }
        };
        let Some(entry) = self.catalog.get(index).cloned() else {
            return Ok(());
        };

        let price = self.catalog.price_of(&entry.name);
        let shown_destination = self.localizer.destination(language, &entry.name).to_string();
        self.console.print(&self.localizer.line(
            language,
            Text::PriceLine,
            &[&shown_destination, &price.to_string()],
        ));

        let raw = self
            .console
            .read_line(self.localizer.text(language, Text::SelectPaymentMethod))
            .await?;
        let method: PaymentMethod = match raw.parse() {
            Ok(method) => method,
            Err(_) => {
                self.console
                    .print(self.localizer.text(language, Text::InvalidChoice));
                return Ok(());
            }
        };

        let transaction = self.session.ledger.begin(&mut self.rng);
        let outcome = match collect_payment(
            &mut self.session.ledger,
            self.renderer.as_ref(),
            self.console.as_mut(),
            self.localizer.as_ref(),
            language,
            transaction,
            price,
            &name,
            method,
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(BookingError::Payment(reason)) => {
                // Fatal to this attempt only; back to the menu.
                self.console
                    .print(&self.localizer.line(language, Text::PaymentFailed, &[&reason]));
                return Ok(());
            }
            Err(other) => return Err(other),
        };

        // Booking is gated on the explicit confirmation.
        if outcome.confirmed {
            let ticket =
                self.session
                    .registry
                    .create(&mut self.rng, &entry.name, outcome.transaction);
            self.console.print(&self.localizer.line(
                language,
                Text::TicketBooked,
                &[&name, &shown_destination],
            ));
            self.console.print(&self.localizer.line(
                language,
                Text::TicketIdLine,
                &[&ticket.to_string()],
            ));
        }

        Ok(())
    }

    async fn query_status(&mut self, language: Language) -> Result<()> {
        let raw = self
            .console
            .read_line(self.localizer.text(language, Text::EnterTicketId))
            .await?;
        let ticket = match parse_ticket_id(&raw) {
            Ok(ticket) => ticket,
            Err(_) => {
                self.console
                    .print(self.localizer.text(language, Text::InvalidNumber));
                return Ok(());
            }
        };

        let shown_status = match correlator::status_of(&self.session, ticket) {
            Some(status) => self.localizer.status(language, status).to_string(),
            None => self
                .localizer
                .text(language, Text::TicketNotFound)
                .to_string(),
        };
        self.console.print(&self.localizer.line(
            language,
            Text::StatusLine,
            &[&ticket.to_string(), &shown_status],
        ));
        Ok(())
    }

    async fn cancel_ticket(&mut self, language: Language) -> Result<()> {
        let raw = self
            .console
            .read_line(self.localizer.text(language, Text::EnterTicketId))
            .await?;
        let ticket = match parse_ticket_id(&raw) {
            Ok(ticket) => ticket,
            Err(_) => {
                self.console
                    .print(self.localizer.text(language, Text::InvalidNumber));
                return Ok(());
            }
        };

        match correlator::cancel(&mut self.session, ticket) {
            Some(_) => self.console.print(&self.localizer.line(
                language,
                Text::TicketCancelled,
                &[&ticket.to_string()],
            )),
            None => self.console.print(&self.localizer.line(
                language,
                Text::NoTicketForId,
                &[&ticket.to_string()],
            )),
        }
        Ok(())
    }
}
