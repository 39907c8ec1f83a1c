//! # Cart Session
//!
//! One shopper, one cart, start to finish.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Start ──► DisplayCatalog ──► AddingItems ──► SelectRegion             │
//! │                                 │    ▲             │  ▲                 │
//! │                                 └────┘             └──┘                 │
//! │                          "ajouter un autre ?"   unknown code            │
//! │                                                                         │
//! │            ──► ShowSummary ──► Confirm ──► End                          │
//! │                                                                         │
//! │  Bad answers loop inside Console::ask and never change the stage.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use chrono::Utc;
use tracing::{info, info_span};
use uuid::Uuid;

use caddie_core::pricing::price_cart;
use caddie_core::validation::{parse_product_index, parse_quantity, parse_region, parse_yes_no};
use caddie_core::{Cart, CartSummary, Catalog, DiscountSchedule, Region};

use crate::console::Console;
use crate::error::CliResult;
use crate::render::{cart_table, products_table, regions_table};

pub const PRODUCT_PROMPT: &str = "Choisissez un produit en entrant le numéro correspondant : ";
pub const QUANTITY_PROMPT: &str = "Entrez la quantité : ";
pub const CONTINUE_PROMPT: &str = "Souhaitez-vous ajouter un autre produit ? (y/n) ";
pub const REGION_PROMPT: &str = "Entrez l'état de la commande (ex : UT) : ";
pub const CONFIRM_PROMPT: &str = "Souhaitez-vous valider le panier ? (y/n) ";

pub const CONFIRMED_MESSAGE: &str = "Panier validé ! Merci pour votre achat.";
pub const CANCELLED_MESSAGE: &str = "Panier annulé.";

/// How the shopper ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Confirmed,
    Cancelled,
}

/// What a finished session leaves behind.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub id: Uuid,
    pub outcome: SessionOutcome,
    pub summary: CartSummary,
}

/// Drives the prompts and owns the cart for one run.
pub struct Session<'a, R, W> {
    id: Uuid,
    console: Console<R, W>,
    catalog: &'a Catalog,
    schedule: &'a DiscountSchedule,
    cart: Cart,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(console: Console<R, W>, catalog: &'a Catalog, schedule: &'a DiscountSchedule) -> Self {
        Session {
            id: Uuid::new_v4(),
            console,
            catalog,
            schedule,
            cart: Cart::new(),
        }
    }

    /// Runs every stage in order and reports the result.
    pub fn run(mut self) -> CliResult<(SessionReport, Console<R, W>)> {
        let span = info_span!("session", id = %self.id);
        let _guard = span.enter();
        info!("session started");

        self.display_catalog()?;
        self.add_items()?;
        let region = self.select_region()?;
        let summary = self.show_summary(region)?;
        let outcome = self.confirm()?;

        info!(?outcome, "session finished");
        let report = SessionReport {
            id: self.id,
            outcome,
            summary,
        };
        Ok((report, self.console))
    }

    fn display_catalog(&mut self) -> CliResult<()> {
        self.console.say(products_table(self.catalog))
    }

    /// Loops until the shopper declines to add another product. At least
    /// one line is always added.
    fn add_items(&mut self) -> CliResult<()> {
        let catalog = self.catalog;
        loop {
            let product = self
                .console
                .ask(PRODUCT_PROMPT, |input| parse_product_index(catalog, input))?;
            let quantity = self.console.ask(QUANTITY_PROMPT, parse_quantity)?;

            let line = self.cart.add_item(product, quantity);
            info!(
                product = %line.product.name,
                quantity = line.quantity.get(),
                gross = %line.gross(),
                "item added"
            );

            self.console
                .say(format!("{} a été ajouté au panier.", product.name))?;
            self.console.blank()?;
            self.console.say("Panier actuel :")?;
            self.console.say(cart_table(&self.cart))?;

            if !self.console.ask(CONTINUE_PROMPT, parse_yes_no)? {
                return Ok(());
            }
        }
    }

    fn select_region(&mut self) -> CliResult<Region> {
        self.console.say(regions_table())?;
        let region = self.console.ask(REGION_PROMPT, parse_region)?;
        info!(%region, tax_bps = region.tax_rate().bps(), "region selected");
        Ok(region)
    }

    fn show_summary(&mut self, region: Region) -> CliResult<CartSummary> {
        let breakdown = price_cart(&self.cart, region, self.schedule);
        let total = breakdown.total();
        info!(
            lines = breakdown.lines.len(),
            gross = %breakdown.gross_subtotal(),
            discount = %breakdown.discount_total(),
            tax = %breakdown.tax_total(),
            %total,
            "total computed"
        );

        self.console.blank()?;
        self.console.say("Panier final :")?;
        self.console.say(cart_table(&self.cart))?;
        self.console.say(format!("Prix total avec la TVA : {total}"))?;

        Ok(CartSummary::new(&self.cart, &breakdown, Utc::now()))
    }

    fn confirm(&mut self) -> CliResult<SessionOutcome> {
        if self.console.ask(CONFIRM_PROMPT, parse_yes_no)? {
            self.console.say(CONFIRMED_MESSAGE)?;
            Ok(SessionOutcome::Confirmed)
        } else {
            self.console.say(CANCELLED_MESSAGE)?;
            Ok(SessionOutcome::Cancelled)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (SessionReport, String) {
        let catalog = Catalog::standard();
        let schedule = DiscountSchedule::standard();
        let console = Console::new(script.as_bytes(), Vec::new());
        let (report, console) = Session::new(console, &catalog, &schedule).run().unwrap();
        let output = String::from_utf8(console.into_parts().1).unwrap();
        (report, output)
    }

    #[test]
    fn test_single_item_confirmed() {
        let (report, output) = run_script("3\n1\nn\nal\ny\n");

        assert_eq!(report.outcome, SessionOutcome::Confirmed);
        assert_eq!(report.summary.region, Region::Alabama);
        assert_eq!(report.summary.total.to_fixed(), "6770.40");
        assert!(output.contains("Produit C a été ajouté au panier."));
        assert!(output.contains("Prix total avec la TVA : 6770.40 €"));
        assert!(output.ends_with(&format!("{CONFIRMED_MESSAGE}\n")));
    }

    #[test]
    fn test_cancelled_session() {
        let (report, output) = run_script("1\n1\nn\nTX\nn\n");
        assert_eq!(report.outcome, SessionOutcome::Cancelled);
        assert!(output.ends_with(&format!("{CANCELLED_MESSAGE}\n")));
    }

    #[test]
    fn test_cart_table_shown_after_each_item() {
        let (report, output) = run_script("1\n1\ny\n2\n2\nn\nCA\ny\n");
        assert_eq!(report.summary.lines.len(), 2);
        assert_eq!(output.matches("Panier actuel :").count(), 2);
        assert_eq!(output.matches("Panier final :").count(), 1);
    }

    #[test]
    fn test_input_closed_mid_session_is_an_error() {
        let catalog = Catalog::standard();
        let schedule = DiscountSchedule::standard();
        let console = Console::new("1\n".as_bytes(), Vec::new());
        let err = Session::new(console, &catalog, &schedule).run().unwrap_err();
        assert!(matches!(
            err,
            crate::error::CliError::InputClosed { ref prompt } if prompt == QUANTITY_PROMPT
        ));
    }
}
