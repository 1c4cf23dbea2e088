//! # Interactive Session
//!
//! A synchronous command interpreter over any `BufRead` input and `Write`
//! output. The binary hands it stdin/stdout; tests hand it a script.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            ┌────────── menu choice 1-5 or invalid ──────────┐          │
//! │            │                                                 │          │
//! │            ▼                                                 │          │
//! │      ┌───────────┐   "Would you like to continue?" == y     │          │
//! │  ──► │  Running  │ ─────────────────────────────────────────┘          │
//! │      └─────┬─────┘                                                      │
//! │            │  choice 6, answer != y, or end of input                    │
//! │            ▼                                                            │
//! │      ┌────────────┐                                                     │
//! │      │ Terminated │  (final)                                            │
//! │      └────────────┘                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock moves one way: adding reserves catalog stock, removing from the cart
//! does not put it back.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use tally_core::validation::parse_quantity;
use tally_core::{Cart, Catalog, CoreError, Money, PricingPolicy, ValidationError};

use crate::menu::{MenuChoice, MENU};

const CHOICE_PROMPT: &str = "Enter your choice: ";
const CONTINUE_PROMPT: &str = "Would you like to continue? (y/n): ";

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// What happened during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Completed menu actions, exit excluded.
    pub actions: usize,
    pub checkouts: usize,
    /// Sum of checkout totals, each rounded to the cent.
    pub revenue: Money,
}

/// Owns the catalog and cart for one shopper.
pub struct Session<R, W> {
    catalog: Catalog,
    cart: Cart,
    policy: PricingPolicy,
    input: R,
    output: W,
    state: SessionState,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, policy: PricingPolicy, input: R, output: W) -> Self {
        Session {
            catalog,
            cart: Cart::new(),
            policy,
            input,
            output,
            state: SessionState::Running,
            summary: SessionSummary::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Runs until the session terminates.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        while self.state == SessionState::Running {
            self.step()?;
        }
        Ok(self.summary.clone())
    }

    /// Shows the menu, performs one choice and asks whether to continue.
    ///
    /// Does nothing once terminated.
    pub fn step(&mut self) -> io::Result<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", MENU)?;

        let Some(line) = self.prompt(CHOICE_PROMPT)? else {
            return Ok(self.terminate());
        };

        let choice = MenuChoice::from(line.as_str());
        debug!(?choice, "Menu choice");

        match choice {
            MenuChoice::ListInventory => self.list_inventory()?,
            MenuChoice::ShowCart => writeln!(self.output, "{}", self.cart)?,
            MenuChoice::AddItem => self.add_to_cart()?,
            MenuChoice::RemoveItem => self.remove_from_cart()?,
            MenuChoice::Checkout => self.checkout()?,
            MenuChoice::Exit => {
                writeln!(self.output, "Thank you for shopping with us!")?;
                return Ok(self.terminate());
            }
            MenuChoice::Invalid => writeln!(self.output, "Invalid choice. Please try again.")?,
        }

        // Input ran out mid-action
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }
        self.summary.actions += 1;

        match self.prompt(CONTINUE_PROMPT)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => Ok(self.state),
            _ => {
                writeln!(self.output, "Thank you for using the shopping system!")?;
                Ok(self.terminate())
            }
        }
    }

    fn list_inventory(&mut self) -> io::Result<()> {
        for item in &self.catalog {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }

    fn add_to_cart(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter the name of the item: ")? else {
            self.terminate();
            return Ok(());
        };
        if !self.catalog.contains(&name) {
            return writeln!(self.output, "Item not found in inventory.");
        }

        let Some(quantity) = self.read_quantity("Enter the quantity: ")? else {
            self.terminate();
            return Ok(());
        };

        match self.catalog.reserve(&name, quantity) {
            Ok(stock) => {
                self.cart.add(&name, quantity, stock.unit_price);
                info!(item = %name, quantity, stock_left = stock.quantity, "Added to cart");
                Ok(())
            }
            Err(CoreError::InsufficientStock { available, .. }) => {
                debug!(item = %name, quantity, available, "Add rejected");
                writeln!(self.output, "Not enough inventory for this item.")
            }
            Err(err) => writeln!(self.output, "{}", err),
        }
    }

    fn remove_from_cart(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter the name of the item to remove: ")? else {
            self.terminate();
            return Ok(());
        };
        if !self.catalog.contains(&name) {
            return writeln!(self.output, "Item not found in inventory.");
        }

        let Some(quantity) = self.read_quantity("Enter the quantity to remove: ")? else {
            self.terminate();
            return Ok(());
        };

        let removal = self.cart.remove(&name, quantity);
        info!(item = %name, quantity, ?removal, "Removed from cart");
        Ok(())
    }

    fn checkout(&mut self) -> io::Result<()> {
        let receipt = self.cart.checkout(&self.policy);
        self.summary.checkouts += 1;
        self.summary.revenue += receipt.total.rounded();
        writeln!(self.output, "Total cost: {}", receipt.total)
    }

    /// Prompts until a whole number of zero or more is entered.
    ///
    /// Returns `None` at end of input.
    fn read_quantity(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };

            match parse_quantity(&line) {
                Ok(quantity) => return Ok(Some(quantity)),
                Err(ValidationError::MustBeNonNegative { .. }) => {
                    writeln!(self.output, "Please enter a positive number.")?
                }
                Err(err) => {
                    debug!(%err, "Rejected quantity");
                    writeln!(self.output, "Invalid input. Please enter a valid number.")?
                }
            }
        }
    }

    /// Writes `text`, then reads one line without its line ending and
    /// surrounding whitespace.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn terminate(&mut self) -> SessionState {
        self.state = SessionState::Terminated;
        self.state
    }
}
