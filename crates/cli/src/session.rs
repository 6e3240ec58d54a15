//! Interactive menu session.
//!
//! Parses primitive input (re-prompting in place), calls into the inventory store,
//! and turns every outcome into an operator-facing message.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use stockroom_core::DomainError;
use stockroom_inventory::{AddOutcome, InventoryStore, Listing, RemoveOutcome, StockUpdate};
use stockroom_products::Product;

use crate::config::CliConfig;
use crate::console::Console;

const MENU: &[&str] = &[
    "--- Main Menu ---",
    "1. Add New Product",
    "2. Update Stock",
    "3. View All Products",
    "4. Remove Product",
    "5. Exit",
];

/// One menu selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    UpdateStock,
    ViewAll,
    RemoveProduct,
    Exit,
}

impl MenuChoice {
    /// Only the bare digits `1`..`5` select an entry; surrounding spaces do not.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::AddProduct),
            "2" => Some(MenuChoice::UpdateStock),
            "3" => Some(MenuChoice::ViewAll),
            "4" => Some(MenuChoice::RemoveProduct),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Exit selected or input exhausted.
    Stop,
}

/// An operator session: one store, one console, alive until exit.
pub struct Session<R, W> {
    config: CliConfig,
    store: InventoryStore,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with an empty store.
    pub fn new(config: CliConfig, input: R, output: W) -> Self {
        Self::with_store(config, InventoryStore::new(), input, output)
    }

    pub fn with_store(config: CliConfig, store: InventoryStore, input: R, output: W) -> Self {
        Self {
            config,
            store,
            console: Console::new(input, output),
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Hand back the store and the output sink.
    pub fn into_parts(self) -> (InventoryStore, W) {
        (self.store, self.console.into_output())
    }

    /// Run the menu loop until the operator exits or input runs out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.console.say("Welcome to the Inventory Management System!")?;

        loop {
            for line in MENU {
                self.console.say(line)?;
            }
            let Some(raw) = self.console.ask("Enter your choice: ")? else {
                tracing::debug!("input closed at main menu");
                break;
            };

            let flow = match MenuChoice::parse(&raw) {
                Some(choice) => {
                    tracing::debug!(?choice, "menu selection");
                    self.dispatch(choice)?
                }
                None => {
                    self.console
                        .say("Invalid choice. Please enter a number between 1 and 5.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                break;
            }
            self.console.say("")?;
        }

        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<Flow> {
        match choice {
            MenuChoice::AddProduct => self.add_product(),
            MenuChoice::UpdateStock => self.update_stock(),
            MenuChoice::ViewAll => {
                self.view_all()?;
                Ok(Flow::Continue)
            }
            MenuChoice::RemoveProduct => self.remove_product(),
            MenuChoice::Exit => {
                self.console
                    .say("Exiting Inventory Management System. Goodbye!")?;
                Ok(Flow::Stop)
            }
        }
    }

    fn add_product(&mut self) -> anyhow::Result<Flow> {
        self.console.say("")?;
        self.console.say("--- Add New Product ---")?;
        let Some(name) = self.console.ask("Enter product name: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(price) = self.console.ask_until::<Decimal>(
            "Enter product price: ",
            "Invalid price. Please enter a positive numeric value.",
            |p| *p > Decimal::ZERO,
        )?
        else {
            return Ok(Flow::Stop);
        };
        let Some(stock) = self.console.ask_until::<i64>(
            "Enter initial stock quantity: ",
            "Invalid quantity. Please enter a non-negative integer.",
            |q| *q >= 0,
        )?
        else {
            return Ok(Flow::Stop);
        };

        let product = match Product::new(&name, price, stock) {
            Ok(product) => product,
            Err(err) => {
                self.report_invalid_product(&err)?;
                return Ok(Flow::Continue);
            }
        };

        let added_name = product.name().to_string();
        match self.store.add(product) {
            AddOutcome::Added => self
                .console
                .say(format!("Product '{added_name}' added successfully."))?,
            AddOutcome::Duplicate { .. } => self.console.say(format!(
                "Error: A product with the name '{added_name}' already exists. \
                 Consider updating its stock instead."
            ))?,
        }
        Ok(Flow::Continue)
    }

    fn report_invalid_product(&mut self, err: &DomainError) -> anyhow::Result<()> {
        tracing::info!(field = err.field(), error = %err, "product rejected");
        self.console
            .say(format!("Error adding product: {}", err.message()))
    }

    fn update_stock(&mut self) -> anyhow::Result<Flow> {
        self.console.say("")?;
        self.console.say("--- Update Product Stock ---")?;
        let Some(name) = self
            .console
            .ask("Enter the name of the product to update stock: ")?
        else {
            return Ok(Flow::Stop);
        };
        let Some(delta) = self.console.ask_until::<i64>(
            "Enter quantity change (positive for restock, negative for sale): ",
            "Invalid quantity. Please enter an integer.",
            |_| true,
        )?
        else {
            return Ok(Flow::Stop);
        };

        let message = match self.store.update_stock(&name, delta) {
            StockUpdate::Updated { name, stock } => {
                format!("Stock for '{name}' updated to {stock}.")
            }
            StockUpdate::NotFound => format!("Error: Product '{name}' not found."),
            StockUpdate::WouldGoNegative { name, current } => format!(
                "Error: Cannot reduce stock below zero. Current stock for '{name}' is {current}."
            ),
            StockUpdate::OutOfRange { name, current } => format!(
                "Error: Stock for '{name}' cannot exceed {}. Current stock is {current}.",
                i64::MAX
            ),
        };
        self.console.say(message)?;
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> anyhow::Result<()> {
        match self.store.list_all() {
            Listing::Empty => self
                .console
                .say("Inventory is currently empty. No products to display."),
            Listing::Products(products) => {
                self.console.say("")?;
                self.console.say("--- Current Inventory ---")?;
                for product in products {
                    let line = product.display_with(&self.config.currency_symbol).to_string();
                    self.console.say(line)?;
                }
                self.console.say("-------------------------")
            }
        }
    }

    fn remove_product(&mut self) -> anyhow::Result<Flow> {
        self.console.say("")?;
        self.console.say("--- Remove Product ---")?;
        let Some(name) = self
            .console
            .ask("Enter the name of the product to remove: ")?
        else {
            return Ok(Flow::Stop);
        };

        let message = match self.store.remove(&name) {
            RemoveOutcome::Removed(_) => format!("Product '{name}' removed successfully."),
            RemoveOutcome::NotFound => format!("Error: Product '{name}' not found."),
        };
        self.console.say(message)?;
        Ok(Flow::Continue)
    }
}
