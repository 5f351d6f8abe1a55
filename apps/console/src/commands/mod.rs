//! # Menu Commands
//!
//! The two-level menu driving a session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Console, main menu loop)
//! ├── customer.rs  ◄─── Gestión de clientes
//! ├── catalog.rs   ◄─── Gestión de pájaros
//! ├── sale.rs      ◄─── Realizar venta
//! ├── report.rs    ◄─── Mostrar ventas
//! └── messages.rs  ◄─── Operator-facing texts
//! ```
//!
//! ## Menu Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  render header + options + prompt                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  read_int ──► known option? ──yes──► dispatch ──┐                       │
//! │         ▲            │                          │                       │
//! │         │            no → "Opción no válida."   │                       │
//! │         └───────────────────────────────────────┘                       │
//! │                                                                         │
//! │  Leaves on the menu's back/exit option.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operational errors are printed and the loop continues. Only
//! `ConsoleError` (closed input, broken output) unwinds out of `run`.

pub mod catalog;
pub mod customer;
pub mod messages;
pub mod report;
pub mod sale;

use std::fmt::Display;
use std::io::{BufRead, Write};

use pajareria_store::Store;
use tracing::debug;

use crate::error::ConsoleResult;
use crate::input::InputReader;
use messages::{MSG_EXIT, MSG_INVALID_OPTION};

/// A numbered menu.
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub header: &'static str,
    pub options: &'static [&'static str],
    pub prompt: &'static str,
}

impl Menu {
    /// The selector that leaves this menu (always the last option).
    pub fn back_option(&self) -> i64 {
        self.options.len() as i64
    }
}

pub const MAIN_MENU: Menu = Menu {
    header: "\n=== MENÚ PRINCIPAL ===",
    options: &[
        "1. Gestión de clientes",
        "2. Gestión de pájaros",
        "3. Realizar venta",
        "4. Mostrar ventas",
        "5. Salir",
    ],
    prompt: "Seleccione una opción: ",
};

/// One interactive session: the store plus its input and output.
pub struct Console<R, W> {
    store: Store,
    input: InputReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(store: Store, input: R, out: W) -> Self {
        Console {
            store,
            input: InputReader::new(input),
            out,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the main menu until "Salir" is selected.
    pub fn run(&mut self) -> ConsoleResult<()> {
        loop {
            let choice = self.choose(&MAIN_MENU)?;
            debug!(choice, "Main menu selection");

            match choice {
                1 => self.customer_menu()?,
                2 => self.catalog_menu()?,
                3 => self.make_sale()?,
                4 => self.sales_menu()?,
                5 => {
                    self.say(MSG_EXIT)?;
                    return Ok(());
                }
                _ => self.say(MSG_INVALID_OPTION)?,
            }
        }
    }

    // =========================================================================
    // Output and input helpers
    // =========================================================================

    /// Renders `menu` and reads the selection.
    fn choose(&mut self, menu: &Menu) -> ConsoleResult<i64> {
        self.say(menu.header)?;
        for option in menu.options {
            self.say(option)?;
        }
        self.ask_int(menu.prompt)
    }

    /// Writes one line.
    fn say(&mut self, text: impl Display) -> ConsoleResult<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Writes a prompt without a line break.
    fn prompt(&mut self, text: &str) -> ConsoleResult<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn ask_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.prompt(prompt)?;
        self.input.read_line()
    }

    fn ask_int(&mut self, prompt: &str) -> ConsoleResult<i64> {
        self.prompt(prompt)?;
        self.input.read_int(&mut self.out)
    }

    fn ask_decimal(&mut self, prompt: &str) -> ConsoleResult<f64> {
        self.prompt(prompt)?;
        self.input.read_decimal(&mut self.out)
    }

    /// Runs a submenu loop, handing every selection except the back option
    /// to `dispatch`. Returns `Ok(false)` from `dispatch` for unknown choices.
    fn submenu<F>(&mut self, menu: &Menu, mut dispatch: F) -> ConsoleResult<()>
    where
        F: FnMut(&mut Self, i64) -> ConsoleResult<bool>,
    {
        loop {
            let choice = self.choose(menu)?;
            if choice == menu.back_option() {
                return self.say(messages::MSG_BACK);
            }
            if !dispatch(&mut *self, choice)? {
                self.say(MSG_INVALID_OPTION)?;
            }
        }
    }
}
