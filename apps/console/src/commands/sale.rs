//! # Sale Command
//!
//! Realizar venta: a one-shot flow over [`SaleBuilder`].
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Preconditions (customers and catalog non-empty)                     │
//! │       └── failure → message, back to main menu                          │
//! │                                                                         │
//! │  2. "Ingrese DNI del cliente: "                                         │
//! │       └── unknown DNI → "Cliente no encontrado.", back to main menu     │
//! │                                                                         │
//! │  3. Loop: list catalog, ask position                                    │
//! │       ├── 0           → stop                                            │
//! │       ├── 1..=size    → "Pájaro añadido a la venta."                    │
//! │       └── otherwise   → "Número no válido."                             │
//! │                                                                         │
//! │  Closed input at either prompt cancels the flow before unwinding.       │
//! │                                                                         │
//! │  4. finish()                                                            │
//! │       ├── ≥ 1 line → "Venta registrada. Total: $65.00"                  │
//! │       └── no lines → "Venta cancelada: no se añadieron pájaros."        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use pajareria_core::CURRENCY_SYMBOL;
use pajareria_store::{LineOutcome, SaleBuilder};
use tracing::debug;

use super::messages::{for_store_error, MSG_LINE_ADDED};
use super::Console;
use crate::error::ConsoleResult;

pub const LINE_PROMPT: &str = "Seleccione el número del pájaro a añadir (0 para terminar): ";

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn make_sale(&mut self) -> ConsoleResult<()> {
        let mut builder = SaleBuilder::new();

        if let Err(err) = builder.check_preconditions(self.store.customers(), self.store.catalog()) {
            return self.say(for_store_error(&err));
        }

        let dni = match self.ask_line("Ingrese DNI del cliente: ") {
            Ok(dni) => dni,
            Err(err) => {
                builder.cancel();
                return Err(err);
            }
        };
        if let Err(err) = builder.select_customer(self.store.customers(), self.store.catalog(), &dni) {
            return self.say(for_store_error(&err));
        }

        loop {
            self.list_catalog()?;
            let input = match self.ask_int(LINE_PROMPT) {
                Ok(input) => input,
                Err(err) => {
                    // The draft is never committed once the session is lost
                    builder.cancel();
                    return Err(err);
                }
            };

            match builder.select_line(self.store.catalog(), input) {
                Ok(LineOutcome::Finished) => break,
                Ok(LineOutcome::Added { .. }) => self.say(MSG_LINE_ADDED)?,
                Err(err) => self.say(for_store_error(&err))?,
            }
        }

        let total = builder.finish(self.store.sales_mut()).map(|sale| sale.total());
        debug!(state = ?builder.state(), "Sale flow finished");

        match total {
            Ok(total) => self.say(format!("Venta registrada. Total: {}{}", CURRENCY_SYMBOL, total)),
            Err(err) => self.say(for_store_error(&err)),
        }
    }
}
