//! # Sales Reports
//!
//! Mostrar ventas: all sales, sales of one customer, and per-sale totals.

use std::io::{BufRead, Write};

use super::messages::{MSG_CUSTOMER_NOT_FOUND, MSG_NO_SALES, MSG_NO_SALES_FOR_CUSTOMER};
use super::{Console, Menu};
use crate::error::ConsoleResult;

pub const SALES_MENU: Menu = Menu {
    header: "\n--- Mostrar Ventas ---",
    options: &[
        "1. Mostrar todas las ventas",
        "2. Mostrar ventas por cliente",
        "3. Mostrar importe total de cada venta",
        "4. Volver",
    ],
    prompt: "Seleccione: ",
};

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn sales_menu(&mut self) -> ConsoleResult<()> {
        self.submenu(&SALES_MENU, |console, choice| {
            match choice {
                1 => console.show_all_sales()?,
                2 => console.show_customer_sales()?,
                3 => console.show_sale_totals()?,
                _ => return Ok(false),
            }
            Ok(true)
        })
    }

    fn show_all_sales(&mut self) -> ConsoleResult<()> {
        if self.store.sales().is_empty() {
            return self.say(MSG_NO_SALES);
        }

        let lines: Vec<String> = self.store.sales().list().iter().map(|s| s.to_string()).collect();
        self.say("\n--- TODAS LAS VENTAS ---")?;
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    /// Works from the sales history, so a deleted customer's sales are still
    /// listed.
    fn show_customer_sales(&mut self) -> ConsoleResult<()> {
        let dni = self.ask_line("DNI del cliente: ")?;
        let lines: Vec<String> = self
            .store
            .sales()
            .find_by_customer_dni(&dni)
            .map(|s| s.to_string())
            .collect();

        if lines.is_empty() {
            return if self.store.customers().contains_dni(&dni) {
                self.say(MSG_NO_SALES_FOR_CUSTOMER)
            } else {
                self.say(MSG_CUSTOMER_NOT_FOUND)
            };
        }

        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    fn show_sale_totals(&mut self) -> ConsoleResult<()> {
        let lines: Vec<String> = self
            .store
            .sales()
            .list()
            .iter()
            .map(|s| s.summary().to_string())
            .collect();

        self.say("\n--- IMPORTE TOTAL DE CADA VENTA ---")?;
        if lines.is_empty() {
            return self.say(MSG_NO_SALES);
        }
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pajareria_store::{Store, StoreConfig};
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let store = Store::new(StoreConfig::default()).unwrap();
        let mut console = Console::new(store, Cursor::new(input.to_string()), Vec::new());
        console.run().unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_no_sales() {
        let out = run("4\n1\n3\n4\n5\n");
        assert!(out.contains("Seleccione: No hay ventas registradas.\n"));
        assert!(out.contains("\n--- IMPORTE TOTAL DE CADA VENTA ---\nNo hay ventas registradas.\n"));
    }

    #[test]
    fn test_customer_sales_messages() {
        let out = run("4\n2\n87654321B\n2\n00000000X\n4\n5\n");
        assert!(out.contains("DNI del cliente: No hay ventas para este cliente.\n"));
        assert!(out.contains("DNI del cliente: Cliente no encontrado.\n"));
    }

    #[test]
    fn test_totals_line() {
        let out = run("3\n87654321b\n3\n3\n0\n4\n3\n4\n5\n");
        assert!(out.contains("Cliente: Luis García | Fecha: "));
        assert!(out.contains(" | Total: $60.00\n"));
    }

    #[test]
    fn test_deleted_customer_sales_are_listed() {
        let out = run("3\n12345678A\n1\n0\n1\n2\n12345678A\n6\n4\n2\n12345678a\n4\n5\n");
        assert!(out.contains("DNI del cliente: Venta{cliente=Ana López, fecha='"));
        assert!(out.contains("', total=25.00}\n"));
    }
}
