//! # Customer Commands
//!
//! Alta, baja, modificación, búsqueda and listado de clientes.

use std::io::{BufRead, Write};

use pajareria_core::{Customer, CustomerPatch};
use tracing::info;

use super::messages::{
    for_store_error, MSG_CUSTOMER_NOT_FOUND, MSG_CUSTOMER_REGISTERED, MSG_CUSTOMER_REMOVED,
    MSG_CUSTOMER_UPDATED, MSG_DUPLICATE_DNI, MSG_NO_CUSTOMERS,
};
use super::{Console, Menu};
use crate::error::ConsoleResult;

pub const CUSTOMER_MENU: Menu = Menu {
    header: "\n--- Gestión de Clientes ---",
    options: &[
        "1. Alta de cliente",
        "2. Baja de cliente",
        "3. Modificación de cliente",
        "4. Búsqueda por DNI",
        "5. Listado de clientes",
        "6. Volver",
    ],
    prompt: "Seleccione: ",
};

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn customer_menu(&mut self) -> ConsoleResult<()> {
        self.submenu(&CUSTOMER_MENU, |console, choice| {
            match choice {
                1 => console.register_customer()?,
                2 => console.remove_customer()?,
                3 => console.modify_customer()?,
                4 => console.search_customer()?,
                5 => console.list_customers()?,
                _ => return Ok(false),
            }
            Ok(true)
        })
    }

    /// Alta de cliente.
    ///
    /// The DNI is checked for duplicates as soon as it is typed, before
    /// phone and email are asked.
    fn register_customer(&mut self) -> ConsoleResult<()> {
        let name = self.ask_line("Nombre: ")?;
        let dni = self.ask_line("DNI: ")?;
        if self.store.customers().contains_dni(&dni) {
            return self.say(MSG_DUPLICATE_DNI);
        }
        let phone = self.ask_line("Teléfono: ")?;
        let email = self.ask_line("Email: ")?;

        match self
            .store
            .customers_mut()
            .add(Customer::new(name, dni, phone, email))
        {
            Ok(customer) => {
                info!(dni = %customer.dni, "Customer registered");
                self.say(MSG_CUSTOMER_REGISTERED)
            }
            Err(err) => self.say(for_store_error(&err)),
        }
    }

    /// Baja de cliente. Sales already recorded for the customer are kept.
    fn remove_customer(&mut self) -> ConsoleResult<()> {
        let dni = self.ask_line("DNI del cliente a eliminar: ")?;
        match self.store.customers_mut().remove_by_dni(&dni) {
            Ok(removed) => {
                info!(dni = %removed.dni, "Customer removed");
                self.say(MSG_CUSTOMER_REMOVED)
            }
            Err(_) => self.say(MSG_CUSTOMER_NOT_FOUND),
        }
    }

    /// Modificación de cliente. Blank answers keep the current value.
    fn modify_customer(&mut self) -> ConsoleResult<()> {
        let dni = self.ask_line("DNI del cliente a modificar: ")?;
        let Some(current) = self.store.customers().find_by_dni(&dni).cloned() else {
            return self.say(MSG_CUSTOMER_NOT_FOUND);
        };

        let name = self.ask_line(&format!("Nuevo nombre ({}): ", current.name))?;
        let phone = self.ask_line(&format!("Nuevo teléfono ({}): ", current.phone))?;
        let email = self.ask_line(&format!("Nuevo email ({}): ", current.email))?;

        let patch = CustomerPatch::from_input(&name, &phone, &email);
        match self.store.customers_mut().update(&current.dni, &patch) {
            Ok(_) => self.say(MSG_CUSTOMER_UPDATED),
            Err(err) => self.say(for_store_error(&err)),
        }
    }

    /// Búsqueda por DNI. Prints the customer line on a hit.
    fn search_customer(&mut self) -> ConsoleResult<()> {
        let dni = self.ask_line("DNI a buscar: ")?;
        let line = self.store.customers().find_by_dni(&dni).map(|c| c.to_string());
        match line {
            Some(line) => self.say(line),
            None => self.say(MSG_CUSTOMER_NOT_FOUND),
        }
    }

    fn list_customers(&mut self) -> ConsoleResult<()> {
        if self.store.customers().is_empty() {
            return self.say(MSG_NO_CUSTOMERS);
        }

        let lines: Vec<String> = self
            .store
            .customers()
            .list()
            .iter()
            .map(|c| c.to_string())
            .collect();

        self.say("\n--- LISTADO DE CLIENTES ---")?;
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }
}
