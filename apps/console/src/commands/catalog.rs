//! # Catalog Commands
//!
//! Alta de pájaro, listado del catálogo and búsqueda por especie.

use std::io::{BufRead, Write};

use pajareria_core::validation::validate_stock;
use pajareria_core::CatalogItem;
use pajareria_store::StoreError;
use tracing::info;

use super::messages::{for_store_error, MSG_BIRD_ADDED, MSG_EMPTY_CATALOG, MSG_SPECIES_NOT_FOUND};
use super::{Console, Menu};
use crate::error::ConsoleResult;

pub const CATALOG_MENU: Menu = Menu {
    header: "\n--- Gestión de Pájaros ---",
    options: &[
        "1. Alta de pájaro",
        "2. Listado del catálogo",
        "3. Búsqueda por especie",
        "4. Volver",
    ],
    prompt: "Seleccione: ",
};

pub const CATALOG_HEADER: &str = "\n--- CATÁLOGO DE PÁJAROS ---";

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn catalog_menu(&mut self) -> ConsoleResult<()> {
        self.submenu(&CATALOG_MENU, |console, choice| {
            match choice {
                1 => console.add_bird()?,
                2 => console.list_catalog()?,
                3 => console.search_species()?,
                _ => return Ok(false),
            }
            Ok(true)
        })
    }

    fn add_bird(&mut self) -> ConsoleResult<()> {
        let species = self.ask_line("Especie: ")?;
        let color = self.ask_line("Color: ")?;
        let price = self.ask_decimal("Precio: ")?;
        let quantity = self.ask_int("Cantidad: ")?;

        let added = validate_stock(quantity)
            .map_err(StoreError::from)
            .and_then(|stock| {
                self.store
                    .catalog_mut()
                    .add(CatalogItem::new(species, color, price, stock))
            });

        match added {
            Ok(position) => {
                info!(position, "Bird added to catalog");
                self.say(MSG_BIRD_ADDED)
            }
            Err(err) => self.say(for_store_error(&err)),
        }
    }

    /// Numbered listing, or the empty-catalog notice.
    pub(crate) fn list_catalog(&mut self) -> ConsoleResult<()> {
        if self.store.catalog().is_empty() {
            return self.say(MSG_EMPTY_CATALOG);
        }

        let lines: Vec<String> = self
            .store
            .catalog()
            .list()
            .map(|(position, item)| format!("{}. {}", position, item))
            .collect();

        self.say(CATALOG_HEADER)?;
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    /// Case-insensitive substring search; matches are printed without
    /// their position.
    fn search_species(&mut self) -> ConsoleResult<()> {
        let query = self.ask_line("Especie a buscar: ")?;
        let lines: Vec<String> = self
            .store
            .catalog()
            .find_by_species_contains(&query)
            .map(|item| item.to_string())
            .collect();

        if lines.is_empty() {
            return self.say(MSG_SPECIES_NOT_FOUND);
        }
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }
}
