//! End-to-end sessions over in-memory input and output.

use std::io::Cursor;

use pajareria_console::{run_session, AppConfig, Console, ConsoleError};
use pajareria_store::{Store, StoreConfig};

const ANA: &str = "Cliente{nombre='Ana López', dni='12345678A', telefono='600111222', email='ana@email.com'}";
const LUIS: &str = "Cliente{nombre='Luis García', dni='87654321B', telefono='699888777', email='luis@email.com'}";

/// One token per line, the way an operator types them.
fn lines(tokens: &[&str]) -> String {
    let mut input = tokens.join("\n");
    input.push('\n');
    input
}

fn session(tokens: &[&str]) -> (Store, String) {
    let store = Store::new(StoreConfig::default()).unwrap();
    let mut console = Console::new(store, Cursor::new(lines(tokens)), Vec::new());
    console.run().unwrap();
    let store = console.store().clone();
    (store, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn test_list_seed_customers() {
    let (store, out) = session(&["1", "5", "6", "5"]);

    let expected = format!("\n--- LISTADO DE CLIENTES ---\n{}\n{}\n", ANA, LUIS);
    assert!(out.contains(&expected));
    assert!(out.contains("Seleccione: Volviendo...\n"));
    assert_eq!(out.matches("=== MENÚ PRINCIPAL ===").count(), 2);
    assert!(out.ends_with("Seleccione una opción: Gracias por usar el sistema.\n"));
    assert_eq!(store.customers().len(), 2);
}

#[test]
fn test_register_customer_with_blank_contact() {
    let (store, out) = session(&["1", "1", "Marta", "99999999Z", "", "", "5", "6", "5"]);

    assert!(out.contains("Nombre: DNI: Teléfono: Email: Cliente registrado con éxito.\n"));
    let expected = format!(
        "{}\n{}\nCliente{{nombre='Marta', dni='99999999Z', telefono='', email=''}}\n",
        ANA, LUIS
    );
    assert!(out.contains(&expected));
    assert_eq!(store.customers().len(), 3);
}

#[test]
fn test_duplicate_dni_any_casing() {
    let (store, out) = session(&["1", "1", "X", "12345678a", "5", "6", "5"]);

    assert!(out.contains("DNI: Error: Ya existe un cliente con ese DNI.\n"));
    assert!(!out.contains("Teléfono: "));
    assert_eq!(store.customers().len(), 2);
}

#[test]
fn test_sale_commit() {
    let (store, out) = session(&["3", "12345678A", "1", "2", "0", "5"]);

    assert!(out.contains("Venta registrada. Total: $65.00\n"));
    assert_eq!(store.sales().len(), 1);

    let sale = &store.sales().list()[0];
    assert_eq!(sale.customer().name, "Ana López");
    let species: Vec<_> = sale.lines().iter().map(|l| l.species.as_str()).collect();
    assert_eq!(species, ["Canario", "Periquito"]);
}

#[test]
fn test_sale_cancelled_without_lines() {
    let (store, out) = session(&["3", "12345678A", "0", "5"]);

    assert!(out.contains("Venta cancelada: no se añadieron pájaros.\n"));
    assert!(store.sales().is_empty());
}

#[test]
fn test_show_all_sales_after_commit() {
    let (_, out) = session(&["3", "12345678A", "1", "2", "0", "4", "1", "4", "5"]);

    let section = out
        .split("\n--- TODAS LAS VENTAS ---\n")
        .nth(1)
        .unwrap();
    let sale_lines: Vec<_> = section
        .lines()
        .take_while(|line| line.starts_with("Venta{"))
        .collect();

    assert_eq!(sale_lines.len(), 1);
    assert!(sale_lines[0].contains("cliente=Ana López"));
    assert!(sale_lines[0].contains("total=65.00"));
}

#[test]
fn test_sale_relists_catalog_before_each_prompt() {
    let (_, out) = session(&["3", "12345678A", "3", "0", "5"]);

    assert_eq!(out.matches("\n--- CATÁLOGO DE PÁJAROS ---\n").count(), 2);
    assert!(out.contains(
        "3. Pájaro {especie='Jilguero', color='Marrón', cantidad='1', precio=30.0}\n\
         Seleccione el número del pájaro a añadir (0 para terminar): "
    ));
}

#[test]
fn test_sale_does_not_touch_stock() {
    let (store, _) = session(&["3", "87654321B", "3", "3", "0", "5"]);
    assert_eq!(store.catalog().at(3).unwrap().stock, 1);
    assert_eq!(store.sales().list()[0].total().to_string(), "60.00");
}

#[test]
fn test_non_numeric_menu_input_reprompts() {
    let (_, out) = session(&["hola", "5"]);
    assert!(out.contains("Seleccione una opción: Ingrese un número válido: Gracias por usar el sistema.\n"));
}

#[test]
fn test_unknown_submenu_option() {
    let (_, out) = session(&["2", "9", "4", "5"]);
    assert!(out.contains("Seleccione: Opción no válida.\n\n--- Gestión de Pájaros ---\n"));
}

#[test]
fn test_blank_modify_leaves_customer_unchanged() {
    let (store, out) = session(&["1", "3", "12345678A", " ", "", "\t", "6", "5"]);

    assert!(out.contains("Cliente actualizado.\n"));
    assert_eq!(
        store.customers().find_by_dni("12345678a").unwrap().to_string(),
        ANA
    );
}

#[test]
fn test_input_exhausted_mid_session() {
    let mut out = Vec::new();
    let result = run_session(&AppConfig::default(), Cursor::new("1\n5\n"), &mut out);

    let err = result.unwrap_err();
    assert!(matches!(err, ConsoleError::InputExhausted));
    assert_eq!(err.exit_code(), 1);
    assert!(String::from_utf8(out).unwrap().contains(LUIS));
}

#[test]
fn test_run_session_exits_cleanly() {
    let mut out = Vec::new();
    run_session(&AppConfig::default(), Cursor::new("5\n"), &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().ends_with("Gracias por usar el sistema.\n"));
}

#[test]
fn test_unseeded_session() {
    let mut out = Vec::new();
    run_session(&AppConfig::unseeded(), Cursor::new("1\n5\n6\n3\n5\n"), &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Seleccione: No hay clientes registrados.\n"));
    assert!(out.contains("No hay clientes registrados. Registre uno primero.\n"));
}

#[test]
fn test_total_rounds_half_up() {
    let (store, out) = session(&[
        "2", "1", "Loro", "Gris", "0.125", "1", "4", "3", "12345678A", "4", "0", "4", "1", "3", "4", "5",
    ]);

    assert!(out.contains("Venta registrada. Total: $0.13\n"));
    assert!(out.contains("total=0.13}\n"));
    assert!(out.contains(" | Total: $0.13\n"));
    assert_eq!(store.sales().list()[0].total().value(), 0.125);
}

#[test]
fn test_quantity_wider_than_int_is_reprompted() {
    let (store, out) = session(&["2", "1", "Loro", "Gris", "10", "5000000000", "4", "4", "5"]);

    assert!(out.contains("Cantidad: Ingrese un número válido: Pájaro agregado al catálogo.\n"));
    assert_eq!(store.catalog().len(), 4);
}
