//! Integration tests for the bundled catalog fixtures.

use testresult::TestResult;

use tally::prelude::*;

#[test]
fn store_fixture_loads_in_order() -> TestResult {
    let catalog = Fixture::new().load_catalog("store")?;

    let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(
        names,
        ["Laptop", "Mouse", "Keyboard", "Monitor", "Headphone"]
    );
    assert_eq!(catalog.currency(), RUPIAH);
    assert_eq!(catalog.currency().iso_alpha_code, "IDR");

    Ok(())
}

#[test]
fn catalog_fixture_groups_by_category() -> TestResult {
    let catalog = Fixture::new().load_catalog("catalog")?;

    assert_eq!(catalog.len(), 6);
    assert_eq!(
        catalog.categories().as_slice(),
        [
            "Smartphone",
            "Laptop",
            "Audio",
            "Tablet",
            "Wearable",
            "Accessories"
        ]
    );

    let accessories: Vec<&str> = catalog
        .in_category("Accessories")
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(accessories, ["Magic Keyboard"]);

    Ok(())
}

#[test]
fn session_against_store_fixture() -> TestResult {
    let catalog = Fixture::new().load_catalog("store")?;
    let mut session = Session::new(&catalog);

    let commands: Vec<CartCommand> = ["add:2", "add:3", "add:2", "dec:3", "add:9"]
        .iter()
        .map(|raw| raw.parse())
        .collect::<Result<_, _>>()?;

    let rejected = session.run(&commands);

    assert_eq!(rejected, 1);
    assert_eq!(session.cart().item_count(), 2);

    let receipt = session.checkout()?;

    assert_eq!(receipt.total(), 500_000);
    assert_eq!(receipt.lines().len(), 1);

    let mut out = Vec::new();
    receipt.write_to(&mut out)?;

    let output = String::from_utf8(out)?;
    assert!(output.contains("Mouse"));
    assert!(output.contains("Items: 2"));

    Ok(())
}

#[test]
fn store_fixture_prices_are_whole_rupiah() -> TestResult {
    let catalog = Fixture::new().load_catalog("store")?;

    let prices: Vec<u64> = catalog.iter().map(|p| *p.unit_price).collect();

    assert_eq!(prices, [15_000_000, 250_000, 500_000, 3_000_000, 750_000]);

    Ok(())
}

#[test]
fn store_fixture_mouse_keyboard_mouse_totals_one_million() -> TestResult {
    let catalog = Fixture::new().load_catalog("store")?;
    let mouse = ProductId::from("2");
    let keyboard = ProductId::from("3");
    let mut cart = Cart::new();

    cart.add_item(&mouse, &catalog)?
        .add_item(&keyboard, &catalog)?
        .add_item(&mouse, &catalog)?;

    assert_eq!(cart.line_total(&mouse, &catalog)?, 500_000);
    assert_eq!(cart.line_total(&keyboard, &catalog)?, 500_000);
    assert_eq!(cart.cart_total(&catalog)?, 1_000_000);
    assert_eq!(cart.item_count(), 3);

    let mut out = Vec::new();
    cart.receipt(&catalog)?.write_to(&mut out)?;

    let output = String::from_utf8(out)?;
    assert!(output.contains("Rp"));
    assert!(output.contains("1,000,000"));

    Ok(())
}
