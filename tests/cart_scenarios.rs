//! Integration tests for the cart ledger's documented scenarios.
//!
//! Catalog: Product A at 250000 minor units, Product B at 500000.
//!
//! 1. add A, add B, add A -> [A x2, B x1], total 1,000,000, 3 items
//! 2. remove A            -> [B x1], total 500,000
//! 3. dec B               -> empty, total 0

use testresult::TestResult;

use tally::prelude::*;

fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::with_products(
        [
            Product::new("A", "Product A", Price::new(250_000)),
            Product::new("B", "Product B", Price::new(500_000)),
        ],
        RUPIAH,
    )
}

fn lines(cart: &Cart) -> Vec<(String, u32)> {
    cart.lines()
        .iter()
        .map(|line| (line.product_id().to_string(), line.quantity().get()))
        .collect()
}

fn pairs(expected: &[(&str, u32)]) -> Vec<(String, u32)> {
    expected
        .iter()
        .map(|&(id, quantity)| (id.to_string(), quantity))
        .collect()
}

#[test]
fn add_remove_decrement_walkthrough() -> TestResult {
    let catalog = catalog()?;
    let a = ProductId::from("A");
    let b = ProductId::from("B");
    let mut cart = Cart::new();

    cart.add_item(&a, &catalog)?
        .add_item(&b, &catalog)?
        .add_item(&a, &catalog)?;

    assert_eq!(lines(&cart), pairs(&[("A", 2), ("B", 1)]));
    assert_eq!(cart.cart_total(&catalog)?, 1_000_000);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.len(), 2);

    cart.remove_item(&a);

    assert_eq!(lines(&cart), pairs(&[("B", 1)]));
    assert_eq!(cart.cart_total(&catalog)?, 500_000);

    cart.decrement_quantity(&b)?;

    assert!(cart.is_empty());
    assert_eq!(cart.cart_total(&catalog)?, 0);

    Ok(())
}

#[test]
fn cart_total_matches_line_sum_after_mixed_operations() -> TestResult {
    let catalog = catalog()?;
    let a = ProductId::from("A");
    let b = ProductId::from("B");
    let mut cart = Cart::new();

    let commands: Vec<CartCommand> = [
        "add:A", "add:B", "inc:B", "inc:B", "add:A:4", "dec:A", "dec:B", "remove:Z",
    ]
    .iter()
    .map(|raw| raw.parse())
    .collect::<Result<_, _>>()?;

    for command in &commands {
        command.apply(&mut cart, &catalog)?;

        let expected = cart
            .lines()
            .iter()
            .map(|line| cart.line_total(line.product_id(), &catalog))
            .sum::<Result<u64, CartError>>()?;

        assert_eq!(cart.cart_total(&catalog)?, expected);
    }

    assert_eq!(cart.quantity(&a).map(|q| q.get()), Some(4));
    assert_eq!(cart.quantity(&b).map(|q| q.get()), Some(2));
    assert_eq!(cart.item_count(), 6);
    assert_eq!(cart.cart_total(&catalog)?, 4 * 250_000 + 2 * 500_000);

    Ok(())
}

#[test]
fn errors_are_recoverable() -> TestResult {
    let catalog = catalog()?;
    let mut cart = Cart::new();

    cart.add_item(&ProductId::from("A"), &catalog)?;

    let unknown = cart.add_item(&ProductId::from("Z"), &catalog).map(|_| ());
    let missing = cart.increment_quantity(&ProductId::from("B")).map(|_| ());

    assert_eq!(unknown, Err(CartError::UnknownProduct(ProductId::from("Z"))));
    assert_eq!(missing, Err(CartError::ItemNotInCart(ProductId::from("B"))));
    assert_eq!(lines(&cart), pairs(&[("A", 1)]));

    Ok(())
}

#[test]
fn clear_and_checkout_reset_the_cart() -> TestResult {
    let catalog = catalog()?;
    let mut cart = Cart::new();

    cart.add_item(&ProductId::from("A"), &catalog)?
        .add_item(&ProductId::from("B"), &catalog)?;
    cart.clear();

    assert!(cart.is_empty());

    cart.add_item(&ProductId::from("B"), &catalog)?
        .add_item(&ProductId::from("B"), &catalog)?;

    let receipt = cart.checkout(&catalog)?;

    assert_eq!(receipt.total(), 1_000_000);
    assert_eq!(receipt.item_count(), 2);
    assert!(cart.is_empty());
    assert_eq!(cart.checkout(&catalog), Err(CartError::EmptyCart));

    Ok(())
}
