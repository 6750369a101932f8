#![forbid(unsafe_code)]

mod support;

use ld_app::{AppError, CART_KEY, CHECKOUT_OK, Checkout, EMPTY_CART, Shop};
use ld_core::gate::FixedAnswer;
use ld_core::ids::ItemId;
use ld_core::view::{Selector, SortKey};
use ld_storage::MemoryKv;
use support::*;

fn names(shop: &Shop) -> Vec<&'static str> {
    shop.frame().page.items.iter().map(|card| card.name).collect()
}

#[test]
fn catalog_pages_hold_six_cards() {
    let kv = MemoryKv::new();
    let mut shop = Shop::open(boxed(&kv), 6);
    let page = &shop.frame().page;
    assert_eq!(page.items.len(), 6);
    assert_eq!(page.label(), "Page 1 of 2");
    assert!(!page.has_prev());
    assert!(page.has_next());

    assert!(shop.next_page());
    assert_eq!(shop.frame().page.page, 2);
    assert_eq!(names(&shop)[0], "Headphones");
    assert!(!shop.next_page());
    assert_eq!(shop.go_to(9), 2);
    assert!(shop.prev_page());
    assert!(!shop.prev_page());
}

#[test]
fn filters_reset_to_the_first_page() {
    let kv = MemoryKv::new();
    let mut shop = Shop::open(boxed(&kv), 6);
    shop.go_to(2);

    shop.set_category(Selector::parse("electronics"));
    let page = &shop.frame().page;
    assert_eq!(page.page, 1);
    assert_eq!(page.total_items, 5);
    assert_eq!(page.total_pages, 1);

    shop.set_category(Selector::All);
    shop.go_to(2);
    shop.set_search("o");
    assert_eq!(shop.frame().page.page, 1);

    shop.go_to(2);
    shop.set_sort(SortKey::PriceAsc);
    assert_eq!(shop.frame().page.page, 1);
}

#[test]
fn an_empty_search_result_still_has_one_page() {
    let kv = MemoryKv::new();
    let mut shop = Shop::open(boxed(&kv), 6);
    shop.set_search("zzz");
    let page = &shop.frame().page;
    assert!(page.items.is_empty());
    assert_eq!(page.label(), "Page 1 of 1");
}

#[test]
fn sorting_orders_the_whole_catalog() {
    let kv = MemoryKv::new();
    let mut shop = Shop::open(boxed(&kv), 6);

    shop.set_sort(SortKey::PriceAsc);
    assert_eq!(names(&shop)[..3], ["Cookbook", "Book: JavaScript Guide", "Lamp"]);

    shop.set_sort(SortKey::PriceDesc);
    assert_eq!(names(&shop)[..2], ["Laptop", "Tablet"]);

    shop.set_sort(SortKey::RatingDesc);
    assert_eq!(names(&shop)[0], "Book: JavaScript Guide");

    shop.set_category(Selector::parse("books"));
    shop.set_sort(SortKey::Name);
    assert_eq!(names(&shop), ["Book: JavaScript Guide", "Cookbook"]);
}

#[test]
fn adding_twice_merges_into_one_line() {
    let kv = MemoryKv::new();
    let mut shop = Shop::open(boxed(&kv), 6);

    let message = shop.add_to_cart(ItemId::new(7)).expect("add");
    assert_eq!(message, "Headphones added to cart!");
    shop.add_to_cart(ItemId::new(7)).expect("add");
    shop.add_to_cart(ItemId::new(10)).expect("add");

    assert_eq!(shop.cart_count(), 2);
    assert_eq!(shop.frame().cart_count, 2);
    let view = shop.cart_view();
    let labels = view.rows.iter().map(|r| r.label.as_str()).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Headphones (x2) - ₹6000", "Cookbook (x1) - ₹20"]);
    assert_eq!(view.total, "6020.00");

    let stored = slot(&kv, CART_KEY).expect("cart persisted");
    assert_eq!(stored[0]["productId"], 7);
    assert_eq!(stored[0]["quantity"], 2);
}

#[test]
fn cards_on_later_pages_add_the_product_shown() {
    let kv = MemoryKv::new();
    let mut shop = Shop::open(boxed(&kv), 6);
    shop.set_sort(SortKey::PriceDesc);
    shop.next_page();

    let card = shop.frame().page.items[0].clone();
    shop.add_to_cart(card.id).expect("add");
    assert_eq!(shop.lines()[0].name, card.name);
}

#[test]
fn unknown_products_are_rejected() {
    let kv = MemoryKv::new();
    let mut shop = Shop::open(boxed(&kv), 6);
    let err = shop.add_to_cart(ItemId::new(404)).expect_err("unknown");
    assert!(matches!(err, AppError::UnknownProduct(_)));
    assert_eq!(shop.cart_count(), 0);
}

#[test]
fn removing_a_line_needs_confirmation() {
    let kv = MemoryKv::new();
    let mut shop = Shop::open(boxed(&kv), 6);
    shop.add_to_cart(ItemId::new(1)).expect("add");
    let line = shop.lines()[0].id;

    assert!(!shop.remove_line(line, &mut FixedAnswer(false)).expect("remove"));
    assert_eq!(shop.cart_count(), 1);
    assert!(shop.remove_line(line, &mut FixedAnswer(true)).expect("remove"));
    assert_eq!(shop.cart_count(), 0);
}

#[test]
fn checkout_clears_and_persists_the_cart() {
    let kv = MemoryKv::new();
    let mut shop = Shop::open(boxed(&kv), 6);
    let empty = shop.checkout();
    assert_eq!(empty, Checkout::Empty);
    assert_eq!(empty.message(), EMPTY_CART);

    shop.add_to_cart(ItemId::new(3)).expect("add");
    shop.add_to_cart(ItemId::new(3)).expect("add");
    let reopened = Shop::open(boxed(&kv), 6);
    assert_eq!(reopened.cart_count(), 1);

    let done = shop.checkout();
    assert_eq!(done, Checkout::Completed { lines: 1, total: 3000 });
    assert_eq!(done.message(), CHECKOUT_OK);
    assert_eq!(shop.cart_count(), 0);
    assert_eq!(shop.cart_view().total, "0.00");

    let reopened = Shop::open(boxed(&kv), 6);
    assert_eq!(reopened.cart_count(), 0);
}
