#![forbid(unsafe_code)]

use crate::AppError;
use ld_core::catalog;
use ld_core::gate::{self, ConfirmationGate, Confirmer, Decision};
use ld_core::ids::ItemId;
use ld_core::model::{CartLine, Product};
use ld_core::view::{PageView, Selector, SortKey, ViewState};
use ld_storage::{KvStore, ListStore};

pub const CART_KEY: &str = "cart";
pub const EMPTY_CART: &str = "Your cart is empty!";
pub const CHECKOUT_OK: &str = "Checkout successful! (This is a demo)";

#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub id: ItemId,
    pub name: &'static str,
    pub category: &'static str,
    pub price: u32,
    pub rating: f32,
    pub stars: String,
    pub image: &'static str,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            price: product.price,
            rating: product.rating,
            stars: catalog::stars(product.rating),
            image: product.image,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartRow {
    pub line_id: ItemId,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub total: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Checkout {
    Empty,
    Completed { lines: usize, total: u64 },
}

impl Checkout {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => EMPTY_CART,
            Self::Completed { .. } => CHECKOUT_OK,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShopFrame {
    pub page: PageView<ProductCard>,
    pub cart_count: usize,
    pub notices: Vec<String>,
}

/// Product catalog page plus the persisted cart.
pub struct Shop {
    products: &'static [Product],
    cart: ListStore<CartLine>,
    view: ViewState,
    gate: ConfirmationGate<ItemId>,
    frame: ShopFrame,
    renders: u64,
}

impl Shop {
    pub fn open(backend: Box<dyn KvStore>, page_size: usize) -> Self {
        Self::with_products(catalog::products(), backend, page_size)
    }

    pub fn with_products(
        products: &'static [Product],
        backend: Box<dyn KvStore>,
        page_size: usize,
    ) -> Self {
        let mut view = ViewState::new(page_size);
        let page = view.render(products).map(ProductCard::from);
        let mut shop = Self {
            products,
            cart: ListStore::load(backend, CART_KEY),
            view,
            gate: ConfirmationGate::new(),
            frame: ShopFrame {
                page,
                cart_count: 0,
                notices: Vec::new(),
            },
            renders: 0,
        };
        shop.render();
        shop
    }

    pub fn frame(&self) -> &ShopFrame {
        &self.frame
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.items()
    }

    /// Badge count: distinct lines, not units.
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.set_search(search);
        self.render();
    }

    pub fn set_category(&mut self, selector: Selector) {
        self.view.set_selector(selector);
        self.render();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.view.set_sort(sort);
        self.render();
    }

    pub fn go_to(&mut self, page: usize) -> usize {
        let page = self.view.go_to(self.products, page);
        self.render();
        page
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.view.next_page(self.products);
        if moved {
            self.render();
        }
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.view.prev_page();
        if moved {
            self.render();
        }
        moved
    }

    /// Adds one unit; an existing line for the product has its quantity bumped.
    pub fn add_to_cart(&mut self, product_id: ItemId) -> Result<String, AppError> {
        let product =
            catalog::find(self.products, product_id).ok_or(AppError::UnknownProduct(product_id))?;
        let existing = self
            .cart
            .items()
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.id);
        match existing {
            Some(line_id) => {
                self.cart
                    .update(line_id, |line| line.quantity = line.quantity.saturating_add(1));
            }
            None => {
                self.cart
                    .push(CartLine::for_product(ItemId::default(), product));
            }
        }
        self.render();
        Ok(format!("{} added to cart!", product.name))
    }

    pub fn cart_view(&self) -> CartView {
        let rows = self
            .cart
            .items()
            .iter()
            .map(|line| CartRow {
                line_id: line.id,
                label: format!("{} (x{}) - ₹{}", line.name, line.quantity, line.subtotal()),
            })
            .collect();
        CartView {
            rows,
            total: format!("{:.2}", self.total() as f64),
        }
    }

    pub fn total(&self) -> u64 {
        self.cart.items().iter().map(CartLine::subtotal).sum()
    }

    pub fn pending_confirmation(&self) -> Option<&str> {
        self.gate.pending_message()
    }

    pub fn request_remove_line(&mut self, line_id: ItemId) -> Result<bool, AppError> {
        if !self.cart.contains(line_id) {
            return Ok(false);
        }
        self.gate.request(gate::REMOVE_CART_LINE, line_id)?;
        Ok(true)
    }

    pub fn answer(&mut self, decision: Decision) -> Result<bool, AppError> {
        let Some(line_id) = self.gate.resolve(decision)? else {
            return Ok(false);
        };
        let removed = self.cart.remove(line_id).is_some();
        if removed {
            self.render();
        }
        Ok(removed)
    }

    pub fn remove_line(
        &mut self,
        line_id: ItemId,
        confirmer: &mut dyn Confirmer,
    ) -> Result<bool, AppError> {
        if !self.request_remove_line(line_id)? {
            return Ok(false);
        }
        let decision = self.gate.consult(confirmer)?;
        self.answer(decision)
    }

    /// Empties the cart. Nothing is charged anywhere.
    pub fn checkout(&mut self) -> Checkout {
        if self.cart.is_empty() {
            return Checkout::Empty;
        }
        let total = self.total();
        let lines = self.cart.clear();
        tracing::info!(lines, total, "checkout completed");
        self.render();
        Checkout::Completed { lines, total }
    }

    fn render(&mut self) {
        let page = self.view.render(self.products).map(ProductCard::from);
        self.frame = ShopFrame {
            page,
            cart_count: self.cart.len(),
            notices: self
                .cart
                .take_notices()
                .into_iter()
                .map(|n| n.message)
                .collect(),
        };
        self.renders += 1;
    }
}
