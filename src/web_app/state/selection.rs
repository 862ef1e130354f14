// web_app/state/selection.rs - Product detail modal selection

use crate::web_app::model::{Product, ProductId};

/// Selected product and modal visibility
///
/// The modal body renders only through `visible_product`, so an open
/// selection without a product shows nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    product: Option<Product>,
    open: bool,
}

impl Selection {
    /// Select `id` from the base collection and open the modal
    ///
    /// Returns false (and leaves the selection alone) when the
    /// identifier is not in the collection.
    pub fn select(&mut self, id: ProductId, base: &[Product]) -> bool {
        match base.iter().find(|p| p.id == id) {
            Some(product) => {
                self.product = Some(product.clone());
                self.open = true;
                true
            }
            None => false,
        }
    }

    /// Hide the modal and drop the product together
    pub fn close(&mut self) {
        self.open = false;
        self.product = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected_id(&self) -> Option<ProductId> {
        self.product.as_ref().map(|p| p.id)
    }

    /// Product to render, if the modal is open and holds one
    pub fn visible_product(&self) -> Option<&Product> {
        if self.open {
            self.product.as_ref()
        } else {
            None
        }
    }
}
