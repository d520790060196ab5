//! The page's four operations, independent of the DOM.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::api::CatalogApi;
use crate::error::ApiError;
use crate::product::ProductForm;
use crate::view::{HealthState, ProductList};

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// The two display regions and the product form.
pub trait CatalogView {
    fn show_health(&self, state: HealthState);
    fn show_products(&self, list: ProductList);
    fn read_form(&self) -> ProductForm;
    fn reset_form(&self);
}

/// Blocking user prompts.
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

impl<T: Dialogs + ?Sized> Dialogs for Rc<T> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    /// The backend accepted the change and the list was reloaded.
    Applied,
    /// The backend or the network failed; the user was alerted.
    Failed,
}

pub struct Catalog<A, V, D> {
    api: A,
    view: V,
    dialogs: D,
}

impl<A, V, D> Catalog<A, V, D>
where
    A: CatalogApi,
    V: CatalogView,
    D: Dialogs,
{
    pub fn new(api: A, view: V, dialogs: D) -> Self {
        Self { api, view, dialogs }
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// Page-load sequence: health and products are fetched concurrently.
    pub async fn start(&self) {
        futures::join!(self.check_health(), self.load_products());
    }

    pub async fn check_health(&self) -> HealthState {
        let state = match self.api.health().await {
            Ok(report) if report.is_healthy() => {
                info!(database = ?report.database, "backend healthy");
                HealthState::Healthy
            }
            Ok(report) => {
                warn!(status = ?report.status, database = ?report.database, "backend not healthy");
                HealthState::Degraded
            }
            Err(err) => {
                warn!(error = %err, "health check failed");
                HealthState::Unreachable
            }
        };
        self.view.show_health(state);
        state
    }

    /// Replaces the list container with a fresh copy of the backend's products.
    ///
    /// Overlapping loads are not sequenced; whichever resolves last is shown.
    pub async fn load_products(&self) {
        self.view.show_products(ProductList::Loading);
        let list = match self.api.list_products().await {
            Ok(products) => ProductList::from_products(&products),
            Err(err) => {
                warn!(error = %err, "failed to load products");
                ProductList::Failed
            }
        };
        self.view.show_products(list);
    }

    pub async fn delete_product(&self, id: i64) -> MutationOutcome {
        if !self.dialogs.confirm(CONFIRM_DELETE) {
            debug!(product_id = id, "delete cancelled");
            return MutationOutcome::Cancelled;
        }
        match self.api.delete_product(id).await {
            Ok(()) => {
                info!(product_id = id, "product deleted");
                self.load_products().await;
                MutationOutcome::Applied
            }
            Err(err) => {
                warn!(product_id = id, error = %err, "delete failed");
                self.dialogs
                    .alert(&failure_message("Failed to delete product", "Error deleting product", &err));
                MutationOutcome::Failed
            }
        }
    }

    /// Sends the form as a new product. The form is only cleared on success.
    pub async fn submit_product(&self) -> MutationOutcome {
        let product = self.view.read_form().to_new_product();
        match self.api.create_product(&product).await {
            Ok(()) => {
                info!(name = %product.name, "product created");
                self.view.reset_form();
                self.load_products().await;
                MutationOutcome::Applied
            }
            Err(err) => {
                warn!(name = %product.name, error = %err, "create failed");
                self.dialogs
                    .alert(&failure_message("Failed to add product", "Error", &err));
                MutationOutcome::Failed
            }
        }
    }
}

/// Alert text: rejections show the backend's detail, everything else the error itself.
fn failure_message(rejected: &str, errored: &str, err: &ApiError) -> String {
    match err {
        ApiError::Rejected { detail, .. } => {
            format!("{rejected}: {}", detail.as_deref().unwrap_or(UNKNOWN_ERROR))
        }
        other => format!("{errored}: {other}"),
    }
}
