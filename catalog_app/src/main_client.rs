use std::rc::Rc;

use catalog_app::api::{CatalogApi, HttpCatalogApi};
use catalog_app::catalog::Dialogs;
use catalog_app::config::CatalogConfig;
use catalog_app::ui::BrowserDialogs;
use catalog_app::{logging, App};
use leptos::*;

fn main() {
    let config = CatalogConfig::default();
    logging::init(&config.log_filter);

    match HttpCatalogApi::from_config(&config) {
        Ok(api) => {
            let api: Rc<dyn CatalogApi> = Rc::new(api);
            let dialogs: Rc<dyn Dialogs> = Rc::new(BrowserDialogs);
            mount_to_body(move |cx| {
                view! { cx, <App api=api dialogs=dialogs/> }
            })
        }
        Err(err) => tracing::error!(error = %err, "cannot start catalog client"),
    }
}
