//! Event wiring of the mounted page. Runs in a browser: `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use gloo::timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement};

use catalog_app::api::CatalogApi;
use catalog_app::catalog::Dialogs;
use catalog_app::error::Result;
use catalog_app::product::{HealthReport, NewProduct, Price, Product};
use catalog_app::App;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Health,
    List,
    Create(String),
    Delete(i64),
}

#[derive(Default)]
struct StubApi {
    calls: RefCell<Vec<Call>>,
}

impl StubApi {
    fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    fn deletes(&self) -> usize {
        self.calls.borrow().iter().filter(|c| matches!(c, Call::Delete(_))).count()
    }
}

#[async_trait(?Send)]
impl CatalogApi for StubApi {
    async fn health(&self) -> Result<HealthReport> {
        self.calls.borrow_mut().push(Call::Health);
        Ok(HealthReport {
            status: Some("healthy".into()),
            database: Some("connected".into()),
        })
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        self.calls.borrow_mut().push(Call::List);
        Ok(vec![Product {
            id: 7,
            name: "Lamp".into(),
            description: None,
            price: Some(Price::Number(9.0)),
            created_at: "2024-03-05T10:15:30".into(),
        }])
    }

    async fn create_product(&self, product: &NewProduct) -> Result<()> {
        self.calls.borrow_mut().push(Call::Create(product.name.clone()));
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        self.calls.borrow_mut().push(Call::Delete(id));
        Ok(())
    }
}

#[derive(Default)]
struct AcceptingDialogs {
    confirms: Cell<usize>,
    alerts: RefCell<Vec<String>>,
}

impl Dialogs for AcceptingDialogs {
    fn confirm(&self, _message: &str) -> bool {
        self.confirms.set(self.confirms.get() + 1);
        true
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Lets spawned tasks and the re-render they trigger run.
async fn settle() {
    TimeoutFuture::new(0).await;
    TimeoutFuture::new(0).await;
}

fn element<T: JsCast>(selector: &str) -> T {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<T>()
        .unwrap()
}

#[wasm_bindgen_test]
async fn page_dispatches_delete_and_submit() {
    let api = Rc::new(StubApi::default());
    let dialogs = Rc::new(AcceptingDialogs::default());
    {
        let api: Rc<dyn CatalogApi> = api.clone();
        let dialogs: Rc<dyn Dialogs> = dialogs.clone();
        mount_to_body(move |cx| view! { cx, <App api=api dialogs=dialogs/> });
    }
    settle().await;

    assert_eq!(api.count(&Call::Health), 1);
    assert_eq!(api.count(&Call::List), 1);
    assert_eq!(element::<HtmlElement>("#health-status").class_name(), "health-status healthy");
    assert_eq!(element::<HtmlElement>("#products-list .price").text_content().as_deref(), Some("$9.00"));

    // clicks that do not land on a delete button are ignored
    element::<HtmlElement>("#products-list .product-card h3").click();
    element::<HtmlElement>("#products-list").click();
    settle().await;
    assert_eq!(dialogs.confirms.get(), 0);
    assert_eq!(api.deletes(), 0);

    element::<HtmlElement>("#products-list .delete-btn").click();
    settle().await;
    assert_eq!(dialogs.confirms.get(), 1);
    assert_eq!(api.count(&Call::Delete(7)), 1);
    assert_eq!(api.count(&Call::List), 2);

    element::<HtmlInputElement>("#name").set_value("Chair");
    element::<HtmlInputElement>("#price").set_value("12.5");
    let mut init = EventInit::new();
    init.bubbles(true);
    init.cancelable(true);
    let submit = Event::new_with_event_init_dict("submit", &init).unwrap();
    let proceeded = element::<HtmlFormElement>("#product-form").dispatch_event(&submit).unwrap();
    assert!(!proceeded, "browser submission was not suppressed");
    settle().await;

    assert_eq!(api.count(&Call::Create("Chair".into())), 1);
    assert_eq!(api.count(&Call::List), 3);
    assert_eq!(element::<HtmlInputElement>("#name").value(), "");
    assert!(dialogs.alerts.borrow().is_empty());
}
