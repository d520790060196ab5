use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api::CatalogApi;
use crate::catalog::{Catalog, CatalogView, Dialogs};
use crate::product::ProductForm;
use crate::view::{HealthState, ProductCard, ProductList};

/// Attribute on each card's delete button holding the product id.
pub const PRODUCT_ID_ATTR: &str = "data-product-id";

/// Signals and node refs behind the page's display regions.
#[derive(Clone, Copy)]
pub struct PageView {
    set_health: WriteSignal<HealthState>,
    set_products: WriteSignal<ProductList>,
    form: NodeRef<html::Form>,
    name: NodeRef<html::Input>,
    description: NodeRef<html::Input>,
    price: NodeRef<html::Input>,
}

impl CatalogView for PageView {
    fn show_health(&self, state: HealthState) {
        self.set_health.set(state);
    }

    fn show_products(&self, list: ProductList) {
        self.set_products.set(list);
    }

    fn read_form(&self) -> ProductForm {
        let value = |input: NodeRef<html::Input>| input.get().map(|el| el.value()).unwrap_or_default();
        ProductForm {
            name: value(self.name),
            description: value(self.description),
            price: value(self.price),
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self.form.get() {
            form.reset();
        }
    }
}

/// `window.confirm` / `window.alert`.
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }

    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message)
    }
}

type PageCatalog = Catalog<Rc<dyn CatalogApi>, PageView, Rc<dyn Dialogs>>;

#[component]
pub fn App(cx: Scope, api: Rc<dyn CatalogApi>, dialogs: Rc<dyn Dialogs>) -> impl IntoView {
    let (health, set_health) = create_signal(cx, HealthState::default());
    let (products, set_products) = create_signal(cx, ProductList::default());
    let form = create_node_ref::<html::Form>(cx);
    let name = create_node_ref::<html::Input>(cx);
    let description = create_node_ref::<html::Input>(cx);
    let price = create_node_ref::<html::Input>(cx);

    let page = PageView {
        set_health,
        set_products,
        form,
        name,
        description,
        price,
    };
    let catalog: Rc<PageCatalog> = Rc::new(Catalog::new(api, page, dialogs));

    // initial load
    {
        let catalog = catalog.clone();
        spawn_local(async move { catalog.start().await });
    }

    let on_submit = {
        let catalog = catalog.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let catalog = catalog.clone();
            spawn_local(async move {
                catalog.submit_product().await;
            });
        }
    };

    // one listener for every card's delete button
    let on_list_click = move |ev: ev::MouseEvent| {
        let Some(id) = delete_target(&ev) else {
            return;
        };
        let catalog = catalog.clone();
        spawn_local(async move {
            catalog.delete_product(id).await;
        });
    };

    view! { cx,
        <div class="container">
            <h1>"Product Catalog"</h1>
            <div id="health-status" class=move || health.get().class()>
                {move || health.get().message()}
            </div>

            <section class="add-product">
                <h2>"Add New Product"</h2>
                <form id="product-form" node_ref=form on:submit=on_submit>
                    <label for="name">"Name"</label>
                    <input type="text" id="name" node_ref=name placeholder="Product name"/>
                    <label for="description">"Description"</label>
                    <input type="text" id="description" node_ref=description placeholder="Description"/>
                    <label for="price">"Price"</label>
                    <input type="text" id="price" inputmode="decimal" node_ref=price placeholder="0.00"/>
                    <button type="submit">"Add Product"</button>
                </form>
            </section>

            <section class="products">
                <h2>"Products"</h2>
                <div id="products-list" on:click=on_list_click>
                    {move || products.with(|list| render_list(cx, list))}
                </div>
            </section>
        </div>
    }
}

fn render_list(cx: Scope, list: &ProductList) -> View {
    let placeholder = list.placeholder().unwrap_or_default();
    match list {
        ProductList::Loaded(cards) => cards
            .iter()
            .cloned()
            .map(|card| view! { cx, <ProductCardItem card=card/> }.into_view(cx))
            .collect::<Vec<_>>()
            .into_view(cx),
        ProductList::Loading => view! { cx, <div class="loading">{placeholder}</div> }.into_view(cx),
        ProductList::Failed => view! { cx, <div class="error">{placeholder}</div> }.into_view(cx),
        ProductList::Empty => view! { cx, <p>{placeholder}</p> }.into_view(cx),
    }
}

#[component]
fn ProductCardItem(cx: Scope, card: ProductCard) -> impl IntoView {
    view! { cx,
        <div class="product-card">
            <button class="delete-btn" data-product-id=card.id.to_string()>"Delete"</button>
            <h3>{card.name}</h3>
            <p>{card.description}</p>
            <p class="price">{card.price}</p>
            <p class="added">{card.added}</p>
        </div>
    }
}

/// Product id of the delete button a click landed on, if any.
fn delete_target(ev: &ev::MouseEvent) -> Option<i64> {
    let target: web_sys::Element = ev.target()?.dyn_into().ok()?;
    let button = target.closest(&format!("[{PRODUCT_ID_ATTR}]")).ok()??;
    parse_product_id(button.get_attribute(PRODUCT_ID_ATTR).as_deref())
}

pub fn parse_product_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_attribute_parsing() {
        assert_eq!(parse_product_id(Some("42")), Some(42));
        assert_eq!(parse_product_id(Some(" 7 ")), Some(7));
        assert_eq!(parse_product_id(Some("abc")), None);
        assert_eq!(parse_product_id(Some("")), None);
        assert_eq!(parse_product_id(None), None);
    }
}
