#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use portal_web::app::App;
use portal_core::{CookieExpiry, CookieJar};
use portal_web::cookies::BrowserCookieJar;
use portal_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
}

async fn settle() {
    dom::sleep_ms(20).await.expect("timer");
}

fn query(selector: &str) -> Option<web_sys::Element> {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
}

fn click(selector: &str) {
    query(selector)
        .unwrap_or_else(|| panic!("{selector} exists"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

#[wasm_bindgen_test]
fn skip_link_points_to_main_landmark() {
    render_app();
    let skip = query("a[href='#main']").expect("skip link exists");
    let main = dom::document()
        .expect("document")
        .get_element_by_id("main")
        .expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(main.get_attribute("role").unwrap_or_default(), "main");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
    assert!(query("#portal-status").is_some(), "live region present");
}

#[wasm_bindgen_test]
async fn info_links_navigate_without_reload() {
    render_app();
    settle().await;
    click("header a[href='/about']");
    settle().await;
    assert!(query("[data-testid='info-about']").is_some());
    let path = dom::window().expect("window").location().pathname().expect("path");
    assert_eq!(path, "/about");
}

#[wasm_bindgen_test]
async fn signed_out_visitors_see_sign_in_link() {
    render_app();
    settle().await;
    assert!(query("#logout-btn").is_none());
    assert!(query("header a[href='/login']").is_some());
}

#[wasm_bindgen_test]
fn removed_cookies_are_gone_from_the_document() {
    let mut jar = BrowserCookieJar::default();
    jar.set("portal_removal_check", "1", CookieExpiry::BrowserSession)
        .expect("cookie write");
    assert_eq!(jar.get("portal_removal_check").as_deref(), Some("1"));
    jar.remove("portal_removal_check");
    assert!(jar.get("portal_removal_check").is_none());
}
