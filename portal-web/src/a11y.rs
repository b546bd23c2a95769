// Accessibility helpers

/// CSS for visible focus indicators and screen reader utilities.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #1d4ed8;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the polite live region so screen readers hear navigation and toast messages.
pub fn announce(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id("portal-status"))
    {
        node.set_text_content(Some(msg));
    }
}

/// Move focus to the main landmark after a page change.
pub fn focus_main() {
    use wasm_bindgen::JsCast;

    if let Some(main) = crate::dom::document()
        .and_then(|doc| doc.get_element_by_id("main"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = main.focus();
    }
}
