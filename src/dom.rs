use navbar_core::{Backdrop, Cancelable, ScrollTarget, Toggle};
use navbar_core::{DISPLAY_HIDDEN, DISPLAY_SHOWN};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn add_click_listener(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    if let Err(e) =
        target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        log::error!("add click listener: {:?}", e);
    }
    closure.forget();
}

/// Run `init` now if the document is parsed, otherwise on `DOMContentLoaded`.
/// Errors from a deferred run are logged.
pub fn on_dom_ready(
    document: &web::Document,
    init: impl FnOnce(&web::Document) -> anyhow::Result<()> + 'static,
) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return init(document);
    }
    let doc = document.clone();
    let closure = Closure::once(move || {
        if let Err(e) = init(&doc) {
            log::error!("deferred init failed: {:#}", e);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

/// An element toggled through its inline `display` property.
///
/// `shown == None` removes the inline value so the stylesheet decides.
#[derive(Clone, Debug)]
pub struct InlineDisplay {
    el: web::HtmlElement,
    shown: Option<&'static str>,
}

impl InlineDisplay {
    /// Shown as `display: block`.
    pub fn block(el: web::HtmlElement) -> Self {
        Self {
            el,
            shown: Some(DISPLAY_SHOWN),
        }
    }

    /// Shown by whatever the stylesheet says.
    pub fn styled(el: web::HtmlElement) -> Self {
        Self { el, shown: None }
    }
}

impl Toggle for InlineDisplay {
    fn show(&self) {
        let style = self.el.style();
        _ = match self.shown {
            Some(value) => style.set_property("display", value),
            None => style.remove_property("display").map(|_| ()),
        };
    }

    fn hide(&self) {
        _ = self.el.style().set_property("display", DISPLAY_HIDDEN);
    }
}

/// Inline background colour of `<body>`.
pub struct BodyBackdrop(pub web::HtmlElement);

impl Backdrop for BodyBackdrop {
    fn set_color(&self, color: &str) {
        _ = self.0.style().set_property("background-color", color);
    }

    fn clear_color(&self) {
        _ = self.0.style().remove_property("background-color");
    }
}

/// Element scrolled to with `behavior: smooth`.
pub struct SmoothScroll {
    el: web::Element,
    options: web::ScrollIntoViewOptions,
}

impl SmoothScroll {
    pub fn new(el: web::Element) -> Self {
        let options = web::ScrollIntoViewOptions::new();
        options.set_behavior(web::ScrollBehavior::Smooth);
        Self { el, options }
    }
}

impl ScrollTarget for SmoothScroll {
    fn scroll_into_view(&self) {
        self.el
            .scroll_into_view_with_scroll_into_view_options(&self.options);
    }
}

impl Cancelable for web::Event {
    fn prevent_default(&self) {
        web::Event::prevent_default(self);
    }
}
