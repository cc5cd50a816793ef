//! Contact button: cancel the link and scroll to the contact form.

/// An element the viewport can be scrolled to.
pub trait ScrollTarget {
    fn scroll_into_view(&self);
}

/// A click whose default action can be suppressed.
pub trait Cancelable {
    fn prevent_default(&self);
}

#[derive(Debug)]
pub struct ContactScroll<T> {
    target: T,
}

impl<T: ScrollTarget> ContactScroll<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn on_click(&self, event: &impl Cancelable) {
        event.prevent_default();
        self.target.scroll_into_view();
    }
}
