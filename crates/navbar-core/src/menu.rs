//! Desktop header / mobile menu visibility.

use crate::constants::MENU_BACKGROUND;
use crate::highlight::Toggle;

/// Page-level colour behind the menu overlay.
pub trait Backdrop {
    fn set_color(&self, color: &str);
    fn clear_color(&self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuVisibility {
    #[default]
    Desktop,
    Mobile,
}

/// Elements swapped out when the mobile menu opens.
#[derive(Debug)]
pub struct MenuElements<E> {
    pub menu_button: E,
    pub logo: E,
    pub header: E,
    pub content: E,
    pub footer: E,
    pub mobile_menu: E,
}

impl<E> MenuElements<E> {
    fn desktop(&self) -> [&E; 5] {
        [
            &self.menu_button,
            &self.logo,
            &self.header,
            &self.content,
            &self.footer,
        ]
    }
}

#[derive(Debug)]
pub struct MobileMenu<E, B> {
    elements: MenuElements<E>,
    backdrop: B,
    visibility: MenuVisibility,
}

impl<E: Toggle, B: Backdrop> MobileMenu<E, B> {
    /// Starts in [`MenuVisibility::Desktop`]; the DOM is left as authored.
    pub fn new(elements: MenuElements<E>, backdrop: B) -> Self {
        Self {
            elements,
            backdrop,
            visibility: MenuVisibility::Desktop,
        }
    }

    #[inline]
    pub fn visibility(&self) -> MenuVisibility {
        self.visibility
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.visibility == MenuVisibility::Mobile
    }

    /// Swap the desktop chrome for the mobile overlay. Returns `false` if the
    /// menu was already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        for el in self.elements.desktop() {
            el.hide();
        }
        self.backdrop.set_color(MENU_BACKGROUND);
        self.elements.mobile_menu.show();
        self.visibility = MenuVisibility::Mobile;
        true
    }

    /// Inverse of [`open`](Self::open). Returns `false` if already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.elements.mobile_menu.hide();
        self.backdrop.clear_color();
        for el in self.elements.desktop() {
            el.show();
        }
        self.visibility = MenuVisibility::Desktop;
        true
    }
}
