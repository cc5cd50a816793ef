// Selectors and visual values shared with the page markup and stylesheet.

// Desktop chrome
pub const LOGO_SELECTOR: &str = ".logo";
pub const HEADER_SELECTOR: &str = ".header_wrapper";
pub const CONTENT_SELECTOR: &str = ".display_content";
pub const FOOTER_SELECTOR: &str = ".footer";

// Mobile menu
pub const MENU_BUTTON_SELECTOR: &str = ".mobile_menu_button";
pub const MOBILE_MENU_SELECTOR: &str = ".mobile_menu";

// Any highlight indicator, bound to a section or not
pub const HIGHLIGHT_SELECTOR: &str = ".highlight";

// Contact scroll
pub const CONTACT_BUTTON_SELECTOR: &str = ".contact_button";
pub const CONTACT_TARGET_SELECTOR: &str = "#contacts_form";

// Page background while the mobile menu is open
pub const MENU_BACKGROUND: &str = "#1d1b4c";

// `display` values written inline
pub const DISPLAY_SHOWN: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";
