//! Navbar state derived from the page scroll position.

/// Scroll distance after which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// A section counts as active this far before its top reaches the viewport.
pub const SECTION_OFFSET: f64 = 100.0;

/// Height of the fixed navbar; anchor targets land just below it.
pub const NAVBAR_HEIGHT: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// Id of the section under `scroll_y`. Later sections win on overlap.
pub fn active_section<'a>(sections: &[Section<'a>], scroll_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.top - SECTION_OFFSET;
            scroll_y >= top && scroll_y < top + section.height
        })
        .map(|section| section.id)
}

/// Whether a nav link points at the active section.
pub fn is_active_link(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

/// Scroll position for an in-page anchor link, or `None` when `href` is not an
/// anchor or its target is missing.
pub fn anchor_scroll_target(href: &str, target_top: Option<f64>) -> Option<f64> {
    if !href.starts_with('#') {
        return None;
    }

    target_top.map(|top| top - NAVBAR_HEIGHT)
}
