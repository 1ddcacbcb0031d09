//! Smooth-scroll requests and scroll offset reads.
//!
//! The browser performs the actual scrolling; these helpers only ask for it.
//! A missing target element is a silent no-op. Requires a browser environment;
//! on the server every call does nothing.

use crate::content::SectionId;

/// Ask the browser to smooth-scroll `section` into view.
pub fn scroll_to_section(section: SectionId) {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.anchor()))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
    }
}

/// Ask the browser to smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Current vertical scroll offset in CSS pixels, `0.0` off-browser.
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
