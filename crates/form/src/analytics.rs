/// Page analytics sink, e.g. a wrapper around the site's tag manager.
pub trait Analytics: Send + Sync {
    fn track(&self, category: &str, action: &str, label: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAnalytics;

impl Analytics for NoopAnalytics {
    fn track(&self, _category: &str, _action: &str, _label: &str) {}
}

/// Records clicks on `tel:` and `mailto:` links. Returns whether `href` was
/// one of them.
pub fn track_link(analytics: &dyn Analytics, href: &str) -> bool {
    let action = if href.starts_with("tel:") {
        "Phone Click"
    } else if href.starts_with("mailto:") {
        "Email Click"
    } else {
        return false;
    };

    analytics.track("Contact", action, href);

    true
}
