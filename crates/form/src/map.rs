//! Office location shown on the contact section map.

/// Viewports narrower than this get a map without scroll zoom.
const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub title: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hint: &'static str,
}

impl Location {
    pub const fn office() -> Self {
        Self {
            latitude: 47.217212,
            longitude: 39.719118,
            zoom: 16,
            title: "Home Service Rostov",
            address: "г. Ростов-на-Дону, ул. Баумана, 64, офис 404",
            phone: "+7 987 923-02-59",
            email: "elitstroyservice123@bk.ru",
            hint: "Home Service Rostov - Кадровое агентство",
        }
    }

    /// `tel:` link for the office phone.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| *c == '+' || c.is_ascii_digit())
            .collect();

        format!("tel:{digits}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapOptions {
    pub controls: &'static [&'static str],
    pub scroll_zoom: bool,
}

impl MapOptions {
    pub fn for_viewport(width: u32) -> Self {
        Self {
            controls: &["zoomControl", "fullscreenControl"],
            scroll_zoom: width >= MOBILE_BREAKPOINT,
        }
    }
}

/// Map widget able to display a placemark.
pub trait MapWidget: Send + Sync {
    fn show(&self, location: &Location, options: &MapOptions);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopMap;

impl MapWidget for NoopMap {
    fn show(&self, _location: &Location, _options: &MapOptions) {}
}

pub fn init_map(widget: &dyn MapWidget, viewport_width: u32) {
    widget.show(&Location::office(), &MapOptions::for_viewport(viewport_width));
}
