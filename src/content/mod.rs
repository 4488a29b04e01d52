//! Static guide content and the searchable pool derived from it.

mod data;

pub use data::{
    ATTRACTIONS, GALLERY, HIGHLIGHTS, MAP_LOCATIONS, OFFERS, RESTAURANTS, TIMELINE, TOURIST_INFO,
};

pub const SECTION_DISCOVER: &str = "Sehen & Entdecken";
pub const SECTION_PLAN: &str = "Planen & Buchen";
pub const SECTION_HISTORY: &str = "Stadtgeschichte";

pub const HISTORY_ANCHOR: &str = "#geschichte";

/// Map view center and zoom used for the overview link.
pub const MAP_CENTER: (f64, f64) = (52.14, 12.55);
pub const MAP_ZOOM: u8 = 13;

#[derive(Debug)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
    pub image: &'static str,
}

/// A point of interest with a detail view.
#[derive(Debug)]
pub struct Attraction {
    pub id: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub chips: &'static [&'static str],
    pub image: &'static str,
    pub details: &'static str,
}

impl Attraction {
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug)]
pub struct Restaurant {
    pub name: &'static str,
    pub desc: &'static str,
    pub image: &'static str,
}

#[derive(Debug)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug)]
pub struct MapLocation {
    pub lat: f64,
    pub lng: f64,
    pub name: &'static str,
    pub desc: &'static str,
    pub href: &'static str,
}

#[derive(Debug)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub text: &'static str,
}

/// Lodging, camper and spa offers ("Planen & Buchen").
#[derive(Debug)]
pub struct Offer {
    pub title: &'static str,
    pub text: &'static str,
    pub items: &'static [PriceItem],
    pub href: &'static str,
}

#[derive(Debug)]
pub struct PriceItem {
    pub name: &'static str,
    pub note: &'static str,
    /// Empty when the offer has no listed price.
    pub price: &'static str,
}

#[derive(Debug)]
pub struct TouristInfo {
    pub office: Office,
    pub hours: &'static [OpeningHours],
    pub station: StationOffice,
}

#[derive(Debug)]
pub struct Office {
    pub name: &'static str,
    pub street: &'static str,
    pub zip: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

#[derive(Debug)]
pub struct OpeningHours {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug)]
pub struct StationOffice {
    pub name: &'static str,
    pub street: &'static str,
    pub zip: &'static str,
    pub phone: &'static str,
    pub hours: &'static [&'static str],
    pub email: &'static str,
}

/// One entry of the searchable content pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub section: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub href: String,
}

impl ContentItem {
    /// The text a query is matched against.
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.title, self.text, self.section).to_lowercase()
    }
}

/// Flatten attractions, offers and the timeline into the search pool.
pub fn search_pool() -> Vec<ContentItem> {
    let attractions = ATTRACTIONS.iter().map(|a| ContentItem {
        section: SECTION_DISCOVER,
        title: a.title,
        text: a.text,
        href: a.anchor(),
    });
    let offers = OFFERS.iter().map(|o| ContentItem {
        section: SECTION_PLAN,
        title: o.title,
        text: o.text,
        href: o.href.to_string(),
    });
    let timeline = TIMELINE.iter().map(|t| ContentItem {
        section: SECTION_HISTORY,
        title: t.year,
        text: t.text,
        href: HISTORY_ANCHOR.to_string(),
    });
    attractions.chain(offers).chain(timeline).collect()
}

/// Look up an attraction by id, ignoring case and a leading `#`.
pub fn attraction(id: &str) -> Option<&'static Attraction> {
    let id = id.trim().trim_start_matches('#');
    ATTRACTIONS.iter().find(|a| a.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_keeps_section_order() {
        let pool = search_pool();
        assert_eq!(pool.len(), ATTRACTIONS.len() + OFFERS.len() + TIMELINE.len());
        assert_eq!(pool[0].section, SECTION_DISCOVER);
        assert_eq!(pool[0].href, "#altstadt");
        assert_eq!(pool[ATTRACTIONS.len()].section, SECTION_PLAN);
        let last = pool.last().unwrap();
        assert_eq!(last.section, SECTION_HISTORY);
        assert_eq!(last.title, "2010");
        assert_eq!(last.href, HISTORY_ANCHOR);
    }

    #[test]
    fn attraction_ids_are_unique_and_resolvable() {
        for a in ATTRACTIONS {
            assert_eq!(attraction(a.id).map(|found| found.title), Some(a.title));
        }
        assert_eq!(attraction("#NATURPARK").map(|a| a.id), Some("naturpark"));
        assert!(attraction("schwimmbad").is_none());
    }

    #[test]
    fn map_locations_are_near_the_town() {
        for loc in MAP_LOCATIONS {
            assert!((loc.lat - MAP_CENTER.0).abs() < 0.1, "{} latitude", loc.name);
            assert!((loc.lng - MAP_CENTER.1).abs() < 0.2, "{} longitude", loc.name);
            assert!(loc.href.starts_with('#'));
        }
    }
}
