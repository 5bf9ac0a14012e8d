use crate::html::{Element, Node};

const MAP_SRC: &str =
    "https://maps.google.com/maps?q=100%20Congress%20Ave%2C%20Austin%2C%20TX%2078701&z=15&output=embed";
const MAP_TITLE: &str = "Community location map";
/// Brand tint applied over the stock map tiles.
const MAP_FILTER: &str = "grayscale(100%) sepia(20%) hue-rotate(170deg) saturate(120%)";

/// Static third-party map iframe for the community address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEmbed {
    src: &'static str,
    title: &'static str,
    filter: &'static str,
}

impl Default for MapEmbed {
    fn default() -> Self {
        Self {
            src: MAP_SRC,
            title: MAP_TITLE,
            filter: MAP_FILTER,
        }
    }
}

impl MapEmbed {
    #[must_use]
    pub fn node(&self) -> Node {
        Element::new("iframe")
            .class("map-frame")
            .attr("src", self.src)
            .attr("title", self.title)
            .attr("width", "100%")
            .attr("height", "450")
            .attr("style", format!("border:0;filter:{};", self.filter))
            .attr("loading", "lazy")
            .attr("referrerpolicy", "no-referrer-when-downgrade")
            .flag("allowfullscreen")
            .into()
    }
}
