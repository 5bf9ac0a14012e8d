//! Page model: named containers, the JSON-LD head, and the state the
//! renderer keeps between updates.

use aptsite_core::{FaqEntry, RecordKind};

use crate::accordion::{panel_index, AccordionState};
use crate::fragment::faq_accordion;
use crate::head::Head;
use crate::html::{escape_text, Element, Node};
use crate::map::MapEmbed;
use crate::schema::SchemaPublisher;

pub const PRICING_CONTAINER_ID: &str = "pricing-table";
pub const FAQ_CONTAINER_ID: &str = "faq-accordion";
pub const MAP_CONTAINER_ID: &str = "map-embed";

/// Sizing/centering classes the containers carry until real content lands.
pub const PLACEHOLDER_CLASSES: [&str; 4] =
    ["min-h-[240px]", "flex", "items-center", "justify-center"];

const LOADING_TEXT: &str = "Loading...";

/// Delegated click handler toggling `hidden` on accordion answers. Scoped to
/// the FAQ container; no globals.
const ACCORDION_SCRIPT: &str = r#"(() => {
  const root = document.getElementById("faq-accordion");
  if (!root) return;
  root.addEventListener("click", (event) => {
    const button = event.target.closest(".faq-question");
    if (!button || !root.contains(button)) return;
    const answer = document.getElementById(button.getAttribute("aria-controls"));
    if (!answer) return;
    const open = answer.hasAttribute("hidden");
    answer.toggleAttribute("hidden", !open);
    button.setAttribute("aria-expanded", String(open));
    button.parentElement.classList.toggle("faq-open", open);
  });
})();"#;

/// What a container currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Empty,
    Loading,
    Error(&'static str),
    NoData(&'static str),
    Fragment(Node),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: &'static str,
    classes: Vec<String>,
    content: Content,
}

impl Container {
    fn new(id: &'static str) -> Self {
        let mut classes = vec!["widget".to_string(), format!("widget-{id}")];
        classes.extend(PLACEHOLDER_CLASSES.iter().map(|c| (*c).to_string()));
        Self {
            id,
            classes,
            content: Content::Empty,
        }
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub(crate) fn replace(&mut self, content: Content) {
        self.content = content;
    }

    pub(crate) fn clear_placeholder(&mut self) {
        self.classes.retain(|c| !PLACEHOLDER_CLASSES.contains(&c.as_str()));
    }

    /// Inner markup only.
    #[must_use]
    pub fn inner_html(&self) -> String {
        match &self.content {
            Content::Empty => String::new(),
            Content::Loading => format!(
                r#"<div class="widget-loading" role="status">{}</div>"#,
                escape_text(LOADING_TEXT)
            ),
            Content::Error(message) => format!(
                r#"<p class="widget-error" role="alert">{}</p>"#,
                escape_text(message)
            ),
            Content::NoData(message) => {
                format!(r#"<p class="widget-empty">{}</p>"#, escape_text(message))
            }
            Content::Fragment(node) => node.render(),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        Node::from(
            Element::new("section")
                .attr("id", self.id)
                .class(self.classes.join(" "))
                .child(Node::Trusted(self.inner_html())),
        )
        .render()
    }
}

/// The marketing page the widget fills in.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    pub(crate) pricing: Container,
    pub(crate) faq: Container,
    pub(crate) map: Container,
    pub(crate) head: Head,
    pub(crate) publisher: SchemaPublisher,
    pub(crate) faq_entries: Vec<FaqEntry>,
    pub(crate) accordion: AccordionState,
}

impl Page {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pricing: Container::new(PRICING_CONTAINER_ID),
            faq: Container::new(FAQ_CONTAINER_ID),
            map: Container::new(MAP_CONTAINER_ID),
            head: Head::default(),
            publisher: SchemaPublisher::default(),
            faq_entries: Vec::new(),
            accordion: AccordionState::default(),
        }
    }

    #[must_use]
    pub fn container(&self, kind: RecordKind) -> &Container {
        match kind {
            RecordKind::Pricing => &self.pricing,
            RecordKind::Faq => &self.faq,
        }
    }

    pub(crate) fn container_mut(&mut self, kind: RecordKind) -> &mut Container {
        match kind {
            RecordKind::Pricing => &mut self.pricing,
            RecordKind::Faq => &mut self.faq,
        }
    }

    #[must_use]
    pub fn map_container(&self) -> &Container {
        &self.map
    }

    #[must_use]
    pub fn head(&self) -> &Head {
        &self.head
    }

    #[must_use]
    pub fn publisher(&self) -> &SchemaPublisher {
        &self.publisher
    }

    #[must_use]
    pub fn accordion(&self) -> &AccordionState {
        &self.accordion
    }

    /// Replaces the map container with the static embed. Always succeeds.
    pub fn init_map(&mut self) {
        self.map.replace(Content::Fragment(MapEmbed::default().node()));
        self.map.clear_placeholder();
    }

    /// Toggles one FAQ panel and re-renders the accordion from the retained
    /// entries. Returns the panel's new state, or `None` if the FAQ container
    /// is not showing an accordion or `panel_id` names no rendered panel.
    pub fn toggle_faq_panel(&mut self, panel_id: &str) -> Option<bool> {
        if !matches!(self.faq.content(), Content::Fragment(_)) {
            return None;
        }
        if panel_index(panel_id).is_none_or(|index| index >= self.faq_entries.len()) {
            return None;
        }
        let open = self.accordion.toggle(panel_id);
        self.faq.replace(Content::Fragment(faq_accordion(
            &self.faq_entries,
            &self.accordion,
        )));
        Some(open)
    }

    /// Full HTML document.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
                "<title>{title}</title>\n",
                "{head}\n",
                "</head>\n",
                "<body>\n",
                "<main>\n{pricing}\n{faq}\n{map}\n</main>\n",
                "<script>{script}</script>\n",
                "</body>\n",
                "</html>\n"
            ),
            title = escape_text(&self.title),
            head = self.head.render(),
            pricing = self.pricing.render(),
            faq = self.faq.render(),
            map = self.map.render(),
            script = ACCORDION_SCRIPT,
        )
    }
}
