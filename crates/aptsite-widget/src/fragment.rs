//! Fragment builders for the pricing table and FAQ accordion.

use aptsite_core::{FaqEntry, PricingEntry};

use crate::accordion::{panel_id, AccordionState};
use crate::html::{Element, Node};

/// One table row per pricing entry, in upstream order.
#[must_use]
pub fn pricing_table(entries: &[PricingEntry]) -> Node {
    let rows = entries.iter().map(|entry| {
        let mut unit_cell = Element::new("td").class("pricing-unit").text(&entry.unit);
        if let Some(promotion) = &entry.promotion {
            unit_cell = unit_cell.child(
                Element::new("span")
                    .class("pricing-promo")
                    .text(promotion),
            );
        }

        let price_class = if entry.price.is_some() {
            "pricing-price"
        } else {
            "pricing-price pricing-call"
        };

        Element::new("tr")
            .child(unit_cell)
            .child(
                Element::new("td")
                    .class(price_class)
                    .text(entry.display_price()),
            )
    });

    Element::new("table")
        .class("pricing-table")
        .child(
            Element::new("thead").child(
                Element::new("tr")
                    .child(Element::new("th").attr("scope", "col").text("Unit"))
                    .child(Element::new("th").attr("scope", "col").text("Starting at")),
            ),
        )
        .child(Element::new("tbody").children(rows))
        .into()
}

/// One collapsible panel per FAQ entry, keyed `faq-{index}`.
///
/// The answer is inserted as trusted markup; the question is escaped.
#[must_use]
pub fn faq_accordion(entries: &[FaqEntry], state: &AccordionState) -> Node {
    let panels = entries.iter().enumerate().map(|(index, entry)| {
        let id = panel_id(index);
        let answer_id = format!("{id}-answer");
        let open = state.is_open(&id);

        let mut answer = Element::new("div")
            .attr("id", answer_id.clone())
            .class("faq-answer")
            .child(Node::Trusted(entry.answer.clone()));
        if !open {
            answer = answer.flag("hidden");
        }

        Element::new("div")
            .class(if open { "faq-item faq-open" } else { "faq-item" })
            .attr("data-panel", id)
            .child(
                Element::new("button")
                    .attr("type", "button")
                    .class("faq-question")
                    .attr("aria-controls", answer_id)
                    .attr("aria-expanded", open.to_string())
                    .text(&entry.question),
            )
            .child(answer)
    });

    Element::new("div")
        .class("faq-accordion")
        .children(panels)
        .into()
}
