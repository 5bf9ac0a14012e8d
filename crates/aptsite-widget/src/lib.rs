//! Server-side rendering of the pricing table, FAQ accordion and map embed,
//! plus the schema.org documents published alongside them.

pub mod accordion;
pub mod fragment;
pub mod head;
pub mod html;
pub mod map;
pub mod page;
pub mod renderer;
pub mod schema;
pub mod source;

pub use accordion::AccordionState;
pub use head::Head;
pub use map::MapEmbed;
pub use page::{Container, Content, Page};
pub use renderer::RenderStatus;
pub use schema::{AggregateOffer, FaqDocument, SchemaCache, SchemaPublisher};
pub use source::{GatewayClient, RecordSource, SourceError};
