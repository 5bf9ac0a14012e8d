use serde::Serialize;

/// JSON-LD script slots injected into the document head, in attach order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
    scripts: Vec<HeadScript>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeadScript {
    id: &'static str,
    json: String,
}

impl Head {
    /// Writes `document` into the slot named `id`.
    ///
    /// The slot is created and appended the first time; later calls overwrite
    /// its content in place. Other slots are never touched.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `document` cannot be encoded as JSON.
    pub fn publish<T: Serialize>(
        &mut self,
        id: &'static str,
        document: &T,
    ) -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(document)?;
        match self.scripts.iter_mut().find(|s| s.id == id) {
            Some(slot) => slot.json = json,
            None => self.scripts.push(HeadScript { id, json }),
        }
        Ok(())
    }

    /// Serialized content of the slot named `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.scripts
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.json.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Renders every slot as a `<script type="application/ld+json">` tag.
    #[must_use]
    pub fn render(&self) -> String {
        self.scripts
            .iter()
            .map(|s| {
                // `</` inside a script body would end the tag early.
                format!(
                    r#"<script type="application/ld+json" id="{}">{}</script>"#,
                    s.id,
                    s.json.replace("</", "<\\/")
                )
            })
            .collect()
    }
}
