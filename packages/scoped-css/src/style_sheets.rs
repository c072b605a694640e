//! Stylesheet registry
//!
//! Where scoped CSS goes once computed. In a browser this is the document
//! head; [`StyleSheetList`] keeps the sheets in memory in insertion order.

use indexmap::IndexMap;

/// Receiver of scoped stylesheets. Inserting twice under the same id must
/// not produce a second sheet.
pub trait StyleSheetRegistry {
    fn insert(&mut self, css_text: &str, id: &str);
}

impl<S: StyleSheetRegistry + ?Sized> StyleSheetRegistry for Box<S> {
    fn insert(&mut self, css_text: &str, id: &str) {
        (**self).insert(css_text, id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    pub id: String,
    pub css_text: String,
}

/// In-memory, ordered list of `<style>` elements.
#[derive(Clone, Debug, Default)]
pub struct StyleSheetList {
    sheets: IndexMap<String, String>,
}

impl StyleSheetList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.sheets.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = StyleSheet> + '_ {
        self.sheets.iter().map(|(id, css_text)| StyleSheet {
            id: id.clone(),
            css_text: css_text.clone(),
        })
    }

    /// Render every sheet as a `<style id="...">` element.
    pub fn to_html(&self) -> String {
        self.sheets
            .iter()
            .map(|(id, css_text)| format!("<style id=\"{}\">\n{}\n</style>", id, css_text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StyleSheetRegistry for StyleSheetList {
    fn insert(&mut self, css_text: &str, id: &str) {
        if self.sheets.contains_key(id) {
            log::debug!("stylesheet {} already inserted", id);
            return;
        }
        self.sheets.insert(id.to_string(), css_text.to_string());
    }
}
