use std::collections::HashMap;

/// Citation key → id, assigned densely from 1 on first sighting.
#[derive(Debug, Default)]
pub struct CitationRegistry {
    ids: HashMap<String, usize>,
    order: Vec<String>,
}

impl CitationRegistry {
    /// Returns the id for `key`, assigning the next one if it is new.
    pub fn cite(&mut self, key: &str) -> usize {
        if let Some(&id) = self.ids.get(key) {
            return id;
        }
        self.order.push(key.to_string());
        let id = self.order.len();
        self.ids.insert(key.to_string(), id);
        id
    }

    /// Key cited with `id`.
    pub fn key(&self, id: usize) -> Option<&str> {
        id.checked_sub(1)
            .and_then(|i| self.order.get(i))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Footnote bodies in encounter order; id = position + 1.
#[derive(Debug, Default)]
pub struct FootnoteRegistry {
    notes: Vec<String>,
}

impl FootnoteRegistry {
    /// Appends a footnote and returns its id. Identical text still gets a new id.
    pub fn push(&mut self, text: impl Into<String>) -> usize {
        self.notes.push(text.into());
        self.notes.len()
    }

    pub fn get(&self, id: usize) -> Option<&str> {
        id.checked_sub(1)
            .and_then(|i| self.notes.get(i))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_first_sighting() {
        let mut reg = CitationRegistry::default();
        assert_eq!(reg.cite("b"), 1);
        assert_eq!(reg.cite("a"), 2);
        assert_eq!(reg.cite("b"), 1);
        assert_eq!(reg.key(2), Some("a"));
        assert_eq!(reg.key(0), None);
        assert_eq!(reg.key(3), None);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn footnotes_never_dedupe() {
        let mut notes = FootnoteRegistry::default();
        assert_eq!(notes.push("same"), 1);
        assert_eq!(notes.push("same"), 2);
        assert_eq!(notes.get(2), Some("same"));
        assert_eq!(notes.get(3), None);
    }
}
