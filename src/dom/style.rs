/// Ordered inline style declarations.
///
/// Declaration order is kept so serialized output is stable; re-setting a property replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(String, String)>,
}

impl Style {
    /// Value of `property`, if declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Declare `property`, replacing any previous value.
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.decls.iter_mut().find(|(k, _)| k == property) {
            Some((_, v)) => *v = value,
            None => self.decls.push((property.to_owned(), value)),
        }
    }

    /// Drop `property`, returning its value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let pos = self.decls.iter().position(|(k, _)| k == property)?;
        Some(self.decls.remove(pos).1)
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Return `true` when nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Serialize as a `style` attribute value.
    pub fn to_css(&self) -> String {
        self.decls
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
