use serde_json::{Map, Value};

/// Decoded, schema-less component properties.
///
/// Components read only the keys they understand and supply a default for everything else, so
/// every accessor here takes the default inline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    map: Map<String, Value>,
}

impl PropertyBag {
    /// Wrap an already-parsed JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self { map }
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Return `true` for the empty bag (the result of every failed decode).
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Raw value at a dotted path such as `bullets.items`.
    ///
    /// A path segment that walks into a sequence is read as an index.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut cur = self.map.get(parts.next()?)?;
        for part in parts {
            cur = match cur {
                Value::Object(m) => m.get(part)?,
                Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(cur)
    }

    /// Display text at `path`, or `default` when absent or `null`.
    pub fn str_or(&self, path: &str, default: &str) -> String {
        match self.get(path) {
            None | Some(Value::Null) => default.to_owned(),
            Some(v) => display_string(v),
        }
    }

    /// Display text at `path` when present and not `null`.
    pub fn opt_str(&self, path: &str) -> Option<String> {
        match self.get(path)? {
            Value::Null => None,
            v => Some(display_string(v)),
        }
    }

    /// Number at `path`. Numeric strings are accepted.
    pub fn opt_f64(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(value_f64)
    }

    /// Number at `path`, or `default`.
    pub fn f64_or(&self, path: &str, default: f64) -> f64 {
        self.opt_f64(path).unwrap_or(default)
    }

    /// Boolean at `path`, or `default` when absent or not a boolean.
    pub fn bool_or(&self, path: &str, default: bool) -> bool {
        self.get(path).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Color override at `path`, or the theme color passed as `default`.
    ///
    /// Overrides are trusted as-is; the authoring tool is responsible for sending something
    /// renderable.
    pub fn color_or(&self, path: &str, default: &str) -> String {
        self.opt_str(path)
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| default.to_owned())
    }

    /// Sequence at `path`; anything that is not a sequence reads as empty.
    pub fn seq(&self, path: &str) -> &[Value] {
        match self.get(path) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    /// Sequence at `path`, each element stringified independently.
    pub fn str_seq(&self, path: &str) -> Vec<String> {
        self.seq(path).iter().map(display_string).collect()
    }

    /// Sequence at `path`, each element read as a number (non-numbers become 0).
    pub fn f64_seq(&self, path: &str) -> Vec<f64> {
        self.seq(path)
            .iter()
            .map(|v| value_f64(v).unwrap_or(0.0))
            .collect()
    }
}

/// Stringify any prop value for display.
///
/// Strings are used verbatim, `null` becomes empty, everything else renders as compact JSON.
pub fn display_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn value_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/props/bag.rs"]
mod tests;
