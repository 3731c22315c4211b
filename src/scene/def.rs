use crate::foundation::core::is_valid_tag;
use crate::foundation::error::{VmlError, VmlResult};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// JSON-facing description of one element and its subtree.
///
/// ```json
/// { "tag": "bar-chart", "props": { "values": [3, 5] }, "children": [] }
/// ```
///
/// `props` may be any JSON value; it is serialized into the scene's props attribute when the
/// tree is built, so a malformed shape degrades exactly like a malformed attribute would.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDef {
    /// Element tag.
    pub tag: String,
    /// Plain attributes, written verbatim.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Component props.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
    /// Text child, appended before `children`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child elements in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneDef>,
}

impl SceneDef {
    /// Element with no attributes, props or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            props: None,
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder: set `props`.
    pub fn with_props(mut self, props: Value) -> Self {
        self.props = Some(props);
        self
    }

    /// Builder: append a child.
    pub fn with_child(mut self, child: SceneDef) -> Self {
        self.children.push(child);
        self
    }

    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> VmlResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| VmlError::validation(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> VmlResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            VmlError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check tag names throughout the tree.
    ///
    /// Props are deliberately not checked here: component props are schema-less.
    pub fn validate(&self) -> VmlResult<()> {
        self.validate_at("scene")
    }

    fn validate_at(&self, path: &str) -> VmlResult<()> {
        if !is_valid_tag(&self.tag) {
            return Err(VmlError::validation(format!(
                "{path}: invalid tag '{}'",
                self.tag
            )));
        }
        for name in self.attrs.keys() {
            if !is_valid_attr(name) {
                return Err(VmlError::validation(format!(
                    "{path}: invalid attribute name '{name}'"
                )));
            }
        }
        for (i, child) in self.children.iter().enumerate() {
            child.validate_at(&format!("{path}.children[{i}]"))?;
        }
        Ok(())
    }

    /// Number of elements in the tree, including `self`.
    pub fn element_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(SceneDef::element_count)
            .sum::<usize>()
    }
}

fn is_valid_attr(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/def.rs"]
mod tests;
