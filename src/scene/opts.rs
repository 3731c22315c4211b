use crate::foundation::core::PRESENTATION_ROOT_TAGS;
use crate::theme::resolver::Typography;

/// Options for constructing a [`Scene`](crate::Scene).
#[derive(Debug, Clone)]
pub struct SceneOpts {
    /// Tags that act as presentation roots: token scopes and tick broadcasters.
    pub root_tags: Vec<String>,
    /// Attribute carrying each component's serialized props.
    pub props_attribute: String,
    /// Event name treated as a timeline tick by [`Scene::dispatch_event`](crate::Scene::dispatch_event).
    pub tick_event: String,
    /// Font stacks handed to every render.
    pub typography: Typography,
}

impl Default for SceneOpts {
    fn default() -> Self {
        Self {
            root_tags: PRESENTATION_ROOT_TAGS.iter().map(|t| (*t).to_owned()).collect(),
            props_attribute: "props".to_owned(),
            tick_event: "vml:tick".to_owned(),
            typography: Typography::default(),
        }
    }
}

impl SceneOpts {
    pub(crate) fn is_root_tag(&self, tag: &str) -> bool {
        self.root_tags.iter().any(|t| t == tag)
    }
}
