//! vmlkit renders VideoML slide components into a host document.
//!
//! Authoring tools emit custom tags (`<title-screen>`, `<bar-chart>`, ...) carrying their
//! configuration as a serialized `props` attribute. This crate supplies the runtime side:
//!
//! - decode props fail-soft into a [`PropertyBag`]
//! - resolve a [`Theme`] from design tokens on the nearest presentation root
//! - render each tag through a shared [`Component`] looked up in a [`Registry`]
//! - drive timeline-bound components from `vml:tick` broadcasts via a [`Scene`]
//!
//! ```
//! use vmlkit::{Scene, SceneDef};
//!
//! let mut scene = Scene::with_builtins();
//! let def = SceneDef::new("video-ml").with_child(
//!     SceneDef::new("bar-chart").with_props(serde_json::json!({ "values": [3, 5, 8] })),
//! );
//! let deck = scene.load(&def).unwrap();
//! assert_eq!(scene.tick(deck, 0.5), 1);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod component;
pub(crate) mod dom;
pub(crate) mod props;
pub mod registry;
pub(crate) mod scene;
pub(crate) mod theme;
pub mod timeline;

pub use crate::foundation::core::{
    Affine, NodeId, PRESENTATION_ROOT_TAGS, Rect, css_matrix, is_custom_tag, is_valid_tag, percent,
    px, validate_custom_tag,
};
pub use crate::foundation::error::{VmlError, VmlResult};

pub use crate::component::contract::{
    Component, El, Motion, MotionTarget, RenderCtx, RenderPolicy,
};
pub use crate::component::render_into;
pub use crate::dom::document::{Ancestors, DOCUMENT_ROOT_TAG, Document};
pub use crate::dom::scope::closest;
pub use crate::props::bag::{PropertyBag, display_string};
pub use crate::props::decode::decode;
pub use crate::registry::{EntryKind, Registry};
pub use crate::scene::def::SceneDef;
pub use crate::scene::host::Scene;
pub use crate::scene::opts::SceneOpts;
pub use crate::theme::resolver::{Theme, ThemeSlot, Typography};
pub use crate::theme::schemes::{SCHEMES, Scheme, apply_scheme, scheme};
pub use crate::timeline::{Subscription, SubscriptionId, TimelineHub, TimelineTick};

/// The built-in component implementations, for registering under custom tag names.
pub mod catalog {
    pub use crate::component::cards::{CalloutCard, CardGrid, CodeBlock, QuoteCard, ThreeColumn};
    pub use crate::component::chart::{
        BarChart, MIN_VISIBLE_SCALE, PULSE_AMPLITUDE, PULSE_MIDPOINT, PULSE_PHASE_STEP,
        PULSE_SPEED, bar_proportions, bar_scale,
    };
    pub use crate::component::overlays::{
        AbsRect, AbsText, AbsTextKind, BackgroundFill, Chyron, LowerThird, ProgressBar,
        clamp_progress,
    };
    pub use crate::component::placeholder::{DEMO_LABEL, DemoPlaceholder, FallbackLabel};
    pub use crate::component::screens::{
        BulletScreen, ChapterHeading, ContentHeader, TitleScreen, TwoColumn,
    };
}
