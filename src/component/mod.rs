//! The component contract and the built-in catalog.

pub(crate) mod cards;
pub(crate) mod chart;
pub(crate) mod contract;
pub(crate) mod layout;
pub(crate) mod overlays;
pub(crate) mod placeholder;
pub(crate) mod screens;

use crate::component::contract::{Component, RenderCtx};

/// Run one full render: release the host's old subtree, then let `component` build into it.
///
/// Clearing first is what makes rendering idempotent. The previous children are freed, so
/// callers that own component instances nested under the host must detach them before calling
/// this.
#[tracing::instrument(level = "trace", skip_all, fields(component = component.name(), host = %cx.host))]
pub fn render_into(component: &dyn Component, mut cx: RenderCtx<'_>) {
    let released = cx.doc.free_children(cx.host);
    tracing::trace!(released, "cleared previous render");
    component.render(&mut cx);
}
