//! Inert components: the demo placeholder and the unregistered-tag fallback.

use crate::component::contract::{Component, RenderCtx, RenderPolicy};

/// Text shown by [`DemoPlaceholder`].
pub const DEMO_LABEL: &str = "Demo placeholder: this component has no content yet.";

fn label(cx: &mut RenderCtx<'_>, class: &str, text: &str) {
    let theme = cx.theme();
    let font = cx.typography().mono.as_str();
    let host = cx.host();
    cx.el(host, "span")
        .class(class)
        .styles(&[
            ("display", "inline-block"),
            ("padding", "8px 14px"),
            ("border-radius", "8px"),
            ("font-size", "18px"),
        ])
        .style("font-family", font)
        .style("border", format!("1px dashed {}", theme.muted))
        .style("color", &theme.muted)
        .text(text);
}

/// `demo-placeholder`: a static explanatory label, rendered on first attach only.
#[derive(Debug, Default)]
pub struct DemoPlaceholder;

impl Component for DemoPlaceholder {
    fn name(&self) -> &'static str {
        "demo-placeholder"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        label(cx, "demo-label", DEMO_LABEL);
    }

    fn render_policy(&self) -> RenderPolicy {
        RenderPolicy::Once
    }
}

/// Last-resort renderer bound to hyphenated tags nobody defined: shows the tag name once.
#[derive(Debug, Default)]
pub struct FallbackLabel;

impl Component for FallbackLabel {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let tag = cx.tag().to_owned();
        label(cx, "fallback-label", &tag);
    }

    fn render_policy(&self) -> RenderPolicy {
        RenderPolicy::Once
    }
}
