use super::*;
use crate::component::contract::RenderPolicy as Policy;
use crate::theme::resolver::ThemeSlot;
use crate::theme::schemes::scheme;
use serde_json::json;

#[derive(Debug)]
struct Badge;

impl Component for Badge {
    fn name(&self) -> &'static str {
        "badge"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let host = cx.host();
        let label = cx.props().str_or("label", "badge");
        cx.el(host, "span").class("badge").text(label);
    }
}

fn presentation(s: &mut Scene) -> NodeId {
    let pres = s.create_element("video-ml").unwrap();
    let root = s.root();
    s.append_child(root, pres).unwrap();
    pres
}

fn chart_in(s: &mut Scene, parent: NodeId, values: Value) -> NodeId {
    let chart = s.create_element("bar-chart").unwrap();
    s.set_props(chart, &json!({ "values": values })).unwrap();
    s.append_child(parent, chart).unwrap();
    chart
}

#[test]
fn attach_happens_on_connection_only() {
    let mut s = Scene::with_builtins();
    let pres = s.create_element("video-ml").unwrap();
    let chart = chart_in(&mut s, pres, json!([1, 2]));
    assert!(!s.is_attached(chart));
    assert_eq!(s.render_count(chart), 0);

    let root = s.root();
    s.append_child(root, pres).unwrap();
    assert!(s.is_attached(chart));
    assert_eq!(s.render_count(chart), 1);
    assert_eq!(s.motion_targets(chart).len(), 2);
    assert_eq!(s.active_subscriptions(), 1);
    assert_eq!(s.subscription(chart).map(|sub| sub.root), Some(pres));
}

#[test]
fn prop_change_rerenders_without_resubscribing() {
    let mut s = Scene::with_builtins();
    let pres = presentation(&mut s);
    let chart = chart_in(&mut s, pres, json!([1, 2]));
    let sub = s.subscription(chart);

    s.set_props(chart, &json!({ "values": [1, 2, 3] })).unwrap();
    assert_eq!(s.render_count(chart), 2);
    assert_eq!(s.motion_targets(chart).len(), 3);
    assert_eq!(s.subscription(chart), sub);
    assert_eq!(s.active_subscriptions(), 1);
    assert_eq!(s.doc().elements_by_class(chart, "bar").len(), 3);

    s.set_attribute(chart, "data-note", "ignored");
    assert_eq!(s.render_count(chart), 2);
}

#[test]
fn malformed_props_fall_back_to_defaults() {
    let mut s = Scene::with_builtins();
    let pres = presentation(&mut s);
    let title = s.create_element("title-screen").unwrap();
    s.set_attribute(title, "props", "{not json");
    s.append_child(pres, title).unwrap();
    assert!(s.doc().text_content(title).contains("Untitled"));
    assert!(s.props(title).is_some_and(PropertyBag::is_empty));

    s.set_props(title, &json!({ "title": "Hello" })).unwrap();
    assert!(s.doc().text_content(title).contains("Hello"));
    s.remove_attribute(title, "props");
    assert!(s.doc().text_content(title).contains("Untitled"));
}

#[test]
fn ticks_touch_only_bar_transforms() {
    let mut s = Scene::with_builtins();
    let pres = presentation(&mut s);
    let chart = chart_in(&mut s, pres, json!([10, 20]));
    let bar = s.motion_targets(chart)[1].node;
    let nodes_before = s.doc().len();
    let initial = s.doc().style(bar, "transform").map(str::to_owned);

    assert_eq!(s.tick(pres, 0.75), 1);
    let ticked = s.doc().style(bar, "transform").map(str::to_owned);
    assert_ne!(initial, ticked);
    assert_eq!(s.doc().len(), nodes_before);
    assert_eq!(s.render_count(chart), 1);
}

#[test]
fn detach_after_ticks_leaves_nothing_behind() {
    let mut s = Scene::with_builtins();
    let pres = presentation(&mut s);
    let chart = chart_in(&mut s, pres, json!([3, 4, 5]));
    s.tick(pres, 0.1);
    s.tick(pres, 0.2);

    s.remove(chart).unwrap();
    assert!(!s.is_attached(chart));
    assert_eq!(s.active_subscriptions(), 0);
    assert_eq!(s.subscription(chart), None);

    let frozen = s.doc().outer_html(chart);
    assert_eq!(s.tick(pres, 3.0), 0);
    assert_eq!(s.doc().outer_html(chart), frozen);

    s.remove(chart).unwrap();
    assert_eq!(s.active_subscriptions(), 0);
}

#[test]
fn chart_without_presentation_root_renders_but_never_subscribes() {
    let mut s = Scene::with_builtins();
    let root = s.root();
    let chart = chart_in(&mut s, root, json!([1]));
    assert!(s.is_attached(chart));
    assert_eq!(s.subscription(chart), None);
    assert_eq!(s.active_subscriptions(), 0);
    s.remove(chart).unwrap();
    assert_eq!(s.active_subscriptions(), 0);
}

#[test]
fn moving_between_roots_moves_the_subscription() {
    let mut s = Scene::with_builtins();
    let a = presentation(&mut s);
    let b = presentation(&mut s);
    let chart = chart_in(&mut s, a, json!([1, 2]));

    s.append_child(b, chart).unwrap();
    assert_eq!(s.active_subscriptions(), 1);
    assert_eq!(s.subscription(chart).map(|sub| sub.root), Some(b));
    assert_eq!(s.tick(a, 1.0), 0);
    assert_eq!(s.tick(b, 1.0), 1);
}

#[test]
fn dispatch_filters_event_name_and_detail() {
    let mut s = Scene::with_builtins();
    let pres = presentation(&mut s);
    chart_in(&mut s, pres, json!([1, 2]));
    assert_eq!(s.dispatch_event(pres, "click", &json!({ "time": 1.0 })), 0);
    assert_eq!(s.dispatch_event(pres, "vml:tick", &json!({ "t": 1.0 })), 0);
    assert_eq!(s.dispatch_event(pres, "vml:tick", &json!({ "time": 1.0 })), 1);
}

#[test]
fn once_policy_ignores_prop_changes() {
    let mut s = Scene::with_builtins();
    let pres = presentation(&mut s);
    let demo = s.create_element("demo-placeholder").unwrap();
    s.append_child(pres, demo).unwrap();
    assert_eq!(s.instances[&demo].component.render_policy(), Policy::Once);
    assert_eq!(s.render_count(demo), 1);

    s.set_props(demo, &json!({ "anything": true })).unwrap();
    s.refresh(pres);
    assert_eq!(s.render_count(demo), 1);

    s.remove(demo).unwrap();
    s.append_child(pres, demo).unwrap();
    assert_eq!(s.render_count(demo), 1);
    assert!(s.is_attached(demo));
}

#[test]
fn authored_children_of_a_component_never_attach() {
    let mut s = Scene::with_builtins();
    let def = SceneDef::new("video-ml").with_child(
        SceneDef::new("title-screen").with_child(SceneDef::new("bar-chart")),
    );
    let pres = s.load(&def).unwrap();
    let title = s.doc().element_children(pres)[0];
    assert!(s.is_attached(title));
    assert!(s.doc().elements_by_tag(title, "bar-chart").is_empty());
    assert_eq!(s.active_subscriptions(), 0);
}

#[test]
fn define_upgrades_connected_elements() {
    let mut s = Scene::new(Registry::new());
    let pres = presentation(&mut s);
    let badge = s.create_element("x-badge").unwrap();
    s.set_props(badge, &json!({ "label": "new" })).unwrap();
    s.append_child(pres, badge).unwrap();
    assert!(!s.is_attached(badge));

    assert!(s.define("x-badge", Rc::new(Badge)).unwrap());
    assert!(s.is_attached(badge));
    assert_eq!(s.doc().text_content(badge), "new");
    assert!(!s.define("x-badge", Rc::new(Badge)).unwrap());
    assert_eq!(s.render_count(badge), 1);

    let other = s.create_element("y-badge").unwrap();
    s.append_child(pres, other).unwrap();
    assert!(s.alias("y-badge", "x-badge").unwrap());
    assert_eq!(s.doc().text_content(other), "badge");
}

#[test]
fn fallback_label_is_rendered_once_per_element() {
    let mut s = Scene::with_builtins();
    let def = SceneDef::new("video-ml").with_child(SceneDef::new("mystery-widget"));
    let pres = s.load(&def).unwrap();
    let widget = s.doc().element_children(pres)[0];

    assert!(s.register_fallback(pres).is_empty());
    assert!(s.register_fallback(s.root()).is_empty());
    let labels = s.doc().elements_by_class(widget, "fallback-label");
    assert_eq!(labels.len(), 1);
    assert_eq!(s.doc().text_content(labels[0]), "mystery-widget");
    assert!(!s.registry().contains("video-ml"));
}

#[test]
fn scheme_change_rethemes_on_refresh() {
    let mut s = Scene::with_builtins();
    let pres = presentation(&mut s);
    let title = s.create_element("title-screen").unwrap();
    s.append_child(pres, title).unwrap();
    assert_eq!(
        s.doc().style(title, "background"),
        Some(ThemeSlot::Background.brand_default())
    );

    s.apply_scheme(pres, "midnight").unwrap();
    let want = format!(
        "hsl({})",
        scheme("midnight").unwrap().token(ThemeSlot::Background)
    );
    assert_eq!(s.doc().style(title, "background"), Some(want.as_str()));
    assert_eq!(s.render_count(title), 2);
    assert!(s.apply_scheme(pres, "no-such-scheme").is_err());
}

#[test]
fn rerendering_reuses_released_nodes() {
    let mut s = Scene::with_builtins();
    let pres = presentation(&mut s);
    let screen = s.create_element("bullet-screen").unwrap();
    let props = json!({ "title": "Agenda", "bullets": { "items": ["one", "two", "three"] } });
    s.set_props(screen, &props).unwrap();
    s.append_child(pres, screen).unwrap();
    let live = s.doc().len();
    let slots = s.doc().capacity();
    let first_item = s.doc().elements_by_tag(screen, "li")[0];

    for _ in 0..1000 {
        s.set_props(screen, &props).unwrap();
    }
    assert_eq!(s.render_count(screen), 1001);
    assert_eq!(s.doc().len(), live);
    assert_eq!(s.doc().capacity(), slots);
    assert_eq!(s.doc().tag(first_item), None);
    assert_eq!(s.doc().elements_by_tag(screen, "li").len(), 3);
}

#[test]
fn rerender_forgets_instances_it_cleared() {
    let mut s = Scene::with_builtins();
    let pres = presentation(&mut s);
    let title = s.create_element("title-screen").unwrap();
    s.append_child(pres, title).unwrap();
    let chart = chart_in(&mut s, title, json!([1, 2]));
    assert!(s.is_attached(chart));
    assert_eq!(s.active_subscriptions(), 1);

    s.set_props(title, &json!({ "title": "Again" })).unwrap();
    assert!(!s.is_attached(chart));
    assert!(!s.instances.contains_key(&chart));
    assert_eq!(s.active_subscriptions(), 0);
    assert_eq!(s.doc().tag(chart), None);
    assert_eq!(s.tick(pres, 1.0), 0);
}

#[test]
fn discard_releases_the_subtree() {
    let mut s = Scene::with_builtins();
    let pres = presentation(&mut s);
    let before = s.doc().len();
    let chart = chart_in(&mut s, pres, json!([1, 2, 3]));
    assert!(s.doc().len() > before);

    s.discard(chart).unwrap();
    assert_eq!(s.doc().len(), before);
    assert_eq!(s.active_subscriptions(), 0);
    assert!(s.instances.is_empty());
    assert!(s.append_child(pres, chart).is_err());
    assert!(s.discard(chart).is_err());

    let again = chart_in(&mut s, pres, json!([4]));
    assert_ne!(again, chart);
    assert!(s.is_attached(again));
}

#[test]
fn presentation_roots_cannot_be_bound() {
    let mut s = Scene::new(Registry::new());
    assert!(s.define("video-ml", Rc::new(Badge)).is_err());
    assert!(s.define("x-badge", Rc::new(Badge)).unwrap());
    assert!(s.alias("video-ml", "x-badge").is_err());
    let badge = s.registry().get("x-badge").unwrap();
    assert!(s.define_alias("video-ml", &badge).is_err());
    assert!(!s.registry().contains("video-ml"));

    let mut opts = SceneOpts::default();
    opts.root_tags.push("deck-root".to_owned());
    let mut custom = Scene::with_opts(Registry::new(), opts);
    assert!(custom.define("deck-root", Rc::new(Badge)).is_err());
}

#[test]
fn every_creatable_hyphenated_tag_falls_back() {
    let mut s = Scene::with_builtins();
    assert!(s.create_element("café-card").is_err());
    assert!(s.create_element("").is_err());

    let pres = presentation(&mut s);
    for tag in ["x.widget-a", "my_widget-b", "Shouty-Tag"] {
        let el = s.create_element(tag).unwrap();
        s.append_child(pres, el).unwrap();
    }
    let bound = s.register_fallback(pres);
    assert_eq!(bound, vec!["x.widget-a", "my_widget-b", "shouty-tag"]);
    assert_eq!(s.doc().elements_by_class(pres, "fallback-label").len(), 3);
}
