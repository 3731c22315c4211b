use super::*;
use serde_json::json;

#[test]
fn listeners_follow_registration_order() {
    let mut hub = TimelineHub::new();
    let root = NodeId::new(1, 0);
    let other = NodeId::new(9, 0);
    let a = hub.subscribe(root, NodeId::new(4, 0));
    hub.subscribe(other, NodeId::new(5, 0));
    let c = hub.subscribe(root, NodeId::new(2, 0));

    let hosts: Vec<_> = hub.listeners(root).iter().map(|s| s.host).collect();
    assert_eq!(hosts, vec![NodeId::new(4, 0), NodeId::new(2, 0)]);
    assert_ne!(a.id, c.id);
    assert_eq!(hub.active_count(), 3);
}

#[test]
fn unsubscribe_is_idempotent() {
    let mut hub = TimelineHub::new();
    let sub = hub.subscribe(NodeId::new(1, 0), NodeId::new(2, 0));
    assert!(hub.is_active(sub.id));
    assert!(hub.unsubscribe(sub.id));
    assert!(!hub.unsubscribe(sub.id));
    assert!(!hub.is_active(sub.id));
    assert_eq!(hub.active_count(), 0);
    assert!(hub.listeners(NodeId::new(1, 0)).is_empty());
}

#[test]
fn ids_are_never_reused() {
    let mut hub = TimelineHub::new();
    let first = hub.subscribe(NodeId::new(1, 0), NodeId::new(2, 0));
    hub.unsubscribe(first.id);
    let second = hub.subscribe(NodeId::new(1, 0), NodeId::new(2, 0));
    assert_ne!(first.id, second.id);
}

#[test]
fn tick_detail_decoding() {
    assert_eq!(
        TimelineTick::from_detail(&json!({"time": 1.5})),
        Some(TimelineTick::at(1.5))
    );
    assert_eq!(
        TimelineTick::from_detail(&json!({"time": 2, "frame": 48})),
        Some(TimelineTick::at(2.0))
    );
    assert_eq!(TimelineTick::from_detail(&json!({"time": "soon"})), None);
    assert_eq!(TimelineTick::from_detail(&json!(3.0)), None);
    assert_eq!(TimelineTick::from_detail(&json!({})), None);
    assert_eq!(TimelineTick::at(0.25).to_detail(), json!({"time": 0.25}));
}
