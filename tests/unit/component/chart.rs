use super::*;
use crate::component::testing::render_standalone;

#[test]
fn proportions_are_relative_to_data_max() {
    let values = [38.0, 52.0, 24.0, 71.0, 43.0, 66.0];
    let p = bar_proportions(&values, None);
    assert_eq!(p[3], 1.0);
    for (v, got) in values.iter().zip(&p) {
        assert_eq!(*got, v / 71.0);
    }
}

#[test]
fn explicit_max_and_degenerate_inputs() {
    assert_eq!(bar_proportions(&[50.0, 200.0], Some(100.0)), vec![0.5, 1.0]);
    assert_eq!(bar_proportions(&[50.0], Some(0.0)), vec![1.0]);
    assert_eq!(bar_proportions(&[0.0, -3.0], None), vec![0.0, 0.0]);
    assert!(bar_proportions(&[], None).is_empty());
}

#[test]
fn scale_is_periodic_bounded_and_floored() {
    for i in 0..6 {
        for step in 0..200 {
            let t = step as f64 * 0.05;
            let s = bar_scale(1.0, i, t);
            assert!(s >= 0.4 - 1e-12 && s <= 1.0 + 1e-12, "{s}");
        }
    }
    assert_eq!(bar_scale(0.0, 0, 1.0), MIN_VISIBLE_SCALE);
    let period = std::f64::consts::TAU / PULSE_SPEED;
    assert!((bar_scale(0.8, 2, 0.3) - bar_scale(0.8, 2, 0.3 + period)).abs() < 1e-9);
    assert_ne!(bar_scale(1.0, 0, 0.0), bar_scale(1.0, 1, 0.0));
}

#[test]
fn render_records_one_target_per_bar() {
    let r = render_standalone(
        &BarChart,
        "bar-chart",
        r#"{"values": [38,52,24,71,43,66], "labels": ["a","b"]}"#,
    );
    let bars = r.by_class("bar");
    assert_eq!(bars.len(), 6);
    assert_eq!(r.targets.len(), 6);
    assert_eq!(r.targets[3].base, 1.0);
    assert_eq!(r.targets[3].node, bars[3]);
    assert_eq!(r.doc.attribute(bars[3], "data-base"), Some("1"));
    assert_eq!(r.by_class("bar-label").len(), 2);
}

#[test]
fn tick_only_touches_transforms() {
    let mut r = render_standalone(&BarChart, "bar-chart", r#"{"values": [1, 2]}"#);
    let before = r.doc.descendants(r.host).len();
    let targets = r.targets.clone();
    BarChart.tick(&mut r.doc, &targets, 1.25);
    assert_eq!(r.doc.descendants(r.host).len(), before);
    let want = css_matrix(Affine::scale_non_uniform(1.0, bar_scale(1.0, 1, 1.25)));
    assert_eq!(r.doc.style(targets[1].node, "transform"), Some(want.as_str()));
}

#[test]
fn rerender_rederives_bases() {
    let mut r = render_standalone(&BarChart, "bar-chart", r#"{"values": [1, 2]}"#);
    r.rerender(&BarChart, "bar-chart", r#"{"values": [4, 2, 1]}"#);
    let bases: Vec<f64> = r.targets.iter().map(|t| t.base).collect();
    assert_eq!(bases, vec![1.0, 0.5, 0.25]);
    assert_eq!(r.by_class("bar").len(), 3);
}
