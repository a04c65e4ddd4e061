use super::*;
use crate::point::Locatable;

fn palette() -> Vec<String> {
    vec!["red".to_string(), "purple".to_string()]
}

fn assert_non_decreasing(points: &[AnyPoint]) {
    assert!(
        points
            .windows(2)
            .all(|pair| pair[0].distance_orig() <= pair[1].distance_orig())
    );
}

#[test]
fn points_report_is_sorted() {
    let mut sampler = PointSampler::with_seed(-100, 100, 1);
    let report = SortReport::generate(SortKind::Points, &mut sampler, 25, &palette()).unwrap();
    assert_eq!(report.unsorted.len(), 25);
    assert_eq!(report.sorted.len(), 25);
    assert!(report.sorted.iter().all(|p| p.color().is_none()));
    assert_non_decreasing(&report.sorted);
}

#[test]
fn color_points_report_keeps_colors() {
    let mut sampler = PointSampler::with_seed(-100, 100, 2);
    let report =
        SortReport::generate(SortKind::ColorPoints, &mut sampler, 10, &palette()).unwrap();
    assert!(
        report
            .sorted
            .iter()
            .all(|p| matches!(p.color(), Some("red" | "purple")))
    );
    assert_non_decreasing(&report.sorted);
}

#[test]
fn mixed_report_is_sorted() {
    let mut sampler = PointSampler::with_seed(-100, 100, 3);
    let report = SortReport::generate(SortKind::Mixed, &mut sampler, 30, &palette()).unwrap();
    assert_non_decreasing(&report.sorted);
}

#[test]
fn sorting_is_a_permutation() {
    let mut sampler = PointSampler::with_seed(-100, 100, 4);
    let report = SortReport::generate(SortKind::Points, &mut sampler, 15, &palette()).unwrap();
    let mut before: Vec<_> = report.unsorted.iter().map(ToString::to_string).collect();
    let mut after: Vec<_> = report.sorted.iter().map(ToString::to_string).collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn labels_follow_kind() {
    assert_eq!(SortKind::Points.unsorted_label(), "unsorted points");
    assert_eq!(SortKind::ColorPoints.sorted_label(), "color points in order:");
}
