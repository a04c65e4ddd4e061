use super::*;
use crate::demo::{PointSampler, SortKind};
use crate::point::{AdvancedPoint, AnyPoint, ColorPoint, Point};

#[test]
fn format_list_brackets_and_commas() {
    let points = [Point::new(1, 2), Point::new(-3, 4)];
    assert_eq!(format_list(&points), "[<1, 2>, <-3, 4>]");
}

#[test]
fn format_list_empty() {
    let points: [Point; 0] = [];
    assert_eq!(format_list(&points), "[]");
}

#[test]
fn format_sort_prints_labels_and_lists() {
    let unsorted: Vec<AnyPoint> = vec![
        ColorPoint::new(10, 0, "red").into(),
        ColorPoint::new(1, 0, "blue").into(),
    ];
    let report = SortReport {
        kind: SortKind::ColorPoints,
        sorted: vec![unsorted[1].clone(), unsorted[0].clone()],
        unsorted,
    };

    let output = TextFormatter.format_sort(&report).unwrap();

    assert_eq!(
        output,
        "random color points:\n[<10,0>(red), <1,0>(blue)]\ncolor points in order:\n[<1,0>(blue), <10,0>(red)]\n"
    );
}

#[test]
fn format_estimate_reports_ratio() {
    let estimate = Estimate {
        trials: 2500,
        equal_pairs: 10,
    };
    assert_eq!(
        TextFormatter.format_estimate(&estimate).unwrap(),
        "probability is 1 in 250.0 \n"
    );
}

#[test]
fn format_estimate_without_matches() {
    let estimate = Estimate {
        trials: 0,
        equal_pairs: 0,
    };
    assert!(
        TextFormatter
            .format_estimate(&estimate)
            .unwrap()
            .contains("no equal-distance pairs")
    );
}

#[test]
fn format_walkthrough_prints_distance_and_record_point() {
    let walkthrough = Walkthrough {
        first: AdvancedPoint::new(1, 2, "blue").unwrap(),
        second: AdvancedPoint::new(-1, -2, "blue").unwrap(),
        distance: 20.0_f64.sqrt(),
        from_record: AdvancedPoint::new(44, 20, "black").unwrap(),
    };
    assert_eq!(
        TextFormatter.format_walkthrough(&walkthrough).unwrap(),
        "4.47213595499958\n<44,20>(black)\n"
    );
}

#[test]
fn format_sort_from_sampler() {
    let mut sampler = PointSampler::with_seed(-5, 5, 8);
    let report = SortReport::generate(SortKind::Points, &mut sampler, 3, &[]).unwrap();
    let output = TextFormatter.format_sort(&report).unwrap();
    assert!(output.starts_with("unsorted points\n["));
    assert_eq!(output.lines().count(), 4);
}
