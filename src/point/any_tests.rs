use super::*;

fn mixed() -> Vec<AnyPoint> {
    vec![
        Point::new(10, 10).into(),
        ColorPoint::new(1, 0, "purple").into(),
        AdvancedPoint::new(3, 4, "green").unwrap().into(),
        Point::new(0, 0).into(),
    ]
}

#[test]
fn display_delegates_to_variant() {
    let rendered: Vec<_> = mixed().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["<10, 10>", "<1,0>(purple)", "<3,4>(green)", "<0, 0>"]);
}

#[test]
fn debug_of_mixed_collection_matches_display() {
    assert_eq!(
        format!("{:?}", mixed()),
        "[<10, 10>, <1,0>(purple), <3,4>(green), <0, 0>]"
    );
}

#[test]
fn color_is_none_for_plain_points() {
    let points = mixed();
    assert_eq!(points[0].color(), None);
    assert_eq!(points[1].color(), Some("purple"));
    assert_eq!(points[2].color(), Some("green"));
}

#[test]
fn coordinates_come_from_variant() {
    let points = mixed();
    assert_eq!(points[2].x(), Number::Int(3));
    assert_eq!(points[2].y(), Number::Int(4));
}

#[test]
fn equality_crosses_variants() {
    let plain: AnyPoint = Point::new(0, 5).into();
    let validated: AnyPoint = AdvancedPoint::new(4, 3, "red").unwrap().into();
    assert_eq!(plain, validated);
}
