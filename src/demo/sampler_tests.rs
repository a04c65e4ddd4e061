use super::*;
use crate::number::Number;
use crate::point::Locatable;

fn in_range(number: Number, min: i64, max: i64) -> bool {
    matches!(number, Number::Int(value) if (min..=max).contains(&value))
}

#[test]
fn coordinates_stay_in_range() {
    let mut sampler = PointSampler::with_seed(-3, 3, 42);
    for _ in 0..500 {
        let point = sampler.point();
        assert!(in_range(point.x, -3, 3));
        assert!(in_range(point.y, -3, 3));
    }
}

#[test]
fn single_value_range_is_constant() {
    let mut sampler = PointSampler::with_seed(7, 7, 1);
    assert_eq!(sampler.point().to_string(), "<7, 7>");
}

#[test]
fn same_seed_same_sequence() {
    let mut a = PointSampler::with_seed(-100, 100, 9);
    let mut b = PointSampler::with_seed(-100, 100, 9);
    for _ in 0..20 {
        assert_eq!(a.point().to_string(), b.point().to_string());
    }
}

#[test]
#[should_panic(expected = "empty coordinate range")]
fn inverted_range_panics() {
    let _ = PointSampler::new(5, -5);
}

#[test]
fn color_point_uses_palette() {
    let palette = vec!["only".to_string()];
    let mut sampler = PointSampler::with_seed(0, 10, 3);
    assert_eq!(sampler.color_point(&palette).color, "only");
}

#[test]
fn color_point_empty_palette_falls_back() {
    let mut sampler = PointSampler::with_seed(0, 10, 3);
    assert_eq!(sampler.color_point(&[]).color, "black");
}

#[test]
fn advanced_point_uses_allowed_color() {
    let mut sampler = PointSampler::with_seed(-5, 5, 11);
    for _ in 0..20 {
        let point = sampler.advanced_point().unwrap();
        assert!(crate::colors::is_allowed(point.color()));
    }
}

#[test]
fn any_point_produces_every_variant() {
    let palette = vec!["red".to_string()];
    let mut sampler = PointSampler::with_seed(-5, 5, 5);
    let (mut plain, mut colored, mut validated) = (0, 0, 0);
    for _ in 0..200 {
        match sampler.any_point(&palette).unwrap() {
            AnyPoint::Plain(_) => plain += 1,
            AnyPoint::Colored(_) => colored += 1,
            AnyPoint::Validated(_) => validated += 1,
        }
    }
    assert!(plain > 0 && colored > 0 && validated > 0);
}

#[test]
fn from_config_respects_range() {
    let config = SamplingConfig {
        min_coord: 1,
        max_coord: 2,
        ..SamplingConfig::default()
    };
    let mut sampler = PointSampler::from_config(&config, Some(4));
    let point = sampler.point();
    assert!(point.distance_orig() >= 2.0_f64.sqrt());
}
