use map_engine::generator::{
    hash_str, organic_shape, points_to_path, road_path, seeded_unit, PathCmd, PathData,
};
use map_graph::Point;
use proptest::prelude::*;

fn all_finite(path: &PathData) -> bool {
    path.commands().iter().all(|cmd| match cmd {
        PathCmd::MoveTo(p) | PathCmd::LineTo(p) => p.x.is_finite() && p.y.is_finite(),
        PathCmd::QuadTo { ctrl, to } => {
            ctrl.x.is_finite() && ctrl.y.is_finite() && to.x.is_finite() && to.y.is_finite()
        }
        PathCmd::Close => true,
    })
}

fn coord() -> impl Strategy<Value = f32> {
    -2000.0f32..2000.0
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn seeded_unit_stays_in_range(seed in any::<u64>()) {
        let v = seeded_unit(seed);
        prop_assert!(v >= 0.0);
        prop_assert!(v < 1.0);
        prop_assert_eq!(v, seeded_unit(seed));
    }

    #[test]
    fn hash_str_is_pure(s in any::<String>()) {
        prop_assert_eq!(hash_str(&s), hash_str(&s));
    }

    #[test]
    fn shape_is_deterministic_with_exact_cardinality(
        center in point(),
        radius in 1.0f32..300.0,
        sides in 3u32..24,
        randomness in 0.0f32..1.0,
        seed in any::<u64>(),
    ) {
        let first = organic_shape(center, radius, sides, randomness, seed);
        let second = organic_shape(center, radius, sides, randomness, seed);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), sides as usize);
        prop_assert!(first.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn shape_vertices_stay_in_radius_band(
        center in point(),
        radius in 1.0f32..300.0,
        sides in 3u32..24,
        randomness in 0.0f32..1.0,
        seed in any::<u64>(),
    ) {
        let band = radius * randomness / 2.0;
        for p in organic_shape(center, radius, sides, randomness, seed) {
            let d = center.distance(p);
            prop_assert!(d >= radius - band - 1e-2);
            prop_assert!(d <= radius + band + 1e-2);
        }
    }

    #[test]
    fn outline_compiles_closed_and_deterministic(
        center in point(),
        radius in 1.0f32..300.0,
        sides in 3u32..24,
        randomness in 0.0f32..1.0,
        seed in any::<u64>(),
        straight_percent in 0u32..=100,
    ) {
        let vertices = organic_shape(center, radius, sides, randomness, seed);
        let path = points_to_path(&vertices, seed, straight_percent);

        prop_assert_eq!(&path, &points_to_path(&vertices, seed, straight_percent));
        prop_assert_eq!(path.start(), Some(vertices[0]));
        prop_assert!(path.is_closed());
        prop_assert!(all_finite(&path));
    }

    #[test]
    fn road_hits_both_endpoints_exactly(
        from in point(),
        to in point(),
        seed in any::<u64>(),
        curviness in 0.0f32..1.0,
        segments in 1u32..12,
    ) {
        let path = road_path(from, to, seed, curviness, segments);

        prop_assert!(all_finite(&path));
        prop_assert_eq!(path.start(), Some(from));
        if from.distance(to) > 1e-5 {
            prop_assert_eq!(path.end(), Some(to));
        }
        prop_assert_eq!(&path, &road_path(from, to, seed, curviness, segments));
    }

    #[test]
    fn road_between_identical_points_never_produces_nan(
        spot in point(),
        seed in any::<u64>(),
        curviness in 0.0f32..1.0,
        segments in 1u32..12,
    ) {
        let path = road_path(spot, spot, seed, curviness, segments);

        prop_assert!(all_finite(&path));
        prop_assert_eq!(path.commands(), &[PathCmd::MoveTo(spot)]);
    }

    #[test]
    fn outline_svg_round_trips_through_display(
        center in point(),
        seed in any::<u64>(),
    ) {
        let vertices = organic_shape(center, 80.0, 8, 0.3, seed);
        let path = points_to_path(&vertices, seed, 40);

        prop_assert_eq!(path.to_svg(), path.to_string());
        prop_assert!(path.to_svg().starts_with("M "));
        prop_assert!(path.to_svg().ends_with('Z'));
    }
}
