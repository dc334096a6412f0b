mod common;

use common::*;
use hoversim::{
    Aabb, Rgba, Sampling, Surface, TrackMap, TrackMapError, decode_height_fraction,
    encode_height_fraction, glam::Vec3A,
};

fn unit_bounds(width: f32, height: f32) -> Aabb {
    Aabb::new(Vec3A::ZERO, Vec3A::new(width, 100.0, height))
}

/// 2x2 raster with fractions 0, 0.25 on the first row and 0.5, 0.75 on the second
fn corner_map() -> TrackMap {
    let fractions = [[0.0, 0.25], [0.5, 0.75]];
    map_from_fn(2, 2, unit_bounds(2.0, 2.0), |px, py| {
        encode_height_fraction(fractions[py][px])
    })
}

#[test]
fn height_codec_round_trip() {
    for fraction in [0.0, 0.1, 0.25, 0.5, 0.731, 0.999] {
        let decoded = decode_height_fraction(encode_height_fraction(fraction));
        assert!(
            (decoded - fraction).abs() < 1e-6,
            "{fraction} decoded as {decoded}"
        );
    }
}

#[test]
fn height_codec_channel_weights() {
    // Alpha is the most significant channel, red the least
    assert_eq!(decode_height_fraction([0, 0, 0, 0]), 0.0);
    assert_eq!(decode_height_fraction([0, 0, 0, 128]), 0.5);
    assert_eq!(decode_height_fraction([0, 0, 128, 0]), 0.5 / 256.0);
    assert!(decode_height_fraction([255, 255, 255, 255]) < 1.0);
    assert!(decode_height_fraction(encode_height_fraction(1.0)) < 1.0);
    assert!(decode_height_fraction([255, 255, 255, 255]) > 0.9999);
}

#[test]
fn bilinear_height_is_bounded_by_corners() {
    init_for_test();

    let map = corner_map();

    // Halfway between the four texels
    let height = map.lookup_height(0.5, 0.5);
    assert!((height - 62.5).abs() < 1e-3, "got {height}");

    for (x, z) in [(0.1, 0.9), (0.7, 0.2), (0.99, 0.99)] {
        let height = map.lookup_height(x, z);
        assert!((25.0 - 1e-3..=100.0 + 1e-3).contains(&height), "({x}, {z}) -> {height}");
    }
}

#[test]
fn bilinear_matches_nearest_at_texel_centers() {
    let map = corner_map();

    for (x, z) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
        assert_eq!(
            map.lookup_height(x, z),
            map.lookup_height_nearest(x, z),
            "at ({x}, {z})"
        );
        assert_eq!(
            map.lookup_height_with(x, z, Sampling::Bilinear),
            map.lookup_height_with(x, z, Sampling::Nearest)
        );
    }

    assert!((map.lookup_height(1.0, 1.0) - 25.0).abs() < 1e-3);
}

#[test]
fn top_of_bounds_is_fraction_zero() {
    let map = map_from_fn(2, 2, unit_bounds(2.0, 2.0), |_, _| [0; 4]);
    assert_eq!(map.lookup_height(1.0, 1.0), 100.0);
}

#[test]
fn pixel_bounds_are_checked_per_axis() {
    // Deliberately not square so a mixed up axis would be caught
    let map = map_from_fn(3, 2, unit_bounds(3.0, 2.0), |_, _| WHITE);

    assert!(map.sample_pixel(0, 0).1);
    assert!(map.sample_pixel(2, 0).1);
    assert!(map.sample_pixel(2, 1).1);

    assert!(!map.sample_pixel(3, 0).1);
    assert!(!map.sample_pixel(0, 2).1);
    assert!(!map.sample_pixel(2, 2).1);
    assert!(!map.sample_pixel(-1, 0).1);
    assert!(!map.sample_pixel(0, -1).1);

    assert_eq!(map.sample_pixel(0, 2).0, Rgba::TRANSPARENT);
    assert_eq!(map.sample_pixel(1, 1).0, Rgba::WHITE);
}

#[test]
fn outside_of_map_reads_as_off_track() {
    let map = uniform_map(WHITE);

    assert_eq!(map.classify(0.0, 0.0), Surface::Lane);
    assert_eq!(map.lookup_color_nearest(500.0, 0.0), Rgba::TRANSPARENT);
    assert_eq!(map.classify(0.0, -500.0), Surface::OffTrack { red: 0.0 });
}

#[test]
fn world_pixel_mapping() {
    let map = map_from_fn(4, 8, track_bounds(), |_, _| WHITE);

    assert_eq!(map.world_to_pixel(-50.0, -50.0), (0.0, 0.0));
    assert_eq!(map.world_to_pixel(0.0, 0.0), (2.0, 4.0));
    assert_eq!(map.world_to_pixel(50.0, 50.0), (4.0, 8.0));

    let (x, z) = map.pixel_to_world(1.0, 6.0);
    assert!((x + 25.0).abs() < 1e-4);
    assert!((z - 25.0).abs() < 1e-4);
}

#[test]
fn invalid_rasters_are_rejected() {
    init_for_test();

    let bounds = track_bounds();

    assert!(matches!(
        TrackMap::new(0, 4, Vec::<u8>::new(), bounds),
        Err(TrackMapError::EmptyRaster { width: 0, height: 4 })
    ));

    assert!(matches!(
        TrackMap::from_slice(2, 2, &[255; 12], bounds),
        Err(TrackMapError::BufferSize {
            expected: 16,
            actual: 12
        })
    ));

    let flat = Aabb::new(Vec3A::ZERO, Vec3A::new(10.0, 10.0, 0.0));
    assert!(matches!(
        TrackMap::from_slice(2, 2, &[255; 16], flat),
        Err(TrackMapError::DegenerateBounds { .. })
    ));

    let map = TrackMap::from_slice(2, 2, &[255; 16], bounds).unwrap();
    assert_eq!((map.width(), map.height()), (2, 2));
    assert_eq!(map.bounds(), &bounds);
}

#[test]
fn surface_classification() {
    assert_eq!(Surface::classify(Rgba::WHITE), Surface::Lane);
    assert_eq!(Surface::classify(Rgba::from_bytes(BOOST_PAD)), Surface::BoostPad);
    assert_eq!(
        Surface::classify(Rgba::new(1.0, 1.0, 0.35, 1.0)),
        Surface::Checkpoint(3)
    );
    assert_eq!(
        Surface::classify(Rgba::from_bytes([255, 255, 0, 255])),
        Surface::Checkpoint(0)
    );

    let wall = Surface::classify(Rgba::from_bytes(WALL));
    assert!(matches!(wall, Surface::OffTrack { red } if (red - 128.0 / 255.0).abs() < 1e-6));
    assert!(!wall.is_drivable());
    assert!(Surface::Checkpoint(2).is_drivable());
}

#[test]
fn bounds_from_mesh_extents() {
    let points = [
        Vec3A::new(-10.0, 0.0, 5.0),
        Vec3A::new(20.0, -3.0, -5.0),
        Vec3A::new(0.0, 7.0, 0.0),
    ];

    let bounds = Aabb::from_points(points);
    assert_eq!(bounds.min, Vec3A::new(-10.0, -3.0, -5.0));
    assert_eq!(bounds.max, Vec3A::new(20.0, 7.0, 5.0));
    assert_eq!(bounds.center(), Vec3A::new(5.0, 2.0, 0.0));
    assert!(bounds.has_area_xz());
    assert!(bounds.contains_xz(0.0, 0.0));
    assert!(!bounds.contains_xz(0.0, 6.0));

    let mut merged = Aabb::EMPTY;
    merged += Aabb::new(Vec3A::ZERO, Vec3A::ONE);
    let merged = merged + Aabb::new(Vec3A::splat(-1.0), Vec3A::ZERO);
    assert_eq!(merged, Aabb::new(Vec3A::splat(-1.0), Vec3A::ONE));
    assert!(!Aabb::EMPTY.has_area_xz());
}

/// 2x2 raster of black, red, green and blue texels
fn color_corner_map() -> TrackMap {
    let colors = [[[0, 0, 0, 255], [255, 0, 0, 255]], [[0, 255, 0, 255], [0, 0, 255, 255]]];
    map_from_fn(2, 2, unit_bounds(2.0, 2.0), |px, py| colors[py][px])
}

#[test]
fn bilinear_color_is_bounded_by_corners() {
    let map = color_corner_map();

    let center = map.lookup_color_bilinear(0.5, 0.5);
    assert!((center.r - 0.25).abs() < 1e-6);
    assert!((center.g - 0.25).abs() < 1e-6);
    assert!((center.b - 0.25).abs() < 1e-6);
    assert_eq!(center.a, 1.0);

    for (x, z) in [(0.1, 0.9), (0.7, 0.2), (0.99, 0.99), (0.3, 0.6)] {
        let color = map.lookup_color_bilinear(x, z);
        for channel in [color.r, color.g, color.b, color.a] {
            assert!((0.0..=1.0).contains(&channel), "({x}, {z}) -> {color:?}");
        }
        assert_eq!(color.a, 1.0);
    }
}

#[test]
fn bilinear_color_matches_nearest_at_texel_centers() {
    let map = color_corner_map();

    for (x, z) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
        assert_eq!(
            map.lookup_color_bilinear(x, z),
            map.lookup_color_nearest(x, z),
            "at ({x}, {z})"
        );
        assert_eq!(
            map.lookup_color_with(x, z, Sampling::Bilinear),
            map.lookup_color_with(x, z, Sampling::Nearest)
        );
    }

    assert_eq!(map.lookup_color_nearest(1.0, 0.0), Rgba::from_bytes([255, 0, 0, 255]));
}

#[test]
fn far_edges_read_the_last_texels() {
    let lane = uniform_map(WHITE);
    let height = flat_height_map(0.5);

    for (x, z) in [
        (47.0, 0.0),
        (0.0, 47.0),
        (49.99, 0.0),
        (0.0, 49.99),
        (50.0, 50.0),
        (-50.0, -50.0),
        (-49.0, 0.0),
    ] {
        assert_eq!(lane.classify(x, z), Surface::Lane, "at ({x}, {z})");
        assert_eq!(lane.lookup_color_bilinear(x, z), Rgba::WHITE, "at ({x}, {z})");
        assert_eq!(height.lookup_height(x, z), 50.0, "at ({x}, {z})");
        assert_eq!(height.lookup_height_nearest(x, z), 50.0, "at ({x}, {z})");
    }

    // Just past the bounds is still off the map
    assert_eq!(lane.classify(50.5, 0.0), Surface::OffTrack { red: 0.0 });
    assert_eq!(lane.classify(0.0, 50.5), Surface::OffTrack { red: 0.0 });
}

#[test]
fn oversized_dimensions_are_rejected() {
    init_for_test();

    assert!(matches!(
        TrackMap::from_slice(usize::MAX, 2, &[255; 16], track_bounds()),
        Err(TrackMapError::BufferSize {
            expected: usize::MAX,
            actual: 16
        })
    ));
    assert!(matches!(
        TrackMap::from_slice(usize::MAX / 4 + 1, 1, &[255; 16], track_bounds()),
        Err(TrackMapError::BufferSize { .. })
    ));
}
