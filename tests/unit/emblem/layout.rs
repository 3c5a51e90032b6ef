use super::*;

#[test]
fn square_centers_match_emblem_grid() {
    let m = EmblemMetrics::default();
    assert_eq!(m.overlap(), 48.0);
    let centers = m.square_centers();
    assert_eq!(centers[0], Point::new(252.0 - 192.0, 180.0 - 96.0));
    assert_eq!(centers[1], Point::new(252.0, 84.0));
    assert_eq!(centers[5], Point::new(444.0, 276.0));
}

#[test]
fn square_path_is_a_closed_diamond() {
    let m = EmblemMetrics::default();
    let path = m.square_path(Point::new(100.0, 100.0));
    let els = path.elements();
    assert_eq!(els.len(), 5);
    assert_eq!(els[0], kurbo::PathEl::MoveTo(Point::new(-20.0, 100.0)));
    assert_eq!(els[2], kurbo::PathEl::LineTo(Point::new(220.0, 100.0)));
    assert_eq!(els[4], kurbo::PathEl::ClosePath);
}

#[test]
fn every_element_has_unique_registry_paths() {
    let m = EmblemMetrics::default();
    let p = Palette::default();
    for kind in ElementKind::outer().chain(ElementKind::INNER) {
        let layout = element_layout(kind, &m, &p);
        let mut paths: Vec<&str> = layout.primitives.iter().map(|p| p.path.as_str()).collect();
        assert!(!paths.is_empty(), "{kind}");
        let n = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), n, "{kind}");
    }
}

#[test]
fn dot_cluster_has_twelve_indexed_circles() {
    let layout = element_layout(
        ElementKind::DotCluster,
        &EmblemMetrics::default(),
        &Palette::default(),
    );
    assert_eq!(layout.primitives.len(), 12);
    assert_eq!(layout.primitives[11].path, "circles.11");
    assert_eq!(layout.offset, Vec2::new(195.0, 139.0));
    assert!(matches!(layout.primitives[7].shape, Shape::Circle(c) if c.radius == 7.73));
}

#[test]
fn leaf_clusters_carry_three_leaves_and_three_stems() {
    let layout = element_layout(
        ElementKind::BottomLeaves,
        &EmblemMetrics::default(),
        &Palette::default(),
    );
    let paths: Vec<&str> = layout.primitives.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["leafs.0", "leafs.1", "leafs.2", "leftStem", "centerStem", "rightStem"]
    );
    assert_ne!(layout.primitives[3].transform, Affine::IDENTITY);
    assert_eq!(layout.primitives[4].transform, Affine::IDENTITY);
}

#[test]
fn labels_are_stable() {
    assert_eq!(ElementKind::OuterSquare(3).label(), "outer-square-3");
    assert_eq!(ElementKind::DotCluster.to_string(), "dot-cluster");
    assert!(ElementKind::OuterSquare(0).is_outer());
    assert!(!ElementKind::Wordmark.is_outer());
}

#[test]
fn palette_matches_brand_colors() {
    let p = Palette::default();
    assert_eq!(p.orange.to_hex(), "#ef5d23");
    assert_eq!(p.black_stem.to_hex(), "#191125");
}
