use origami_geometry::{flatten, simplify, Path, PathMap, PathTree, Point, Style};
use proptest::prelude::*;

fn grid_point() -> impl Strategy<Value = Point> {
    (-50i32..50, -50i32..50).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

fn style() -> impl Strategy<Value = Style> {
    prop_oneof![
        Just(Style::Mountain),
        Just(Style::Valley),
        Just(Style::Edge),
        Just(Style::Cut),
    ]
}

fn path() -> impl Strategy<Value = Path> {
    (prop::collection::vec(grid_point(), 2..6), style()).prop_map(|(pts, s)| Path::new(pts, s))
}

/// Small grid so duplicates show up often.
fn coarse_path() -> impl Strategy<Value = Path> {
    let p = (0i32..3, 0i32..3).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)));
    (prop::collection::vec(p, 2..3), style()).prop_map(|(pts, s)| Path::new(pts, s))
}

/// Mirror lines whose reflection stays on the half-integer lattice, where a double
/// reflection is exact.
fn mirror_line() -> impl Strategy<Value = (Point, Point)> {
    (grid_point(), 0usize..4).prop_map(|(p, kind)| {
        let d = match kind {
            0 => Point::new(1.0, 0.0),
            1 => Point::new(0.0, 3.0),
            2 => Point::new(1.0, 1.0),
            _ => Point::new(1.0, -1.0),
        };
        (p, p + d)
    })
}

/// Arbitrary non-degenerate mirror lines.
fn oblique_line() -> impl Strategy<Value = (Point, Point)> {
    (grid_point(), 1i32..20, 1i32..20, any::<bool>()).prop_map(|(p, dx, dy, flip)| {
        let dy = if flip { -dy } else { dy };
        (p, p + Point::new(f64::from(dx) / 7.0, f64::from(dy) / 3.0))
    })
}

proptest! {
    #[test]
    fn reflect_twice_across_oblique_line_is_close(p in path(), (a, b) in oblique_line()) {
        let back = p.reflect(a, b).unwrap().reflect(a, b).unwrap();
        prop_assert_eq!(back.points.len(), p.points.len());
        for (q, r) in back.points.iter().zip(&p.points) {
            prop_assert!((q.x - r.x).abs() < 1e-9 && (q.y - r.y).abs() < 1e-9);
        }
    }

    #[test]
    fn reflect_twice_is_identity(p in path(), (a, b) in mirror_line()) {
        let back = p.reflect(a, b).unwrap().reflect(a, b).unwrap();
        prop_assert_eq!(back, p);
    }

    #[test]
    fn translations_compose(p in path(), a in grid_point(), b in grid_point()) {
        prop_assert_eq!(p.translate(a).translate(b), p.translate(a + b));
    }

    #[test]
    fn scales_compose(p in path(), k1 in -20i32..20, k2 in -20i32..20) {
        let (k1, k2) = (f64::from(k1), f64::from(k2));
        prop_assert_eq!(p.scale(k1).scale(k2), p.scale(k1 * k2));
    }

    #[test]
    fn simplify_is_idempotent(paths in prop::collection::vec(coarse_path(), 0..40)) {
        let once = simplify(&PathTree::from(paths.clone()));
        let twice = simplify(&PathTree::from(once.clone()));
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.len() <= paths.len());
        for (i, a) in once.iter().enumerate() {
            for b in &once[i + 1..] {
                prop_assert!(!(a.style == b.style && a.points == b.points));
            }
        }
    }

    #[test]
    fn tree_transforms_keep_leaf_count(paths in prop::collection::vec(path(), 0..10), d in grid_point()) {
        let tree = PathTree::Group(vec![
            PathTree::from(paths.clone()),
            PathTree::Group(vec![PathTree::from(paths.clone())]),
        ]);
        let moved = tree.translated(d).scaled(2.0);
        prop_assert_eq!(moved.path_count(), 2 * paths.len());
    }

    #[test]
    fn flatten_has_no_duplicates(paths in prop::collection::vec(coarse_path(), 0..20)) {
        let pts = flatten(&PathTree::from(paths));
        for (i, a) in pts.iter().enumerate() {
            prop_assert!(!pts[i + 1..].contains(a));
        }
    }
}
