use super::*;
use crate::diagram::{random_knot_diagram_seeded, samples, Entry};
use crate::geom::Vec3;
use proptest::prelude::*;

fn min_nonadjacent_distance(curve: &PolygonalCurve) -> f64 {
    let n = curve.len();
    let mut best = f64::INFINITY;
    for a in 0..n {
        for b in (a + 1)..n {
            if curve.segments_share_endpoint(a, b) {
                continue;
            }
            best = best.min(curve.segment(a).distance(&curve.segment(b)));
        }
    }
    best
}

#[test]
fn trefoil_traversal_visits_every_row_and_column() {
    let e = extract(&samples::trefoil()).unwrap();
    assert_eq!(e.traversal, vec![0, 3, 18, 16, 6, 9, 24, 22, 12, 10, 0]);
}

#[test]
fn trefoil_has_three_crossings_spliced_after_their_x() {
    let d = samples::trefoil();
    let e = extract(&d).unwrap();
    assert_eq!(
        e.crossings,
        vec![
            Crossing { row: 2, col: 3 },
            Crossing { row: 3, col: 1 },
            Crossing { row: 1, col: 2 },
        ]
    );
    for c in &e.crossings {
        assert_eq!(d.get(c.row, c.col), Some(Entry::Blank), "crossing {c}");
    }
    assert_eq!(
        e.topology,
        vec![0, 3, 18, 17, 16, 6, 8, 9, 24, 22, 12, 11, 10, 0]
    );
    assert_eq!(e.topology.len(), e.traversal.len() + e.crossings.len());
}

#[test]
fn trefoil_curve_has_fillers_and_lifted_crossings() {
    let e = extract(&samples::trefoil()).unwrap();
    assert_eq!(e.curve.len(), 24);
    assert_eq!(e.lifted.len(), 24);
    assert_eq!(e.lifted.iter().filter(|&&l| l).count(), 3);

    let v = e.curve.vertices();
    assert_eq!(v[0], Vec3::new(-2.0, 2.0, 0.0));
    // (3,3) X, then the crossing at (2,3) one cell up and lifted.
    assert_eq!(v[6], Vec3::new(1.0, -1.0, 0.0));
    assert_eq!(v[7], Vec3::new(1.0, 0.0, 1.0));
    assert!(e.lifted[7]);
    for (p, &up) in v.iter().zip(&e.lifted) {
        assert_eq!(p.z, if up { 1.0 } else { 0.0 });
    }
}

#[test]
fn unknot_is_a_unit_square() {
    let e = extract(&samples::unknot()).unwrap();
    assert_eq!(e.traversal, vec![0, 1, 3, 2, 0]);
    assert!(e.crossings.is_empty());
    assert_eq!(
        e.curve.vertices(),
        &[
            Vec3::new(-0.5, 0.5, 0.0),
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
        ]
    );
    assert_eq!(samples::unknot().generate_curve().unwrap(), e.curve);
}

#[test]
fn initial_curve_does_not_touch_itself() {
    let curve = extract_curve(&samples::trefoil()).unwrap();
    assert!(min_nonadjacent_distance(&curve) > 0.5);
    assert!(min_nonadjacent_distance(&curve.refine(4)) > 1e-3);
}

#[test]
fn embedding_scales_with_cfg() {
    let cfg = EmbedCfg {
        cell: 0.5,
        lift: 2.0,
    };
    let e = extract_with(&samples::trefoil(), cfg).unwrap();
    assert_eq!(e.curve.vertices()[7], Vec3::new(0.5, 0.0, 2.0));
    assert_eq!(e.curve.vertices()[0], Vec3::new(-1.0, 1.0, 0.0));
}

#[test]
fn two_component_link_is_rejected() {
    let link = GridDiagram::from_columns(&[0, 1, 2, 3], &[1, 0, 3, 2]).unwrap();
    assert_eq!(
        extract(&link),
        Err(DiagramError::Traversal {
            expected: 9,
            found: 5
        })
    );
}

#[test]
fn crossings_need_a_full_traversal() {
    let d = samples::trefoil();
    assert_eq!(
        find_crossings(&d, &[0, 3, 18]),
        Err(DiagramError::Traversal {
            expected: 11,
            found: 3
        })
    );
    let walk = traverse(&d).unwrap();
    let per_column = find_crossings(&d, &walk).unwrap();
    assert_eq!(
        splice(&d, &walk[..7], &per_column),
        Err(DiagramError::Traversal {
            expected: 11,
            found: 7
        })
    );
    let (topology, lifted) = splice(&d, &walk, &per_column).unwrap();
    assert_eq!(topology.len(), 14);
    assert_eq!(lifted.iter().filter(|&&l| l).count(), 3);
}

#[test]
fn diagonal_jump_in_topology_is_an_error() {
    let d = samples::trefoil();
    assert_eq!(
        embed(&d, &[0, 6], &[false, false], EmbedCfg::default()),
        Err(DiagramError::Crossing { from: 0, to: 6 })
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn extraction_counts_and_geometry(n in 2usize..10, seed in any::<u64>()) {
        let d = random_knot_diagram_seeded(n, seed).unwrap();
        let e = extract(&d).unwrap();
        prop_assert_eq!(e.traversal.len(), 2 * n + 1);
        prop_assert_eq!(e.traversal.first(), e.traversal.last());
        prop_assert_eq!(e.topology.len(), 2 * n + 1 + e.crossings.len());

        let mut cells = e.crossings.clone();
        cells.sort();
        cells.dedup();
        prop_assert_eq!(cells.len(), e.crossings.len());
        for c in &e.crossings {
            prop_assert_eq!(d.get(c.row, c.col), Some(Entry::Blank));
        }

        // One vertex per cell step; steps are unit length or diagonal into a lift.
        let lifted = e.lifted.iter().filter(|&&l| l).count();
        prop_assert_eq!(lifted, e.crossings.len());
        for s in e.curve.segments() {
            let len = s.length();
            prop_assert!((len - 1.0).abs() < 1e-12 || (len - 2f64.sqrt()).abs() < 1e-12);
        }
        prop_assert!(min_nonadjacent_distance(&e.curve) > 0.5);
    }
}
