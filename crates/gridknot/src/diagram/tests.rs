use super::*;
use proptest::prelude::*;

/// 4×4 knot whose rows 0 and 1 are nested (`[0,3]` contains `[1,2]`).
fn nested_rows() -> GridDiagram {
    GridDiagram::from_columns(&[0, 1, 2, 3], &[3, 2, 0, 1]).unwrap()
}

#[test]
fn samples_match_their_token_tables() {
    let unknot = GridDiagram::from_tokens(&[vec!["x", "o"], vec!["o", "x"]]).unwrap();
    assert_eq!(samples::unknot(), unknot);
    assert!(samples::unknot().validate().is_ok());
}

#[test]
fn trefoil_is_valid_and_prints_as_table() {
    let d = samples::trefoil();
    assert_eq!(d.size(), 5);
    assert!(d.validate().is_ok());
    assert_eq!(d.get(0, 0), Some(Entry::X));
    assert_eq!(d.get(3, 0), Some(Entry::O));
    assert_eq!(d.get(0, 1), Some(Entry::Blank));
    assert_eq!(d.get(5, 0), None);
    assert_eq!(d.find_xo(Axis::Row, 3), Some((3, 0)));
    assert_eq!(d.find_xo(Axis::Col, 2), Some((2, 0)));
    assert_eq!(d.find_first(Axis::Col, 9, Entry::X), None);
    let text = d.to_string();
    assert_eq!(text.lines().next(), Some("x, ,o, , "));
    assert_eq!(text.lines().count(), 5);
}

#[test]
fn absolute_index_round_trips() {
    let d = samples::trefoil();
    assert_eq!(d.absolute_index(3, 0), 3);
    assert_eq!(d.absolute_index(1, 3), 16);
    assert_eq!(d.grid_position(16), (1, 3));
}

#[test]
fn construction_rejects_malformed_tables() {
    use Entry::{Blank as B, O, X};
    assert_eq!(
        GridDiagram::new(vec![vec![X]]),
        Err(DiagramError::TooSmall { size: 1 })
    );
    assert_eq!(
        GridDiagram::new(vec![vec![X, O], vec![O]]),
        Err(DiagramError::NotSquare {
            row: 1,
            len: 1,
            size: 2
        })
    );
    assert_eq!(
        GridDiagram::new(vec![vec![X, O], vec![X, O]]),
        Err(DiagramError::ColCount { index: 0, x: 2, o: 0 })
    );
    assert_eq!(
        GridDiagram::new(vec![vec![X, B], vec![O, O]]),
        Err(DiagramError::RowCount { index: 0, x: 1, o: 0 })
    );
    // X and O in the same cell collapses to one entry.
    assert!(matches!(
        GridDiagram::from_columns(&[0, 1], &[0, 1]),
        Err(DiagramError::RowCount { .. })
    ));
}

#[test]
fn tokens_parse_with_positions() {
    let ok = GridDiagram::from_tokens(&[vec!["x", "o"], vec!["o", "x"]]).unwrap();
    assert_eq!(ok, samples::unknot());
    let err = GridDiagram::from_tokens(&[vec!["x", "o"], vec!["o", "?"]]).unwrap_err();
    assert_eq!(
        err,
        DiagramError::UnknownToken {
            row: 1,
            col: 1,
            token: "?".into()
        }
    );
}

#[test]
fn translate_rotates_rows_and_cols() {
    let d = samples::trefoil();
    let mut up = d.clone();
    up.translate(Direction::Up).unwrap();
    assert_eq!(up.row(4), d.row(0));
    assert_eq!(up.row(0), d.row(1));

    let mut right = d.clone();
    right.translate(Direction::Right).unwrap();
    assert_eq!(right.col(0), d.col(4));

    for dir in Direction::ALL {
        let mut g = d.clone();
        g.translate(dir).unwrap();
        assert!(g.validate().is_ok());
        g.translate(dir.reverse()).unwrap();
        assert_eq!(g, d);
    }
}

#[test]
fn four_translations_restore_a_4x4_grid() {
    let d = nested_rows();
    for dir in Direction::ALL {
        let mut g = d.clone();
        for _ in 0..4 {
            g.translate(dir).unwrap();
        }
        assert_eq!(g, d);
    }
}

#[test]
fn commuting_interleaved_rows_is_rejected_without_change() {
    let d = samples::trefoil();
    let mut g = d.clone();
    // Row 0 spans columns [0, 2], row 1 spans [1, 3].
    assert!(g.are_interleaved(Axis::Row, 0, 1).unwrap());
    assert_eq!(
        g.commute(Axis::Row, 0),
        Err(CromwellError::Interleaved {
            axis: Axis::Row,
            a: 0,
            b: 1
        })
    );
    assert_eq!(g, d);
}

#[test]
fn commuting_nested_rows_swaps_and_is_an_involution() {
    let d = nested_rows();
    let mut g = d.clone();
    g.commute(Axis::Row, 0).unwrap();
    assert_eq!(g.row(0), d.row(1));
    assert_eq!(g.row(1), d.row(0));
    assert!(g.validate().is_ok());
    g.commute(Axis::Row, 0).unwrap();
    assert_eq!(g, d);
}

#[test]
fn commuting_the_last_row_has_no_neighbor() {
    let mut g = samples::trefoil();
    assert_eq!(
        g.commute(Axis::Col, 4),
        Err(CromwellError::NoAdjacent {
            axis: Axis::Col,
            index: 4
        })
    );
    assert!(matches!(
        g.commute(Axis::Row, usize::MAX),
        Err(CromwellError::NoAdjacent { .. })
    ));
}

#[test]
fn stabilize_builds_the_expected_block() {
    use Entry::{Blank as B, O, X};
    let d = samples::trefoil();
    let expected = [
        (Corner::NW, [[B, X], [X, O]]),
        (Corner::SW, [[X, O], [B, X]]),
        (Corner::NE, [[X, B], [O, X]]),
        (Corner::SE, [[O, X], [X, B]]),
    ];
    for (corner, block) in expected {
        let mut g = d.clone();
        g.stabilize(corner, 2, 2).unwrap();
        assert_eq!(g.size(), 6);
        assert!(g.validate().is_ok());
        for (di, row) in block.iter().enumerate() {
            for (dj, &e) in row.iter().enumerate() {
                assert_eq!(g.get(2 + di, 2 + dj), Some(e), "corner {corner}");
            }
        }
    }
}

#[test]
fn stabilize_then_destabilize_restores_every_cell() {
    let d = samples::trefoil();
    for i in 0..d.size() {
        for j in 0..d.size() {
            if d.get(i, j) == Some(Entry::Blank) {
                continue;
            }
            for corner in Corner::ALL {
                let mut g = d.clone();
                g.stabilize(corner, i, j).unwrap();
                g.destabilize(i, j).unwrap();
                assert_eq!(g, d, "stabilize:{corner}:{i}:{j}");
            }
        }
    }
}

#[test]
fn stabilize_rejects_blank_and_outside_cells() {
    let d = samples::trefoil();
    let mut g = d.clone();
    assert_eq!(
        g.stabilize(Corner::NW, 0, 1),
        Err(CromwellError::NotFound { row: 0, col: 1 })
    );
    assert_eq!(
        g.stabilize(Corner::SE, 7, 0),
        Err(CromwellError::OutOfBounds {
            row: 7,
            col: 0,
            size: 5
        })
    );
    assert_eq!(g, d);
}

#[test]
fn destabilize_rejects_invalid_blocks() {
    let d = samples::trefoil();
    let mut g = d.clone();
    // Block at (0,0) is [[x, _], [_, x]]: two blanks.
    assert_eq!(
        g.destabilize(0, 0),
        Err(CromwellError::InvalidSubgrid { row: 0, col: 0 })
    );
    // Block at (0,1) is [[_, o], [x, _]]: two blanks, no doubled entry.
    assert_eq!(
        g.destabilize(0, 1),
        Err(CromwellError::InvalidSubgrid { row: 0, col: 1 })
    );
    assert!(matches!(
        g.destabilize(4, 0),
        Err(CromwellError::OutOfBounds { .. })
    ));
    assert_eq!(g, d);
}

#[test]
fn moves_parse_and_print() {
    let cases = [
        ("translate:up", CromwellMove::Translate(Direction::Up)),
        (
            "commute:col:2",
            CromwellMove::Commute {
                axis: Axis::Col,
                index: 2,
            },
        ),
        (
            "stabilize:ne:1:3",
            CromwellMove::Stabilize {
                corner: Corner::NE,
                row: 1,
                col: 3,
            },
        ),
        ("destabilize:0:4", CromwellMove::Destabilize { row: 0, col: 4 }),
    ];
    for (text, mv) in cases {
        assert_eq!(text.parse::<CromwellMove>().unwrap(), mv);
        assert_eq!(mv.to_string(), text);
    }
    assert_eq!(
        " Translate : L ".parse::<CromwellMove>().unwrap(),
        CromwellMove::Translate(Direction::Left)
    );
    for bad in ["spin:up", "translate", "commute:row", "stabilize:xx:1:1", "destabilize:a:1"] {
        match bad.parse::<CromwellMove>() {
            Err(CromwellError::Parse { input, .. }) => assert_eq!(input, bad),
            other => panic!("{bad}: {other:?}"),
        }
    }
    let err = "stabilize:xx:1:1".parse::<CromwellMove>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot parse move \"stabilize:xx:1:1\": unknown corner token \"xx\""
    );
}

#[test]
fn apply_dispatches_and_reports() {
    let mut g = samples::trefoil();
    g.apply("stabilize:sw:3:0".parse().unwrap()).unwrap();
    assert_eq!(g.size(), 6);
    g.apply("destabilize:3:0".parse().unwrap()).unwrap();
    assert_eq!(g, samples::trefoil());
    assert!(g.apply("commute:row:0".parse().unwrap()).is_err());
}

#[test]
fn random_diagrams_are_valid_and_reproducible() {
    for size in 2..12 {
        let a = random_knot_diagram_seeded(size, 7).unwrap();
        let b = random_knot_diagram_seeded(size, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.size(), size);
        assert!(a.validate().is_ok());
    }
    assert_eq!(
        random_knot_diagram_seeded(1, 0),
        Err(DiagramError::TooSmall { size: 1 })
    );
}

fn arb_diagram() -> impl Strategy<Value = GridDiagram> {
    (2usize..7, any::<u64>()).prop_map(|(n, seed)| random_knot_diagram_seeded(n, seed).unwrap())
}

fn arb_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Row), Just(Axis::Col)]
}

fn arb_move() -> impl Strategy<Value = CromwellMove> {
    prop_oneof![
        prop::sample::select(Direction::ALL.to_vec()).prop_map(CromwellMove::Translate),
        (arb_axis(), 0usize..8).prop_map(|(axis, index)| CromwellMove::Commute { axis, index }),
        (prop::sample::select(Corner::ALL.to_vec()), 0usize..8, 0usize..8)
            .prop_map(|(corner, row, col)| CromwellMove::Stabilize { corner, row, col }),
        (0usize..8, 0usize..8).prop_map(|(row, col)| CromwellMove::Destabilize { row, col }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn moves_preserve_invariant_or_leave_grid_untouched(
        d in arb_diagram(),
        moves in prop::collection::vec(arb_move(), 0..16),
    ) {
        let mut g = d;
        for mv in moves {
            let before = g.clone();
            match g.apply(mv) {
                Ok(()) => prop_assert!(g.validate().is_ok(), "{mv} broke the grid"),
                Err(_) => prop_assert_eq!(&g, &before),
            }
        }
    }

    #[test]
    fn n_translations_are_the_identity(d in arb_diagram(), k in 0usize..4) {
        let dir = Direction::ALL[k];
        let mut g = d.clone();
        for _ in 0..d.size() {
            g.translate(dir).unwrap();
        }
        prop_assert_eq!(g, d);
    }

    #[test]
    fn commute_twice_is_the_identity(d in arb_diagram(), axis in arb_axis(), index in 0usize..6) {
        let mut g = d.clone();
        if g.commute(axis, index).is_ok() {
            g.commute(axis, index).unwrap();
            prop_assert_eq!(g, d);
        } else {
            prop_assert_eq!(g, d);
        }
    }

    #[test]
    fn stabilization_round_trips(
        d in arb_diagram(),
        row in 0usize..6,
        pick_x in any::<bool>(),
        corner in prop::sample::select(Corner::ALL.to_vec()),
    ) {
        let row = row % d.size();
        let entry = if pick_x { Entry::X } else { Entry::O };
        let col = d.find_first(Axis::Row, row, entry).unwrap();
        let mut g = d.clone();
        g.stabilize(corner, row, col).unwrap();
        prop_assert_eq!(g.size(), d.size() + 1);
        g.destabilize(row, col).unwrap();
        prop_assert_eq!(g, d);
    }
}
