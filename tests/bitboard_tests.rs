use sea_battle::{BitBoardError, Coord, BB};

#[test]
fn test_insert_and_contains() {
    let mut bb = BB::new();
    assert!(bb.is_empty());
    bb.insert(Coord::new(1, 1)).unwrap();
    assert!(bb.contains(Coord::new(1, 1)));
    assert!(!bb.contains(Coord::new(1, 2)));
    assert_eq!(
        bb.insert(Coord::new(6, 0)),
        Err(BitBoardError::IndexOutOfBounds { row: 6, col: 0 })
    );
    assert!(!bb.contains(Coord::new(10, 10)));
    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BB::from_cells([Coord::new(3, 3), Coord::new(0, 1)]).unwrap();
    let cells: Vec<_> = bb.iter().collect();
    assert_eq!(cells, vec![Coord::new(0, 1), Coord::new(3, 3)]);
}

#[test]
fn test_halo_is_clipped_to_board() {
    let corner = BB::from_cells([Coord::new(0, 0)]).unwrap();
    assert_eq!(corner.halo().count_ones(), 4);

    let far_corner = BB::from_cells([Coord::new(5, 5)]).unwrap();
    assert_eq!(far_corner.halo().count_ones(), 4);

    let middle = BB::from_cells([Coord::new(2, 2), Coord::new(2, 3)]).unwrap();
    assert_eq!(middle.halo().count_ones(), 12);
}

#[test]
fn test_union() {
    let a = BB::from_cells([Coord::new(0, 0), Coord::new(1, 1)]).unwrap();
    let b = BB::from_cells([Coord::new(1, 1), Coord::new(5, 5)]).unwrap();
    assert_eq!((a | b).count_ones(), 3);

    let mut c = a;
    c |= b;
    assert_eq!(c, a | b);
}
