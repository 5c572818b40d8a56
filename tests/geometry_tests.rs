use lasergrid::geometry::{Direction, Grid, Offset, Point, Side, Zone, MAX_CENTER_SIZE};
use lasergrid::LaserError;
use rstest::rstest;

fn g5() -> Grid {
    Grid::new(5).unwrap()
}

#[test]
fn test_dimensions() {
    let g = g5();
    assert_eq!(g.total_size(), 9);
    assert_eq!(g.last(), 8);
    assert_eq!(g.max_trace_steps(), 4 * 81 + 1);
}

#[rstest]
#[case(0)]
#[case(MAX_CENTER_SIZE + 1)]
#[case(100_000)]
#[case(4_294_967_296)]
#[case(usize::MAX)]
fn test_unusable_size_rejected(#[case] size: usize) {
    assert!(matches!(Grid::new(size), Err(LaserError::InvalidSize(s)) if s == size));
}

#[test]
fn test_largest_size_accepted() {
    let g = Grid::new(MAX_CENTER_SIZE).unwrap();
    let n = MAX_CENTER_SIZE + 4;
    assert_eq!(g.last(), n as i32 - 1);
    assert_eq!(g.max_trace_steps(), 4 * n * n + 1);
}

#[rstest]
#[case(Side::Top, Direction::Down)]
#[case(Side::Bottom, Direction::Up)]
#[case(Side::Left, Direction::Right)]
#[case(Side::Right, Direction::Left)]
fn test_side_direction(#[case] side: Side, #[case] expected: Direction) {
    assert_eq!(side.direction(), expected);
}

#[rstest]
#[case(Side::Top, 3, Point::new(1, 4), Point::new(0, 4))]
#[case(Side::Bottom, 3, Point::new(7, 4), Point::new(8, 4))]
#[case(Side::Left, 4, Point::new(5, 1), Point::new(5, 0))]
#[case(Side::Right, 2, Point::new(3, 7), Point::new(3, 8))]
fn test_entry_and_border_cells(
    #[case] side: Side,
    #[case] index: usize,
    #[case] entry: Point,
    #[case] border: Point,
) {
    let g = g5();
    assert_eq!(g.entry_dot(side, index), entry);
    assert_eq!(g.border_cell(side, index), border);
    // The dot a clue fires from projects onto the clue's own cell.
    assert_eq!(g.exit_border_cell(entry), Some(border));
}

#[rstest]
#[case(Point::new(1, 3), Some(Point::new(0, 3)))]
#[case(Point::new(7, 5), Some(Point::new(8, 5)))]
#[case(Point::new(2, 1), Some(Point::new(2, 0)))]
#[case(Point::new(6, 7), Some(Point::new(6, 8)))]
#[case(Point::new(4, 4), None)]
#[case(Point::new(-1, 4), None)]
#[case(Point::new(0, 4), None)]
fn test_exit_border_cell(#[case] dot: Point, #[case] expected: Option<Point>) {
    assert_eq!(g5().exit_border_cell(dot), expected);
}

#[rstest]
#[case(Point::new(0, 0), Zone::Border)]
#[case(Point::new(0, 4), Zone::Border)]
#[case(Point::new(8, 8), Zone::Border)]
#[case(Point::new(1, 1), Zone::CornerDot)]
#[case(Point::new(7, 1), Zone::CornerDot)]
#[case(Point::new(1, 4), Zone::Dot)]
#[case(Point::new(5, 7), Zone::Dot)]
#[case(Point::new(2, 2), Zone::Mirror)]
#[case(Point::new(6, 6), Zone::Mirror)]
#[case(Point::new(9, 3), Zone::Outside)]
#[case(Point::new(3, -1), Zone::Outside)]
fn test_zones(#[case] p: Point, #[case] expected: Zone) {
    assert_eq!(g5().zone(p), expected);
}

#[test]
fn test_offset_round_trip_and_limits() {
    let g = g5();
    assert_eq!(g.to_absolute(Offset::new(1, 1)), Point::new(3, 3));
    assert_eq!(g.offset_of(Point::new(3, 3)), Some(Offset::new(1, 1)));
    assert_eq!(g.offset_of(Point::new(1, 3)), None);
    assert!(g.contains_offset(Offset::new(4, 4)));
    assert!(!g.contains_offset(Offset::new(5, 0)));
}

#[rstest]
#[case(0, false)]
#[case(1, true)]
#[case(5, true)]
#[case(6, false)]
fn test_clue_index_range(#[case] index: usize, #[case] ok: bool) {
    assert_eq!(g5().check_index(Side::Left, index).is_ok(), ok);
}
