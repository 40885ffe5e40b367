use gridbox::{Grid, GridError, MOORE_OFFSETS, SplitMix64};

const SIZE: usize = 10;

#[test]
fn ten_by_ten_scenario() {
    let mut grid: Grid<i32> = Grid::square(SIZE).unwrap();
    assert_eq!(grid.capacity(), SIZE * SIZE);

    assert_eq!(grid.idx(0, 0), 0);
    assert_eq!(grid.idx(1, 0), 1);
    assert_eq!(grid.idx(0, 1), 10);
    assert_eq!(grid.idx(6, 1), 16);
    assert_eq!(grid.idx(9, 9), 99);

    grid.put_index(1, 2).unwrap();
    assert_eq!(grid.get_index(1).unwrap(), Some(&2));

    grid.put(0, 1, 3).unwrap();
    assert_eq!(grid.get(0, 1), Some(&3));
    assert_ne!(grid.get_index(1).unwrap(), Some(&3));

    grid.put_index(15, 4).unwrap();
    assert_eq!(grid.get(5, 1), Some(&4));
}

#[test]
fn coordinate_round_trips() {
    for (w, h) in [(1, 1), (3, 7), (7, 3), (10, 10), (1, 5), (5, 1)] {
        let grid: Grid<()> = Grid::new(w, h).unwrap();
        assert_eq!(grid.capacity(), w * h);
        assert_eq!(grid.size(), grid.capacity());
        for y in 0..h {
            for x in 0..w {
                let i = grid.idx(x, y);
                assert_eq!((grid.x(i), grid.y(i)), (x, y));
            }
        }
        for i in 0..w * h {
            assert_eq!(grid.idx(grid.x(i), grid.y(i)), i);
        }
    }
}

#[test]
fn put_changes_exactly_one_slot() {
    let mut grid: Grid<u32> = Grid::new(6, 4).unwrap();
    grid.populate(&[1u32, 2, 3], &mut SplitMix64::new(8)).unwrap();
    let before = grid.clone();

    grid.put_index(17, 99).unwrap();
    for i in 0..grid.size() {
        if i == 17 {
            assert_eq!(grid.get_index(i).unwrap(), Some(&99));
        } else {
            assert_eq!(grid.get_index(i).unwrap(), before.get_index(i).unwrap());
        }
    }
}

#[test]
fn off_grid_reads_never_fail() {
    let grid: Grid<u8> = Grid::new(4, 3).unwrap();
    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (-5, -5), (100, 100), (i64::MIN, 0)] {
        assert_eq!(grid.get(x, y), None);
    }
}

#[test]
fn neighbors_at_extreme_coordinates_are_empty() {
    let grid: Grid<u8> = Grid::new(3, 3).unwrap();
    for (x, y) in [(i64::MIN, 0), (0, i64::MIN), (i64::MAX, 0), (0, i64::MAX), (i64::MIN, i64::MAX)] {
        assert_eq!(grid.neighbors(x, y), [None; 8]);
    }
}

#[test]
fn neighbors_match_offsets_everywhere() {
    let mut grid: Grid<usize> = Grid::new(5, 4).unwrap();
    for i in 0..grid.size() {
        grid.put_index(i, i).unwrap();
    }
    for i in 0..grid.size() {
        let (x, y) = (grid.x(i) as i64, grid.y(i) as i64);
        let n = grid.neighbors_of_index(i).unwrap();
        assert_eq!(n.len(), 8);
        for (k, (dx, dy)) in MOORE_OFFSETS.iter().enumerate() {
            let (nx, ny) = (x + dx, y + dy);
            let on_grid = nx >= 0 && ny >= 0 && nx < 5 && ny < 4;
            if on_grid {
                assert_eq!(n[k], Some(&((ny * 5 + nx) as usize)));
            } else {
                assert_eq!(n[k], None);
            }
        }
    }
}

#[test]
fn indexes_of_is_sound_complete_and_sorted() {
    let mut grid: Grid<char> = Grid::new(9, 7).unwrap();
    grid.populate(&[Some('a'), Some('b'), None], &mut SplitMix64::new(21)).unwrap();

    for value in [Some(&'a'), Some(&'b'), None] {
        let hits = grid.indexes_of(value);
        assert!(hits.windows(2).all(|p| p[0] < p[1]));
        assert!(hits.iter().all(|&i| grid.get_index(i).unwrap() == value));
        let expected = (0..grid.size())
            .filter(|&i| grid.get_index(i).unwrap() == value)
            .count();
        assert_eq!(hits.len(), expected);
    }
}

#[test]
fn clones_are_independent() {
    let mut original: Grid<String> = Grid::new(2, 2).unwrap();
    original.put(0, 0, "a".to_string()).unwrap();

    let mut copy = original.clone();
    copy.put(0, 0, "b".to_string()).unwrap();
    copy.put_index(3, "c".to_string()).unwrap();
    assert_eq!(original.get(0, 0).map(String::as_str), Some("a"));
    assert_eq!(original.get_index(3).unwrap(), None);

    original.put(1, 0, "d".to_string()).unwrap();
    assert_eq!(copy.get(1, 0), None);
    assert_eq!(copy.width(), original.width());
    assert_eq!(copy.height(), original.height());
}

#[test]
fn random_pick_lands_on_value() {
    let mut grid: Grid<u8> = Grid::square(12).unwrap();
    let mut rng = SplitMix64::new(2024);
    grid.populate(&[Some(1u8), None, None, None], &mut rng).unwrap();
    for _ in 0..50 {
        let i = grid.random_index_of(Some(&1), &mut rng).unwrap();
        assert_eq!(grid.get_index(i).unwrap(), Some(&1));
    }
}

#[test]
fn errors_surface_at_call_site() {
    let mut grid: Grid<u8> = Grid::new(2, 2).unwrap();
    assert_eq!(
        grid.put_index(4, 1),
        Err(GridError::IndexOutOfRange { index: 4, size: 4 })
    );
    assert!(Grid::<u8>::from_signed(-2, -2).is_err());
    let nothing: &[u8] = &[];
    assert!(grid.populate(nothing, &mut SplitMix64::new(0)).is_err());
}
