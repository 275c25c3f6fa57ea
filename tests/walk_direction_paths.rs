//! Run with: `cargo test --test walk_direction_paths`

use hexcoord::{Coordinate, Directions};

/// Walk `path` from the origin, returning the final and maximum distances
/// from the starting cell.
fn walk(path: &str) -> (i32, i32) {
    let Directions(steps) = path.parse().expect("path parses");
    let mut position = Coordinate::ZERO;
    let mut furthest = 0;
    for step in steps {
        position += step;
        furthest = furthest.max(position.distance_to(Coordinate::ZERO));
    }
    (position.distance_to(Coordinate::ZERO), furthest)
}

#[test]
fn straight_line_north() {
    assert_eq!(walk("nnn"), (3, 3));
}

#[test]
fn out_and_back() {
    assert_eq!(walk("nnnsss"), (0, 3));
}

#[test]
fn opposite_steps_cancel() {
    assert_eq!(walk("nesw"), (0, 1));
}

#[test]
fn adjacent_directions_never_cancel() {
    assert_eq!(walk("sesenene"), (4, 4));
}

#[test]
fn hexagon_walk_closes_on_itself() {
    assert_eq!(walk("nnesesswnw"), (0, 2));
}
