use grid_search_compare::{AlgorithmKind, Comparison, Edit};
use grid_util::point::Point;

// Paints the following 5x5 board on all three panels and runs BFS, Dijkstra and A* on it:
//  _____
// |S #  |
// |  #  |
// |  #  |
// |  #  |
// |    G|
//  _____
// where
// - # marks a wall
// - S marks the start
// - G marks the goal
//
// The only way through the wall is the gap in the bottom row.

fn main() -> Result<(), grid_search_compare::SearchError> {
    let mut board = Comparison::new(5, 5);
    board.apply_edit(Point::new(0, 0), Edit::Paint)?;
    board.apply_edit(Point::new(4, 4), Edit::Paint)?;
    for y in 0..4 {
        board.apply_edit(Point::new(2, y), Edit::Paint)?;
    }
    let mut frames = [0; 3];
    board.run_all(|kind, _| frames[kind.panel()] += 1)?;
    for kind in AlgorithmKind::ALL {
        println!("{} ({} frames)", kind, frames[kind.panel()]);
        println!("{}", board.grid(kind));
        for line in board.stats(kind) {
            println!("  {}", line);
        }
        println!();
    }
    Ok(())
}
