use grid_search_compare::{run_search, AlgorithmKind, PathingGrid};

// A band of heavy (9) cells between start and goal. BFS walks straight through it, Dijkstra
// and A* pay two extra steps to go around.

fn main() -> Result<(), grid_search_compare::SearchError> {
    let layout = "
        S.9..
        ..9..
        ..9.G
        .....
    ";
    let grid = PathingGrid::parse(layout)?;
    let (Some(start), Some(goal)) = (grid.start(), grid.goal()) else {
        return Ok(());
    };
    for kind in AlgorithmKind::ALL {
        let mut grid = grid.clone();
        let result = run_search(kind, &mut grid, start, goal, |_| {})?;
        println!("{}, cost {}", result, result.path_cost);
        println!("{}", grid);
    }
    Ok(())
}
