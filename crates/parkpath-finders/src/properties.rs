//! Cross-finder checks on random grids.

use parkpath_core::{Grid, Point};
use rand::{Rng, RngExt};

use crate::{
    AStarFinder, Algorithm, BreadthFirstFinder, DiagonalMovement, DijkstraFinder, Finder,
    FinderOptions, IdaStarFinder, SearchContext, is_legal_path, path_cost,
};

const MOVEMENTS: [DiagonalMovement; 4] = [
    DiagonalMovement::Never,
    DiagonalMovement::Always,
    DiagonalMovement::OnlyWhenNoObstacles,
    DiagonalMovement::IfAtMostOneObstacle,
];

fn random_grid(rng: &mut impl Rng, w: i32, h: i32, density: f64) -> Grid {
    let mut grid = Grid::new(w, h);
    for p in grid.bounds() {
        let r: f64 = rng.random();
        if r < density {
            grid.set_walkable(p, false).unwrap();
        }
    }
    grid
}

fn random_open_cell(rng: &mut impl Rng, grid: &Grid) -> Option<Point> {
    let open: Vec<Point> = grid.iter().filter(|(_, w)| *w).map(|(p, _)| p).collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn astar_cost_matches_dijkstra() {
    let mut rng = rand::rng();
    for _ in 0..60 {
        let grid = random_grid(&mut rng, 9, 7, 0.3);
        let (Some(s), Some(g)) = (random_open_cell(&mut rng, &grid), random_open_cell(&mut rng, &grid))
        else {
            continue;
        };
        for m in MOVEMENTS {
            let options = FinderOptions::default().with_diagonal_movement(m);
            let a = AStarFinder::new(&options).unwrap().find_path(s, g, &grid).unwrap();
            let d = DijkstraFinder::new(&options).find_path(s, g, &grid).unwrap();
            assert_eq!(a.is_empty(), d.is_empty(), "{m:?}\n{grid}");
            if a.is_empty() {
                continue;
            }
            assert!(close(path_cost(&a), path_cost(&d)), "{m:?} {s} -> {g}\n{grid}");
            assert!(is_legal_path(&grid, &a, m));
            assert_eq!(a.first(), Some(&s));
            assert_eq!(a.last(), Some(&g));
        }
    }
}

#[test]
fn bfs_hops_match_four_way_astar() {
    let mut rng = rand::rng();
    let options = FinderOptions::default();
    for _ in 0..60 {
        let grid = random_grid(&mut rng, 10, 10, 0.3);
        let (Some(s), Some(g)) = (random_open_cell(&mut rng, &grid), random_open_cell(&mut rng, &grid))
        else {
            continue;
        };
        let b = BreadthFirstFinder::new(&options).find_path(s, g, &grid).unwrap();
        let a = AStarFinder::new(&options).unwrap().find_path(s, g, &grid).unwrap();
        assert_eq!(b.len(), a.len(), "{s} -> {g}\n{grid}");
        assert!(is_legal_path(&grid, &b, DiagonalMovement::Never));
    }
}

#[test]
fn every_finder_returns_legal_paths() {
    let mut rng = rand::rng();
    for _ in 0..40 {
        let grid = random_grid(&mut rng, 8, 8, 0.25);
        let (Some(s), Some(g)) = (random_open_cell(&mut rng, &grid), random_open_cell(&mut rng, &grid))
        else {
            continue;
        };
        for m in MOVEMENTS {
            let options = FinderOptions::default().with_diagonal_movement(m);
            let reachable = !AStarFinder::new(&options)
                .unwrap()
                .find_path(s, g, &grid)
                .unwrap()
                .is_empty();
            for algo in [Algorithm::BestFirst, Algorithm::BreadthFirst, Algorithm::Dijkstra] {
                let path = algo.build(&options).unwrap().find_path(s, g, &grid).unwrap();
                assert_eq!(!path.is_empty(), reachable, "{algo} {m:?}\n{grid}");
                assert!(is_legal_path(&grid, &path, m), "{algo} {m:?}\n{grid}");
            }
        }
    }
}

#[test]
fn idastar_cost_matches_astar_when_reachable() {
    let mut rng = rand::rng();
    for _ in 0..25 {
        let grid = random_grid(&mut rng, 5, 5, 0.2);
        let (Some(s), Some(g)) = (random_open_cell(&mut rng, &grid), random_open_cell(&mut rng, &grid))
        else {
            continue;
        };
        for m in MOVEMENTS {
            let options = FinderOptions::default()
                .with_diagonal_movement(m)
                .with_time_limit(10.0);
            let a = AStarFinder::new(&options).unwrap().find_path(s, g, &grid).unwrap();
            if a.is_empty() {
                continue;
            }
            let i = IdaStarFinder::new(&options).unwrap().find_path(s, g, &grid).unwrap();
            assert!(close(path_cost(&i), path_cost(&a)), "{m:?} {s} -> {g}\n{grid}");
            assert!(is_legal_path(&grid, &i, m));
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut rng = rand::rng();
    let grid = random_grid(&mut rng, 12, 12, 0.2);
    let (Some(s), Some(g)) = (random_open_cell(&mut rng, &grid), random_open_cell(&mut rng, &grid))
    else {
        return;
    };
    let options = FinderOptions::default().with_allow_diagonal(true);
    for algo in [
        Algorithm::AStar,
        Algorithm::BestFirst,
        Algorithm::BreadthFirst,
        Algorithm::Dijkstra,
    ] {
        let finder = algo.build(&options).unwrap();
        let mut ctx = SearchContext::new(&grid);
        let first = finder.find_path_in(s, g, &grid, &mut ctx).unwrap();
        let second = finder.find_path_in(s, g, &grid, &mut ctx).unwrap();
        let fresh = finder.find_path(s, g, &grid).unwrap();
        assert_eq!(first, second, "{algo}");
        assert_eq!(first, fresh, "{algo}");
    }
}

#[test]
fn start_equals_goal_for_every_finder() {
    let grid = Grid::new(4, 4);
    let p = Point::new(3, 1);
    for algo in Algorithm::ALL {
        let finder = algo.build(&FinderOptions::default()).unwrap();
        assert_eq!(finder.find_path(p, p, &grid), Ok(vec![p]), "{algo}");
    }
}

#[test]
fn enclosed_goal_is_empty_for_every_finder() {
    let mut grid = Grid::new(10, 10);
    for p in [(7, 7), (8, 7), (9, 7), (7, 8), (7, 9)] {
        grid.set_walkable(p.into(), false).unwrap();
    }
    let options = FinderOptions::default()
        .with_allow_diagonal(true)
        .with_time_limit(0.2);
    for algo in Algorithm::ALL {
        let finder = algo.build(&options).unwrap();
        let path = finder
            .find_path(Point::new(0, 0), Point::new(9, 9), &grid)
            .unwrap();
        assert!(path.is_empty(), "{algo}");
    }
}

#[test]
fn one_grid_serves_independent_contexts() {
    let grid = Grid::parse(
        "\
........
.######.
........",
    )
    .unwrap();
    let finder = Algorithm::AStar.build(&FinderOptions::default()).unwrap();
    let queries = [
        (Point::new(0, 0), Point::new(7, 2)),
        (Point::new(7, 0), Point::new(0, 2)),
        (Point::new(3, 0), Point::new(3, 2)),
    ];
    let results: Vec<Vec<Point>> = std::thread::scope(|scope| {
        let handles: Vec<_> = queries
            .iter()
            .map(|&(s, g)| {
                let grid = &grid;
                let finder = &finder;
                scope.spawn(move || {
                    let mut ctx = SearchContext::new(grid);
                    finder.find_path_in(s, g, grid, &mut ctx).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(path_cost(&results[0]), 9.0);
    assert_eq!(path_cost(&results[1]), 9.0);
    assert_eq!(path_cost(&results[2]), 8.0);
}
