//! Random barrier placement.

use pathviz_core::{Grid, NodeState};
use rand::{Rng, RngExt};

/// Default share of nodes turned into barriers.
pub const DEFAULT_BARRIER_PROBABILITY: f64 = 0.3;

/// Clear every node except the start and end, then turn each of those nodes
/// into a barrier with probability `probability`.
///
/// Returns the number of barriers placed. Neighbor lists are left stale.
pub fn scatter_barriers(grid: &mut Grid, probability: f64, rng: &mut impl Rng) -> usize {
    let positions: Vec<_> = grid
        .iter()
        .filter(|n| !matches!(n.state(), NodeState::Start | NodeState::End))
        .map(|n| n.pos())
        .collect();
    let mut placed = 0;
    for p in positions {
        if let Err(e) = grid.clear(p) {
            log::warn!("cannot clear {p}: {e}");
            continue;
        }
        if rng.random_range(0.0..1.0) < probability && grid.set_barrier(p).is_ok() {
            placed += 1;
        }
    }
    log::debug!("placed {placed} barriers on {} nodes", grid.len());
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board() -> Grid {
        let mut g = Grid::new(10);
        g.set_start(Point::cell(0, 0)).unwrap();
        g.set_end(Point::cell(9, 9)).unwrap();
        g
    }

    #[test]
    fn endpoints_survive() {
        let mut g = board();
        scatter_barriers(&mut g, 1.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(g.start(), Some(Point::cell(0, 0)));
        assert_eq!(g.end(), Some(Point::cell(9, 9)));
        assert_eq!(
            g.iter().filter(|n| n.state() == NodeState::Barrier).count(),
            98
        );
    }

    #[test]
    fn zero_probability_clears_the_board() {
        let mut g = board();
        g.set_barrier(Point::cell(4, 4)).unwrap();
        g.mark_visited(Point::cell(5, 5));
        let placed = scatter_barriers(&mut g, 0.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(placed, 0);
        assert_eq!(g.state(Point::cell(4, 4)), NodeState::Open);
        assert_eq!(g.state(Point::cell(5, 5)), NodeState::Open);
    }

    #[test]
    fn same_seed_same_maze() {
        let (mut a, mut b) = (board(), board());
        scatter_barriers(&mut a, 0.3, &mut StdRng::seed_from_u64(42));
        scatter_barriers(&mut b, 0.3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.to_ascii(), b.to_ascii());
    }
}
