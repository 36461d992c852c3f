use serde::Serialize;

use crate::config::InfluenceConfig;
use crate::grid::Grid;

/// Number of points each side is estimated to control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Influence {
    pub black: u32,
    pub white: u32,
}

impl Influence {
    /// Count an ownership map (positive = Black, negative = White).
    pub fn from_ownership(ownership: &[f64], threshold: f64) -> Self {
        ownership.iter().fold(Influence::default(), |mut acc, &v| {
            if v > threshold {
                acc.black += 1;
            } else if v < -threshold {
                acc.white += 1;
            }
            acc
        })
    }

    /// Black's lead in estimated area; negative when White is ahead.
    pub fn margin(&self) -> i64 {
        i64::from(self.black) - i64::from(self.white)
    }
}

/// Per-point influence scores in row-major order.
///
/// Every stone contributes `±exp(-d / decay)` to every point, where `d` is
/// the euclidean distance. Black counts positive.
pub fn influence_map(grid: &Grid, config: &InfluenceConfig) -> Vec<f64> {
    let mut scores = vec![0.0; grid.cells().len()];
    let stones: Vec<_> = grid
        .points()
        .filter_map(|p| grid.stone_at(p).map(|s| (p, s.sign())))
        .collect();
    if stones.is_empty() {
        return scores;
    }

    for (i, (col, row)) in grid.points().enumerate() {
        scores[i] = stones
            .iter()
            .map(|&((sc, sr), sign)| {
                let dx = f64::from(col) - f64::from(sc);
                let dy = f64::from(row) - f64::from(sr);
                sign * (-dx.hypot(dy) / config.decay).exp()
            })
            .sum();
    }
    scores
}

/// Estimate how many points favor each side.
pub fn estimate_influence(grid: &Grid, config: &InfluenceConfig) -> Influence {
    Influence::from_ownership(&influence_map(grid, config), config.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stone::Stone;

    fn defaults() -> InfluenceConfig {
        InfluenceConfig::default()
    }

    #[test]
    fn empty_board_has_no_influence() {
        let influence = estimate_influence(&Grid::new(19), &defaults());
        assert_eq!(influence, Influence { black: 0, white: 0 });
    }

    #[test]
    fn single_stone_claims_nearby_points() {
        let grid = Grid::new(9).with_stone((4, 4), Some(Stone::Black));
        let map = influence_map(&grid, &defaults());
        assert!((map[4 * 9 + 4] - 1.0).abs() < 1e-12);

        // exp(-d / 2) > 0.5 only while d < 2 ln 2 ≈ 1.386, which excludes
        // the diagonals.
        let influence = estimate_influence(&grid, &defaults());
        assert_eq!(influence, Influence { black: 5, white: 0 });
    }

    #[test]
    fn colors_are_symmetric() {
        let black = Grid::from_layout(&[".....", ".B...", ".....", "...B.", "....."]);
        let white = Grid::from_layout(&[".....", ".W...", ".....", "...W.", "....."]);
        let b = estimate_influence(&black, &defaults());
        let w = estimate_influence(&white, &defaults());
        assert_eq!(b.black, w.white);
        assert_eq!(b.white, 0);
        assert_eq!(w.black, 0);
    }

    #[test]
    fn opposing_stones_cancel_between_them() {
        let grid = Grid::from_layout(&["...", "B.W", "..."]);
        let map = influence_map(&grid, &defaults());
        assert!(map[3 + 1].abs() < 1e-12);
        let influence = estimate_influence(&grid, &defaults());
        assert_eq!(influence.black, influence.white);
    }

    #[test]
    fn larger_decay_spreads_further() {
        let grid = Grid::new(9).with_stone((4, 4), Some(Stone::White));
        let narrow = estimate_influence(&grid, &defaults());
        let wide = estimate_influence(
            &grid,
            &InfluenceConfig {
                decay: 4.0,
                ..defaults()
            },
        );
        assert!(wide.white > narrow.white);
    }

    #[test]
    fn counts_ownership_map() {
        let influence = Influence::from_ownership(&[0.9, -0.7, 0.2, -0.5, 0.5], 0.5);
        assert_eq!(influence, Influence { black: 1, white: 1 });
        assert_eq!(influence.margin(), 0);
    }
}
