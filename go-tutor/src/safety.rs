use serde::Serialize;

use crate::Point;
use crate::grid::Grid;
use crate::group::{all_groups, liberties};
use crate::stone::Stone;

/// A group short of liberties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSafety {
    pub stone: Stone,
    /// First stone of the group in row-major order.
    pub anchor: Point,
    pub liberties: usize,
    pub size: usize,
}

impl GroupSafety {
    /// One liberty left: the group can be captured on the next move.
    pub fn in_atari(&self) -> bool {
        self.liberties <= 1
    }
}

/// Report every group, of either color, with at most `threshold` liberties.
pub fn assess_safety(grid: &Grid, threshold: usize) -> Vec<GroupSafety> {
    all_groups(grid)
        .into_iter()
        .filter_map(|group| {
            let count = liberties(grid, &group.stones).len();
            (count <= threshold).then(|| GroupSafety {
                stone: group.stone,
                anchor: group.stones[0],
                liberties: count,
                size: group.len(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_safe() {
        assert!(assess_safety(&Grid::new(9), 2).is_empty());
    }

    #[test]
    fn reports_corner_stone_with_two_liberties() {
        let grid = Grid::from_layout(&["B...", "....", "....", "...."]);
        let report = assess_safety(&grid, 2);
        assert_eq!(
            report,
            vec![GroupSafety {
                stone: Stone::Black,
                anchor: (0, 0),
                liberties: 2,
                size: 1,
            }]
        );
        assert!(!report[0].in_atari());
    }

    #[test]
    fn ignores_groups_above_threshold() {
        let grid = Grid::from_layout(&[".....", ".....", "..W..", ".....", "....."]);
        assert!(assess_safety(&grid, 2).is_empty());
        assert_eq!(assess_safety(&grid, 4).len(), 1);
    }

    #[test]
    fn each_group_reported_once() {
        let grid = Grid::from_layout(&["BBW.", "BW..", "W...", "...."]);
        let report = assess_safety(&grid, 2);
        let black: Vec<_> = report.iter().filter(|g| g.stone == Stone::Black).collect();
        assert_eq!(black.len(), 1);
        assert_eq!(black[0].size, 3);
        assert_eq!(black[0].liberties, 0);
        assert_eq!(black[0].anchor, (0, 0));
        // The three lone white stones each have two liberties.
        assert_eq!(report.iter().filter(|g| g.stone == Stone::White).count(), 3);
    }

    #[test]
    fn atari_is_flagged() {
        let grid = Grid::from_layout(&[".B.", "BW.", ".B."]);
        let white = assess_safety(&grid, 2)
            .into_iter()
            .find(|g| g.stone == Stone::White)
            .unwrap();
        assert_eq!(white.liberties, 1);
        assert!(white.in_atari());
    }

    #[test]
    fn assessment_is_repeatable() {
        let grid = Grid::from_layout(&["BW.", "WB.", "..."]);
        assert_eq!(assess_safety(&grid, 2), assess_safety(&grid, 2));
    }
}
