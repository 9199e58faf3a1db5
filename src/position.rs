use itertools::iproduct;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Iterates the up-to-eight cells around `self` that lie inside a
    /// `rows` x `cols` grid. The cell itself is never yielded.
    pub fn neighbors(self, rows: usize, cols: usize) -> impl Iterator<Item = Position> {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&delta| delta != (0, 0))
            .filter_map(move |(dr, dc)| {
                let row = self.row.checked_add_signed(dr)?;
                let col = self.col.checked_add_signed(dc)?;
                (row < rows && col < cols).then_some(Position::new(row, col))
            })
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.row, 5);
        assert_eq!(pos.col, 10);
    }

    #[test]
    fn test_interior_neighbors() {
        let pos = Position::new(1, 1);
        let neighbors: Vec<Position> = pos.neighbors(3, 3).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&Position::new(0, 0))); // Top-left
        assert!(neighbors.contains(&Position::new(0, 1))); // Top
        assert!(neighbors.contains(&Position::new(0, 2))); // Top-right
        assert!(neighbors.contains(&Position::new(1, 0))); // Left
        assert!(neighbors.contains(&Position::new(1, 2))); // Right
        assert!(neighbors.contains(&Position::new(2, 0))); // Bottom-left
        assert!(neighbors.contains(&Position::new(2, 1))); // Bottom
        assert!(neighbors.contains(&Position::new(2, 2))); // Bottom-right
        assert!(!neighbors.contains(&pos));
    }

    #[test]
    fn test_corner_and_edge_neighbors() {
        assert_eq!(Position::new(0, 0).neighbors(4, 4).count(), 3);
        assert_eq!(Position::new(3, 3).neighbors(4, 4).count(), 3);
        assert_eq!(Position::new(0, 2).neighbors(4, 4).count(), 5);
        assert_eq!(Position::new(2, 0).neighbors(4, 4).count(), 5);
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        assert_eq!(Position::new(0, 0).neighbors(1, 1).count(), 0);
    }

    #[test]
    fn test_single_row_neighbors() {
        let neighbors: Vec<Position> = Position::new(0, 1).neighbors(1, 3).collect();
        assert_eq!(neighbors, vec![Position::new(0, 0), Position::new(0, 2)]);
    }

    #[test]
    fn test_is_adjacent() {
        let center = Position::new(2, 2);
        assert!(center.is_adjacent(Position::new(1, 1)));
        assert!(center.is_adjacent(Position::new(3, 2)));
        assert!(!center.is_adjacent(center));
        assert!(!center.is_adjacent(Position::new(0, 2)));
    }
}
