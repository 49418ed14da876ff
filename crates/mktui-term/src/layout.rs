#![forbid(unsafe_code)]

//! Flex splitting.
//!
//! A reduced constraint solver: `Fixed` takes its cells, `Percentage`
//! takes its share of the whole axis, and whatever remains is split
//! evenly between `Min` constraints (each keeping at least its floor).
//! When the axis is too small the trailing regions collapse to empty
//! rather than overflowing the area.

use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Exactly this many cells.
    Fixed(u16),
    /// At least this many cells; grows to absorb leftover space.
    Min(u16),
    /// This percentage of the full axis.
    Percentage(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Vertical,
    Horizontal,
}

/// Splits an area into regions along one axis.
#[derive(Debug, Clone)]
pub struct Flex {
    direction: Direction,
    constraints: Vec<Constraint>,
}

impl Flex {
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            constraints: Vec::new(),
        }
    }

    #[must_use]
    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            constraints: Vec::new(),
        }
    }

    #[must_use]
    pub fn constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    /// Split `area`. Always returns one rect per constraint, in order;
    /// rects never extend past `area`.
    #[must_use]
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        let total = match self.direction {
            Direction::Vertical => area.height,
            Direction::Horizontal => area.width,
        };
        let sizes = solve(&self.constraints, total);

        let mut regions = Vec::with_capacity(sizes.len());
        let mut offset = 0u16;
        for size in sizes {
            let size = size.min(total.saturating_sub(offset));
            let region = match self.direction {
                Direction::Vertical => Rect::new(area.x, area.y + offset, area.width, size),
                Direction::Horizontal => Rect::new(area.x + offset, area.y, size, area.height),
            };
            regions.push(region);
            offset = offset.saturating_add(size);
        }
        regions
    }
}

fn solve(constraints: &[Constraint], total: u16) -> Vec<u16> {
    let mut sizes: Vec<u16> = constraints
        .iter()
        .map(|constraint| match *constraint {
            Constraint::Fixed(n) => n,
            Constraint::Min(n) => n,
            Constraint::Percentage(p) => {
                (u32::from(total) * u32::from(p.min(100)) / 100) as u16
            }
        })
        .collect();

    let used: u16 = sizes.iter().fold(0u16, |acc, &s| acc.saturating_add(s));
    let mut leftover = total.saturating_sub(used);

    let min_indices: Vec<usize> = constraints
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, Constraint::Min(_)))
        .map(|(i, _)| i)
        .collect();
    if !min_indices.is_empty() && leftover > 0 {
        let share = leftover / min_indices.len() as u16;
        for &i in &min_indices {
            sizes[i] = sizes[i].saturating_add(share);
            leftover -= share;
        }
        // Remainder goes to the first flexible region.
        sizes[min_indices[0]] = sizes[min_indices[0]].saturating_add(leftover);
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_fixed_and_min() {
        let area = Rect::new(0, 0, 10, 24);
        let rows = Flex::vertical()
            .constraints([Constraint::Fixed(1), Constraint::Min(1), Constraint::Fixed(2)])
            .split(area);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], Rect::new(0, 0, 10, 1));
        assert_eq!(rows[1], Rect::new(0, 1, 10, 21));
        assert_eq!(rows[2], Rect::new(0, 22, 10, 2));
    }

    #[test]
    fn horizontal_percentages() {
        let area = Rect::new(0, 0, 100, 5);
        let cols = Flex::horizontal()
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        assert_eq!(cols[0], Rect::new(0, 0, 45, 5));
        assert_eq!(cols[1], Rect::new(45, 0, 55, 5));
    }

    #[test]
    fn leftover_is_shared_between_mins() {
        let area = Rect::new(0, 0, 10, 12);
        let rows = Flex::vertical()
            .constraints([Constraint::Min(2), Constraint::Min(2), Constraint::Fixed(2)])
            .split(area);
        assert_eq!(rows[0].height + rows[1].height, 10);
        assert!(rows[0].height >= 2 && rows[1].height >= 2);
        assert_eq!(rows[2].height, 2);
    }

    #[test]
    fn undersized_axis_collapses_the_tail() {
        let area = Rect::new(0, 0, 10, 3);
        let rows = Flex::vertical()
            .constraints([Constraint::Fixed(2), Constraint::Fixed(2), Constraint::Fixed(2)])
            .split(area);
        assert_eq!(rows[0].height, 2);
        assert_eq!(rows[1].height, 1);
        assert_eq!(rows[2].height, 0);
        assert!(rows.iter().all(|r| r.bottom() <= 3));
    }

    #[test]
    fn empty_area_yields_empty_regions() {
        let rows = Flex::vertical()
            .constraints([Constraint::Min(1), Constraint::Fixed(1)])
            .split(Rect::new(0, 0, 10, 0));
        assert!(rows.iter().all(Rect::is_empty));
    }
}
