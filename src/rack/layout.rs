use super::{RackCoordinate, RackError};
use serde::Serialize;

/// Default rack rows, top to bottom.
pub const DEFAULT_ROWS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];
/// Default number of columns per row.
pub const DEFAULT_COLUMNS: u32 = 5;
/// Default number of addressable light units wired to each box.
pub const DEFAULT_UNITS_PER_BOX: u32 = 14;

/// Inclusive span of light units owned by one box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightRange {
    pub start: u32,
    pub stop: u32,
}

impl LightRange {
    /// Number of units in the span.
    pub fn width(&self) -> u32 {
        self.stop - self.start + 1
    }

    pub fn contains(&self, unit: u32) -> bool {
        (self.start..=self.stop).contains(&unit)
    }
}

/// Shape of the physical rack: ordered rows, a column count, and how many
/// light units each box owns.
///
/// Boxes are numbered row-major from zero and every (row, column) pair is a
/// box. Light units are handed out in the same order, `units_per_box` at a
/// time, with no gaps and no sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RackLayout {
    rows: Vec<char>,
    columns: u32,
    units_per_box: u32,
}

impl Default for RackLayout {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS.to_vec(),
            columns: DEFAULT_COLUMNS,
            units_per_box: DEFAULT_UNITS_PER_BOX,
        }
    }
}

impl RackLayout {
    /// Builds a layout, rejecting empty dimensions and duplicate or
    /// non-alphabetic row letters. Rows are upper-cased.
    pub fn new(
        rows: impl IntoIterator<Item = char>,
        columns: u32,
        units_per_box: u32,
    ) -> Result<Self, RackError> {
        let rows: Vec<char> = rows.into_iter().map(|r| r.to_ascii_uppercase()).collect();
        if rows.is_empty() {
            return Err(RackError::InvalidLayout("no rows".into()));
        }
        if let Some(bad) = rows.iter().find(|r| !r.is_ascii_alphabetic()) {
            return Err(RackError::InvalidLayout(format!("row {bad:?} is not a letter")));
        }
        for (i, row) in rows.iter().enumerate() {
            if rows[..i].contains(row) {
                return Err(RackError::InvalidLayout(format!("row {row} listed twice")));
            }
        }
        if columns == 0 {
            return Err(RackError::InvalidLayout("no columns".into()));
        }
        if units_per_box == 0 {
            return Err(RackError::InvalidLayout("boxes own no light units".into()));
        }
        let total = (rows.len() as u64) * u64::from(columns) * u64::from(units_per_box);
        if total > u64::from(u32::MAX) {
            return Err(RackError::InvalidLayout(format!(
                "{total} light units exceed the addressable range"
            )));
        }
        Ok(Self {
            rows,
            columns,
            units_per_box,
        })
    }

    pub fn rows(&self) -> &[char] {
        &self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn units_per_box(&self) -> u32 {
        self.units_per_box
    }

    pub fn box_count(&self) -> usize {
        self.rows.len() * self.columns as usize
    }

    /// Number of light units across the whole rack.
    pub fn total_units(&self) -> u32 {
        self.box_count() as u32 * self.units_per_box
    }

    /// `row_position * columns + (column - 1)`.
    pub fn to_index(&self, coordinate: &RackCoordinate) -> Result<usize, RackError> {
        let row = coordinate.row.to_ascii_uppercase();
        let row_position = self
            .rows
            .iter()
            .position(|r| *r == row)
            .ok_or_else(|| RackError::InvalidCoordinate(format!("unknown row in {coordinate}")))?;
        if coordinate.column == 0 || coordinate.column > self.columns {
            return Err(RackError::InvalidCoordinate(format!(
                "column out of range in {coordinate}"
            )));
        }
        Ok(row_position * self.columns as usize + (coordinate.column as usize - 1))
    }

    pub fn to_coordinate(&self, index: usize) -> Result<RackCoordinate, RackError> {
        self.check_index(index)?;
        let columns = self.columns as usize;
        Ok(RackCoordinate {
            row: self.rows[index / columns],
            column: (index % columns) as u32 + 1,
        })
    }

    /// Inclusive light-unit span of box `index`.
    pub fn light_range(&self, index: usize) -> Result<LightRange, RackError> {
        self.check_index(index)?;
        let start = index as u32 * self.units_per_box;
        Ok(LightRange {
            start,
            stop: start + self.units_per_box - 1,
        })
    }

    /// Every coordinate on the rack, in box-index order.
    pub fn coordinates(&self) -> impl Iterator<Item = RackCoordinate> + '_ {
        self.rows.iter().flat_map(move |&row| {
            (1..=self.columns).map(move |column| RackCoordinate { row, column })
        })
    }

    fn check_index(&self, index: usize) -> Result<(), RackError> {
        if index >= self.box_count() {
            return Err(RackError::InvalidCoordinate(format!(
                "box index {index} outside rack of {} boxes",
                self.box_count()
            )));
        }
        Ok(())
    }
}
