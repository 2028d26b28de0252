use crate::{CellCoord, CumulativeTable, GameConfig, RandomSource, SampleError};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Row-major `rows x columns` matrix of symbol ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<String>,
}

impl Grid {
    pub fn from_rows<I, R, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells = Vec::new();
        let mut columns = None;
        let mut row_count = 0;
        for (row, items) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(items.into_iter().map(Into::into));
            let found = cells.len() - before;
            let expected = *columns.get_or_insert(found);
            if found != expected {
                return Err(GridError::RaggedRows {
                    row,
                    expected,
                    found,
                });
            }
            row_count += 1;
        }
        let columns = columns.unwrap_or(0);
        if row_count == 0 || columns == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows: row_count,
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, coord: CellCoord) -> Option<&str> {
        if coord.row >= self.rows || coord.column >= self.columns {
            return None;
        }
        self.cells
            .get(coord.row * self.columns + coord.column)
            .map(String::as_str)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellCoord, &str)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().map(move |(idx, symbol)| {
            (
                CellCoord::new(idx / columns, idx % columns),
                symbol.as_str(),
            )
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(self.columns)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self.cells.chunks(self.columns) {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

/// Cumulative tables resolved once per configuration, reused for every grid.
#[derive(Debug, Clone)]
pub struct GridGenerator {
    rows: usize,
    columns: usize,
    positions: HashMap<CellCoord, CumulativeTable>,
    default: CumulativeTable,
    bonus: CumulativeTable,
}

impl GridGenerator {
    pub fn new(config: &GameConfig) -> Result<Self, SampleError> {
        let mut positions = HashMap::new();
        for entry in &config.probabilities.standard_symbols {
            positions.insert(entry.coord(), CumulativeTable::build(&entry.weights)?);
        }
        let default = positions
            .get(&CellCoord::ORIGIN)
            .cloned()
            .ok_or(SampleError::EmptyWeights)?;
        let bonus = CumulativeTable::build(&config.probabilities.bonus_symbols)?;
        Ok(Self {
            rows: config.rows,
            columns: config.columns,
            positions,
            default,
            bonus,
        })
    }

    pub fn table_at(&self, coord: CellCoord) -> &CumulativeTable {
        self.positions.get(&coord).unwrap_or(&self.default)
    }

    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R, bonus_probability: f64) -> Grid {
        let mut cells = Vec::with_capacity(self.rows * self.columns);
        for row in 0..self.rows {
            for column in 0..self.columns {
                let table = self.table_at(CellCoord::new(row, column));
                cells.push(table.sample(rng).to_string());
            }
        }

        // Second pass: any cell may be overwritten, whatever it landed on.
        for cell in cells.iter_mut() {
            if rng.next_unit() < bonus_probability {
                *cell = self.bonus.sample(rng).to_string();
            }
        }

        Grid {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }
}
