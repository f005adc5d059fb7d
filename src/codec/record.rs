//! Dense cell records.
//!
//! ## Layout
//!
//! Each cell is one 9-byte record, written in row-major order:
//!
//! | Offset | Size | Field   | Encoding            |
//! |--------|------|---------|---------------------|
//! | 0      | 4    | `x`     | `i32` little-endian |
//! | 4      | 4    | `y`     | `i32` little-endian |
//! | 8      | 1    | `state` | `i8`, 0 dead 1 life |
//!
//! There is no header. The board is `max(x) + 1` wide and `max(y) + 1`
//! tall, and a valid record set covers every cell of that rectangle
//! exactly once.

use byteorder::{ByteOrder, LittleEndian};

use crate::board::Board;
use crate::core::{Cell, CellState, Dimensions};
use crate::error::{LifeError, LifeResult};

/// Bytes per record.
pub const RECORD_SIZE: usize = 9;

/// One serialized cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DenseRecord {
    /// Column, little-endian on the wire.
    pub x: i32,
    /// Row, little-endian on the wire.
    pub y: i32,
    /// `0` for dead, `1` for living.
    pub state: i8,
}

impl DenseRecord {
    /// Record for a board cell.
    #[must_use]
    pub fn from_cell(cell: &Cell) -> Self {
        // Dimensions caps both sides at i32::MAX, so coordinates always fit
        Self {
            x: cell.point.x as i32,
            y: cell.point.y as i32,
            state: cell.state.as_byte(),
        }
    }

    /// Write this record into a 9-byte slot.
    pub fn write(&self, slot: &mut [u8; RECORD_SIZE]) {
        LittleEndian::write_i32(&mut slot[0..4], self.x);
        LittleEndian::write_i32(&mut slot[4..8], self.y);
        slot[8] = self.state.to_le_bytes()[0];
    }

    /// Read a record from a 9-byte slot.
    #[must_use]
    pub fn read(slot: &[u8; RECORD_SIZE]) -> Self {
        Self {
            x: LittleEndian::read_i32(&slot[0..4]),
            y: LittleEndian::read_i32(&slot[4..8]),
            state: i8::from_le_bytes([slot[8]]),
        }
    }
}

/// Serialize every cell of a board.
#[must_use]
pub fn encode_board(board: &Board) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(board.dimensions().cell_count() * RECORD_SIZE);
    let mut slot = [0u8; RECORD_SIZE];
    for cell in board.cells() {
        DenseRecord::from_cell(cell).write(&mut slot);
        bytes.extend_from_slice(&slot);
    }
    bytes
}

/// Split raw bytes into records.
///
/// # Errors
///
/// Returns `LifeError::MalformedRecord` if the length is not a whole number
/// of records.
pub fn read_records(bytes: &[u8]) -> LifeResult<Vec<DenseRecord>> {
    let chunks = bytes.chunks_exact(RECORD_SIZE);
    if !chunks.remainder().is_empty() {
        return Err(LifeError::MalformedRecord(format!(
            "{} trailing bytes after {} complete records",
            chunks.remainder().len(),
            bytes.len() / RECORD_SIZE
        )));
    }

    Ok(chunks
        .map(|chunk| {
            let mut slot = [0u8; RECORD_SIZE];
            slot.copy_from_slice(chunk);
            DenseRecord::read(&slot)
        })
        .collect())
}

/// Rebuild a board from a complete record set.
///
/// # Errors
///
/// - `LifeError::EmptyBoard` if there are no records
/// - `LifeError::MalformedRecord` for a bad state byte, a negative
///   coordinate, a duplicate cell, or records that do not fill the board
pub fn assemble(records: &[DenseRecord]) -> LifeResult<Board> {
    if records.is_empty() {
        return Err(LifeError::EmptyBoard);
    }

    let mut width = 0usize;
    let mut height = 0usize;
    for (index, record) in records.iter().enumerate() {
        let (Ok(x), Ok(y)) = (usize::try_from(record.x), usize::try_from(record.y)) else {
            return Err(LifeError::MalformedRecord(format!(
                "record {} has negative coordinate ({}, {})",
                index, record.x, record.y
            )));
        };
        width = width.max(x + 1);
        height = height.max(y + 1);
    }

    // Compare in u64: two sides up to 2^31 cannot overflow
    if (width as u64) * (height as u64) != records.len() as u64 {
        return Err(LifeError::MalformedRecord(format!(
            "{} records do not cover a {}x{} board",
            records.len(),
            width,
            height
        )));
    }

    let dimensions = Dimensions::new(width as i64, height as i64)
        .map_err(|e| LifeError::MalformedRecord(e.to_string()))?;

    let mut states: Vec<Option<CellState>> = vec![None; records.len()];
    for (index, record) in records.iter().enumerate() {
        let state = CellState::try_from(record.state).map_err(|byte| {
            LifeError::MalformedRecord(format!(
                "record {} has state byte {} (expected 0 or 1)",
                index, byte
            ))
        })?;

        let slot = &mut states[record.y as usize * width + record.x as usize];
        if slot.is_some() {
            return Err(LifeError::MalformedRecord(format!(
                "record {} repeats cell ({}, {})",
                index, record.x, record.y
            )));
        }
        *slot = Some(state);
    }

    // No duplicates and the count matches, so every slot is filled
    Ok(Board::from_fn(dimensions, |x, y| {
        Cell::with_state(states[y * width + x].unwrap_or_default())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;

    fn record(x: i32, y: i32, state: i8) -> DenseRecord {
        DenseRecord { x, y, state }
    }

    #[test]
    fn test_record_bytes() {
        let mut slot = [0u8; RECORD_SIZE];
        record(1, 258, 1).write(&mut slot);
        assert_eq!(slot, [1, 0, 0, 0, 2, 1, 0, 0, 1]);
        assert_eq!(DenseRecord::read(&slot), record(1, 258, 1));
    }

    #[test]
    fn test_negative_coordinate_bytes() {
        let mut slot = [0u8; RECORD_SIZE];
        record(-1, 0, -1).write(&mut slot);
        assert_eq!(slot, [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0, 0xFF]);
        assert_eq!(DenseRecord::read(&slot), record(-1, 0, -1));
    }

    #[test]
    fn test_encode_board_layout() {
        let dims = Dimensions::new(2, 2).unwrap();
        let board = Board::from_fn(dims, |x, y| Cell::with_state(CellState::from(x == 1 && y == 0)));

        let bytes = encode_board(&board);

        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 0,  0, 0, 0, 0,  0,
            1, 0, 0, 0,  0, 0, 0, 0,  1,
            0, 0, 0, 0,  1, 0, 0, 0,  0,
            1, 0, 0, 0,  1, 0, 0, 0,  0,
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_read_records_rejects_partial() {
        let err = read_records(&[0u8; RECORD_SIZE + 4]).unwrap_err();
        assert_eq!(
            err,
            LifeError::MalformedRecord("4 trailing bytes after 1 complete records".into())
        );
    }

    #[test]
    fn test_read_records_empty() {
        assert_eq!(read_records(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn test_assemble_empty() {
        assert_eq!(assemble(&[]), Err(LifeError::EmptyBoard));
    }

    #[test]
    fn test_assemble_non_square() {
        let records = vec![
            record(0, 0, 0), record(1, 0, 1), record(2, 0, 0),
            record(0, 1, 1), record(1, 1, 0), record(2, 1, 0),
        ];
        let board = assemble(&records).unwrap();

        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert!(board.get(1, 0).unwrap().is_alive());
        assert!(board.get(0, 1).unwrap().is_alive());
        assert_eq!(board.population(), 2);
    }

    #[test]
    fn test_assemble_accepts_any_order() {
        let records = vec![record(1, 1, 1), record(0, 0, 0), record(0, 1, 0), record(1, 0, 1)];
        let board = assemble(&records).unwrap();

        assert_eq!(board.get(1, 1).unwrap().point, Point::new(1, 1));
        assert_eq!(board.population(), 2);
    }

    #[test]
    fn test_assemble_bad_state() {
        let err = assemble(&[record(0, 0, 2)]).unwrap_err();
        assert!(matches!(err, LifeError::MalformedRecord(_)));
    }

    #[test]
    fn test_assemble_negative_coordinate() {
        let err = assemble(&[record(-1, 0, 1)]).unwrap_err();
        assert!(matches!(err, LifeError::MalformedRecord(_)));
    }

    #[test]
    fn test_assemble_duplicate() {
        let records = vec![record(0, 0, 1), record(0, 0, 1), record(1, 0, 0), record(1, 1, 0)];
        let err = assemble(&records).unwrap_err();
        assert!(matches!(err, LifeError::MalformedRecord(_)));
    }

    #[test]
    fn test_assemble_incomplete() {
        // 2x2 extent but only three records
        let records = vec![record(0, 0, 1), record(1, 0, 0), record(1, 1, 0)];
        let err = assemble(&records).unwrap_err();
        assert_eq!(
            err,
            LifeError::MalformedRecord("3 records do not cover a 2x2 board".into())
        );
    }

    #[test]
    fn test_assemble_huge_extent() {
        let err = assemble(&[record(i32::MAX, i32::MAX, 1)]).unwrap_err();
        assert!(matches!(err, LifeError::MalformedRecord(_)));
    }
}
