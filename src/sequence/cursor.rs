//! Cursor positioning, movement and visibility
//!
//! Positions are zero-based. The terminal counts rows and columns from 1, so
//! [`move_to`] adds one to each coordinate. `x`/`col` and `y`/`row` are two
//! names for the same numbers.
//!
//! Relative steps take a signed count: zero produces no output and a
//! negative count moves the opposite way by its magnitude.

use serde::{Deserialize, Serialize};

/// Normal cursor: steady (mode 34 set) and visible
pub const NORMAL: &str = "\x1b[34h\x1b[?25h";

/// Hide the cursor (DECTCEM reset)
pub const HIDDEN: &str = "\x1b[?25l";

/// Enhanced (very visible) cursor
pub const ENHANCED: &str = "\x1b[34l";

/// Request the cursor position (DSR 6)
pub const REQUEST: &str = "\x1b[6n";

/// Zero-based absolute position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub col: u16,
    pub row: u16,
}

impl Position {
    pub const fn col_row(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    pub const fn xy(x: u16, y: u16) -> Self {
        Self { col: x, row: y }
    }

    pub const fn x(&self) -> u16 {
        self.col
    }

    pub const fn y(&self) -> u16 {
        self.row
    }
}

impl From<(u16, u16)> for Position {
    /// `(x, y)`
    fn from((x, y): (u16, u16)) -> Self {
        Self::xy(x, y)
    }
}

/// Signed relative movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dcol: i32,
    pub drow: i32,
}

impl Offset {
    pub const fn col_row(dcol: i32, drow: i32) -> Self {
        Self { dcol, drow }
    }

    pub const fn xy(dx: i32, dy: i32) -> Self {
        Self { dcol: dx, drow: dy }
    }

    pub const fn dx(&self) -> i32 {
        self.dcol
    }

    pub const fn dy(&self) -> i32 {
        self.drow
    }
}

impl From<(i32, i32)> for Offset {
    /// `(dx, dy)`
    fn from((dx, dy): (i32, i32)) -> Self {
        Self::xy(dx, dy)
    }
}

/// CUP to a zero-based position
pub fn move_to(target: impl Into<Position>) -> String {
    let Position { col, row } = target.into();
    format!("\x1b[{};{}H", u32::from(row) + 1, u32::from(col) + 1)
}

/// Move down by the row delta, then right by the column delta
pub fn move_by(offset: impl Into<Offset>) -> String {
    let Offset { dcol, drow } = offset.into();
    let mut out = down_by(drow);
    out.push_str(&right_by(dcol));
    out
}

/// Step `n` cells with `forward` as the final byte, or `|n|` cells with
/// `backward` when `n` is negative.
fn step(n: i32, forward: char, backward: char) -> String {
    match n {
        0 => String::new(),
        n if n < 0 => format!("\x1b[{}{}", n.unsigned_abs(), backward),
        n => format!("\x1b[{}{}", n, forward),
    }
}

/// CUU; negative counts move down
pub fn up_by(n: i32) -> String {
    step(n, 'A', 'B')
}

/// CUD; negative counts move up
pub fn down_by(n: i32) -> String {
    step(n, 'B', 'A')
}

/// CUB; negative counts move right
pub fn left_by(n: i32) -> String {
    step(n, 'D', 'C')
}

/// CUF; negative counts move left
pub fn right_by(n: i32) -> String {
    step(n, 'C', 'D')
}

pub fn up() -> String {
    up_by(1)
}

pub fn down() -> String {
    down_by(1)
}

pub fn left() -> String {
    left_by(1)
}

pub fn right() -> String {
    right_by(1)
}
