//! Shared data types and tuning constants.
//!
//! Pure data structures with no external dependencies, usable from the core
//! engine, the terminal front end, and tests alike.
//!
//! # Board dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 18 rows (indexed 0-17)
//!
//! # Cell tags
//!
//! Every board cell carries a small integer tag:
//!
//! | Tag | Meaning |
//! |-----|---------|
//! | 0 | empty |
//! | 1-7 | settled cell of the corresponding piece kind |
//! | 8 | row being cleared (flash window only) |
//! | 9 | spawn clash marker shown on game over |
//!
//! Tags 8 and 9 are transient: they exist only during the line-clear pause
//! and the final game-over frame, never between them.
//!
//! # Timing
//!
//! Timing values are in milliseconds. The driver ticks at `TICK_MS` and the
//! game accumulates real elapsed time against its current fall interval, so
//! gravity is independent of the host refresh rate.

/// Board width in cells.
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells.
pub const BOARD_HEIGHT: u8 = 18;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Gravity interval for a fresh game (milliseconds per row).
pub const BASE_FALL_INTERVAL_MS: u32 = 700;

/// Fall-interval reduction applied once per line-clear event.
pub const SPEED_UP_STEP_MS: u32 = 35;

/// Fastest allowed gravity interval.
pub const MIN_FALL_INTERVAL_MS: u32 = 140;

/// Duration full rows stay painted with the flash marker before compaction.
pub const LINE_CLEAR_PAUSE_MS: u32 = 200;

/// Base of the exponential line-clear bonus: clearing `n` rows at once is
/// worth `5^n` points.
pub const LINE_SCORE_BASE: u32 = 5;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven piece kinds.
///
/// Ids (and colors) follow the classic palette table: 1 = S (lime green),
/// 2 = Z (red), 3 = I (dark cyan), 4 = T (magenta), 5 = O (dark slate),
/// 6 = J (dark blue), 7 = L (orange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    S,
    Z,
    I,
    T,
    O,
    J,
    L,
}

impl PieceKind {
    /// All kinds in id order (index + 1 == id).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Stable numeric id in 1..=7, used as the settled cell tag.
    pub fn id(self) -> u8 {
        match self {
            PieceKind::S => 1,
            PieceKind::Z => 2,
            PieceKind::I => 3,
            PieceKind::T => 4,
            PieceKind::O => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::S),
            2 => Some(PieceKind::Z),
            3 => Some(PieceKind::I),
            4 => Some(PieceKind::T),
            5 => Some(PieceKind::O),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Marker tag for rows flashing during the line-clear pause.
pub const CLEAR_FLASH_TAG: u8 = 8;

/// Marker tag for the blocked spawn placement on game over.
pub const SPAWN_CLASH_TAG: u8 = 9;

/// A single board cell.
///
/// The board holds only settled cells plus, transiently, the clear-flash
/// marker; the falling piece is overlaid at snapshot time and never written
/// into the board before it locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(PieceKind),
    /// Row is full and flashing before compaction.
    ClearFlash,
    /// Spawn placement that collided, shown on the game-over frame.
    SpawnClash,
}

impl Cell {
    /// The small-integer tag for this cell.
    pub fn tag(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Piece(kind) => kind.id(),
            Cell::ClearFlash => CLEAR_FLASH_TAG,
            Cell::SpawnClash => SPAWN_CLASH_TAG,
        }
    }

    /// Inverse of [`Cell::tag`]; undefined tags map to `Empty`.
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            0 => Cell::Empty,
            CLEAR_FLASH_TAG => Cell::ClearFlash,
            SPAWN_CLASH_TAG => Cell::SpawnClash,
            id => PieceKind::from_id(id).map(Cell::Piece).unwrap_or(Cell::Empty),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// True for locked piece cells (tags 1..=7); marker cells do not count.
    pub fn is_settled(self) -> bool {
        matches!(self, Cell::Piece(_))
    }

    pub fn is_marker(self) -> bool {
        matches!(self, Cell::ClearFlash | Cell::SpawnClash)
    }
}

/// Player commands consumed by the game loop.
///
/// Raw keyboard capture lives in the host; the core only ever sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// One quarter-turn clockwise.
    Rotate,
    /// Drop one cell; a colliding soft drop is the lock trigger.
    SoftDrop,
}

/// Session lifecycle signals, delivered synchronously into the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    Start,
    Pause,
    Reset,
}

/// Emitted after a piece locks; consumed once by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
}
