//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Jar (playing field) dimensions in cells
pub const JAR_N_COLS: u8 = 10;
pub const JAR_N_ROWS: u8 = 20;

/// Gravity: number of discrete ticks between forced falls
pub const TICKS_PER_FALL: u32 = 50;

/// Frame cadence of the terminal loop (milliseconds)
pub const TICK_MS: u64 = 16;

/// Figure shape kinds, named as in the classic jar encoding
/// (`Q` is the 2x2 square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    T,
    Q,
    I,
    Z,
    S,
    J,
    L,
}

impl ShapeKind {
    /// All seven kinds, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::T,
        ShapeKind::Q,
        ShapeKind::I,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(ShapeKind::T),
            "q" => Some(ShapeKind::Q),
            "i" => Some(ShapeKind::I),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::T => "t",
            ShapeKind::Q => "q",
            ShapeKind::I => "i",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// Rotation direction for a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// Session commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDrop,
    HardDrop,
}

impl Command {
    /// Parse command from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
        }
    }
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Playing,
    Over,
}

/// Cell in the jar (None = empty, Some = filled with shape kind)
pub type Cell = Option<ShapeKind>;

/// Grid coordinate of a figure pattern's top-left corner.
///
/// Signed so the walls can be tested with plain range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub row: i8,
    pub col: i8,
}

impl Anchor {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Spawn position for new figures: top row, horizontal center-left
    pub const fn spawn() -> Self {
        Self {
            row: 0,
            col: (JAR_N_COLS / 2) as i8 - 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ShapeKind::from_str("o"), None);
    }

    #[test]
    fn test_command_round_trip() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::RotateCw,
            Command::RotateCcw,
            Command::SoftDrop,
            Command::HardDrop,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("hold"), None);
    }

    #[test]
    fn test_spawn_anchor_is_center_left() {
        let anchor = Anchor::spawn();
        assert_eq!(anchor.row, 0);
        assert_eq!(anchor.col, 3);
    }
}
