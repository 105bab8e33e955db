//! Name interning for the closed enumerations that appear as strings in a
//! document.
//!
//! Each enumeration owns a table built on first use and shared for the rest
//! of the process. Unknown names and out of range codes resolve to the zero
//! value of the enumeration rather than failing.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Bidirectional name to code table. Code `0` is the fallback.
#[derive(Debug)]
pub(crate) struct EnumTable {
    codes: HashMap<&'static str, u8>,
    names: &'static [&'static str],
}

impl EnumTable {
    fn new(names: &'static [&'static str]) -> Self {
        let codes = names
            .iter()
            .enumerate()
            .map(|(code, name)| (*name, code as u8))
            .collect();
        EnumTable { codes, names }
    }

    pub(crate) fn code(&self, name: &str) -> u8 {
        match self.codes.get(name) {
            Some(code) => *code,
            None => {
                log::trace!("unrecognized enum name {:?}, using {:?}", name, self.names[0]);
                0
            }
        }
    }

    pub(crate) fn name(&self, code: u8) -> &'static str {
        self.names
            .get(usize::from(code))
            .copied()
            .unwrap_or(self.names[0])
    }
}

static COMMANDS: Lazy<EnumTable> =
    Lazy::new(|| EnumTable::new(&["invalid", "place", "move", "replace", "remove"]));

static ROTATIONS: Lazy<EnumTable> =
    Lazy::new(|| EnumTable::new(&["none", "auto", "cw", "ccw"]));

/// The instruction a keyframe carries out on its track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Command {
    #[default]
    Invalid,
    Place,
    Move,
    Replace,
    Remove,
}

impl Command {
    /// Look up a command by its lower-case name. Unknown names are `Invalid`.
    ///
    /// ```
    /// use cutout::Command;
    /// assert_eq!(Command::from_name("move"), Command::Move);
    /// assert_eq!(Command::from_name("MOVE"), Command::Invalid);
    /// ```
    pub fn from_name(name: &str) -> Command {
        Command::from_code(COMMANDS.code(name))
    }

    /// Look up a command by its numeric code. Out of range codes are `Invalid`.
    pub fn from_code(code: u8) -> Command {
        match code {
            1 => Command::Place,
            2 => Command::Move,
            3 => Command::Replace,
            4 => Command::Remove,
            _ => Command::Invalid,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// The lower-case name used on the wire
    pub fn name(self) -> &'static str {
        COMMANDS.name(self.code())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of the rotation applied while tweening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    None,
    Auto,
    Cw,
    Ccw,
}

impl Rotation {
    /// Look up a rotation by its lower-case name. Unknown names are `None`.
    pub fn from_name(name: &str) -> Rotation {
        Rotation::from_code(ROTATIONS.code(name))
    }

    /// Look up a rotation by its numeric code. Out of range codes are `None`.
    pub fn from_code(code: u8) -> Rotation {
        match code {
            1 => Rotation::Auto,
            2 => Rotation::Cw,
            3 => Rotation::Ccw,
            _ => Rotation::None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// The lower-case name used on the wire
    pub fn name(self) -> &'static str {
        ROTATIONS.name(self.code())
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
