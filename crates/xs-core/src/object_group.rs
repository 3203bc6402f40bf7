use std::ops::{RangeInclusive, Sub};

use serde::{Deserialize, Serialize};

use crate::SyntaxError;

/// Semantic group of a named game object referenced by a script argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScriptObjectGroup {
    Constant,
    DataType,
    FlightReturn,
    ObjectClass,
    ObjectCommand,
    ParameterType,
    Race,
    Relation,
    Sector,
    StationSerial,
    TransportClass,
    WingCommand,
}

/// Language string pages that hold object names.
pub mod page {
    pub const SECTORS: u32 = 7;
    pub const RELATIONS: u32 = 35;
    pub const RACES: u32 = 1266;
    pub const DATA_TYPES: u32 = 2000;
    pub const OBJECT_CLASSES: u32 = 2007;
    /// Shared by object commands and wing commands, split by id.
    pub const OBJECT_COMMANDS: u32 = 2008;
    pub const TRANSPORT_CLASSES: u32 = 2009;
    pub const STATION_SERIALS: u32 = 2017;
    pub const CONSTANTS: u32 = 2020;
    pub const FLIGHT_RETURNS: u32 = 2022;
    pub const PARAMETER_TYPES: u32 = 2030;
}

struct PageEntry {
    page: u32,
    ids: RangeInclusive<u32>,
    group: ScriptObjectGroup,
}

static PAGE_TABLE: [PageEntry; 12] = [
    PageEntry {
        page: page::CONSTANTS,
        ids: 0..=999,
        group: ScriptObjectGroup::Constant,
    },
    PageEntry {
        page: page::DATA_TYPES,
        ids: 0..=999,
        group: ScriptObjectGroup::DataType,
    },
    PageEntry {
        page: page::FLIGHT_RETURNS,
        ids: 0..=999,
        group: ScriptObjectGroup::FlightReturn,
    },
    PageEntry {
        page: page::OBJECT_CLASSES,
        ids: 0..=9999,
        group: ScriptObjectGroup::ObjectClass,
    },
    PageEntry {
        page: page::OBJECT_COMMANDS,
        ids: 0..=999,
        group: ScriptObjectGroup::ObjectCommand,
    },
    PageEntry {
        page: page::PARAMETER_TYPES,
        ids: 0..=999,
        group: ScriptObjectGroup::ParameterType,
    },
    PageEntry {
        page: page::RACES,
        ids: 1..=99,
        group: ScriptObjectGroup::Race,
    },
    PageEntry {
        page: page::RELATIONS,
        ids: 0..=9,
        group: ScriptObjectGroup::Relation,
    },
    PageEntry {
        page: page::SECTORS,
        ids: 1_000_000..=1_999_999,
        group: ScriptObjectGroup::Sector,
    },
    PageEntry {
        page: page::STATION_SERIALS,
        ids: 0..=99,
        group: ScriptObjectGroup::StationSerial,
    },
    PageEntry {
        page: page::TRANSPORT_CLASSES,
        ids: 0..=99,
        group: ScriptObjectGroup::TransportClass,
    },
    PageEntry {
        page: page::OBJECT_COMMANDS,
        ids: 1000..=1999,
        group: ScriptObjectGroup::WingCommand,
    },
];

impl ScriptObjectGroup {
    pub const ALL: [ScriptObjectGroup; 12] = [
        Self::Constant,
        Self::DataType,
        Self::FlightReturn,
        Self::ObjectClass,
        Self::ObjectCommand,
        Self::ParameterType,
        Self::Race,
        Self::Relation,
        Self::Sector,
        Self::StationSerial,
        Self::TransportClass,
        Self::WingCommand,
    ];

    pub const FIRST: ScriptObjectGroup = Self::Constant;

    /// Fails for any pair outside the recognized pages; never guesses.
    pub fn classify(page: u32, id: u32) -> Result<Self, SyntaxError> {
        PAGE_TABLE
            .iter()
            .find(|entry| entry.page == page && entry.ids.contains(&id))
            .map(|entry| entry.group)
            .ok_or_else(|| {
                SyntaxError::argument(format!(
                    "No script object group for string {} on page {}.",
                    id, page
                ))
            })
    }

    /// The following group, or `None` past the last one.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self as usize + 1).copied()
    }

    pub fn iter() -> impl Iterator<Item = ScriptObjectGroup> {
        std::iter::successors(Some(Self::FIRST), |group| group.next())
    }
}

/// Zero-based distance between two groups, for indexing parallel tables.
impl Sub for ScriptObjectGroup {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        self as isize - rhs as isize
    }
}
