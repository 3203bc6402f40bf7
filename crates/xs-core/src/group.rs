use serde::{Deserialize, Serialize};

/// Top level category of a script command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CommandGroup {
    Array,
    Custom,
    Fleet,
    FlowControl,
    GameEngine,
    Graph,
    Macro,
    Marine,
    Maths,
    Merchant,
    NonPlayer,
    ObjectAction,
    ObjectProperty,
    Passenger,
    Pilot,
    Player,
    ScriptProperty,
    ShipAction,
    ShipProperty,
    ShipTrade,
    ShipWing,
    StationProperty,
    StationTrade,
    StockExchange,
    String,
    SystemProperty,
    UniverseData,
    UniverseProperty,
    UserInterface,
    War,
    WareProperty,
    WeaponProperty,
    Hidden,
}

/// Names used by the legacy definition file. Entry `i` must describe the
/// variant whose discriminant is `i`.
pub const COMMAND_GROUP_TABLE: [(CommandGroup, &str); CommandGroup::COUNT] = [
    (CommandGroup::Array, "ARRAY"),
    (CommandGroup::Custom, "CUSTOM"),
    (CommandGroup::Fleet, "FLEET"),
    (CommandGroup::FlowControl, "FLOW_CONTROL"),
    (CommandGroup::GameEngine, "GAME_ENGINE"),
    (CommandGroup::Graph, "GRAPH"),
    (CommandGroup::Macro, "MACRO"),
    (CommandGroup::Marine, "MARINE"),
    (CommandGroup::Maths, "MATHS"),
    (CommandGroup::Merchant, "MERCHANT"),
    (CommandGroup::NonPlayer, "NON_PLAYER"),
    (CommandGroup::ObjectAction, "OBJECT_ACTION"),
    (CommandGroup::ObjectProperty, "OBJECT_PROPERTY"),
    (CommandGroup::Passenger, "PASSENGER"),
    (CommandGroup::Pilot, "PILOT"),
    (CommandGroup::Player, "PLAYER"),
    (CommandGroup::ScriptProperty, "SCRIPT_PROPERTY"),
    (CommandGroup::ShipAction, "SHIP_ACTION"),
    (CommandGroup::ShipProperty, "SHIP_PROPERTY"),
    (CommandGroup::ShipTrade, "SHIP_TRADE"),
    (CommandGroup::ShipWing, "SHIP_WING"),
    (CommandGroup::StationProperty, "STATION_PROPERTY"),
    (CommandGroup::StationTrade, "STATION_TRADE"),
    (CommandGroup::StockExchange, "STOCK_EXCHANGE"),
    (CommandGroup::String, "STRING"),
    (CommandGroup::SystemProperty, "SYSTEM_PROPERTY"),
    (CommandGroup::UniverseData, "UNIVERSE_DATA"),
    (CommandGroup::UniverseProperty, "UNIVERSE_PROPERTY"),
    (CommandGroup::UserInterface, "USER_INTERFACE"),
    (CommandGroup::War, "WAR"),
    (CommandGroup::WareProperty, "WARE_PROPERTY"),
    (CommandGroup::WeaponProperty, "WEAPON_PROPERTY"),
    (CommandGroup::Hidden, "HIDDEN"),
];

const _: () = {
    let mut index = 0;
    while index < CommandGroup::COUNT {
        assert!(COMMAND_GROUP_TABLE[index].0 as usize == index);
        index += 1;
    }
    assert!(CommandGroup::LAST as usize + 1 == CommandGroup::COUNT);
};

impl CommandGroup {
    pub const COUNT: usize = 33;
    const LAST: CommandGroup = CommandGroup::Hidden;

    pub fn name(self) -> &'static str {
        COMMAND_GROUP_TABLE[self as usize].1
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        COMMAND_GROUP_TABLE
            .iter()
            .find(|(_, text)| *text == name)
            .map(|(group, _)| *group)
    }

    pub fn all() -> impl Iterator<Item = CommandGroup> {
        COMMAND_GROUP_TABLE.iter().map(|(group, _)| *group)
    }
}
