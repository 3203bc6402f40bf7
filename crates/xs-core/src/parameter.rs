use serde::{Deserialize, Serialize};

/// What a parameter slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    Var,
    LabelName,
    String,
    Number,
    Condition,
    Parameter,
    VarNumber,
    VarString,
    VarStation,
    VarWare,
    VarSector,
    ScriptName,
    VarStationType,
    VarShipType,
    VarRace,
    VarShip,
    VarShipTypeStationType,
    VarShipStation,
    VarConstant,
    Value,
    VarShipOwnedByPlayer,
    VarStationOwnedByPlayer,
    VarShipStationOwnedByPlayer,
    VarClass,
    VarTransportClass,
    VarStationProduct,
    VarStationResource,
    VarWareOfShip,
    VarHomebaseProduct,
    VarHomebaseResource,
    Comment,
    VarSectorPosition,
    LabelNumber,
    VarBoolean,
    VarStationSerial,
    VarJumpdriveGate,
    VarAsteroid,
    VarWarpgate,
    VarQuest,
    VarTime,
    VarFlightReturn,
    VarFleetCommand,
    VarRelation,
    VarWingCommand,
    VarObjectCommand,
    VarObjectCommandSignal,
    VarArray,
    RefObjectCommand,
    Expression,
    RetVar,
    RetVarIf,
    RetVarIfStart,
    VarNumberRef,
    VarGlobalParameter,
    VarEnvironment,
    VarScriptDataType,
    VarSignal,
    VarPassenger,
    VarWeapon,
    VarLaser,
    VarShield,
    VarMissile,
    VarDataType,
    VarFleet,
    VarMarine,
    VarTable,
    VarParameterType,
    VarPosition,
    VarObject,
    VarWing,
    MacroParameter,
    ScriptArgument,
}

/// Names used by the legacy definition file. Entry `i` must describe the
/// variant whose discriminant is `i`.
pub const PARAMETER_KIND_TABLE: [(ParameterKind, &str); ParameterKind::COUNT] = [
    (ParameterKind::Var, "Var"),
    (ParameterKind::LabelName, "Label Name"),
    (ParameterKind::String, "String"),
    (ParameterKind::Number, "Number"),
    (ParameterKind::Condition, "Condition"),
    (ParameterKind::Parameter, "Parameter"),
    (ParameterKind::VarNumber, "Var/Number"),
    (ParameterKind::VarString, "Var/String"),
    (ParameterKind::VarStation, "Var/Station"),
    (ParameterKind::VarWare, "Var/Ware"),
    (ParameterKind::VarSector, "Var/Sector"),
    (ParameterKind::ScriptName, "Script Name"),
    (ParameterKind::VarStationType, "Var/Station Type"),
    (ParameterKind::VarShipType, "Var/Ship Type"),
    (ParameterKind::VarRace, "Var/Race"),
    (ParameterKind::VarShip, "Var/Ship"),
    (ParameterKind::VarShipTypeStationType, "Var/Ship Type/Station Type"),
    (ParameterKind::VarShipStation, "Var/Ship/Station"),
    (ParameterKind::VarConstant, "Var/Constant"),
    (ParameterKind::Value, "Value"),
    (ParameterKind::VarShipOwnedByPlayer, "Var/Ship owned by Player"),
    (ParameterKind::VarStationOwnedByPlayer, "Var/Station owned by Player"),
    (ParameterKind::VarShipStationOwnedByPlayer, "Var/Ship/Station owned by Player"),
    (ParameterKind::VarClass, "Var/Class"),
    (ParameterKind::VarTransportClass, "Var/Transport Class"),
    (ParameterKind::VarStationProduct, "Var/Station Product"),
    (ParameterKind::VarStationResource, "Var/Station Resource"),
    (ParameterKind::VarWareOfShip, "Var/Ware of Ship"),
    (ParameterKind::VarHomebaseProduct, "Var/Homebase Product"),
    (ParameterKind::VarHomebaseResource, "Var/Homebase Resource"),
    (ParameterKind::Comment, "Comment"),
    (ParameterKind::VarSectorPosition, "Var/Sector Position"),
    (ParameterKind::LabelNumber, "Label Number"),
    (ParameterKind::VarBoolean, "Var/Boolean"),
    (ParameterKind::VarStationSerial, "Var/Station Serial"),
    (ParameterKind::VarJumpdriveGate, "Var/Jumpdrive Gate"),
    (ParameterKind::VarAsteroid, "Var/Asteroid"),
    (ParameterKind::VarWarpgate, "Var/Warpgate"),
    (ParameterKind::VarQuest, "Var/Quest"),
    (ParameterKind::VarTime, "Var/Time"),
    (ParameterKind::VarFlightReturn, "Var/Flight Return"),
    (ParameterKind::VarFleetCommand, "Var/Fleet Command"),
    (ParameterKind::VarRelation, "Var/Relation"),
    (ParameterKind::VarWingCommand, "Var/Wing Command"),
    (ParameterKind::VarObjectCommand, "Var/Object Command"),
    (ParameterKind::VarObjectCommandSignal, "Var/Object Command/Signal"),
    (ParameterKind::VarArray, "Var/Array"),
    (ParameterKind::RefObjectCommand, "Ref/Object Command"),
    (ParameterKind::Expression, "Expression"),
    (ParameterKind::RetVar, "RetVar"),
    (ParameterKind::RetVarIf, "RetVar/IF"),
    (ParameterKind::RetVarIfStart, "RetVar/IF/START"),
    (ParameterKind::VarNumberRef, "Var/Number/Ref"),
    (ParameterKind::VarGlobalParameter, "Var/Global Parameter"),
    (ParameterKind::VarEnvironment, "Var/Environment"),
    (ParameterKind::VarScriptDataType, "Var/Script Data Type"),
    (ParameterKind::VarSignal, "Var/Signal"),
    (ParameterKind::VarPassenger, "Var/Passenger"),
    (ParameterKind::VarWeapon, "Var/Weapon"),
    (ParameterKind::VarLaser, "Var/Laser"),
    (ParameterKind::VarShield, "Var/Shield"),
    (ParameterKind::VarMissile, "Var/Missile"),
    (ParameterKind::VarDataType, "Var/Data Type"),
    (ParameterKind::VarFleet, "Var/Fleet"),
    (ParameterKind::VarMarine, "Var/Marine"),
    (ParameterKind::VarTable, "Var/Table"),
    (ParameterKind::VarParameterType, "Var/Parameter Type"),
    (ParameterKind::VarPosition, "Var/Position"),
    (ParameterKind::VarObject, "Var/Object"),
    (ParameterKind::VarWing, "Var/Wing"),
    (ParameterKind::MacroParameter, "Macro Parameter"),
    (ParameterKind::ScriptArgument, "Script Argument"),
];

const _: () = {
    let mut index = 0;
    while index < ParameterKind::COUNT {
        assert!(PARAMETER_KIND_TABLE[index].0 as usize == index);
        index += 1;
    }
    assert!(ParameterKind::LAST as usize + 1 == ParameterKind::COUNT);
};

impl ParameterKind {
    pub const COUNT: usize = 72;
    const LAST: ParameterKind = ParameterKind::ScriptArgument;

    pub fn name(self) -> &'static str {
        PARAMETER_KIND_TABLE[self as usize].1
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        PARAMETER_KIND_TABLE
            .iter()
            .find(|(_, text)| *text == name)
            .map(|(kind, _)| *kind)
    }

    pub fn all() -> impl Iterator<Item = ParameterKind> {
        PARAMETER_KIND_TABLE.iter().map(|(kind, _)| *kind)
    }

    pub fn is_return_variable(self) -> bool {
        matches!(self, Self::RetVar | Self::RetVarIf | Self::RetVarIfStart)
    }

    pub fn is_variadic(self) -> bool {
        self == Self::ScriptArgument
    }

    pub fn usage(self) -> ParameterUsage {
        match self {
            Self::RetVar | Self::RetVarIf | Self::RetVarIfStart => ParameterUsage::Write,
            Self::LabelName | Self::Comment => ParameterUsage::None,
            _ => ParameterUsage::Read,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterUsage {
    None,
    Read,
    Write,
}

/// One formal parameter slot of a command.
///
/// `physical_index` is the slot's position in the declaration (the `N` of
/// `$N`), `display_index` its position in the rendered syntax, and `ordinal`
/// a sequence number that runs across every parameter of a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterSyntax {
    pub kind: ParameterKind,
    pub physical_index: usize,
    pub display_index: usize,
    pub ordinal: usize,
    pub usage: ParameterUsage,
}

impl ParameterSyntax {
    pub const fn new(
        kind: ParameterKind,
        physical_index: usize,
        display_index: usize,
        ordinal: usize,
        usage: ParameterUsage,
    ) -> Self {
        Self {
            kind,
            physical_index,
            display_index,
            ordinal,
            usage,
        }
    }
}

/// Parameter of an expression-only statement.
pub static EXPRESSION_PARAMETER: ParameterSyntax =
    ParameterSyntax::new(ParameterKind::Expression, 0, 0, 0, ParameterUsage::Read);

/// Any argument passed through a variadic script call.
pub static SCRIPT_ARGUMENT_PARAMETER: ParameterSyntax =
    ParameterSyntax::new(ParameterKind::ScriptArgument, 0, 0, 0, ParameterUsage::Read);

/// Name introduced by a label declaration.
pub static LABEL_DECLARATION_PARAMETER: ParameterSyntax =
    ParameterSyntax::new(ParameterKind::LabelName, 0, 0, 0, ParameterUsage::None);
