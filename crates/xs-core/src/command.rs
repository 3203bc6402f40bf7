use std::collections::BTreeSet;

use serde::Serialize;

use crate::{CommandGroup, CommandHash, GameVersion, ParameterSyntax};

/// Command ids that are auxiliary in every group.
pub mod command_id {
    pub const NOP: u32 = 0;
    pub const COMMENT: u32 = 1;
    pub const COMMAND_COMMENT: u32 = 2;
    pub const DEFINE_LABEL: u32 = 3;
    pub const ELSE: u32 = 4;
    pub const END: u32 = 5;
    pub const BREAK: u32 = 6;
    pub const CONTINUE: u32 = 7;

    pub const AUXILIARY: [u32; 8] = [
        NOP,
        COMMENT,
        COMMAND_COMMENT,
        DEFINE_LABEL,
        ELSE,
        END,
        BREAK,
        CONTINUE,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommandType {
    Standard,
    Auxiliary,
    Macro,
}

impl CommandType {
    /// Total over every `(id, group)` pair. Rules apply in order: the hidden
    /// group, the auxiliary id set, the macro group, then standard.
    pub fn classify(id: u32, group: CommandGroup) -> Self {
        if group == CommandGroup::Hidden || command_id::AUXILIARY.contains(&id) {
            return Self::Auxiliary;
        }
        if group == CommandGroup::Macro {
            return Self::Macro;
        }
        Self::Standard
    }
}

/// Declared shape of one script command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSyntax {
    id: u32,
    group: CommandGroup,
    syntax: String,
    parameters: Vec<ParameterSyntax>,
    hash: String,
    versions: BTreeSet<GameVersion>,
}

impl CommandSyntax {
    /// `parameters` must be in display order; `syntax` in canonical form.
    pub fn new(
        id: u32,
        group: CommandGroup,
        syntax: impl Into<String>,
        parameters: Vec<ParameterSyntax>,
        versions: BTreeSet<GameVersion>,
    ) -> Self {
        let syntax = syntax.into();
        let hash = CommandHash::from_syntax(&syntax).hash().to_string();
        Self {
            id,
            group,
            syntax,
            parameters,
            hash,
            versions,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn group(&self) -> CommandGroup {
        self.group
    }

    pub fn command_type(&self) -> CommandType {
        CommandType::classify(self.id, self.group)
    }

    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    pub fn parameters(&self) -> &[ParameterSyntax] {
        &self.parameters
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn versions(&self) -> &BTreeSet<GameVersion> {
        &self.versions
    }

    pub fn supports(&self, version: GameVersion) -> bool {
        self.versions.contains(&version)
    }

    pub fn is_variadic(&self) -> bool {
        self.parameters
            .last()
            .is_some_and(|parameter| parameter.kind.is_variadic())
    }

    pub fn accepts_argument_count(&self, count: usize) -> bool {
        if self.is_variadic() {
            count + 1 >= self.parameters.len()
        } else {
            count == self.parameters.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParameterKind, ParameterUsage};

    fn param(kind: ParameterKind, index: usize) -> ParameterSyntax {
        ParameterSyntax::new(kind, index, index, index, kind.usage())
    }

    #[test]
    fn classify_covers_hidden_auxiliary_macro_and_standard() {
        assert_eq!(
            CommandType::classify(900, CommandGroup::Hidden),
            CommandType::Auxiliary
        );
        assert_eq!(
            CommandType::classify(command_id::COMMENT, CommandGroup::Custom),
            CommandType::Auxiliary
        );
        assert_eq!(
            CommandType::classify(command_id::END, CommandGroup::Macro),
            CommandType::Auxiliary
        );
        assert_eq!(
            CommandType::classify(1400, CommandGroup::Macro),
            CommandType::Macro
        );
        assert_eq!(
            CommandType::classify(103, CommandGroup::Array),
            CommandType::Standard
        );
    }

    #[test]
    fn new_derives_hash_from_canonical_syntax() {
        let command = CommandSyntax::new(
            103,
            CommandGroup::Array,
            "$0 = array alloc: size=$1",
            vec![param(ParameterKind::RetVar, 0), param(ParameterKind::VarNumber, 1)],
            BTreeSet::from([GameVersion::Reunion]),
        );
        assert_eq!(command.hash(), "=arrayalloc:size=");
        assert_eq!(command.parameters()[0].usage, ParameterUsage::Write);
        assert!(command.supports(GameVersion::Reunion));
        assert!(!command.supports(GameVersion::Threat));
        assert!(command.accepts_argument_count(2));
        assert!(!command.accepts_argument_count(3));
    }

    #[test]
    fn variadic_commands_accept_any_tail_length() {
        let command = CommandSyntax::new(
            102,
            CommandGroup::ScriptProperty,
            "$0 call script $1 : $2",
            vec![
                param(ParameterKind::RetVar, 0),
                param(ParameterKind::ScriptName, 1),
                param(ParameterKind::ScriptArgument, 2),
            ],
            BTreeSet::from([GameVersion::TerranConflict]),
        );
        assert!(command.is_variadic());
        assert!(command.accepts_argument_count(2));
        assert!(command.accepts_argument_count(7));
        assert!(!command.accepts_argument_count(1));
    }
}
