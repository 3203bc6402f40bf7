use std::collections::HashMap;
use std::io::BufRead;

use tracing::info;
use xs_core::{CommandGroup, CommandSyntax, GameVersion, SyntaxError};
use xs_legacy::{LegacySyntaxReader, ReaderOptions};

/// Every known command syntax, indexed by shape hash.
///
/// A catalog is immutable once built, so a shared reference can be handed to
/// any number of reader threads.
#[derive(Debug, Clone, Default)]
pub struct SyntaxCatalog {
    commands: Vec<CommandSyntax>,
    by_hash: HashMap<String, Vec<usize>>,
}

impl SyntaxCatalog {
    pub fn new(commands: Vec<CommandSyntax>) -> Self {
        let mut by_hash: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, command) in commands.iter().enumerate() {
            by_hash
                .entry(command.hash().to_string())
                .or_default()
                .push(index);
        }
        Self { commands, by_hash }
    }

    /// Reads a whole legacy definition file. Nothing is returned unless the
    /// read succeeds.
    pub fn load<R: BufRead>(input: R, options: ReaderOptions) -> Result<Self, SyntaxError> {
        let commands = LegacySyntaxReader::with_options(input, options).read_file()?;
        let catalog = Self::new(commands);
        info!(
            commands = catalog.len(),
            shapes = catalog.by_hash.len(),
            "built syntax catalog"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSyntax> {
        self.commands.iter()
    }

    pub fn find_by_index(&self, index: usize) -> Result<&CommandSyntax, SyntaxError> {
        self.commands
            .get(index)
            .ok_or(SyntaxError::IndexOutOfRange {
                index,
                len: self.commands.len(),
            })
    }

    /// First command with `id` available in `version`. Duplicate ids are kept
    /// in file order.
    pub fn find_by_id(&self, id: u32, version: GameVersion) -> Option<&CommandSyntax> {
        self.commands
            .iter()
            .find(|command| command.id() == id && command.supports(version))
    }

    pub fn by_group(&self, group: CommandGroup) -> impl Iterator<Item = &CommandSyntax> {
        self.commands
            .iter()
            .filter(move |command| command.group() == group)
    }

    pub fn by_version(&self, version: GameVersion) -> impl Iterator<Item = &CommandSyntax> {
        self.commands
            .iter()
            .filter(move |command| command.supports(version))
    }

    /// Narrows the commands sharing `hash` by argument count, then by game
    /// version. More than one survivor is reported, never picked.
    pub fn find_by_hash(
        &self,
        hash: &str,
        argument_count: usize,
        version: GameVersion,
    ) -> Result<&CommandSyntax, SyntaxError> {
        let Some(indices) = self.by_hash.get(hash) else {
            return Err(SyntaxError::not_found(hash, "no command has this shape"));
        };

        let by_count = indices
            .iter()
            .map(|index| &self.commands[*index])
            .filter(|command| command.accepts_argument_count(argument_count))
            .collect::<Vec<_>>();
        if by_count.is_empty() {
            return Err(SyntaxError::not_found(
                hash,
                format!("no overload takes {} arguments", argument_count),
            ));
        }

        let by_version = by_count
            .into_iter()
            .filter(|command| command.supports(version))
            .collect::<Vec<_>>();
        match by_version.as_slice() {
            [] => Err(SyntaxError::not_found(
                hash,
                format!("not available in {}", version),
            )),
            [command] => Ok(*command),
            candidates => Err(SyntaxError::AmbiguousMatch {
                hash: hash.to_string(),
                candidates: candidates.iter().map(|command| command.id()).collect(),
            }),
        }
    }
}
