use std::collections::BTreeSet;
use std::io::{BufRead, Lines};

use tracing::{debug, warn};
use xs_core::{
    parameter_marker_regex, CommandGroup, CommandSyntax, GameVersion, NameKind, ParameterKind,
    ParameterSyntax, SyntaxError,
};

/// Terminates every record of the legacy definition file.
pub const END_DEFINITION: &str = "-------------- END DEFINITION ---------------";

/// What to do with a record naming a group or parameter kind outside the
/// fixed tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownNamePolicy {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderOptions {
    pub unknown_names: UnknownNamePolicy,
}

/// Reads the positional record format:
///
/// ```text
/// X3 TC AP
/// 103
/// ARRAY
/// $0 = array alloc: size=$1
/// RetVar
/// Var/Number
/// -------------- END DEFINITION ---------------
/// ```
///
/// One kind line follows the syntax line per `$N` marker, in `N` order.
pub struct LegacySyntaxReader<R> {
    lines: Lines<R>,
    line_number: usize,
    next_ordinal: usize,
    options: ReaderOptions,
}

#[derive(Debug)]
struct RawRecord {
    versions: BTreeSet<GameVersion>,
    id: u32,
    group: (usize, String),
    syntax: String,
    display_order: Vec<usize>,
    kinds: Vec<(usize, String)>,
}

pub fn read_definitions(
    source: &str,
    options: ReaderOptions,
) -> Result<Vec<CommandSyntax>, SyntaxError> {
    LegacySyntaxReader::with_options(source.as_bytes(), options).read_file()
}

impl<R: BufRead> LegacySyntaxReader<R> {
    pub fn new(input: R) -> Self {
        Self::with_options(input, ReaderOptions::default())
    }

    pub fn with_options(input: R, options: ReaderOptions) -> Self {
        Self {
            lines: input.lines(),
            line_number: 0,
            next_ordinal: 0,
            options,
        }
    }

    /// Reads every record in file order. Any structural problem fails the
    /// whole read.
    pub fn read_file(mut self) -> Result<Vec<CommandSyntax>, SyntaxError> {
        let mut commands = Vec::new();
        while let Some(record) = self.read_record()? {
            match self.build_command(record) {
                Ok(command) => {
                    debug!(
                        id = command.id(),
                        group = command.group().name(),
                        parameters = command.parameters().len(),
                        "parsed command definition"
                    );
                    commands.push(command);
                }
                Err(error @ SyntaxError::UnrecognizedName { .. })
                    if self.options.unknown_names == UnknownNamePolicy::Skip =>
                {
                    warn!(%error, "skipping command definition");
                }
                Err(error) => return Err(error),
            }
        }
        debug!(commands = commands.len(), "read legacy definition file");
        Ok(commands)
    }

    fn next_line(&mut self) -> Result<Option<String>, SyntaxError> {
        let Some(line) = self.lines.next() else {
            return Ok(None);
        };
        self.line_number += 1;
        let line = line.map_err(|error| {
            SyntaxError::format(self.line_number, format!("Unable to read line: {}", error))
        })?;
        Ok(Some(line.trim_end().to_string()))
    }

    fn read_required(&mut self, field: &str) -> Result<String, SyntaxError> {
        let Some(line) = self.next_line()? else {
            return Err(SyntaxError::format(
                self.line_number + 1,
                format!("Unexpected end of file, expected {}.", field),
            ));
        };
        if line.trim().is_empty() {
            return Err(SyntaxError::format(
                self.line_number,
                format!("Expected {}, found an empty line.", field),
            ));
        }
        Ok(line)
    }

    fn read_record(&mut self) -> Result<Option<RawRecord>, SyntaxError> {
        let versions_line = loop {
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }
            break line;
        };
        let versions = self.parse_versions(&versions_line)?;

        let id_line = self.read_required("command id")?;
        let id = id_line.trim().parse::<u32>().map_err(|_| {
            SyntaxError::format(
                self.line_number,
                format!("Expected command id, found \"{}\".", id_line.trim()),
            )
        })?;

        let group_name = self.read_required("command group")?;
        let group = (self.line_number, group_name.trim().to_string());

        let raw_syntax = self.read_required("command syntax")?;
        let syntax = generate_syntax(&raw_syntax);
        let display_order = self.marker_order(&syntax)?;

        let mut kinds = Vec::with_capacity(display_order.len());
        for index in 0..display_order.len() {
            let line = self.read_required(&format!("kind of parameter ${}", index))?;
            if line.trim() == END_DEFINITION {
                return Err(SyntaxError::format(
                    self.line_number,
                    format!(
                        "Command {} declares {} parameters but its syntax references {}.",
                        id,
                        index,
                        display_order.len()
                    ),
                ));
            }
            kinds.push((self.line_number, line.trim().to_string()));
        }

        let end = self.read_required("end of definition")?;
        if end.trim() != END_DEFINITION {
            return Err(SyntaxError::format(
                self.line_number,
                format!(
                    "Expected end of definition for command {}, found \"{}\".",
                    id,
                    end.trim()
                ),
            ));
        }

        Ok(Some(RawRecord {
            versions,
            id,
            group,
            syntax,
            display_order,
            kinds,
        }))
    }

    fn parse_versions(&self, line: &str) -> Result<BTreeSet<GameVersion>, SyntaxError> {
        let mut versions = BTreeSet::new();
        for token in line.split_whitespace() {
            let version = GameVersion::from_legacy_token(token).ok_or_else(|| {
                SyntaxError::format(
                    self.line_number,
                    format!("Expected game versions, found \"{}\".", token),
                )
            })?;
            versions.insert(version);
        }
        Ok(versions)
    }

    /// Physical indices in order of first appearance. Markers must be unique
    /// and cover `0..count`.
    fn marker_order(&self, syntax: &str) -> Result<Vec<usize>, SyntaxError> {
        let mut order = Vec::new();
        for captures in parameter_marker_regex().captures_iter(syntax) {
            let index = captures[1].parse::<usize>().map_err(|_| {
                SyntaxError::format(
                    self.line_number,
                    format!("Parameter marker \"{}\" is out of range.", &captures[0]),
                )
            })?;
            if order.contains(&index) {
                return Err(SyntaxError::format(
                    self.line_number,
                    format!("Parameter ${} is referenced twice.", index),
                ));
            }
            order.push(index);
        }

        let mut sorted = order.clone();
        sorted.sort_unstable();
        if sorted.iter().enumerate().any(|(expected, index)| expected != *index) {
            return Err(SyntaxError::format(
                self.line_number,
                format!(
                    "Parameter markers must be numbered $0 to ${} without gaps.",
                    order.len().saturating_sub(1)
                ),
            ));
        }
        Ok(order)
    }

    fn build_command(&mut self, record: RawRecord) -> Result<CommandSyntax, SyntaxError> {
        let (group_line, group_name) = &record.group;
        let group =
            CommandGroup::from_name(group_name).ok_or_else(|| SyntaxError::UnrecognizedName {
                kind: NameKind::Group,
                name: group_name.clone(),
                line: *group_line,
            })?;

        let kinds = record
            .kinds
            .iter()
            .map(|(line, name)| {
                ParameterKind::from_name(name).ok_or_else(|| SyntaxError::UnrecognizedName {
                    kind: NameKind::ParameterKind,
                    name: name.clone(),
                    line: *line,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let parameters = generate_params(&kinds, &record.display_order, self.next_ordinal);
        self.next_ordinal += parameters.len();

        Ok(CommandSyntax::new(
            record.id,
            group,
            record.syntax,
            parameters,
            record.versions,
        ))
    }
}

/// Canonical display form of a raw syntax line: trimmed, single spaced, and
/// with markers written as `$N`.
pub fn generate_syntax(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    parameter_marker_regex()
        .replace_all(&collapsed, |captures: &regex::Captures<'_>| {
            let digits = captures[1].trim_start_matches('0');
            if digits.is_empty() {
                "$0".to_string()
            } else {
                format!("${}", digits)
            }
        })
        .into_owned()
}

/// Builds parameter slots from kinds in physical order. `display_order`
/// lists physical indices as they appear in the syntax; the result follows
/// it. Ordinals run from `first_ordinal` in physical order.
pub fn generate_params(
    kinds: &[ParameterKind],
    display_order: &[usize],
    first_ordinal: usize,
) -> Vec<ParameterSyntax> {
    display_order
        .iter()
        .enumerate()
        .filter_map(|(display_index, physical_index)| {
            kinds.get(*physical_index).map(|kind| {
                ParameterSyntax::new(
                    *kind,
                    *physical_index,
                    display_index,
                    first_ordinal + physical_index,
                    kind.usage(),
                )
            })
        })
        .collect()
}
