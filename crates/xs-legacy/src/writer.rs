use xs_core::CommandSyntax;

use crate::END_DEFINITION;

/// Renders one command as a legacy record, parameter kinds in physical order.
pub fn write_record(command: &CommandSyntax) -> String {
    let mut lines = Vec::with_capacity(command.parameters().len() + 5);
    lines.push(
        command
            .versions()
            .iter()
            .map(|version| version.legacy_token())
            .collect::<Vec<_>>()
            .join(" "),
    );
    lines.push(command.id().to_string());
    lines.push(command.group().name().to_string());
    lines.push(command.syntax().to_string());

    let mut parameters = command.parameters().to_vec();
    parameters.sort_by_key(|parameter| parameter.physical_index);
    lines.extend(
        parameters
            .iter()
            .map(|parameter| parameter.kind.name().to_string()),
    );

    lines.push(END_DEFINITION.to_string());
    let mut record = lines.join("\n");
    record.push('\n');
    record
}

pub fn write_definitions(commands: &[CommandSyntax]) -> String {
    commands.iter().map(write_record).collect()
}
