mod reader;
mod writer;

pub use reader::{
    generate_params, generate_syntax, read_definitions, LegacySyntaxReader, ReaderOptions,
    UnknownNamePolicy, END_DEFINITION,
};
pub use writer::{write_definitions, write_record};
