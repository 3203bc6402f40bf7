pub mod command;
pub mod error;
pub mod group;
pub mod hash;
pub mod object_group;
pub mod parameter;
pub mod token;
pub mod version;

pub use command::*;
pub use error::{NameKind, SyntaxError};
pub use group::*;
pub use hash::{parameter_marker_regex, CommandHash};
pub use object_group::*;
pub use parameter::*;
pub use token::*;
pub use version::*;
