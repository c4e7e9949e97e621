use crate::error::{Error, Result};

/// The closed set of build operations the driver knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Clean,
    Build,
    Dependencies,
    Shaders,
    PostCompile,
}

/// Selection code for the aggregate full build, not an operation of its
/// own.
pub const ALL_CODE: char = 'A';

/// The fixed order a full build runs in.
pub const FULL_BUILD_SEQUENCE: [Operation; 5] = [
    Operation::Clean,
    Operation::Dependencies,
    Operation::Build,
    Operation::Shaders,
    Operation::PostCompile,
];

impl Operation {
    pub fn from_code(code: char) -> Result<Operation> {
        match code {
            'C' => Ok(Operation::Clean),
            'B' => Ok(Operation::Build),
            'D' => Ok(Operation::Dependencies),
            'S' => Ok(Operation::Shaders),
            'P' => Ok(Operation::PostCompile),
            _ => Err(Error::UnknownOperation(code)),
        }
    }

    pub fn code(&self) -> char {
        match self {
            Operation::Clean => 'C',
            Operation::Build => 'B',
            Operation::Dependencies => 'D',
            Operation::Shaders => 'S',
            Operation::PostCompile => 'P',
        }
    }
}

/// Resolves a selection string into the operations to run, in order.
///
/// `A` takes priority over every other code in the same selection,
/// wherever it appears. Without `A` the characters map 1:1, order and
/// repetition preserved. The whole selection is resolved before anything
/// runs, so an unrecognized code means no operation executes at all.
pub fn parse_selection(selection: &str) -> Result<Vec<Operation>> {
    if selection.contains(ALL_CODE) {
        if selection.chars().count() > 1 {
            log::warn!("Since the 'A' option was passed, all other options are ignored");
        }
        return Ok(FULL_BUILD_SEQUENCE.to_vec());
    }
    selection.chars().map(Operation::from_code).collect()
}
