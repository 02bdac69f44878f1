// Constants for the Hor parser

/// Maximum nesting depth of expressions and branch bodies before parsing
/// gives up with [`ParseError::NestingTooDeep`](super::errors::ParseError).
/// Can be overridden per parser with `Parser::with_max_depth`.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Initial capacity of the top-level item list; grows by doubling
pub const INITIAL_PROGRAM_CAPACITY: usize = 16;
