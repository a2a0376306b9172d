mod compiled;
mod error;
mod lexer;
mod segment;

pub use compiled::{CompiledPattern, compile};
pub use error::{PatternError, PatternResult};
pub use lexer::{SegmentKind, parse_segment};
pub use segment::{Capture, CaptureKind, Shape, Token};
