//! Turn whitespace-separated hex byte values (as copied out of a serial
//! terminal or XCTU frame dump) into a C array initializer.
//!
//! ```
//! let out = hexarr_core::format("7E 00 04 08");
//! assert_eq!(out.rendered, "= {0x7E, 0x00, 0x04, 0x08}");
//! assert_eq!(out.count, 4);
//! ```
//!
//! Tokens are passed through verbatim behind the `0x` prefix. Nothing is
//! rejected: a mistyped `zz` comes out as `0xzz`. Use [`token::is_hex_byte`]
//! if a caller wants to point such tokens out.

pub mod literal;
pub mod token;

pub use literal::{ArrayLiteral, Formatted};
pub use token::{Token, is_hex_byte, is_separator, tokenize};

/// Format one input line into its array literal and element count.
pub fn format(line: &str) -> Formatted {
    ArrayLiteral::parse(line).into_formatted()
}
