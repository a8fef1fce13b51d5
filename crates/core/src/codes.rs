//! Raw error codes defined by the host runtime.
//!
//! The host runtime reports every intercepted condition with one of these
//! integer codes. The values form a bitmask so hosts can express code sets,
//! but this crate only ever classifies a single code at a time. The constants
//! exist so call sites and tests never hard-code magic numbers;
//! [`Severity::from_code`](crate::Severity::from_code) is the single place
//! that interprets them.

/// Fatal runtime error.
pub const ERROR: i32 = 1;
/// Non-fatal runtime warning.
pub const WARNING: i32 = 2;
/// Fatal parse-time error.
pub const PARSE: i32 = 4;
/// Runtime notice.
pub const NOTICE: i32 = 8;
/// Fatal error raised during runtime startup.
pub const CORE_ERROR: i32 = 16;
/// Warning raised during runtime startup.
pub const CORE_WARNING: i32 = 32;
/// Fatal error raised while compiling a unit.
pub const COMPILE_ERROR: i32 = 64;
/// Warning raised while compiling a unit.
pub const COMPILE_WARNING: i32 = 128;
/// Fatal error raised explicitly by application code.
pub const USER_ERROR: i32 = 256;
/// Warning raised explicitly by application code.
pub const USER_WARNING: i32 = 512;
/// Notice raised explicitly by application code.
pub const USER_NOTICE: i32 = 1024;
