use std::fmt;

/// Rendering channel selected for intercepted errors.
///
/// Process-wide, held by an [`ErrorRouter`](crate::ErrorRouter) instance, and
/// read once per event. The mode is a closed two-state machine: transitions
/// happen only through [`ErrorRouter::set_mode`](crate::ErrorRouter::set_mode)
/// and there is no terminal state. It survives hook uninstall/install cycles
/// because it is router state, not hook state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RenderMode {
    /// Render each error as a styled HTML block in the output stream.
    #[default]
    InlineMarkup = 0,
    /// Serialize each error and ship it to the client-side console.
    RemoteConsole = 1,
}

impl RenderMode {
    /// Returns the lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InlineMarkup => "inline",
            Self::RemoteConsole => "console",
        }
    }

    /// Encodes the mode for storage in the router's atomic cell.
    pub(crate) const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decodes a stored cell value.
    ///
    /// Values other than the two encodings cannot occur because the cell is
    /// only ever written through [`as_u8`](Self::as_u8); unknown values fall
    /// back to the default channel anyway rather than panicking in the
    /// handler path.
    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::RemoteConsole,
            _ => Self::InlineMarkup,
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
