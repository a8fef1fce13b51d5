/// Controls whether a [`ConsoleSink`](crate::ConsoleSink) wraps each statement in `<script>` tags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScriptWrap {
    /// Wrap each statement in opening and closing `<script>` tags, producing a
    /// self-contained fragment that can be embedded anywhere in a document.
    WithTags,
    /// Emit the bare statement, for callers already inside a script context.
    Bare,
}

impl ScriptWrap {
    /// Reports whether the mode emits the enclosing `<script>` delimiters.
    ///
    /// # Examples
    ///
    /// ```
    /// use webdiag_sink::ScriptWrap;
    ///
    /// assert!(ScriptWrap::WithTags.wraps());
    /// assert!(!ScriptWrap::Bare.wraps());
    /// ```
    #[must_use]
    pub const fn wraps(self) -> bool {
        matches!(self, Self::WithTags)
    }
}

impl Default for ScriptWrap {
    fn default() -> Self {
        Self::WithTags
    }
}

impl From<bool> for ScriptWrap {
    /// Converts a boolean "with wrapping tags" flag into a [`ScriptWrap`].
    ///
    /// `true` maps to [`ScriptWrap::WithTags`], `false` to
    /// [`ScriptWrap::Bare`], matching the wording used by call sites that
    /// still carry the flag as a boolean.
    fn from(with_tags: bool) -> Self {
        if with_tags { Self::WithTags } else { Self::Bare }
    }
}

impl From<ScriptWrap> for bool {
    fn from(wrap: ScriptWrap) -> Self {
        wrap.wraps()
    }
}
