#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Content of the panel's single message slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Submit was pressed with blank input.
    EmptyInput,
    /// The service returned the input unchanged.
    NoChanges,
    /// Any transport failure.
    Unreachable,
}

impl Notice {
    /// User-visible text for the banner.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::EmptyInput => "Please enter some text to correct",
            Self::NoChanges => "No spelling errors found!",
            Self::Unreachable => "Error: Unable to connect to the server.",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
