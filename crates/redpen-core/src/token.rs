// Token and correction-result value types.

/// One whitespace-delimited input word, split into a maximal leading
/// punctuation run, the core between, and a maximal trailing
/// punctuation run.
///
/// Invariant: `prefix + core + suffix` reconstructs the original text
/// exactly. A word made entirely of punctuation has an empty core.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    /// Leading punctuation, possibly empty.
    pub prefix: String,
    /// The alphabetic payload between the punctuation runs.
    pub core: String,
    /// Trailing punctuation, possibly empty, in original order.
    pub suffix: String,
}

impl Token {
    /// Create a token from its three parts.
    pub fn new(
        prefix: impl Into<String>,
        core: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            core: core.into(),
            suffix: suffix.into(),
        }
    }

    /// Reassemble the original surface text.
    pub fn reassemble(&self) -> String {
        format!("{}{}{}", self.prefix, self.core, self.suffix)
    }

    /// True when the word carried no payload between the punctuation.
    pub fn is_empty_core(&self) -> bool {
        self.core.is_empty()
    }
}

/// The outcome of resolving one core word.
///
/// Produced once per token by the correction policy and consumed once
/// by the renderer; not persisted beyond the current line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionResult {
    /// The core word as it appeared in the input.
    pub core: String,
    /// The final form, which may equal the core.
    pub corrected: String,
    /// `corrected != core`.
    pub changed: bool,
}

impl CorrectionResult {
    /// A word kept exactly as it appeared.
    pub fn unchanged(core: impl Into<String>) -> Self {
        let core = core.into();
        Self {
            corrected: core.clone(),
            core,
            changed: false,
        }
    }

    /// A word resolved to `corrected`; `changed` is derived from the
    /// comparison, so resolving a word to itself reports no change.
    pub fn resolved(core: impl Into<String>, corrected: impl Into<String>) -> Self {
        let core = core.into();
        let corrected = corrected.into();
        Self {
            changed: corrected != core,
            core,
            corrected,
        }
    }
}
