// Correction policy: turns a classification into the final token.
//
// The interactive control surface is a capability trait so the library
// never touches a terminal; binaries and tests supply their own
// implementations.

use redpen_core::enums::CorrectMode;
use redpen_core::token::CorrectionResult;

use crate::classifier::Classification;

/// Marker appended to words no layer can resolve.
pub const UNRESOLVED_MARKER: &str = "[incorrect]";

/// Control surface for resolving misspellings.
///
/// `pick` blocks for a single selection: `Some(n)` with
/// `1 <= n <= suggestions.len()` picks a suggestion; anything else
/// (`Some(0)` for an explicit keep, an out-of-range number, or `None`
/// for unparsable input) keeps the original word. There is never a
/// re-prompt; recovery is local to the current token.
pub trait Interaction {
    /// Present `core` with its 1-indexed suggestions and return the
    /// raw selection, `None` when the input was not a number.
    fn pick(&mut self, core: &str, suggestions: &[String]) -> Option<usize>;

    /// A replacement was applied without prompting (auto mode).
    fn auto_applied(&mut self, _core: &str, _replacement: &str) {}

    /// A selection kept the original word (explicitly or because it
    /// was invalid).
    fn kept_original(&mut self, _core: &str) {}
}

/// Interaction that never prompts and swallows every notification.
/// `pick` keeps the original, so it is also safe to use in
/// interactive mode from non-interactive contexts such as benches.
#[derive(Debug, Default)]
pub struct Silent;

impl Interaction for Silent {
    fn pick(&mut self, _core: &str, _suggestions: &[String]) -> Option<usize> {
        Some(0)
    }
}

/// The run-wide decision policy.
#[derive(Debug, Clone, Copy)]
pub struct CorrectionPolicy {
    mode: CorrectMode,
}

impl CorrectionPolicy {
    pub fn new(mode: CorrectMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CorrectMode {
        self.mode
    }

    /// Resolve one classified core word into its final form.
    pub fn resolve(
        &self,
        core: &str,
        classification: Classification,
        interaction: &mut dyn Interaction,
    ) -> CorrectionResult {
        let suggestions = match classification {
            Classification::Known | Classification::EngineAccepted => {
                return CorrectionResult::unchanged(core);
            }
            Classification::Misspelled { suggestions } => suggestions,
        };

        if suggestions.is_empty() {
            // Terminal for this token; the run continues with the
            // marker inline.
            return CorrectionResult::resolved(core, format!("{core}{UNRESOLVED_MARKER}"));
        }

        match self.mode {
            CorrectMode::Auto => {
                let replacement = suggestions.into_iter().next().unwrap_or_default();
                interaction.auto_applied(core, &replacement);
                CorrectionResult::resolved(core, replacement)
            }
            CorrectMode::Interactive => match interaction.pick(core, &suggestions) {
                Some(n) if (1..=suggestions.len()).contains(&n) => {
                    CorrectionResult::resolved(core, suggestions[n - 1].clone())
                }
                _ => {
                    interaction.kept_original(core);
                    CorrectionResult::unchanged(core)
                }
            },
        }
    }
}
