use crate::error::{Result, SentGenError};

/// Default bound on the number of tokens sampled for one sentence.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Shape of a generated sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
	/// Stitched natural-language string.
	#[default]
	Text,
	/// Raw token list, markers excluded.
	Tokens,
}

/// Parameters for one generation call.
///
/// # Invariants
/// - `max_steps` is always >= 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInput {
	/// Maximum number of sampled tokens (including the final end marker).
	max_steps: usize,

	/// Whether to return stitched text or the token list.
	pub output: OutputMode,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { max_steps: DEFAULT_MAX_STEPS, output: OutputMode::Text }
	}
}

impl GenerationInput {
	/// Creates an input returning the given output mode with the default bound.
	pub fn new(output: OutputMode) -> Self {
		Self { output, ..Self::default() }
	}

	/// Returns the current step bound.
	pub fn max_steps(&self) -> usize {
		self.max_steps
	}

	/// Sets the step bound.
	///
	/// # Errors
	/// Returns an error if `max_steps` is zero.
	pub fn set_max_steps(&mut self, max_steps: usize) -> Result<()> {
		if max_steps == 0 {
			return Err(SentGenError::InvalidMaxSteps);
		}
		self.max_steps = max_steps;
		Ok(())
	}

	/// Builder form of [`set_max_steps`](Self::set_max_steps).
	pub fn with_max_steps(mut self, max_steps: usize) -> Result<Self> {
		self.set_max_steps(max_steps)?;
		Ok(self)
	}
}
