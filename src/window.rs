use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_HIGHBIT, DEFAULT_LOWBIT};
use crate::util::extract_bits;

/// Inclusive bit range `[low, high]` of a register to report
///
/// Always satisfies `low <= high <= 63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitWindow {
	high: u32,
	low: u32,
}

/// Rejected bit window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
	/// A bit position above 63
	OutOfRange(u32),
	/// `low` is above `high`
	Inverted { high: u32, low: u32 },
	/// Not of the form `HIGH:LOW`
	Syntax(String),
}

impl fmt::Display for WindowError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			WindowError::OutOfRange(bit) => write!(f, "bit {} is out of range (0-63)", bit),
			WindowError::Inverted { high, low } => {
				write!(f, "low bit {} is above high bit {}", low, high)
			},
			WindowError::Syntax(s) => write!(f, "invalid bit field \"{}\", expected HIGH:LOW", s),
		}
	}
}

impl std::error::Error for WindowError {}

impl BitWindow {
	/// Creates a window after checking `low <= high <= 63`
	pub fn new(high: u32, low: u32) -> Result<Self, WindowError> {
		if high > DEFAULT_HIGHBIT {
			return Err(WindowError::OutOfRange(high));
		}
		if low > high {
			return Err(WindowError::Inverted { high, low });
		}
		Ok(Self { high, low })
	}

	/// The whole 64-bit register
	pub const fn full() -> Self {
		Self {
			high: DEFAULT_HIGHBIT,
			low: DEFAULT_LOWBIT,
		}
	}

	pub fn high(&self) -> u32 {
		self.high
	}

	pub fn low(&self) -> u32 {
		self.low
	}

	/// Number of significant bits returned
	pub fn width(&self) -> u32 {
		self.high - self.low + 1
	}

	pub fn is_full(&self) -> bool {
		self.width() == 64
	}

	/// Narrows a raw register value to this window
	pub fn extract(&self, value: u64) -> u64 {
		extract_bits(value, self.high, self.low)
	}
}

impl Default for BitWindow {
	fn default() -> Self {
		Self::full()
	}
}

impl FromStr for BitWindow {
	type Err = WindowError;

	/// Parses `HIGH:LOW` in decimal, e.g. `15:8`
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let syntax = || WindowError::Syntax(s.to_string());

		let (high, low) = s.split_once(':').ok_or_else(syntax)?;
		let high = high.trim().parse::<u32>().map_err(|_| syntax())?;
		let low = low.trim().parse::<u32>().map_err(|_| syntax())?;

		Self::new(high, low)
	}
}

impl fmt::Display for BitWindow {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.high, self.low)
	}
}
