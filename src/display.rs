use crate::window::BitWindow;

/// Number of decimal digits needed for an n-bit unsigned value
///
/// `DECIMAL_DIGITS[n] == ceil(log10(2^n))`, at least 1.
pub const DECIMAL_DIGITS: [usize; 65] = [
	1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, //
	5, 6, 6, 6, 7, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, //
	10, 10, 11, 11, 11, 12, 12, 12, 13, 13, 13, 13, 14, 14, 14, 15, //
	15, 15, 16, 16, 16, 16, 17, 17, 17, 18, 18, 18, 19, 19, 19, 19, //
	20,
];

/// How register values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
	/// Lowercase hexadecimal
	#[default]
	Hex,
	/// Unsigned decimal
	Decimal,
	/// Hexadecimal followed by decimal
	Both,
}

/// Output settings, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputFormat {
	pub mode: OutputMode,
	/// Prefix hexadecimal values with `0x`
	pub c_prefix: bool,
	/// Pad values to the full width of the bit window
	pub zero_pad: bool,
}

/// Formats a register value already narrowed to `window`
pub fn format_value(value: u64, window: BitWindow, format: OutputFormat) -> String {
	match format.mode {
		OutputMode::Hex => format_hex(value, window, format),
		OutputMode::Decimal => format_decimal(value, window, format),
		OutputMode::Both => {
			format!(
				"{} {}",
				format_hex(value, window, format),
				format_decimal(value, window, format)
			)
		},
	}
}

fn format_hex(value: u64, window: BitWindow, format: OutputFormat) -> String {
	let width = if format.zero_pad {
		(window.width() as usize).div_ceil(4)
	} else {
		0
	};
	let prefix = if format.c_prefix { "0x" } else { "" };

	format!("{}{:0width$x}", prefix, value, width = width)
}

fn format_decimal(value: u64, window: BitWindow, format: OutputFormat) -> String {
	let width = if format.zero_pad {
		DECIMAL_DIGITS[window.width() as usize]
	} else {
		0
	};

	format!("{:0width$}", value, width = width)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fmt(mode: OutputMode, c_prefix: bool, zero_pad: bool) -> OutputFormat {
		OutputFormat {
			mode,
			c_prefix,
			zero_pad,
		}
	}

	#[test]
	fn digit_table_matches_bit_widths() {
		for (bits, &digits) in DECIMAL_DIGITS.iter().enumerate() {
			let max = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
			assert_eq!(digits, max.to_string().len(), "{} bits", bits);
		}
	}

	#[test]
	fn hex_is_default() {
		let window = BitWindow::full();
		assert_eq!(format_value(0x1a, window, OutputFormat::default()), "1a");
		assert_eq!(format_value(0x1a, window, fmt(OutputMode::Hex, true, false)), "0x1a");
	}

	#[test]
	fn zero_padding_follows_window_width() {
		let full = BitWindow::full();
		assert_eq!(
			format_value(0x1a, full, fmt(OutputMode::Hex, true, true)),
			"0x000000000000001a"
		);

		let byte = BitWindow::new(15, 8).unwrap();
		assert_eq!(format_value(0x7, byte, fmt(OutputMode::Hex, false, true)), "07");
		assert_eq!(format_value(7, byte, fmt(OutputMode::Decimal, false, true)), "007");

		let nibble_and_one = BitWindow::new(4, 0).unwrap();
		assert_eq!(format_value(0x1, nibble_and_one, fmt(OutputMode::Hex, false, true)), "01");
	}

	#[test]
	fn decimal_and_both() {
		let window = BitWindow::full();
		assert_eq!(format_value(26, window, fmt(OutputMode::Decimal, false, false)), "26");
		assert_eq!(format_value(26, window, fmt(OutputMode::Both, true, false)), "0x1a 26");
		assert_eq!(
			format_value(u64::MAX, window, fmt(OutputMode::Both, false, false)),
			"ffffffffffffffff 18446744073709551615"
		);
	}
}
