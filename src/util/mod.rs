pub mod msr;

/// Extracts the inclusive bit range `[lowbit, highbit]` from a register value
///
/// # Arguments
///
/// * `value` - Raw 64-bit register value
/// * `highbit` - Most significant bit of the window
/// * `lowbit` - Least significant bit of the window
///
/// # Returns
///
/// The window shifted down to bit 0. Callers must ensure
/// `lowbit <= highbit <= 63`; `BitWindow` enforces this.
pub const fn extract_bits(value: u64, highbit: u32, lowbit: u32) -> u64 {
	let bits = highbit - lowbit + 1;
	if bits < 64 {
		// Show only part of the register
		(value >> lowbit) & ((1u64 << bits) - 1)
	} else {
		value
	}
}

#[cfg(test)]
mod tests {
	use super::extract_bits;

	#[test]
	fn all_ones_yield_width_mask() {
		for low in 0..64 {
			for high in low..64 {
				let width = high - low + 1;
				let expected = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
				assert_eq!(extract_bits(u64::MAX, high, low), expected, "window {}:{}", high, low);
			}
		}
	}

	#[test]
	fn full_window_is_identity() {
		for value in [0, 1, 0x8000_0000_0000_0000, 0xDEAD_BEEF_0BAD_F00D, u64::MAX] {
			assert_eq!(extract_bits(value, 63, 0), value);
		}
	}

	#[test]
	fn reextracting_a_window_is_stable() {
		let value = 0xA5C3_0F1E_9B7D_2468;
		for low in 0..64 {
			for high in low..64 {
				let once = extract_bits(value, high, low);
				assert_eq!(extract_bits(once, high - low, 0), once, "window {}:{}", high, low);
			}
		}
	}

	#[test]
	fn halves_of_upper_set_value() {
		let raw = 0xFFFF_FFFF_0000_0000;
		assert_eq!(extract_bits(raw, 63, 32), 0xFFFF_FFFF);
		assert_eq!(extract_bits(raw, 31, 0), 0);
	}

	#[test]
	fn single_bit_window() {
		assert_eq!(extract_bits(1 << 24, 24, 24), 1);
		assert_eq!(extract_bits(!(1 << 24), 24, 24), 0);
	}
}
