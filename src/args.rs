use structopt::StructOpt;

use crate::constants::NAMED_REGISTERS;
use crate::display::{OutputFormat, OutputMode};
use crate::window::BitWindow;

/// Which CPUs a run reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuSelection {
	One(usize),
	All,
}

/// Read a Model-Specific Register through /dev/cpu/<N>/msr
#[derive(Debug, StructOpt)]
#[structopt(name = "rdmsr")]
pub struct Args {
	/// Logical CPU to read from [default: 0]
	#[structopt(short = "p", long = "processor", conflicts_with = "all")]
	pub processor: Option<usize>,

	/// Read the register on every CPU, one line per CPU
	#[structopt(short = "a", long = "all")]
	pub all: bool,

	/// Print in hexadecimal (default)
	#[structopt(short = "x", long = "hexadecimal")]
	pub hexadecimal: bool,

	/// Print in unsigned decimal
	#[structopt(short = "d", long = "decimal", conflicts_with_all = &["hexadecimal", "both"])]
	pub decimal: bool,

	/// Print hexadecimal followed by decimal
	#[structopt(short = "b", long = "both", conflicts_with = "hexadecimal")]
	pub both: bool,

	/// Prefix hexadecimal output with 0x
	#[structopt(short = "c", long = "c-language")]
	pub c_language: bool,

	/// Pad output to the width of the bit field
	#[structopt(short = "0", long = "zero-pad")]
	pub zero_pad: bool,

	/// Only print bits HIGH down to LOW (inclusive), e.g. 15:8
	#[structopt(short = "f", long = "bitfield", value_name = "HIGH:LOW")]
	pub bitfield: Option<BitWindow>,

	/// Register: a name such as IA32_PERF_STATUS, 0x-prefixed hex, 0-prefixed octal, or decimal
	#[structopt(parse(try_from_str = parse_register))]
	pub register: u32,
}

impl Args {
	pub fn selection(&self) -> CpuSelection {
		if self.all {
			CpuSelection::All
		} else {
			CpuSelection::One(self.processor.unwrap_or(0))
		}
	}

	pub fn window(&self) -> BitWindow {
		self.bitfield.unwrap_or_default()
	}

	pub fn output_format(&self) -> OutputFormat {
		let mode = if self.decimal {
			OutputMode::Decimal
		} else if self.both {
			OutputMode::Both
		} else {
			OutputMode::Hex
		};

		OutputFormat {
			mode,
			c_prefix: self.c_language,
			zero_pad: self.zero_pad,
		}
	}
}

/// Parses a register address
///
/// Accepts a name from `NAMED_REGISTERS` (case-insensitive), or a number with
/// C `strtoul(.., 0)` base rules: `0x` hex, leading `0` octal, else decimal.
/// No sign is accepted anywhere.
pub fn parse_register(s: &str) -> Result<u32, String> {
	if let Some(address) = register_by_name(s) {
		return Ok(address);
	}

	let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
		(hex, 16)
	} else if s.len() > 1 && s.starts_with('0') {
		(&s[1..], 8)
	} else {
		(s, 10)
	};

	if digits.starts_with(['+', '-']) {
		return Err(format!("invalid register address \"{}\": unexpected sign", s));
	}

	u32::from_str_radix(digits, radix).map_err(|e| format!("invalid register address \"{}\": {}", s, e))
}

/// Looks up a well-known register by name, e.g. `IA32_PERF_STATUS`
pub fn register_by_name(name: &str) -> Option<u32> {
	NAMED_REGISTERS
		.iter()
		.find(|(known, _)| known.eq_ignore_ascii_case(name))
		.map(|&(_, address)| address)
}
