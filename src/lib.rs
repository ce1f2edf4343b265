pub mod args;
pub mod constants;
pub mod display;
pub mod error;
pub mod topology;
pub mod util;
pub mod window;

use log::debug;
use std::io::Write;

use crate::display::{OutputFormat, format_value};
use crate::error::Error;
use crate::util::msr::{MsrDevice, MsrReader};

pub use crate::error::MsrError;
pub use crate::util::msr::{DevCpu, read_msr};
pub use crate::window::BitWindow;

/// Reads `register` on each CPU in `cpus` and writes one formatted line per CPU
///
/// This is the main entry point of the `rdmsr` tool. CPUs are visited in the
/// given order and the first failure ends the run; values already written stay
/// written.
pub fn run<D: MsrDevice, W: Write>(
	reader: &MsrReader<D>,
	register: u32,
	cpus: &[usize],
	format: OutputFormat,
	out: &mut W,
) -> Result<(), Error> {
	debug!(
		"reading msr {:#010x} bits {} on {} cpu(s)",
		register,
		reader.window(),
		cpus.len()
	);

	for &cpu in cpus {
		let value = reader.read(register, cpu)?;
		writeln!(out, "{}", format_value(value, reader.window(), format))?;
	}

	out.flush()?;
	Ok(())
}
