use std::{fmt, io};

use crate::constants::{EXIT_MSR_UNREADABLE, EXIT_MSR_UNSUPPORTED, EXIT_NO_SUCH_CPU, EXIT_OS_FAILURE};

/// Device operation that produced an unclassified OS error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	Open,
	Read,
}

/// Failure to read an MSR on a given CPU
#[derive(Debug)]
pub enum MsrError {
	/// The CPU index does not exist (`ENXIO` on open)
	NoSuchCpu { cpu: usize },
	/// The CPU exists but has no MSR support (`EIO` on open)
	Unsupported { cpu: usize },
	/// This register is not readable on this CPU (`EIO` on read)
	Unreadable { cpu: usize, register: u32 },
	/// Any other OS-level failure while opening or reading the device
	Os {
		cpu: usize,
		register: Option<u32>,
		op: Operation,
		source: io::Error,
	},
}

impl MsrError {
	/// Classifies an error returned when opening the device node of `cpu`
	pub fn from_open(cpu: usize, source: io::Error) -> Self {
		match source.raw_os_error() {
			Some(libc::ENXIO) => MsrError::NoSuchCpu { cpu },
			Some(libc::EIO) => MsrError::Unsupported { cpu },
			_ => MsrError::Os {
				cpu,
				register: None,
				op: Operation::Open,
				source,
			},
		}
	}

	/// Classifies an error returned by the positioned read of `register`
	pub fn from_read(cpu: usize, register: u32, source: io::Error) -> Self {
		match source.raw_os_error() {
			Some(libc::EIO) => MsrError::Unreadable { cpu, register },
			_ => MsrError::Os {
				cpu,
				register: Some(register),
				op: Operation::Read,
				source,
			},
		}
	}

	pub fn cpu(&self) -> usize {
		match *self {
			MsrError::NoSuchCpu { cpu }
			| MsrError::Unsupported { cpu }
			| MsrError::Unreadable { cpu, .. }
			| MsrError::Os { cpu, .. } => cpu,
		}
	}

	pub fn register(&self) -> Option<u32> {
		match *self {
			MsrError::Unreadable { register, .. } => Some(register),
			MsrError::Os { register, .. } => register,
			_ => None,
		}
	}

	/// Process exit status for this failure class
	pub fn exit_code(&self) -> i32 {
		match self {
			MsrError::NoSuchCpu { .. } => EXIT_NO_SUCH_CPU,
			MsrError::Unsupported { .. } => EXIT_MSR_UNSUPPORTED,
			MsrError::Unreadable { .. } => EXIT_MSR_UNREADABLE,
			MsrError::Os { .. } => EXIT_OS_FAILURE,
		}
	}
}

impl fmt::Display for MsrError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MsrError::NoSuchCpu { cpu } => write!(f, "No CPU {}", cpu),
			MsrError::Unsupported { cpu } => write!(f, "CPU {} doesn't support MSRs", cpu),
			MsrError::Unreadable { cpu, register } => {
				write!(f, "CPU {} cannot read MSR 0x{:08x}", cpu, register)
			},
			MsrError::Os {
				cpu,
				register: Some(register),
				source,
				..
			} => write!(f, "pread CPU {} MSR 0x{:08x}: {}", cpu, register, source),
			MsrError::Os { cpu, source, .. } => write!(f, "open CPU {}: {}", cpu, source),
		}
	}
}

impl std::error::Error for MsrError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			MsrError::Os { source, .. } => Some(source),
			_ => None,
		}
	}
}

/// Top-level failure of an `rdmsr` run
#[derive(Debug)]
pub enum Error {
	Msr(MsrError),
	/// Writing the formatted value failed
	Output(io::Error),
}

impl Error {
	pub fn exit_code(&self) -> i32 {
		match self {
			Error::Msr(e) => e.exit_code(),
			Error::Output(_) => EXIT_OS_FAILURE,
		}
	}
}

impl From<MsrError> for Error {
	fn from(e: MsrError) -> Error {
		Error::Msr(e)
	}
}

impl From<io::Error> for Error {
	fn from(e: io::Error) -> Error {
		Error::Output(e)
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::Msr(e) => e.fmt(f),
			Error::Output(e) => write!(f, "write: {}", e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Msr(e) => Some(e),
			Error::Output(e) => Some(e),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn open_errors_are_classified_by_errno() {
		let e = MsrError::from_open(7, io::Error::from_raw_os_error(libc::ENXIO));
		assert!(matches!(e, MsrError::NoSuchCpu { cpu: 7 }));
		assert_eq!(e.exit_code(), 2);

		let e = MsrError::from_open(1, io::Error::from_raw_os_error(libc::EIO));
		assert!(matches!(e, MsrError::Unsupported { cpu: 1 }));
		assert_eq!(e.exit_code(), 3);

		let e = MsrError::from_open(0, io::Error::from_raw_os_error(libc::EACCES));
		assert!(matches!(e, MsrError::Os { op: Operation::Open, .. }));
		assert_eq!(e.exit_code(), 127);
		assert_eq!(e.register(), None);
	}

	#[test]
	fn read_errors_are_classified_by_errno() {
		let e = MsrError::from_read(3, 0x1A, io::Error::from_raw_os_error(libc::EIO));
		assert!(matches!(e, MsrError::Unreadable { cpu: 3, register: 0x1A }));
		assert_eq!(e.exit_code(), 4);
		assert_eq!(e.to_string(), "CPU 3 cannot read MSR 0x0000001a");

		let e = MsrError::from_read(3, 0x10, io::Error::from(io::ErrorKind::UnexpectedEof));
		assert!(matches!(e, MsrError::Os { op: Operation::Read, .. }));
		assert_eq!(e.exit_code(), 127);
		assert_eq!(e.cpu(), 3);
		assert_eq!(e.register(), Some(0x10));
		assert!(e.to_string().starts_with("pread CPU 3 MSR 0x00000010: "));
	}

	#[test]
	fn diagnostics_name_the_cpu() {
		assert_eq!(MsrError::NoSuchCpu { cpu: 12 }.to_string(), "No CPU 12");
		assert_eq!(MsrError::Unsupported { cpu: 4 }.to_string(), "CPU 4 doesn't support MSRs");
	}

	#[test]
	fn output_errors_exit_with_generic_status() {
		let e: Error = io::Error::from(io::ErrorKind::BrokenPipe).into();
		assert_eq!(e.exit_code(), 127);

		let e: Error = MsrError::Unsupported { cpu: 0 }.into();
		assert_eq!(e.exit_code(), 3);
	}
}
