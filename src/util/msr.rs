use log::debug;
use std::fs::File;
use std::io;
use std::os::unix::fs::FileExt;
use std::path::{Path, PathBuf};

use crate::constants::{MSR_DEVICE_NAME, MSR_DEVICE_ROOT, MSR_VALUE_BYTES};
use crate::error::MsrError;
use crate::window::BitWindow;

/// A handle supporting reads at an explicit offset without a shared cursor
pub trait PositionedRead {
	fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize>;
}

impl PositionedRead for File {
	fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
		FileExt::read_at(self, buf, offset)
	}
}

/// Source of per-CPU MSR device handles
pub trait MsrDevice {
	type Handle: PositionedRead;

	/// Opens the MSR device of `cpu` for reading
	fn open(&self, cpu: usize) -> io::Result<Self::Handle>;
}

/// The Linux msr driver, one node per logical CPU under `/dev/cpu`
#[derive(Debug, Clone)]
pub struct DevCpu {
	root: PathBuf,
}

impl DevCpu {
	/// Uses device nodes under `root` instead of `/dev/cpu`
	pub fn with_root(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Path of the device node for `cpu`, e.g. `/dev/cpu/3/msr`
	pub fn device_path(&self, cpu: usize) -> PathBuf {
		self.root.join(cpu.to_string()).join(MSR_DEVICE_NAME)
	}
}

impl Default for DevCpu {
	fn default() -> Self {
		Self::with_root(MSR_DEVICE_ROOT)
	}
}

impl MsrDevice for DevCpu {
	type Handle = File;

	fn open(&self, cpu: usize) -> io::Result<File> {
		let path = self.device_path(cpu);
		debug!("opening {}", path.display());
		File::open(path)
	}
}

/// Reads MSRs through a device and narrows them to a fixed bit window
#[derive(Debug, Clone)]
pub struct MsrReader<D = DevCpu> {
	device: D,
	window: BitWindow,
}

impl MsrReader<DevCpu> {
	/// Reader over `/dev/cpu` reporting `window`
	pub fn new(window: BitWindow) -> Self {
		Self::with_device(DevCpu::default(), window)
	}
}

impl<D: MsrDevice> MsrReader<D> {
	pub fn with_device(device: D, window: BitWindow) -> Self {
		Self { device, window }
	}

	pub fn device(&self) -> &D {
		&self.device
	}

	pub fn window(&self) -> BitWindow {
		self.window
	}

	/// Reads MSR `register` on logical CPU `cpu`
	///
	/// # Arguments
	///
	/// * `register` - The address of the MSR, used as the device offset
	/// * `cpu` - The logical CPU to read the MSR from
	///
	/// # Returns
	///
	/// The register value restricted to the reader's bit window, or the
	/// classified failure. The device handle is closed before returning.
	pub fn read(&self, register: u32, cpu: usize) -> Result<u64, MsrError> {
		let handle = self.device.open(cpu).map_err(|e| MsrError::from_open(cpu, e))?;
		let raw = read_register(&handle, register).map_err(|e| MsrError::from_read(cpu, register, e))?;
		drop(handle);

		debug!("cpu {} msr {:#010x} = {:#018x}", cpu, register, raw);
		Ok(self.window.extract(raw))
	}
}

/// Performs the single 8-byte positioned read at offset `register`
fn read_register<H: PositionedRead>(handle: &H, register: u32) -> io::Result<u64> {
	let mut buf = [0u8; MSR_VALUE_BYTES];
	loop {
		match handle.read_at(&mut buf, u64::from(register)) {
			Ok(n) if n == MSR_VALUE_BYTES => return Ok(u64::from_ne_bytes(buf)),
			Ok(n) => {
				return Err(io::Error::new(
					io::ErrorKind::UnexpectedEof,
					format!("short read of {} bytes", n),
				));
			},
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => return Err(e),
		}
	}
}

/// Reads a value from a Model-Specific Register (MSR)
///
/// # Arguments
///
/// * `msr_address` - The address of the MSR to read
/// * `cpu_id` - The CPU ID to read the MSR from
/// * `window` - The bit range of the register to return
///
/// # Returns
///
/// The windowed value read from `/dev/cpu/<cpu_id>/msr`, or an MsrError if
/// the open or read fails
pub fn read_msr(msr_address: u32, cpu_id: usize, window: BitWindow) -> Result<u64, MsrError> {
	MsrReader::new(window).read(msr_address, cpu_id)
}
