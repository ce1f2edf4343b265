use log::{debug, warn};
use std::path::Path;
use std::{fs, io};

/// Returns true for `/dev/cpu` entries naming a CPU
///
/// Skips `.`, `..` and control nodes such as `microcode`.
pub fn is_cpu_entry(name: &str) -> bool {
	name.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

/// Lists the CPU indices that have a node under `root`, in ascending order
pub fn list_cpus(root: &Path) -> io::Result<Vec<usize>> {
	let mut cpus = Vec::new();

	for entry in fs::read_dir(root)? {
		let entry = entry?;
		let name = entry.file_name();
		let name = name.to_string_lossy();

		if !is_cpu_entry(&name) {
			continue;
		}

		match name.parse::<usize>() {
			Ok(cpu) => cpus.push(cpu),
			Err(_) => debug!("skipping {} entry {:?}", root.display(), name),
		}
	}

	cpus.sort_unstable();
	Ok(cpus)
}

/// Every CPU to visit when reading all processors
///
/// Scans `root`; when it cannot be read (no msr driver loaded) falls back to
/// the logical CPU count so every CPU still produces its own diagnostic.
pub fn all_cpus(root: &Path) -> Vec<usize> {
	match list_cpus(root) {
		Ok(cpus) => cpus,
		Err(e) => {
			let total_threads = num_cpus::get();
			warn!(
				"cannot scan {}: {}; assuming {} CPUs",
				root.display(),
				e,
				total_threads
			);
			(0..total_threads).collect()
		},
	}
}
