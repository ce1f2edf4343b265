use msr_read::util::msr::MsrReader;
use msr_read::{BitWindow, DevCpu};
use std::fs;
use std::path::PathBuf;
use std::process;

fn open_descriptors() -> usize {
	fs::read_dir("/proc/self/fd").unwrap().count()
}

// Kept as the only test in this binary so no other test opens files concurrently
#[test]
fn reads_never_leak_descriptors() {
	let root = std::env::temp_dir().join(format!("msr-read-fds-{}", process::id()));
	let _ = fs::remove_dir_all(&root);
	fs::create_dir_all(root.join("0")).unwrap();

	let mut contents = vec![0u8; 0x20];
	contents.extend_from_slice(&0xFFFF_FFFF_0000_0000u64.to_ne_bytes());
	fs::write(root.join("0").join("msr"), contents).unwrap();

	let reader = MsrReader::with_device(DevCpu::with_root(PathBuf::from(&root)), BitWindow::new(63, 32).unwrap());
	let before = open_descriptors();

	// success
	assert_eq!(reader.read(0x20, 0).unwrap(), 0xFFFF_FFFF);
	assert_eq!(open_descriptors(), before);

	// short read past the end of the register file
	assert!(reader.read(0x1000, 0).is_err());
	assert_eq!(open_descriptors(), before);

	// open failure
	assert!(reader.read(0x20, 5).is_err());
	assert_eq!(open_descriptors(), before);

	fs::remove_dir_all(&root).unwrap();
}
