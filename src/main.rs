use msr_read::args::{Args, CpuSelection};
use msr_read::topology::all_cpus;
use msr_read::util::msr::MsrReader;
use msr_read::{DevCpu, run};
use std::io;
use std::process;
use structopt::StructOpt;

fn main() {
	env_logger::init();

	let args = Args::from_args();
	let device = DevCpu::default();

	let cpus = match args.selection() {
		CpuSelection::One(cpu) => vec![cpu],
		CpuSelection::All => all_cpus(device.root()),
	};

	let reader = MsrReader::with_device(device, args.window());
	let stdout = io::stdout();
	let mut out = stdout.lock();

	if let Err(e) = run(&reader, args.register, &cpus, args.output_format(), &mut out) {
		eprintln!("rdmsr: {}", e);
		process::exit(e.exit_code());
	}
}
