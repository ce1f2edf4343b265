// Linux msr driver device nodes
pub const MSR_DEVICE_ROOT: &str = "/dev/cpu";
pub const MSR_DEVICE_NAME: &str = "msr";

// Every MSR is 64 bits wide
pub const MSR_VALUE_BYTES: usize = 8;
pub const DEFAULT_HIGHBIT: u32 = 63;
pub const DEFAULT_LOWBIT: u32 = 0;

// Process exit codes
pub const EXIT_NO_SUCH_CPU: i32 = 2;
pub const EXIT_MSR_UNSUPPORTED: i32 = 3;
pub const EXIT_MSR_UNREADABLE: i32 = 4;
pub const EXIT_OS_FAILURE: i32 = 127;

// Intel MSR addresses
pub const MSR_PLATFORM_INFO: u32 = 0xCE;
pub const IA32_PERF_STATUS: u32 = 0x198;
pub const IA32_PERF_CTL: u32 = 0x199;
pub const INTEL_CORE_TYPE_MSR: u32 = 0x19A; // bit 24 set on E-cores
pub const IA32_THERM_STATUS: u32 = 0x19C;
pub const MSR_TEMPERATURE_TARGET: u32 = 0x1A2;
pub const MSR_TURBO_POWER_CURRENT_LIMIT: u32 = 0x1AC;
pub const MSR_POWER_CTL: u32 = 0x1FC;
pub const IA32_HWP_REQUEST: u32 = 0x774;

// Intel RAPL MSR addresses
pub const MSR_RAPL_POWER_UNIT: u32 = 0x606;
pub const MSR_PKG_POWER_LIMIT: u32 = 0x610;
pub const MSR_INTEL_PKG_ENERGY_STATUS: u32 = 0x611;
pub const MSR_PKG_POWER_INFO: u32 = 0x614;
pub const MSR_DRAM_ENERGY_STATUS: u32 = 0x619;
pub const MSR_DRAM_PERF_STATUS: u32 = 0x61B;
pub const MSR_PP0_POWER_LIMIT: u32 = 0x638;
pub const MSR_PP0_ENERGY_STATUS: u32 = 0x639;
pub const MSR_PP0_POLICY: u32 = 0x63A;
pub const MSR_PP0_PERF_STATUS: u32 = 0x63B;
pub const MSR_PP1_ENERGY_STATUS: u32 = 0x641;
pub const MSR_CONFIG_TDP_CONTROL: u32 = 0x64B;

// AMD RAPL MSR addresses
pub const AMD_ENERGY_UNIT_MSR: u32 = 0xC001_0299;
pub const AMD_ENERGY_CORE_MSR: u32 = 0xC001_029A;
pub const AMD_ENERGY_PKG_MSR: u32 = 0xC001_029B;

/// Register names accepted in place of a numeric address
pub const NAMED_REGISTERS: &[(&str, u32)] = &[
	("MSR_PLATFORM_INFO", MSR_PLATFORM_INFO),
	("IA32_PERF_STATUS", IA32_PERF_STATUS),
	("IA32_PERF_CTL", IA32_PERF_CTL),
	("INTEL_CORE_TYPE_MSR", INTEL_CORE_TYPE_MSR),
	("IA32_THERM_STATUS", IA32_THERM_STATUS),
	("MSR_TEMPERATURE_TARGET", MSR_TEMPERATURE_TARGET),
	("MSR_TURBO_POWER_CURRENT_LIMIT", MSR_TURBO_POWER_CURRENT_LIMIT),
	("MSR_POWER_CTL", MSR_POWER_CTL),
	("IA32_HWP_REQUEST", IA32_HWP_REQUEST),
	("MSR_RAPL_POWER_UNIT", MSR_RAPL_POWER_UNIT),
	("MSR_PKG_POWER_LIMIT", MSR_PKG_POWER_LIMIT),
	("MSR_INTEL_PKG_ENERGY_STATUS", MSR_INTEL_PKG_ENERGY_STATUS),
	("MSR_PKG_POWER_INFO", MSR_PKG_POWER_INFO),
	("MSR_DRAM_ENERGY_STATUS", MSR_DRAM_ENERGY_STATUS),
	("MSR_DRAM_PERF_STATUS", MSR_DRAM_PERF_STATUS),
	("MSR_PP0_POWER_LIMIT", MSR_PP0_POWER_LIMIT),
	("MSR_PP0_ENERGY_STATUS", MSR_PP0_ENERGY_STATUS),
	("MSR_PP0_POLICY", MSR_PP0_POLICY),
	("MSR_PP0_PERF_STATUS", MSR_PP0_PERF_STATUS),
	("MSR_PP1_ENERGY_STATUS", MSR_PP1_ENERGY_STATUS),
	("MSR_CONFIG_TDP_CONTROL", MSR_CONFIG_TDP_CONTROL),
	("AMD_ENERGY_UNIT_MSR", AMD_ENERGY_UNIT_MSR),
	("AMD_ENERGY_CORE_MSR", AMD_ENERGY_CORE_MSR),
	("AMD_ENERGY_PKG_MSR", AMD_ENERGY_PKG_MSR),
];
