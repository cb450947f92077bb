//! Shared fixture helpers for integration tests.

use std::fs;
use std::path::Path;

/// Writes the mandatory run fixture: input sizes plus the three timing
/// series for both machine contexts. Values follow the documented
/// example scenario (sizes 1,10,100; laptop vanilla 2,4,8; laptop cpu
/// 1,1,2).
pub fn write_base_run(dir: &Path) {
    fs::create_dir_all(dir.join("laptop")).unwrap();
    fs::create_dir_all(dir.join("pc")).unwrap();

    fs::write(dir.join("input_sizes.csv"), "1,10,100").unwrap();

    fs::write(dir.join("laptop/v_ruby.csv"), "2.0,4.0,8.0").unwrap();
    fs::write(dir.join("laptop/cpu.csv"), "1.0,1.0,2.0").unwrap();
    fs::write(dir.join("laptop/gpu.csv"), "0.5,0.5,1.0").unwrap();

    fs::write(dir.join("pc/v_ruby.csv"), "1.6,3.2,6.4").unwrap();
    fs::write(dir.join("pc/cpu.csv"), "0.8,0.8,1.6").unwrap();
    fs::write(dir.join("pc/gpu.csv"), "0.4,0.4,0.8").unwrap();
}

/// Adds the optional specialized-comparison series to both machines.
pub fn write_specialized(dir: &Path) {
    fs::write(dir.join("laptop/bespoke.csv"), "0.2,0.4,0.8").unwrap();
    fs::write(dir.join("pc/bespoke.csv"), "0.1,0.2,0.4").unwrap();
}
