//! Benchmark run roster: which series exist and how they are loaded.
//!
//! A run compares a fixed roster of execution targets across two machine
//! contexts. The optional specialized-comparison series (a hand-written
//! native extension) is all-or-nothing: either present for both machines
//! or loaded for neither, decided once per run. The [`Scenario`] enum makes
//! that decision a type-level tag so each variant statically determines
//! which charts are legal to build.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::series::{read_input_sizes, read_timings};

/// File holding the shared independent variable.
pub const INPUT_SIZES_FILE: &str = "input_sizes.csv";
/// Timing file for the unaccelerated baseline interpreter.
pub const VANILLA_FILE: &str = "v_ruby.csv";
/// Timing file for the accelerated CPU target.
pub const CPU_FILE: &str = "cpu.csv";
/// Timing file for the accelerated GPU target.
pub const GPU_FILE: &str = "gpu.csv";
/// Timing file for the optional specialized native-extension comparison.
pub const SPECIALIZED_FILE: &str = "bespoke.csv";

/// Execution-target identity of a timing series.
///
/// Determines the series color in every chart of a report, so that the
/// same target is visually identical across charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Unaccelerated baseline interpreter.
    Vanilla,
    /// Accelerated execution on the CPU device.
    AcceleratedCpu,
    /// Accelerated execution on the GPU device.
    AcceleratedGpu,
    /// Hand-written native-extension comparison implementation.
    Specialized,
}

impl TargetKind {
    /// Human-readable label used in chart legends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TargetKind::Vanilla => "Vanilla Ruby",
            TargetKind::AcceleratedCpu => "Accelerated on CPU",
            TargetKind::AcceleratedGpu => "Accelerated on GPU",
            TargetKind::Specialized => "Bespoke C extension",
        }
    }
}

/// Physical environment a series was measured under.
///
/// Determines the line style in every chart: one context draws solid
/// lines with filled markers, the other dashed lines with hollow markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineContext {
    /// The laptop test machine.
    Laptop,
    /// The desktop PC test machine.
    Pc,
}

impl MachineContext {
    /// Subdirectory of the run directory holding this machine's files.
    #[must_use]
    pub fn subdir(self) -> &'static str {
        match self {
            MachineContext::Laptop => "laptop",
            MachineContext::Pc => "pc",
        }
    }

    /// Human-readable label used in chart legends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MachineContext::Laptop => "Laptop",
            MachineContext::Pc => "PC",
        }
    }
}

/// The three mandatory timing series for one machine context.
#[derive(Debug, Clone)]
pub struct MachineSeries {
    /// Vanilla baseline runtimes, seconds.
    pub vanilla: Vec<f64>,
    /// Accelerated-CPU runtimes, seconds.
    pub cpu: Vec<f64>,
    /// Accelerated-GPU runtimes, seconds.
    pub gpu: Vec<f64>,
}

impl MachineSeries {
    fn load(dir: &Path, machine: MachineContext) -> Result<Self> {
        let sub = Path::new(machine.subdir());
        Ok(MachineSeries {
            vanilla: read_timings(dir, &sub.join(VANILLA_FILE).to_string_lossy())?,
            cpu: read_timings(dir, &sub.join(CPU_FILE).to_string_lossy())?,
            gpu: read_timings(dir, &sub.join(GPU_FILE).to_string_lossy())?,
        })
    }
}

/// The mandatory portion of a run: input sizes plus both machines'
/// mandatory series.
#[derive(Debug, Clone)]
pub struct BaseSeries {
    /// Shared independent variable, strictly increasing dataset sizes.
    pub input_sizes: Vec<u64>,
    /// Mandatory series measured on the laptop.
    pub laptop: MachineSeries,
    /// Mandatory series measured on the PC.
    pub pc: MachineSeries,
}

/// The optional specialized-comparison series, present for both machines.
#[derive(Debug, Clone)]
pub struct SpecializedSeries {
    /// Specialized runtimes measured on the laptop, seconds.
    pub laptop: Vec<f64>,
    /// Specialized runtimes measured on the PC, seconds.
    pub pc: Vec<f64>,
}

/// A fully loaded benchmark run.
///
/// The variant records whether the specialized-comparison series was
/// included; the relative-to-specialized chart only exists for
/// [`Scenario::WithSpecialized`].
#[derive(Debug, Clone)]
pub enum Scenario {
    /// Run including the specialized native-extension comparison.
    WithSpecialized(BaseSeries, SpecializedSeries),
    /// Run without the specialized comparison; its files are never read.
    WithoutSpecialized(BaseSeries),
}

impl Scenario {
    /// Loads a run from `dir`, freshly re-reading every file.
    ///
    /// When `include_specialized` is false, neither `laptop/bespoke.csv`
    /// nor `pc/bespoke.csv` is opened.
    ///
    /// # Errors
    ///
    /// Propagates the first [`crate::error::Error`] from any file load;
    /// there is no partial result.
    pub fn load(dir: &Path, include_specialized: bool) -> Result<Self> {
        info!(
            dir = %dir.display(),
            include_specialized,
            "loading benchmark run"
        );

        let base = BaseSeries {
            input_sizes: read_input_sizes(dir, INPUT_SIZES_FILE)?,
            laptop: MachineSeries::load(dir, MachineContext::Laptop)?,
            pc: MachineSeries::load(dir, MachineContext::Pc)?,
        };

        if include_specialized {
            let specialized = SpecializedSeries {
                laptop: read_timings(
                    dir,
                    &Path::new(MachineContext::Laptop.subdir())
                        .join(SPECIALIZED_FILE)
                        .to_string_lossy(),
                )?,
                pc: read_timings(
                    dir,
                    &Path::new(MachineContext::Pc.subdir())
                        .join(SPECIALIZED_FILE)
                        .to_string_lossy(),
                )?,
            };
            Ok(Scenario::WithSpecialized(base, specialized))
        } else {
            Ok(Scenario::WithoutSpecialized(base))
        }
    }

    /// The mandatory series shared by both variants.
    #[must_use]
    pub fn base(&self) -> &BaseSeries {
        match self {
            Scenario::WithSpecialized(base, _) | Scenario::WithoutSpecialized(base) => base,
        }
    }

    /// Number of charts a report renders for this scenario.
    #[must_use]
    pub fn chart_count(&self) -> usize {
        match self {
            Scenario::WithSpecialized(..) => 4,
            Scenario::WithoutSpecialized(..) => 3,
        }
    }
}
