//! Per-run report composition: one chart per metric family.
//!
//! A report renders, in order: raw runtimes, relative-to-baseline ratio,
//! relative-to-specialized ratio (only when that series was included), and
//! per-element cost. All charts share the run's input sizes as x-axis and
//! the fixed color/style vocabulary from [`crate::chart`], so series can be
//! cross-referenced between pages. Artifacts land in the run directory,
//! overwriting earlier files of the same name; the first failure aborts
//! the run with no partial-output guarantees.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::chart::{Chart, SeriesStyle};
use crate::error::Result;
use crate::metrics::{per_unit_cost, relative_ratio};
use crate::scenario::{BaseSeries, MachineContext, Scenario, SpecializedSeries, TargetKind};

/// Artifact name for the raw-runtime chart.
pub const RUNTIMES_ARTIFACT: &str = "runtimes.svg";
/// Artifact name for the relative-to-baseline ratio chart.
pub const PROP_VANILLA_ARTIFACT: &str = "prop_van.svg";
/// Artifact name for the relative-to-specialized ratio chart.
pub const PROP_SPECIALIZED_ARTIFACT: &str = "prop_bes.svg";
/// Artifact name for the per-element cost chart.
pub const PER_ELEMENT_ARTIFACT: &str = "per_element.svg";

const X_LABEL: &str = "Dataset size (elements)";

fn style(target: TargetKind, machine: MachineContext) -> SeriesStyle {
    SeriesStyle::new(target, machine)
}

/// Raw runtimes, laptop block first, specialized interleaved, then the
/// PC block. The ordering matches the legend ordering of the original
/// report family.
fn runtimes_chart(
    base: &BaseSeries,
    specialized: Option<&SpecializedSeries>,
    title: &str,
) -> Result<Chart> {
    let mut chart = Chart::new(
        format!("[{title}] Duration by execution target"),
        X_LABEL,
        "Runtime (seconds)",
        &base.input_sizes,
    );

    chart.push(
        style(TargetKind::Vanilla, MachineContext::Laptop),
        base.laptop.vanilla.clone(),
    )?;
    chart.push(
        style(TargetKind::AcceleratedCpu, MachineContext::Laptop),
        base.laptop.cpu.clone(),
    )?;
    chart.push(
        style(TargetKind::AcceleratedGpu, MachineContext::Laptop),
        base.laptop.gpu.clone(),
    )?;
    if let Some(spec) = specialized {
        chart.push(
            style(TargetKind::Specialized, MachineContext::Laptop),
            spec.laptop.clone(),
        )?;
        chart.push(
            style(TargetKind::Specialized, MachineContext::Pc),
            spec.pc.clone(),
        )?;
    }
    chart.push(
        style(TargetKind::Vanilla, MachineContext::Pc),
        base.pc.vanilla.clone(),
    )?;
    chart.push(
        style(TargetKind::AcceleratedCpu, MachineContext::Pc),
        base.pc.cpu.clone(),
    )?;
    chart.push(
        style(TargetKind::AcceleratedGpu, MachineContext::Pc),
        base.pc.gpu.clone(),
    )?;

    Ok(chart)
}

/// Speedup of each accelerated (and specialized) target over the vanilla
/// baseline of the same machine.
fn prop_vanilla_chart(
    base: &BaseSeries,
    specialized: Option<&SpecializedSeries>,
    title: &str,
) -> Result<Chart> {
    let mut chart = Chart::new(
        format!("[{title}] Proportion of vanilla Ruby performance by execution target"),
        X_LABEL,
        "Proportion of vanilla Ruby performance",
        &base.input_sizes,
    );

    chart.push(
        style(TargetKind::AcceleratedCpu, MachineContext::Laptop),
        relative_ratio(&base.laptop.vanilla, &base.laptop.cpu)?,
    )?;
    chart.push(
        style(TargetKind::AcceleratedGpu, MachineContext::Laptop),
        relative_ratio(&base.laptop.vanilla, &base.laptop.gpu)?,
    )?;
    if let Some(spec) = specialized {
        chart.push(
            style(TargetKind::Specialized, MachineContext::Laptop),
            relative_ratio(&base.laptop.vanilla, &spec.laptop)?,
        )?;
        chart.push(
            style(TargetKind::Specialized, MachineContext::Pc),
            relative_ratio(&base.pc.vanilla, &spec.pc)?,
        )?;
    }
    chart.push(
        style(TargetKind::AcceleratedCpu, MachineContext::Pc),
        relative_ratio(&base.pc.vanilla, &base.pc.cpu)?,
    )?;
    chart.push(
        style(TargetKind::AcceleratedGpu, MachineContext::Pc),
        relative_ratio(&base.pc.vanilla, &base.pc.gpu)?,
    )?;

    Ok(chart)
}

/// Every mandatory target relative to the specialized series as baseline.
/// Only legal for runs that included the specialized comparison.
fn prop_specialized_chart(
    base: &BaseSeries,
    specialized: &SpecializedSeries,
    title: &str,
) -> Result<Chart> {
    let mut chart = Chart::new(
        format!("[{title}] Proportion of bespoke C extension performance by execution target"),
        X_LABEL,
        "Proportion of bespoke C extension performance",
        &base.input_sizes,
    );

    chart.push(
        style(TargetKind::Vanilla, MachineContext::Laptop),
        relative_ratio(&specialized.laptop, &base.laptop.vanilla)?,
    )?;
    chart.push(
        style(TargetKind::AcceleratedCpu, MachineContext::Laptop),
        relative_ratio(&specialized.laptop, &base.laptop.cpu)?,
    )?;
    chart.push(
        style(TargetKind::AcceleratedGpu, MachineContext::Laptop),
        relative_ratio(&specialized.laptop, &base.laptop.gpu)?,
    )?;
    chart.push(
        style(TargetKind::Vanilla, MachineContext::Pc),
        relative_ratio(&specialized.pc, &base.pc.vanilla)?,
    )?;
    chart.push(
        style(TargetKind::AcceleratedCpu, MachineContext::Pc),
        relative_ratio(&specialized.pc, &base.pc.cpu)?,
    )?;
    chart.push(
        style(TargetKind::AcceleratedGpu, MachineContext::Pc),
        relative_ratio(&specialized.pc, &base.pc.gpu)?,
    )?;

    Ok(chart)
}

/// Per-element cost for every series in the run.
fn per_element_chart(
    base: &BaseSeries,
    specialized: Option<&SpecializedSeries>,
    title: &str,
) -> Result<Chart> {
    let sizes = &base.input_sizes;
    let mut chart = Chart::new(
        format!("[{title}] Duration per element by execution target"),
        X_LABEL,
        "Runtime per element (seconds)",
        sizes,
    );

    chart.push(
        style(TargetKind::Vanilla, MachineContext::Laptop),
        per_unit_cost(&base.laptop.vanilla, sizes)?,
    )?;
    chart.push(
        style(TargetKind::AcceleratedCpu, MachineContext::Laptop),
        per_unit_cost(&base.laptop.cpu, sizes)?,
    )?;
    chart.push(
        style(TargetKind::AcceleratedGpu, MachineContext::Laptop),
        per_unit_cost(&base.laptop.gpu, sizes)?,
    )?;
    if let Some(spec) = specialized {
        chart.push(
            style(TargetKind::Specialized, MachineContext::Laptop),
            per_unit_cost(&spec.laptop, sizes)?,
        )?;
        chart.push(
            style(TargetKind::Specialized, MachineContext::Pc),
            per_unit_cost(&spec.pc, sizes)?,
        )?;
    }
    chart.push(
        style(TargetKind::Vanilla, MachineContext::Pc),
        per_unit_cost(&base.pc.vanilla, sizes)?,
    )?;
    chart.push(
        style(TargetKind::AcceleratedCpu, MachineContext::Pc),
        per_unit_cost(&base.pc.cpu, sizes)?,
    )?;
    chart.push(
        style(TargetKind::AcceleratedGpu, MachineContext::Pc),
        per_unit_cost(&base.pc.gpu, sizes)?,
    )?;

    Ok(chart)
}

/// Renders the full report for a loaded run into `dir`.
///
/// Produces four artifacts for [`Scenario::WithSpecialized`] runs and
/// three for [`Scenario::WithoutSpecialized`], in a fixed order. Returns
/// the artifact paths in the order written.
///
/// # Errors
///
/// Propagates the first metric-derivation or rendering error; earlier
/// artifacts may already have been overwritten when that happens.
pub fn write_report(scenario: &Scenario, dir: &Path, title: &str) -> Result<Vec<PathBuf>> {
    let base = scenario.base();
    let specialized = match scenario {
        Scenario::WithSpecialized(_, spec) => Some(spec),
        Scenario::WithoutSpecialized(_) => None,
    };

    let mut artifacts = Vec::with_capacity(scenario.chart_count());

    let path = dir.join(RUNTIMES_ARTIFACT);
    runtimes_chart(base, specialized, title)?.render_svg(&path)?;
    artifacts.push(path);

    let path = dir.join(PROP_VANILLA_ARTIFACT);
    prop_vanilla_chart(base, specialized, title)?.render_svg(&path)?;
    artifacts.push(path);

    if let Some(spec) = specialized {
        let path = dir.join(PROP_SPECIALIZED_ARTIFACT);
        prop_specialized_chart(base, spec, title)?.render_svg(&path)?;
        artifacts.push(path);
    }

    let path = dir.join(PER_ELEMENT_ARTIFACT);
    per_element_chart(base, specialized, title)?.render_svg(&path)?;
    artifacts.push(path);

    info!(count = artifacts.len(), dir = %dir.display(), "report complete");
    Ok(artifacts)
}
