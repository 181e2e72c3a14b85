use anyhow::Result;
use log::info;
use opticut::io::export::{cutting_list_csv, export_report};
use opticut::io::ext_repr::ExtJob;
use opticut::io::import::import_job;
use opticut::io::svg::report_to_svg;
use opticut::nesting::NestingEngine;
use svg::Document;
use thousands::Separable;

use crate::config::OptiCutConfig;
use crate::io::output::JobOutput;

/// All artifacts of one nested job
pub struct NestedJob {
    pub output: JobOutput,
    /// The cutting list
    pub csv: String,
    /// The layout of the board
    pub svg: Document,
}

/// Imports the job, nests it in a single solve and renders the results
pub fn nest_job(ext_job: ExtJob, config: OptiCutConfig) -> Result<NestedJob> {
    let (board, demand) = import_job(&ext_job, config.default_board)?;

    let engine = NestingEngine::new(config.engine_config);
    let report = engine.solve(&board, demand.snapshot())?;

    info!(
        "[JOB] utilization: {:.1}% | waste: {:.1}% | unplaced items: {} | process time: {:.3}s",
        report.utilization_pct,
        report.waste_pct,
        report.unplaced_count(),
        report.solve_duration.as_secs_f64()
    );
    info!(
        "[JOB] used {} of {} mm² (bounding boxes: {} mm²)",
        (report.used_area.round() as u64).separate_with_commas(),
        (report.board_area.round() as u64).separate_with_commas(),
        (report.bbox_area().round() as u64).separate_with_commas()
    );

    let csv = cutting_list_csv(&report, demand.snapshot());
    let svg = report_to_svg(
        &report,
        demand.snapshot(),
        config.svg_draw_options,
        &ext_job.name,
    );
    let output = JobOutput {
        report: export_report(&report, demand.snapshot()),
        job: ext_job,
        config,
    };

    Ok(NestedJob { output, csv, svg })
}
