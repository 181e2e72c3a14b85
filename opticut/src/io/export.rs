use crate::entities::{InstanceId, PlacementReport, ShapeInstance};
use crate::io::ext_repr::{ExtBoard, ExtPlacedItem, ExtReport};
use log::warn;
use std::collections::HashMap;
use std::fmt::Write;

/// Column names of the CSV cutting list
pub const CSV_HEADER: [&str; 7] = ["id", "type", "x", "y", "rotation", "w_box", "h_box"];

/// Exports a report out of the library.
/// `demand` is the snapshot the report was solved from, used to look up the type of each placed instance.
pub fn export_report(report: &PlacementReport, demand: &[ShapeInstance]) -> ExtReport {
    ExtReport {
        board: ExtBoard {
            width: report.board.width,
            height: report.board.height,
        },
        placed_items: export_placed_items(report, demand),
        unplaced_items: report.unplaced.iter().map(|id| id.to_string()).collect(),
        unplaced_count: report.unplaced_count(),
        used_area: report.used_area,
        board_area: report.board_area,
        utilization_pct: report.utilization_pct,
        waste_pct: report.waste_pct,
        solve_time_ms: report.solve_duration.as_secs_f64() * 1000.0,
    }
}

/// The cutting list: one row per placement, in placement order
pub fn export_placed_items(report: &PlacementReport, demand: &[ShapeInstance]) -> Vec<ExtPlacedItem> {
    let instances: HashMap<InstanceId, &ShapeInstance> =
        demand.iter().map(|i| (i.id(), i)).collect();

    report
        .placements
        .iter()
        .filter_map(|p| match instances.get(&p.instance_id) {
            Some(instance) => Some(ExtPlacedItem {
                id: p.instance_id.to_string(),
                shape_type: instance.shape_type(),
                x: p.x,
                y: p.y,
                rotation: p.rotation_degrees(),
                w_box: p.placed_w,
                h_box: p.placed_h,
            }),
            None => {
                warn!(
                    "[EXPORT] placement of {} refers to an instance outside the demand snapshot, skipping",
                    p.instance_id
                );
                None
            }
        })
        .collect()
}

/// Renders the cutting list as CSV, with a header row
pub fn cutting_list_csv(report: &PlacementReport, demand: &[ShapeInstance]) -> String {
    let mut csv = CSV_HEADER.join(",");
    csv.push('\n');
    for row in export_placed_items(report, demand) {
        //writing to a String cannot fail
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{}",
            row.id, row.shape_type, row.x, row.y, row.rotation, row.w_box, row.h_box
        );
    }
    csv
}
