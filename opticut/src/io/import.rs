use crate::entities::{Board, DemandQueue, ShapeKind};
use crate::error::Result;
use crate::io::ext_repr::{ExtBoard, ExtDemand, ExtJob, ExtShape};
use log::info;

/// Converts an [`ExtJob`] into a board and a demand queue.
/// `fallback_board` is used if the job does not specify one.
pub fn import_job(ext_job: &ExtJob, fallback_board: ExtBoard) -> Result<(Board, DemandQueue)> {
    let board = import_board(ext_job.board.as_ref().unwrap_or(&fallback_board))?;
    let demand = import_demand(&ext_job.demand)?;
    info!(
        "[IMPORT] job {:?}: board {} x {}, {} demand lines, {} instances",
        ext_job.name,
        board.width,
        board.height,
        ext_job.demand.len(),
        demand.len()
    );
    Ok((board, demand))
}

pub fn import_board(ext_board: &ExtBoard) -> Result<Board> {
    Board::try_new(ext_board.width, ext_board.height)
}

/// Builds a [`DemandQueue`] holding every demand line in order
pub fn import_demand(ext_demand: &[ExtDemand]) -> Result<DemandQueue> {
    let mut queue = DemandQueue::new();
    for line in ext_demand {
        let kind = import_shape(&line.shape);
        match line.color {
            Some(color) => queue.add_with_color(kind, line.quantity, line.allow_rotation, color)?,
            None => queue.add(kind, line.quantity, line.allow_rotation)?,
        };
    }
    Ok(queue)
}

pub fn import_shape(ext_shape: &ExtShape) -> ShapeKind {
    match *ext_shape {
        ExtShape::Rectangle { w, h } => ShapeKind::Rectangle { w, h },
        ExtShape::Square { s } => ShapeKind::Square { s },
        ExtShape::Circle { r } => ShapeKind::Circle { r },
        ExtShape::Triangle { b, h } => ShapeKind::Triangle { b, h },
    }
}
