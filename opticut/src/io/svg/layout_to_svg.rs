use crate::entities::{InstanceId, PlacementReport, ShapeInstance, ShapeType};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use log::warn;
use std::collections::HashMap;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws the board of `report` with the silhouette of every placed shape inside its placed bounding box.
/// `demand` is the snapshot the report was solved from.
pub fn report_to_svg(
    report: &PlacementReport,
    demand: &[ShapeInstance],
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let board = report.board;
    let theme = &options.theme;
    let min_dim = f64::min(board.width, board.height);

    //margin of 5% of the smallest board dimension on every side
    let margin = 0.05 * min_dim;
    let vbox = (
        -margin,
        -margin,
        board.width + 2.0 * margin,
        board.height + 2.0 * margin,
    );

    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the board
        let label_content = format!(
            "width: {:.3} | height: {:.3} | utilization: {:.1}% | unplaced: {} | {}",
            board.width,
            board.height,
            report.utilization_pct,
            report.unplaced_count(),
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * 0.025 * min_dim)
            .set("font-size", min_dim * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let board_group = Group::new()
        .set("id", "board")
        .add(svg_util::rect(
            0.0,
            0.0,
            board.width,
            board.height,
            &[
                ("fill", &*format!("{}", theme.board_fill)),
                ("stroke", &*format!("{}", theme.board_stroke)),
                ("stroke-width", &*format!("{}", 3.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "board, width: {:.3}, height: {:.3}",
            board.width, board.height
        )));

    let instances: HashMap<InstanceId, &ShapeInstance> =
        demand.iter().map(|i| (i.id(), i)).collect();

    let mut items_group = Group::new().set("id", "items");
    let mut bbox_group = Group::new().set("id", "bounding_boxes");
    let mut id_group = Group::new().set("id", "item_ids");

    for pl in &report.placements {
        let Some(instance) = instances.get(&pl.instance_id) else {
            warn!(
                "[SVG] placement of {} refers to an instance outside the demand snapshot, skipping",
                pl.instance_id
            );
            continue;
        };

        let item_style = [
            ("fill", &*format!("{}", instance.color())),
            ("fill-opacity", &*format!("{}", theme.item_opacity)),
            ("stroke", &*format!("{}", theme.item_stroke)),
            ("stroke-width", &*format!("{stroke_width}")),
        ];

        let item_group = Group::new()
            .set("id", format!("item_{}", pl.instance_id))
            .add(Title::new(format!(
                "id: {}, type: {}, pos: ({:.3}, {:.3}), rot: {}°",
                pl.instance_id,
                instance.shape_type(),
                pl.x,
                pl.y,
                pl.rotation_degrees()
            )));

        let (cx, cy) = (pl.x + pl.placed_w / 2.0, pl.y + pl.placed_h / 2.0);

        let item_group = match instance.shape_type() {
            ShapeType::Rectangle | ShapeType::Square => item_group.add(svg_util::rect(
                pl.x,
                pl.y,
                pl.placed_w,
                pl.placed_h,
                &item_style,
            )),
            ShapeType::Circle => item_group.add(svg_util::circle(
                cx,
                cy,
                f64::min(pl.placed_w, pl.placed_h) / 2.0,
                &item_style,
            )),
            ShapeType::Triangle => item_group.add(svg_util::data_to_path(
                svg_util::right_triangle_data(pl.x, pl.y, pl.placed_w, pl.placed_h),
                &item_style,
            )),
        };
        items_group = items_group.add(item_group);

        if options.draw_bboxes
            && matches!(
                instance.shape_type(),
                ShapeType::Circle | ShapeType::Triangle
            )
        {
            let outline = svg_util::change_brightness(instance.color(), 0.6);
            bbox_group = bbox_group.add(svg_util::rect(
                pl.x,
                pl.y,
                pl.placed_w,
                pl.placed_h,
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{outline}")),
                    ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                    (
                        "stroke-dasharray",
                        &*format!("{} {}", 2.0 * stroke_width, 2.0 * stroke_width),
                    ),
                ],
            ));
        }

        if options.draw_ids {
            //ids are drawn outside the flipped group, mirror the y-coordinate manually
            id_group = id_group.add(
                Text::new(pl.instance_id.to_string())
                    .set("x", cx)
                    .set("y", board.height - cy)
                    .set("font-size", 0.15 * f64::min(pl.placed_w, pl.placed_h))
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            );
        }
    }

    //the origin of the board lies at its lower-left corner, flip the y-axis
    let layout_group = Group::new()
        .set(
            "transform",
            format!("translate(0 {}) scale(1 -1)", board.height),
        )
        .add(board_group)
        .add(items_group)
        .add(bbox_group);

    Document::new()
        .set("viewBox", vbox)
        .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
        .add(layout_group)
        .add(id_group)
        .add(label)
}
