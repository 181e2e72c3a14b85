use crate::error::NestError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path, Rectangle};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the bounding box the engine packed around every circle and triangle
    #[serde(default)]
    pub draw_bboxes: bool,
    ///Print the id of every placed item at its centre
    #[serde(default)]
    pub draw_ids: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            draw_bboxes: true,
            draw_ids: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub board_fill: Color,
    pub board_stroke: Color,
    pub item_stroke: Color,
    pub item_opacity: f64,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::SLATE
    }
}

impl SvgLayoutTheme {
    pub const SLATE: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        board_fill: Color(0xF1, 0xF5, 0xF9),
        board_stroke: Color(0x33, 0x41, 0x55),
        item_stroke: Color(0xFF, 0xFF, 0xFF),
        item_opacity: 0.9,
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        board_fill: Color(0xC3, 0xC3, 0xC3),
        board_stroke: Color(0x00, 0x00, 0x00),
        item_stroke: Color(0x2D, 0x2D, 0x2D),
        item_opacity: 1.0,
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let scale = |c: u8| (c as f64 * fraction).clamp(0.0, 255.0) as u8;
    Color(scale(r), scale(g), scale(b))
}

/// RGB colour, written as `#RRGGBB`
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = NestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NestError::InvalidParameter(format!("invalid colour: {s:?}"));
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn rect(x: f64, y: f64, w: f64, h: f64, params: &[(&str, &str)]) -> Rectangle {
    let mut rect = Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", w)
        .set("height", h);
    for param in params {
        rect = rect.set(param.0, param.1)
    }
    rect
}

pub fn circle(cx: f64, cy: f64, r: f64, params: &[(&str, &str)]) -> Circle {
    let mut circle = Circle::new().set("cx", cx).set("cy", cy).set("r", r);
    for param in params {
        circle = circle.set(param.0, param.1)
    }
    circle
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

/// Right-angled triangle with its right angle at `(x, y)` and legs of length `w` and `h`
pub fn right_triangle_data(x: f64, y: f64, w: f64, h: f64) -> Data {
    let (x, y, w, h) = (x as f32, y as f32, w as f32, h as f32);
    Data::new()
        .move_to((x, y))
        .line_to((x + w, y))
        .line_to((x, y + h))
        .close()
}
