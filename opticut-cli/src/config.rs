use opticut::io::ext_repr::ExtBoard;
use opticut::io::svg::SvgDrawOptions;
use opticut::nesting::EngineConfig;
use serde::{Deserialize, Serialize};

/// Configuration of the command-line nesting run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct OptiCutConfig {
    /// Configuration of the nesting engine
    #[serde(default)]
    pub engine_config: EngineConfig,
    /// Board used for jobs which do not specify one (a standard 2440 x 1220 mm sheet)
    #[serde(default = "default_board")]
    pub default_board: ExtBoard,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_board() -> ExtBoard {
    ExtBoard {
        width: 2440.0,
        height: 1220.0,
    }
}

impl Default for OptiCutConfig {
    fn default() -> Self {
        Self {
            engine_config: EngineConfig::default(),
            default_board: default_board(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
