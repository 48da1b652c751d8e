use clap::ValueEnum;
use log::{debug, warn};
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::Point;

/// Layer heights for multi-color FDM printing, in mm
///
/// Every feature is a solid column from the plate top upwards:
///   Base plate:   0.0 -> 2.0mm (10 layers)
///   First color:  2.0 -> 3.0mm (5 layers above the plate)
///   Each further color stands one `COLOR_STEP` taller than the previous one, so a filament
///   swap at the right layer prints each pen color in its own filament.
pub mod heights {
    pub const LAYER_HEIGHT: f32 = 0.2;
    pub const BASE_HEIGHT: f32 = 2.0;
    pub const LINE_HEIGHT: f32 = 1.0;
    pub const COLOR_STEP: f32 = 0.6;
}

/// Which figure to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Figure {
    Square,
    Polygon,
    Art,
    Path,
}

impl Figure {
    /// The name used on the command line and in config files
    pub fn name(&self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_owned())
            .unwrap_or_default()
    }
}

fn default_figure() -> Figure {
    Figure::Square
}
fn default_sides() -> u32 {
    6
}
fn default_side_length() -> i32 {
    100
}
fn default_size() -> f32 {
    150.0
}
fn default_margin() -> f32 {
    8.0
}
fn default_base_height() -> f32 {
    heights::BASE_HEIGHT
}
fn default_line_width() -> f32 {
    1.2
}
fn default_line_height() -> f32 {
    heights::LINE_HEIGHT
}
fn default_color_step() -> f32 {
    heights::COLOR_STEP
}
fn default_simplify() -> f32 {
    0.05
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_figure")]
    pub figure: Figure,
    #[serde(default = "default_sides")]
    pub sides: u32,
    #[serde(default = "default_side_length")]
    pub side_length: i32,
    /// Waypoints for the `path` figure as `[[x, y], ...]`
    #[serde(default)]
    pub points: Vec<[i32; 2]>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            figure: default_figure(),
            sides: default_sides(),
            side_length: default_side_length(),
            points: Vec::new(),
            output: None,
            verbose: false,
            render: RenderConfig::default(),
        }
    }
}

impl FileConfig {
    pub fn points(&self) -> Vec<Point> {
        self.points.iter().map(|&[x, y]| Point::new(x, y)).collect()
    }

    /// Parse a config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load the first parseable config found in the standard locations
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match Self::from_toml(&contents) {
                    Ok(config) => {
                        debug!("Loaded config from {}", path.display());
                        return Some(config);
                    }
                    Err(e) => {
                        warn!("Failed to parse config file {}: {}", path.display(), e);
                    }
                }
            }
        }
        None
    }
}

/// Physical dimensions of the printed relief, all in mm
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Width and depth of the square base plate
    #[serde(default = "default_size")]
    pub size: f32,
    /// Empty border kept around the drawing
    #[serde(default = "default_margin")]
    pub margin: f32,
    #[serde(default = "default_base_height")]
    pub base_height: f32,
    /// Width of each drawn line
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    /// Height of the first pen color above the plate
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    /// Extra height per additional pen color
    #[serde(default = "default_color_step")]
    pub color_step: f32,
    /// Tolerance for dropping nearly collinear vertices before extrusion
    #[serde(default = "default_simplify")]
    pub simplify_epsilon: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            margin: default_margin(),
            base_height: default_base_height(),
            line_width: default_line_width(),
            line_height: default_line_height(),
            color_step: default_color_step(),
            simplify_epsilon: default_simplify(),
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("turtlesoup.toml"),
        PathBuf::from(".turtlesoup.toml"),
    ];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("turtlesoup").join("config.toml"));
        paths.push(config_dir.join("turtlesoup.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".turtlesoup.toml"));
    }

    paths
}
