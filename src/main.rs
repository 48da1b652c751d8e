use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::path::PathBuf;
use std::time::Instant;

use turtlesoup::config::heights::LAYER_HEIGHT;
use turtlesoup::config::{Figure, FileConfig, RenderConfig};
use turtlesoup::domain::Point;
use turtlesoup::geometry::{
    Bounds, Scaler, regular_polygon_interior_angle, sides_from_interior_angle,
};
use turtlesoup::layers::{ColorLayer, generate_base_plate, generate_trace_meshes};
use turtlesoup::mesh::stl::estimate_stl_size;
use turtlesoup::mesh::{read_face_count, validate_and_fix, write_stl};
use turtlesoup::shapes::{draw_personal_art, draw_regular_polygon, draw_square, walk_path};
use turtlesoup::turtle::{DrawableTurtle, RecordingTurtle};

/// Draw turtle figures and export them as 3D-printable STL reliefs
///
/// Examples:
///   # A 100-unit square
///   turtlesoup --figure square --side-length 100
///
///   # An octagon on a 120mm plate
///   turtlesoup --figure polygon --sides 8 --size 120 -o octagon.stl
///
///   # Walk through waypoints and print the turns taken
///   turtlesoup --figure path --point 0,0 --point 50,0 --point 50,50
///
///   # Just list the primitive calls of the decorative figure
///   turtlesoup --figure art --list-commands
#[derive(Parser, Debug)]
#[command(name = "turtlesoup")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches turtlesoup.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Figure to draw
    #[arg(short = 'f', long, value_enum)]
    figure: Option<Figure>,

    /// Number of sides for the polygon figure (must be > 2)
    #[arg(long)]
    sides: Option<u32>,

    /// Side length in turtle units for square and polygon figures
    #[arg(short = 'l', long)]
    side_length: Option<i32>,

    /// Waypoint `x,y` for the path figure (repeat for each point)
    #[arg(short = 'p', long = "point", allow_hyphen_values = true)]
    points: Vec<Point>,

    /// Output STL file path (defaults to {figure}.stl)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Plate width and depth in mm
    #[arg(short = 's', long)]
    size: Option<f32>,

    /// Base plate thickness in mm
    #[arg(long)]
    base_height: Option<f32>,

    /// Drawn line width in mm
    #[arg(long)]
    line_width: Option<f32>,

    /// Height of the first pen color above the plate in mm
    #[arg(long)]
    line_height: Option<f32>,

    /// Print the primitive turtle calls and exit without writing a file
    #[arg(long)]
    list_commands: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        let contents = std::fs::read_to_string(config_path)
            .context(format!("Failed to read config file: {:?}", config_path))?;
        FileConfig::from_toml(&contents).context("Failed to parse config file")?
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let figure = args.figure.unwrap_or(file_config.figure);
    let sides = args.sides.unwrap_or(file_config.sides);
    let side_length = args.side_length.unwrap_or(file_config.side_length);
    let points = if args.points.is_empty() {
        file_config.points()
    } else {
        args.points.clone()
    };
    let verbose = args.verbose || file_config.verbose;

    let render = RenderConfig {
        size: args.size.unwrap_or(file_config.render.size),
        base_height: args.base_height.unwrap_or(file_config.render.base_height),
        line_width: args.line_width.unwrap_or(file_config.render.line_width),
        line_height: args.line_height.unwrap_or(file_config.render.line_height),
        ..file_config.render.clone()
    };
    if render.size <= 2.0 * render.margin {
        bail!(
            "Plate size {}mm leaves no room inside a {}mm margin",
            render.size,
            render.margin
        );
    }

    let output_path = args
        .output
        .clone()
        .or_else(|| file_config.output.clone())
        .unwrap_or_else(|| PathBuf::from(format!("{}.stl", figure.name())));

    if verbose {
        println!("Configuration:");
        println!("  Figure: {}", figure.name());
        match figure {
            Figure::Square => println!("  Side length: {}", side_length),
            Figure::Polygon => println!("  Sides: {}, side length: {}", sides, side_length),
            Figure::Path => println!("  Waypoints: {}", points.len()),
            Figure::Art => {}
        }
        println!("  Plate: {}mm (margin {}mm)", render.size, render.margin);
        println!("  Base height: {}mm", render.base_height);
        println!("  Line: {}mm wide, {}mm high", render.line_width, render.line_height);
        println!("  Output: {}", output_path.display());
        println!();
    }

    // Record first so the calls can be listed, then replay onto the drawing turtle
    let mut recorder = RecordingTurtle::new();
    match figure {
        Figure::Square => draw_square(&mut recorder, side_length)?,
        Figure::Polygon => {
            draw_regular_polygon(&mut recorder, sides, side_length)?;
            let interior = regular_polygon_interior_angle(sides)?;
            println!(
                "Regular {}-gon: interior angle {:.3} degrees (implies {} sides)",
                sides,
                interior,
                sides_from_interior_angle(interior)?
            );
        }
        Figure::Art => draw_personal_art(&mut recorder)?,
        Figure::Path => {
            if points.len() < 2 {
                bail!("The path figure needs at least two --point values");
            }
            let turns = walk_path(&mut recorder, &points);
            let listed: Vec<String> = turns.iter().map(|t| format!("{:.3}", t)).collect();
            println!("Turns: [{}]", listed.join(", "));
        }
    }
    debug!("Recorded {} turtle calls", recorder.commands().len());

    if args.list_commands {
        for cmd in recorder.commands() {
            println!("{}", cmd);
        }
        return Ok(());
    }

    let mut turtle = DrawableTurtle::new();
    recorder.replay(&mut turtle);

    let vertices = turtle.vertices();
    let bounds = Bounds::from_points(&vertices).context("The figure drew no lines")?;
    let scaler = Scaler::from_bounds_with_margin(&bounds, render.size as f64, render.margin as f64);
    let drawn_length: f64 = turtle.segments().iter().map(|s| s.length()).sum();
    println!(
        "Drawing: {} lines ({:.0} units of ink), {:.0} x {:.0} units -> {:.3}mm per unit",
        turtle.segments().len(),
        drawn_length,
        bounds.width(),
        bounds.height(),
        scaler.scale_factor()
    );

    let spinner = create_spinner("Generating mesh layers...");
    let start = Instant::now();

    let base_triangles = generate_base_plate(render.size, render.base_height);
    let (trace_triangles, color_layers) =
        generate_trace_meshes(&turtle.polylines(), &scaler, &render);
    if verbose {
        println!("  Base plate: {} triangles", base_triangles.len());
        println!("  Trace: {} triangles", trace_triangles.len());
    }

    let mut all_triangles = base_triangles;
    all_triangles.extend(trace_triangles);

    spinner.finish_with_message(format!(
        "Generated {} triangles [{:.1}s]",
        all_triangles.len(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Validating and writing STL file...");
    let start = Instant::now();

    let (validated, report) = validate_and_fix(all_triangles);
    write_stl(&output_path, &validated).context("Failed to write STL file")?;
    let file_size = estimate_stl_size(validated.len());

    spinner.finish_with_message(format!(
        "Wrote {} triangles ({:.1} KB) [{:.1}s]",
        validated.len(),
        file_size as f64 / 1024.0,
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        println!("  {}", report.summary());
        let faces = read_face_count(&output_path).context("Failed to read back STL file")?;
        println!("  Read back {} faces", faces);
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!("Output: {}", output_path.display());
    println!();
    print_color_change_guide(render.base_height, &color_layers);

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn print_color_change_guide(base_height: f32, layers: &[ColorLayer]) {
    let to_layers = |z: f32| (z / LAYER_HEIGHT).round() as i32;

    println!("Color change schedule ({:.1}mm layer height)", LAYER_HEIGHT);
    println!("============================================");
    let base_layers = to_layers(base_height);
    println!("  Layers 1-{}: base plate", base_layers);

    let mut prev = base_layers;
    for layer in layers {
        let top = to_layers(layer.z_top);
        println!(
            "  Layers {}-{}: {} lines top out at {:.1}mm",
            prev + 1,
            top,
            layer.color.name(),
            layer.z_top
        );
        prev = top;
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
