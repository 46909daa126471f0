use bevy::prelude::*;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use wayforge::resources::ForgeConfig;
use wayforge::traversal::{GroundProbe, SurfaceHit, plan_traversal};
use wayforge::WayforgeResult;

#[derive(Parser)]
#[command(name = "plan_dump")]
#[command(about = "Run the traversal pipeline against an analytic scene and print the plan")]
struct Args {
    /// Scene to probe
    #[arg(long, value_enum, default_value = "flat")]
    scenario: Scenario,

    /// Probe origin (format: X,Y,Z)
    #[arg(long, default_value = "0,0,0", value_parser = parse_position)]
    origin: Vec3,

    /// Facing direction (format: X,Y,Z); only the horizontal part matters
    #[arg(long, default_value = "1,0,0", value_parser = parse_position)]
    facing: Vec3,

    /// Settings file to use instead of the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the plan as TOML instead of a text summary
    #[arg(long)]
    toml: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Scenario {
    /// Unbroken flat ground 500 units below the origin
    Flat,
    /// Flat ground with a 400-unit-wide gap ahead of the origin
    Chasm,
    /// A vertical face directly under the origin
    Wall,
    /// A 60-degree incline under the origin
    Slope,
}

/// Closed-form stand-in for the scene query service: enough geometry to
/// exercise every branch of the pipeline without an engine running.
struct AnalyticScene {
    scenario: Scenario,
    ground_y: f32,
}

impl AnalyticScene {
    fn new(scenario: Scenario, origin: Vec3) -> Self {
        Self {
            scenario,
            ground_y: origin.y - 500.0,
        }
    }
}

impl GroundProbe for AnalyticScene {
    fn cast(&mut self, start: Vec3, end: Vec3) -> Option<SurfaceHit> {
        if end.y > self.ground_y || start.y < self.ground_y {
            return None;
        }
        let landing = Vec3::new(start.x, self.ground_y, start.z);

        match self.scenario {
            Scenario::Flat => Some(SurfaceHit::new(landing, Vec3::Y)),
            Scenario::Chasm => {
                // Gap from 50 to 450 units out; probes inside it find nothing
                if start.x > 50.0 && start.x < 450.0 {
                    None
                } else {
                    Some(SurfaceHit::new(landing, Vec3::Y))
                }
            }
            Scenario::Wall => Some(SurfaceHit::new(landing, Vec3::NEG_X)),
            Scenario::Slope => {
                let tilt = 60f32.to_radians();
                Some(SurfaceHit::new(
                    landing,
                    Vec3::new(tilt.sin(), tilt.cos(), 0.0),
                ))
            }
        }
    }
}

#[derive(Serialize)]
struct PlanDump {
    scenario: String,
    surface: String,
    points: Vec<[f32; 3]>,
}

fn parse_position(input: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() != 3 {
        return Err(format!(
            "Invalid position '{input}'. Expected 3 comma-separated values"
        ));
    }
    let mut values = [0.0f32; 3];
    for (i, part) in parts.iter().enumerate() {
        values[i] = part
            .trim()
            .parse()
            .map_err(|_| format!("Invalid position value: '{part}'"))?;
    }
    Ok(Vec3::from_array(values))
}

fn load_settings(path: Option<&PathBuf>) -> WayforgeResult<ForgeConfig> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        }
        None => Ok(ForgeConfig::default()),
    }
}

fn main() -> WayforgeResult<()> {
    let args = Args::parse();

    let config = load_settings(args.config.as_ref())?;
    let tuning = config.settings.to_tuning();

    let mut scene = AnalyticScene::new(args.scenario, args.origin);
    let plan = plan_traversal(&mut scene, args.origin, args.facing, &tuning)?;

    if args.toml {
        let dump = PlanDump {
            scenario: format!("{:?}", args.scenario).to_lowercase(),
            surface: format!("{:?}", plan.surface).to_lowercase(),
            points: plan.points.iter().map(|p| p.to_array()).collect(),
        };
        println!("{}", toml::to_string_pretty(&dump)?);
        return Ok(());
    }

    println!("Scenario: {:?}", args.scenario);
    println!("Probe origin: {}", args.origin);
    println!("Surface classified as: {:?}", plan.surface);
    println!("Planned {} curve points:", plan.points.len());
    for (i, point) in plan.points.iter().enumerate() {
        println!("  {:>2}: ({:8.1}, {:8.1}, {:8.1})", i, point.x, point.y, point.z);
    }

    Ok(())
}
