use anyhow::Context;
use clap::{Parser, Subcommand};
use planar_arm::logger;
use planar_arm::{ArmConfig, Control, LinkLengths, Point2D, TwoLinkArm, Workspace};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "planar-arm")]
#[command(about = "Forward and inverse kinematics for a two-link planar arm")]
struct Cli {
    /// TOML file with link lengths, initial state and canvas settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Length of the first link, snapped to the slider range (overrides the config).
    #[arg(long)]
    l1: Option<f64>,

    /// Length of the second link, snapped to the slider range (overrides the config).
    #[arg(long)]
    l2: Option<f64>,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// End-effector position for the given joint angles.
    Forward {
        #[arg(long, allow_negative_numbers = true)]
        theta1: f64,
        #[arg(long, allow_negative_numbers = true)]
        theta2: f64,
        /// Read angles as degrees instead of radians.
        #[arg(long)]
        degrees: bool,
    },
    /// Joint angles reaching the given target (elbow-up, clamped to the workspace).
    Inverse {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        /// Print angles in degrees instead of radians.
        #[arg(long)]
        degrees: bool,
    },
    /// Recompute the canvas frame from the configured state.
    Frame {
        /// Emit the whole frame as JSON instead of the text readout.
        #[arg(long)]
        json: bool,
    },
    /// Reachability of a target for the current link lengths.
    Workspace {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let config = match &cli.config {
        Some(path) => ArmConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ArmConfig::default(),
    };
    let mut scene = config.into_scene();
    if let Some(l1) = cli.l1 {
        scene.set(Control::L1, l1)?;
    }
    if let Some(l2) = cli.l2 {
        scene.set(Control::L2, l2)?;
    }
    let links: LinkLengths = scene.state().links;
    let arm = TwoLinkArm::new(links);

    match cli.command {
        Command::Forward {
            theta1,
            theta2,
            degrees,
        } => {
            let (theta1, theta2) = if degrees {
                (theta1.to_radians(), theta2.to_radians())
            } else {
                (theta1, theta2)
            };
            let p = planar_arm::forward_kinematics(theta1, theta2, links.l1, links.l2);
            println!("x = {:.6}, y = {:.6}", p.x, p.y);
        }
        Command::Inverse { x, y, degrees } => {
            let angles = planar_arm::inverse_kinematics(x, y, links.l1, links.l2);
            let (theta1, theta2) = if degrees {
                angles.to_degrees()
            } else {
                (angles.theta1, angles.theta2)
            };
            let reached = arm.forward(angles);
            println!("theta1 = {theta1:.6}, theta2 = {theta2:.6}");
            println!("reached x = {:.6}, y = {:.6}", reached.x, reached.y);
        }
        Command::Frame { json } => {
            let frame = scene.frame();
            if json {
                println!("{}", serde_json::to_string_pretty(&frame)?);
            } else {
                let r = &frame.readout;
                println!("End Effector Position: X: {}, Y: {}", r.end_effector_x, r.end_effector_y);
                println!("Calculated Angles: θ1: {}°, θ2: {}°", r.theta1_deg, r.theta2_deg);
                println!("Target: {:?}", frame.target_reach);
            }
        }
        Command::Workspace { x, y } => {
            let ws = Workspace::of(links);
            let reach = ws.classify(Point2D::new(x, y));
            println!(
                "inner = {:.3}, outer = {:.3}, area = {:.3}",
                ws.inner_radius,
                ws.outer_radius,
                ws.area()
            );
            println!("({x}, {y}): {reach:?}");
        }
    }

    Ok(())
}
