use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use dh_kinematics::dataset::{home_position, DatasetGenerator, DEFAULT_ANGLE_RANGE};
use dh_kinematics::kinematic_traits::Joints;
use dh_kinematics::parameters::DhTable;
use dh_kinematics::robot_arm::RobotArm;
use dh_kinematics::utils::{dump_joints, dump_pose, is_valid, joints_from_slice};

#[derive(Parser)]
#[command(name = "dh-kinematics", version, about = "Forward kinematics of a 6 joint DH arm")]
struct Cli {
    /// YAML file with the DH table (built in reference arm if omitted)
    #[arg(long, global = true)]
    dh: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pose of the end effector and positions of all joints
    Pose {
        /// Six joint angles in degrees, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_value = "0,0,0,0,0,0")]
        angles: Vec<f64>,
    },
    /// Generate random samples and print summary of the end effector reach
    Batch {
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        /// Joint angles are sampled within ± this many degrees
        #[arg(long, default_value_t = DEFAULT_ANGLE_RANGE)]
        range: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print the DH table as YAML
    Params,
}

fn load_table(path: &Option<PathBuf>) -> Result<DhTable> {
    match path {
        Some(p) => DhTable::from_yaml_file(p)
            .with_context(|| format!("Failed to load DH table from {}", p.display())),
        None => Ok(DhTable::reference_arm()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let table = load_table(&cli.dh)?;

    match cli.command {
        Command::Pose { angles } => {
            let joints: Joints = joints_from_slice(&angles)
                .with_context(|| format!("Expected 6 joint angles, got {}", angles.len()))?;
            ensure!(is_valid(&joints), "Joint angles must be finite, got {:?}", joints);
            let mut arm = RobotArm::new(table);
            let pose = arm.set_joints(&joints).rounded();

            println!("Joints:");
            dump_joints(&joints);
            println!(
                "End effector: x: {}, y: {}, z: {}, roll: {}, pitch: {}, yaw: {}",
                pose.x, pose.y, pose.z, pose.roll, pose.pitch, pose.yaw
            );
            dump_pose(arm.transform());
            for (i, p) in arm.get_joint_positions().iter().enumerate() {
                println!("J{}: {:.4} {:.4} {:.4}", i + 1, p[0], p[1], p[2]);
            }
        }
        Command::Batch { samples, range, seed } => {
            let generator = DatasetGenerator::new(table, range)
                .with_context(|| format!("Cannot sample joint angles within ±{} degrees", range))?;
            let mut rng = StdRng::seed_from_u64(seed);
            let mut data = generator.generate(&mut rng, samples);
            let home = home_position(&table);
            data.subtract_home(&home);
            info!("Generated {} samples", data.len());

            let labels = ["x", "y", "z", "roll", "pitch", "yaw"];
            println!("Home: {:?}", home);
            for (k, label) in labels.iter().enumerate() {
                let (min, max) = data.outputs.iter().fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), row| (lo.min(row[k]), hi.max(row[k])),
                );
                println!("{:>5}: [{:.4}, {:.4}] relative to home", label, min, max);
            }
        }
        Command::Params => {
            print!("{}", table.to_yaml());
        }
    }
    Ok(())
}
