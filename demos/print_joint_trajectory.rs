// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

use clap::Parser;
use om_path::{BoundaryState, JointTrajectory, MotionTiming, PathResult};

/// An example showing how to sample a joint space trajectory at a fixed control period.
///
/// Every joint moves from its start to its goal position, starting and ending at rest.
#[derive(Parser, Debug)]
#[clap(author, version, name = "print_joint_trajectory")]
struct CommandLineArguments {
    /// Goal joint positions in [rad], one value per joint
    #[clap(required = true, allow_hyphen_values = true)]
    pub q_goal: Vec<f64>,

    /// Duration of the motion in [s]
    #[clap(short, long, default_value_t = 2.0)]
    pub move_time: f64,

    /// Control period in [s]
    #[clap(short, long, default_value_t = 0.01)]
    pub control_time: f64,
}

fn main() -> PathResult<()> {
    let args = CommandLineArguments::parse();
    let timing = MotionTiming::new(args.move_time, args.control_time)?;
    let joint_num = args.q_goal.len();
    let start = vec![BoundaryState::rest(0.); joint_num];
    let goal: Vec<BoundaryState> = args.q_goal.iter().map(|&q| BoundaryState::rest(q)).collect();

    let mut trajectory = JointTrajectory::new(joint_num);
    trajectory.init(&start, &goal, timing.move_time, timing.control_time)?;
    for tick in timing.ticks() {
        let q = trajectory.get_position(tick)?;
        let dq = trajectory.get_velocity(tick)?;
        println!("{:8.3} q: {:?} dq: {:?}", tick, q, dq);
    }
    println!("Coefficients:\n{}", trajectory.get_coefficient());
    Ok(())
}
