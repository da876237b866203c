// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

use clap::Parser;
use om_path::{
    CartesianMotionGenerator, Finishable, MotionTiming, PathDescription, PathGenerator, PathResult,
};
use std::time::Duration;

/// An example showing how to sample a circular Cartesian path in a control loop.
///
/// Prints one line per control period with time, position and velocity of the end effector.
#[derive(Parser, Debug)]
#[clap(author, version, name = "print_circle_path")]
struct CommandLineArguments {
    /// Radius of the circle in [m]
    #[clap(short, long, default_value_t = 0.05)]
    pub radius: f64,

    /// Duration of one revolution in [s]
    #[clap(short, long, default_value_t = 4.0)]
    pub move_time: f64,

    /// Control period in [s]
    #[clap(short, long, default_value_t = 0.01)]
    pub control_time: f64,

    /// X coordinate of the start position in [m]
    #[clap(short, default_value_t = 0.3, allow_hyphen_values = true)]
    pub x: f64,

    /// Y coordinate of the start position in [m]
    #[clap(short, default_value_t = 0.0, allow_hyphen_values = true)]
    pub y: f64,

    /// Z coordinate of the start position in [m]
    #[clap(short, default_value_t = 0.5, allow_hyphen_values = true)]
    pub z: f64,
}

fn main() -> PathResult<()> {
    let args = CommandLineArguments::parse();
    let timing = MotionTiming::new(args.move_time, args.control_time)?;
    let description = PathDescription::Circle {
        initial_position: [args.x, args.y, args.z],
        radius: args.radius,
    };
    let path = PathGenerator::from_description(4, &description, &timing)?;
    let mut motion_generator = CartesianMotionGenerator::new(path)?;

    let mut period = Duration::from_secs(0);
    loop {
        let setpoint = motion_generator.generate_motion(&period)?;
        let p = setpoint.pose.position;
        let v = setpoint.velocity;
        println!(
            "{:8.3} {:10.6} {:10.6} {:10.6} {:10.6} {:10.6} {:10.6}",
            motion_generator.time(),
            p.x,
            p.y,
            p.z,
            v.x,
            v.y,
            v.z
        );
        if setpoint.is_finished() {
            println!("Finished motion");
            return Ok(());
        }
        period = Duration::from_secs_f64(timing.control_time);
    }
}
