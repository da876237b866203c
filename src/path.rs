// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the path generators and the types they exchange with the control loop.

pub mod circle;
pub mod control_types;
pub mod joint_trajectory;
pub mod line;
pub mod minimum_jerk;
pub mod motion_generator;
pub mod path_generator;
pub mod timing;
