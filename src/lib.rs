//! Rust implementation of inverse and forward kinematics for three-link (3R) planar arms,
//! with the selection of the solution closest to the current joints, and straight line
//! moves of the end effector built on it.
//!
//! # Features
//!
//! - Closed form inverse kinematics, two branches (elbow up, elbow down) for every
//!   end effector position and orientation.
//! - Unreachable positions are reported per branch as a value, not as NaN leaking out.
//! - If the end effector orientation does not matter, a sweep of candidate orientations
//!   can be searched. Among all reachable solutions, the one where the largest single joint
//!   rotation away from the previous joints is the smallest is returned. Consecutive
//!   solutions along a path stay close to each other and do not flip the elbow unless
//!   there is no other way.
//! - Straight line moves of the end effector in equal steps, each step solved from the
//!   joints of the previous one.
//! - Link lengths can be read from YAML.
//!
//! # Parameters
//!
//! The arm is described by three link lengths `seg1`, `seg2`, `seg3`. Joint 1 rotates
//! about the origin; θ2 and θ3 are relative to the previous link, so the end effector
//! orientation is θ1 + θ2 + θ3. All joints at zero stretch the arm along the x axis.
//!
//! ## Examples
//!
//! - **basic.rs**: Forward and inverse kinematics, both branches, continuing solution.
//! - **straight_line.rs**: Straight line moves of the end effector through several targets.

pub mod parameters;
pub mod parameters_robots;
pub mod parameter_error;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_error;
pub mod kinematics_impl;

pub mod sweep;

pub mod trajectory;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
