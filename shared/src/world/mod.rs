pub mod kinematics;
pub mod path;
pub mod point;
pub mod state;
