//! Implementation details of the `sweep_contact_distance` function.
//!
//! The functions of this module compute times of impact: the fraction of the motion of a
//! ball travelled before it touches another shape.

pub use self::sweep_contact::sweep_contact_distance;
pub use self::sweep_contact_ball_ball::{
    sweep_contact_ball_ball, sweep_contact_moving_ball_moving_ball,
};
pub use self::sweep_contact_ball_cuboid::sweep_contact_ball_cuboid;
pub use self::sweep_contact_ball_hollow_sphere::sweep_contact_ball_hollow_sphere;
pub use self::sweep_contact_ball_swept_sphere::sweep_contact_ball_swept_sphere;

mod sweep_contact;
mod sweep_contact_ball_ball;
mod sweep_contact_ball_cuboid;
mod sweep_contact_ball_hollow_sphere;
mod sweep_contact_ball_swept_sphere;
