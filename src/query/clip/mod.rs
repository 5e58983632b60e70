pub use self::clip_aabb_line::clip_aabb_line;
pub use self::clip_planes_segment::clip_planes_segment;

mod clip_aabb_line;
mod clip_planes_segment;
