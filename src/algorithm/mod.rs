/// Randomized corridor generation across a grid
pub mod corridor;
/// Re-planning path following towards a moving target
pub mod follow;
/// Sampled line of sight between world points
pub mod sight;
