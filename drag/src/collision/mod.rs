/*!
Collision root module.

Resolves platform-induced displacements against static geometry with swept
axis-aligned boxes. The code is split for clarity:

- aabb:     `BoundingBox` value type and the per-axis clamp
- sweep:    per-axis sweep in Y, X, Z order
- step_up:  up/forward/down alternative path over low ledges
- resolver: picks between the plain and step-up paths and applies the result to a body
*/

pub mod aabb;
pub mod resolver;
pub mod step_up;
pub mod sweep;

// Re-export commonly used types and functions.
pub use aabb::{Axis, BoundingBox};
pub use resolver::resolve_displacement;
pub use step_up::step_up;
pub use sweep::{Sweep, horizontal_sq, sweep, sweep_axis};
