/*!
Collision root module.

Stateless queries for the kinematic character controller, using parry3d for
the narrow-phase geometry. The code is split for clarity:

- types:    shared data types (math aliases, Obstacle)
- settings: body dimensions and tolerance constants
- ground:   downward snap probe and grounded policy
- walls:    torso-band box overlap test for horizontal moves

Ground detection and wall blocking are deliberately two independent queries
over the same obstacle set rather than one mesh-typed collider abstraction;
each stays simple and independently testable.
*/

pub mod ground;
pub mod settings;
pub mod types;
pub mod walls;

// Re-export commonly used types and functions.
pub use ground::ground_snap;
pub use types::{Obstacle, Point3, Vec3};
pub use walls::horizontal_blocked;
