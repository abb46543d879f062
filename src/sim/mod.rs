//! Entity and collision module
//!
//! Everything the host loop queries each frame lives here:
//! - Entities with a name, position, size, layer and at most one collider
//! - Pairwise overlap tests (box/box, circle/circle, box/circle)
//! - Instancing with `<name>-<n>` naming
//! - A name-keyed scene registry with stable (name-ordered) iteration
//!
//! No rendering or platform dependencies.

pub mod aabb;
pub mod collider;
pub mod collision;
pub mod entity;
pub mod scene;

pub use aabb::Aabb;
pub use collider::{Collider, ColliderShape, ColliderType, ShapeKind};
pub use collision::{Contact, collider_contact, colliders_overlap, contact, is_colliding};
pub use entity::{Entity, instantiate, instantiate_many, is_reserved_name};
pub use scene::Scene;
