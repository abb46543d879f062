//! Named game entities and instancing
//!
//! An entity's name is its registry key. Names ending in `-<digits>` are
//! reserved for instances: `bot` produces `bot-1`, `bot-2`, ... when
//! instantiated, so a directly created `bot-3` would eventually clash.
//!
//! Direct construction goes through [`Entity::new`], which enforces the
//! reservation. Instances are built by [`Entity::instantiate`] through the
//! unchecked path, so no global "instancing" switch is needed.

use glam::Vec2;

use super::collider::{Collider, ColliderType, ShapeKind};
use crate::consts::CLONE_SEPARATOR;
use crate::error::{EngineError, Result};
use crate::normalize_layer;

/// A placed, renderable, collidable game object
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    name: String,
    /// World-space position (top-left of the sprite)
    pub position: Vec2,
    /// Render extents, independent of the collider extent
    pub size: Vec2,
    layer: u32,
    collider: Option<Collider>,
    /// 0 for directly created entities, the clone number for instances
    instance_id: u32,
    clones_instantiated: u32,
}

impl Entity {
    /// Create an entity. Fails if `name` uses the reserved `-<digits>` suffix.
    pub fn new(name: impl Into<String>, position: Vec2, size: Vec2, layer: f32) -> Result<Self> {
        let name = name.into();
        if is_reserved_name(&name) {
            return Err(EngineError::ReservedName {
                suggestion: suggest_name(&name),
                name,
            });
        }
        Ok(Self::construct(name, position, size, normalize_layer(layer)))
    }

    fn construct(name: String, position: Vec2, size: Vec2, layer: u32) -> Self {
        Self {
            name,
            position,
            size,
            layer,
            collider: None,
            instance_id: 0,
            clones_instantiated: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Set the draw layer (rounded, sign dropped)
    pub fn set_layer(&mut self, layer: f32) {
        self.layer = normalize_layer(layer);
    }

    pub fn set_position_x(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn set_position_y(&mut self, y: f32) {
        self.position.y = y;
    }

    /// Move by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn instance_id(&self) -> u32 {
        self.instance_id
    }

    /// Whether this entity was produced by instancing
    pub fn is_instance(&self) -> bool {
        self.instance_id > 0
    }

    /// Number of instances produced from this entity so far
    pub fn clones_instantiated(&self) -> u32 {
        self.clones_instantiated
    }

    pub fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    /// Mutable access to the attached collider's offset/extent/type
    pub fn collider_mut(&mut self) -> Option<&mut Collider> {
        self.collider.as_mut()
    }

    pub fn has_collider(&self) -> bool {
        self.collider.is_some()
    }

    /// Attach a collider. The first collider wins: returns `false` and leaves
    /// the entity untouched if one is already attached.
    pub fn attach_collider(&mut self, collider: Collider) -> bool {
        if self.collider.is_some() {
            log::debug!(
                "'{}' already has a {} collider, ignoring {}",
                self.name,
                self.collider.as_ref().map_or("", |c| c.kind().as_str()),
                collider.kind().as_str()
            );
            return false;
        }
        self.collider = Some(collider);
        true
    }

    /// Attach a square collider of side `size`
    pub fn add_square_collider(
        &mut self,
        collider_type: ColliderType,
        offset: Vec2,
        size: f32,
    ) -> bool {
        self.attach_collider(Collider::square(collider_type, offset, size))
    }

    /// Attach a rectangle collider spanning `size`
    pub fn add_rectangle_collider(
        &mut self,
        collider_type: ColliderType,
        offset: Vec2,
        size: Vec2,
    ) -> bool {
        self.attach_collider(Collider::rectangle(collider_type, offset, size))
    }

    /// Attach a circle collider of diameter `size`
    pub fn add_circle_collider(
        &mut self,
        collider_type: ColliderType,
        offset: Vec2,
        size: f32,
    ) -> bool {
        self.attach_collider(Collider::circle(collider_type, offset, size))
    }

    /// Attach any shape from raw width/height
    pub fn add_collision_mask(
        &mut self,
        kind: ShapeKind,
        collider_type: ColliderType,
        offset: Vec2,
        extent: Vec2,
    ) -> bool {
        self.attach_collider(Collider::new(kind, collider_type, offset, extent))
    }

    /// Name the next instance of this entity will get
    pub fn next_instance_name(&self) -> String {
        format!("{}{}{}", self.name, CLONE_SEPARATOR, self.clones_instantiated + 1)
    }

    /// Produce a new instance of this entity
    ///
    /// The instance is named `<name>-<n>` where `n` is this entity's clone
    /// count after the increment, copies position, size and layer, and gets
    /// its own copy of the collider.
    pub fn instantiate(&mut self) -> Entity {
        let name = self.next_instance_name();
        self.clones_instantiated += 1;

        let mut instance = Self::construct(name, self.position, self.size, self.layer);
        if let Some(c) = &self.collider {
            instance.add_collision_mask(c.kind(), c.collider_type, c.offset, c.extent);
        }
        instance.instance_id = self.clones_instantiated;

        log::debug!("Instantiated '{}' from '{}'", instance.name, self.name);
        instance
    }

    /// Produce `count` instances; the clone count advances once per instance
    pub fn instantiate_many(&mut self, count: usize) -> Vec<Entity> {
        (0..count).map(|_| self.instantiate()).collect()
    }
}

/// Free-function form of [`Entity::instantiate`]
pub fn instantiate(source: &mut Entity) -> Entity {
    source.instantiate()
}

/// Free-function form of [`Entity::instantiate_many`]
pub fn instantiate_many(source: &mut Entity, count: usize) -> Vec<Entity> {
    source.instantiate_many(count)
}

/// Names ending in `-<digits>` are reserved for instances
pub fn is_reserved_name(name: &str) -> bool {
    match name.rsplit_once(CLONE_SEPARATOR) {
        Some((_, suffix)) => !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// `bot-5` -> `bot_5`
fn suggest_name(name: &str) -> String {
    match name.rsplit_once(CLONE_SEPARATOR) {
        Some((base, suffix)) => format!("{}_{}", base, suffix),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collider::ColliderShape;

    fn bot() -> Entity {
        let mut e = Entity::new("bot", Vec2::new(4.0, 8.0), Vec2::splat(16.0), 2.0).unwrap();
        e.add_rectangle_collider(ColliderType::Solid, Vec2::new(1.0, 1.0), Vec2::new(14.0, 12.0));
        e
    }

    #[test]
    fn test_reserved_name_rejected() {
        let err = Entity::new("enemy-3", Vec2::ZERO, Vec2::ONE, 0.0).unwrap_err();
        assert_eq!(
            err,
            EngineError::ReservedName {
                name: "enemy-3".into(),
                suggestion: "enemy_3".into(),
            }
        );
    }

    #[test]
    fn test_reserved_name_pattern() {
        assert!(is_reserved_name("bot-1"));
        assert!(is_reserved_name("a-b-42"));
        assert!(is_reserved_name("-7"));
        assert!(!is_reserved_name("bot"));
        assert!(!is_reserved_name("bot-"));
        assert!(!is_reserved_name("bot-x1"));
        assert!(!is_reserved_name("bot_1"));
        assert!(Entity::new("bot-one", Vec2::ZERO, Vec2::ONE, 0.0).is_ok());
    }

    #[test]
    fn test_layer_normalized() {
        let mut e = Entity::new("e", Vec2::ZERO, Vec2::ONE, -2.6).unwrap();
        assert_eq!(e.layer(), 3);
        e.set_layer(1.2);
        assert_eq!(e.layer(), 1);
    }

    #[test]
    fn test_second_collider_ignored() {
        let mut e = Entity::new("e", Vec2::ZERO, Vec2::ONE, 0.0).unwrap();
        assert!(e.add_square_collider(ColliderType::Solid, Vec2::ZERO, 4.0));
        assert!(!e.add_circle_collider(ColliderType::Intangible, Vec2::ONE, 10.0));

        let c = e.collider().unwrap();
        assert_eq!(c.kind(), ShapeKind::Square);
        assert_eq!(c.extent, Vec2::splat(4.0));
        assert_eq!(c.collider_type, ColliderType::Solid);
    }

    #[test]
    fn test_instantiate_names_and_ids() {
        let mut source = bot();
        assert_eq!(source.clones_instantiated(), 0);

        let first = source.instantiate();
        assert_eq!(first.name(), "bot-1");
        assert_eq!(first.instance_id(), 1);
        assert!(first.is_instance());
        assert_eq!(source.clones_instantiated(), 1);

        let second = instantiate(&mut source);
        assert_eq!(second.name(), "bot-2");
        assert_eq!(second.instance_id(), 2);
        assert!(!source.is_instance());
    }

    #[test]
    fn test_instantiate_many_counts_each_instance() {
        let mut source = bot();
        let batch = instantiate_many(&mut source, 3);
        let names: Vec<&str> = batch.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["bot-1", "bot-2", "bot-3"]);
        assert_eq!(source.clones_instantiated(), 3);
        assert_eq!(source.next_instance_name(), "bot-4");
        assert!(source.instantiate_many(0).is_empty());
    }

    #[test]
    fn test_instance_copies_state_and_collider() {
        let mut source = bot();
        let instance = source.instantiate();
        assert_eq!(instance.position, source.position);
        assert_eq!(instance.size, source.size);
        assert_eq!(instance.layer(), source.layer());
        assert_eq!(instance.collider(), source.collider());
        assert_eq!(instance.clones_instantiated(), 0);
    }

    #[test]
    fn test_instance_collider_is_independent() {
        let mut source = bot();
        let mut instance = source.instantiate();
        instance.collider_mut().unwrap().offset.x = 50.0;
        assert_eq!(source.collider().unwrap().offset, Vec2::new(1.0, 1.0));
        assert_eq!(instance.collider().unwrap().offset, Vec2::new(50.0, 1.0));
    }

    #[test]
    fn test_resized_collider_reports_new_shape() {
        let mut e = Entity::new("e", Vec2::ZERO, Vec2::ONE, 0.0).unwrap();
        e.add_circle_collider(ColliderType::Solid, Vec2::ZERO, 6.0);
        e.collider_mut().unwrap().extent = Vec2::splat(20.0);
        assert_eq!(
            e.collider().unwrap().shape(),
            ColliderShape::Circle { radius: 10.0 }
        );
    }

    #[test]
    fn test_instance_without_collider() {
        let mut source = Entity::new("ghost", Vec2::ZERO, Vec2::ONE, 0.0).unwrap();
        let instance = source.instantiate();
        assert!(!instance.has_collider());
    }

    #[test]
    fn test_instances_of_instances() {
        let mut source = bot();
        let mut first = source.instantiate();
        let nested = first.instantiate();
        assert_eq!(nested.name(), "bot-1-1");
        assert_eq!(nested.instance_id(), 1);
        assert_eq!(source.clones_instantiated(), 1);
    }

    #[test]
    fn test_position_setters() {
        let mut e = Entity::new("e", Vec2::ZERO, Vec2::ONE, 0.0).unwrap();
        e.set_position_x(3.0);
        e.set_position_y(-2.0);
        e.translate(Vec2::new(1.0, 1.0));
        assert_eq!(e.position, Vec2::new(4.0, -1.0));
    }
}
