//! Overlap tests between entity colliders
//!
//! Three shape pairs are handled: box/box, circle/circle and box/circle (in
//! either order). Touching is never a collision: every test uses strict
//! inequalities, so shapes that only meet on an edge or a point stay apart.
//!
//! Circles are centred on `position + offset` with radius `min(extent) / 2`.
//! Boxes start at `position + offset` and span `extent`.

use glam::Vec2;

use super::aabb::Aabb;
use super::collider::Collider;
use super::entity::Entity;
use crate::normalized;

/// Overlap information for a colliding pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit direction that moves the first shape out of the second
    pub normal: Vec2,
    /// Distance to move along `normal` to stop overlapping
    pub penetration: f32,
}

impl Contact {
    /// Vector that separates the first shape from the second
    #[inline]
    pub fn separation(&self) -> Vec2 {
        self.normal * self.penetration
    }
}

/// Check whether two entities overlap
///
/// Entities without a collider never collide.
pub fn is_colliding(a: &Entity, b: &Entity) -> bool {
    match (a.collider(), b.collider()) {
        (Some(ca), Some(cb)) => colliders_overlap(a.position, ca, b.position, cb),
        _ => {
            log::trace!(
                "Collision query '{}' vs '{}' skipped: missing collider",
                a.name(),
                b.name()
            );
            false
        }
    }
}

/// Overlap vector for two entities, `None` exactly when they don't collide
pub fn contact(a: &Entity, b: &Entity) -> Option<Contact> {
    let (ca, cb) = (a.collider()?, b.collider()?);
    collider_contact(a.position, ca, b.position, cb)
}

/// Overlap test for two colliders placed at the given entity positions
pub fn colliders_overlap(pos_a: Vec2, a: &Collider, pos_b: Vec2, b: &Collider) -> bool {
    match (a.kind().is_box(), b.kind().is_box()) {
        (true, true) => box_box_overlap(&a.world_bounds(pos_a), &b.world_bounds(pos_b)),
        (false, false) => circle_circle_overlap(
            a.world_origin(pos_a),
            a.radius(),
            b.world_origin(pos_b),
            b.radius(),
        ),
        (true, false) => {
            box_circle_overlap(&a.world_bounds(pos_a), b.world_origin(pos_b), b.radius())
        }
        (false, true) => {
            box_circle_overlap(&b.world_bounds(pos_b), a.world_origin(pos_a), a.radius())
        }
    }
}

/// Box/box test with open-interval semantics
#[inline]
pub fn box_box_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// Circle/circle test with a bounding-box early out
pub fn circle_circle_overlap(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    let bounds_a = Aabb::around_circle(center_a, radius_a);
    let bounds_b = Aabb::around_circle(center_b, radius_b);
    if !bounds_a.overlaps(&bounds_b) {
        return false;
    }

    (center_a - center_b).length() < radius_a + radius_b
}

/// Box/circle test: distance from the circle centre to the closest point of
/// the box must be strictly less than the radius
pub fn box_circle_overlap(rect: &Aabb, center: Vec2, radius: f32) -> bool {
    if !Aabb::around_circle(center, radius).overlaps(rect) {
        return false;
    }

    let closest = rect.closest_point(center);
    (center - closest).length() < radius
}

/// Contact for two colliders placed at the given entity positions
pub fn collider_contact(pos_a: Vec2, a: &Collider, pos_b: Vec2, b: &Collider) -> Option<Contact> {
    if !colliders_overlap(pos_a, a, pos_b, b) {
        return None;
    }

    let contact = match (a.kind().is_box(), b.kind().is_box()) {
        (true, true) => box_box_contact(&a.world_bounds(pos_a), &b.world_bounds(pos_b)),
        (false, false) => circle_circle_contact(
            a.world_origin(pos_a),
            a.radius(),
            b.world_origin(pos_b),
            b.radius(),
        ),
        (false, true) => {
            circle_box_contact(a.world_origin(pos_a), a.radius(), &b.world_bounds(pos_b))
        }
        (true, false) => {
            // Push the box away from the circle: opposite of the circle's normal
            let c = circle_box_contact(b.world_origin(pos_b), b.radius(), &a.world_bounds(pos_a));
            Contact {
                normal: -c.normal,
                penetration: c.penetration,
            }
        }
    };
    Some(contact)
}

/// Minimum-axis separation of two overlapping boxes
fn box_box_contact(a: &Aabb, b: &Aabb) -> Contact {
    let depth = a.overlap_depth(b);
    let delta = a.center() - b.center();

    if depth.x < depth.y {
        let sign = if delta.x < 0.0 { -1.0 } else { 1.0 };
        Contact {
            normal: Vec2::new(sign, 0.0),
            penetration: depth.x,
        }
    } else {
        let sign = if delta.y < 0.0 { -1.0 } else { 1.0 };
        Contact {
            normal: Vec2::new(0.0, sign),
            penetration: depth.y,
        }
    }
}

fn circle_circle_contact(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> Contact {
    let delta = center_a - center_b;
    let distance = delta.length();
    let normal = if distance > 0.0 { normalized(delta) } else { Vec2::X };
    Contact {
        normal,
        penetration: radius_a + radius_b - distance,
    }
}

/// Contact that moves the circle out of the box
fn circle_box_contact(center: Vec2, radius: f32, rect: &Aabb) -> Contact {
    let closest = rect.closest_point(center);
    let delta = center - closest;
    let distance = delta.length();

    if distance > 0.0 {
        return Contact {
            normal: delta / distance,
            penetration: radius - distance,
        };
    }

    // Centre inside the box: leave through the nearest side
    let exits = [
        (center.x - rect.min.x, Vec2::NEG_X),
        (rect.max.x - center.x, Vec2::X),
        (center.y - rect.min.y, Vec2::NEG_Y),
        (rect.max.y - center.y, Vec2::Y),
    ];
    let (gap, normal) = exits
        .into_iter()
        .fold(exits[0], |best, exit| if exit.0 < best.0 { exit } else { best });
    Contact {
        normal,
        penetration: radius + gap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collider::ColliderType;

    fn boxed(name: &str, pos: Vec2, size: Vec2) -> Entity {
        let mut e = Entity::new(name, pos, size, 1.0).unwrap();
        e.add_rectangle_collider(ColliderType::Solid, Vec2::ZERO, size);
        e
    }

    fn ball(name: &str, center: Vec2, radius: f32) -> Entity {
        let mut e = Entity::new(name, center, Vec2::splat(radius * 2.0), 1.0).unwrap();
        e.add_circle_collider(ColliderType::Solid, Vec2::ZERO, radius * 2.0);
        e
    }

    #[test]
    fn test_rect_shared_edge_does_not_collide() {
        let a = boxed("a", Vec2::ZERO, Vec2::splat(10.0));
        let b = boxed("b", Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!is_colliding(&a, &b));
        assert!(!is_colliding(&b, &a));
        assert!(contact(&a, &b).is_none());
    }

    #[test]
    fn test_rect_shared_horizontal_edge_does_not_collide() {
        let a = boxed("a", Vec2::ZERO, Vec2::splat(10.0));
        let b = boxed("b", Vec2::new(0.0, 10.0), Vec2::splat(10.0));
        assert!(!is_colliding(&a, &b));
        assert!(!is_colliding(&b, &a));
        assert!(contact(&a, &b).is_none());
    }

    #[test]
    fn test_rect_corner_touch_does_not_collide() {
        let a = boxed("a", Vec2::ZERO, Vec2::splat(10.0));
        let b = boxed("b", Vec2::splat(10.0), Vec2::splat(10.0));
        assert!(!is_colliding(&a, &b));
        assert!(!is_colliding(&b, &a));
    }

    #[test]
    fn test_circle_touching_rect_corner_does_not_collide() {
        // (13, 14) is exactly 5 away from the corner (10, 10)
        let rect = boxed("rect", Vec2::ZERO, Vec2::splat(10.0));
        let circle = ball("circle", Vec2::new(13.0, 14.0), 5.0);
        assert!(!is_colliding(&rect, &circle));
        assert!(!is_colliding(&circle, &rect));
        assert!(contact(&circle, &rect).is_none());

        let nudged = ball("nudged", Vec2::new(12.9, 14.0), 5.0);
        assert!(is_colliding(&rect, &nudged));
    }

    #[test]
    fn test_rect_partial_overlap_collides() {
        let a = boxed("a", Vec2::ZERO, Vec2::splat(10.0));
        let b = boxed("b", Vec2::splat(5.0), Vec2::splat(10.0));
        assert!(is_colliding(&a, &b));
    }

    #[test]
    fn test_square_collider_uses_offset() {
        let mut a = Entity::new("a", Vec2::ZERO, Vec2::splat(10.0), 1.0).unwrap();
        a.add_square_collider(ColliderType::Solid, Vec2::new(20.0, 0.0), 10.0);
        let b = boxed("b", Vec2::new(25.0, 5.0), Vec2::splat(10.0));
        assert!(is_colliding(&a, &b));

        let c = boxed("c", Vec2::new(5.0, 5.0), Vec2::splat(10.0));
        assert!(!is_colliding(&a, &c));
    }

    #[test]
    fn test_circle_boundary() {
        let a = ball("a", Vec2::ZERO, 5.0);
        let touching = ball("b", Vec2::new(10.0, 0.0), 5.0);
        let close = ball("c", Vec2::new(9.99, 0.0), 5.0);
        assert!(!is_colliding(&a, &touching));
        assert!(is_colliding(&a, &close));
    }

    #[test]
    fn test_circle_uses_smaller_side_for_radius() {
        let mut a = Entity::new("a", Vec2::ZERO, Vec2::ONE, 1.0).unwrap();
        a.add_collision_mask(
            crate::sim::ShapeKind::Circle,
            ColliderType::Solid,
            Vec2::ZERO,
            Vec2::new(20.0, 10.0),
        );
        // radius 5 + 5 = 10 exactly: not colliding
        let b = ball("b", Vec2::new(10.0, 0.0), 5.0);
        assert!(!is_colliding(&a, &b));
        let c = ball("c", Vec2::new(9.0, 0.0), 5.0);
        assert!(is_colliding(&a, &c));
    }

    #[test]
    fn test_rect_circle_corner() {
        let rect = boxed("rect", Vec2::ZERO, Vec2::splat(10.0));
        let near = ball("near", Vec2::new(15.0, 15.0), 7.5);
        let far = ball("far", Vec2::new(15.0, 15.0), 7.0);

        assert!(is_colliding(&rect, &near));
        assert!(is_colliding(&near, &rect));
        assert!(!is_colliding(&rect, &far));
        assert!(!is_colliding(&far, &rect));
    }

    #[test]
    fn test_rect_circle_edge_touch() {
        let rect = boxed("rect", Vec2::ZERO, Vec2::splat(10.0));
        let touching = ball("touch", Vec2::new(15.0, 5.0), 5.0);
        assert!(!is_colliding(&rect, &touching));
    }

    #[test]
    fn test_circle_inside_rect() {
        let rect = boxed("rect", Vec2::ZERO, Vec2::splat(100.0));
        let inner = ball("inner", Vec2::new(50.0, 10.0), 2.0);
        assert!(is_colliding(&rect, &inner));

        let c = contact(&inner, &rect).unwrap();
        // Nearest side is the top (y = 0)
        assert_eq!(c.normal, Vec2::NEG_Y);
        assert!((c.penetration - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_missing_collider_never_collides() {
        let a = Entity::new("plain", Vec2::ZERO, Vec2::splat(10.0), 1.0).unwrap();
        let b = boxed("b", Vec2::ZERO, Vec2::splat(10.0));
        assert!(!is_colliding(&a, &b));
        assert!(!is_colliding(&b, &a));
        assert!(contact(&a, &b).is_none());
    }

    #[test]
    fn test_box_contact_minimum_axis() {
        let a = boxed("a", Vec2::new(8.0, 0.0), Vec2::splat(10.0));
        let b = boxed("b", Vec2::ZERO, Vec2::splat(10.0));
        let c = contact(&a, &b).unwrap();
        assert_eq!(c.normal, Vec2::X);
        assert!((c.penetration - 2.0).abs() < 1e-6);
        assert_eq!(c.separation(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_box_circle_contact_directions_oppose() {
        let rect = boxed("rect", Vec2::ZERO, Vec2::splat(10.0));
        let circle = ball("ball", Vec2::new(13.0, 5.0), 5.0);

        let circle_out = contact(&circle, &rect).unwrap();
        let rect_out = contact(&rect, &circle).unwrap();
        assert_eq!(circle_out.normal, Vec2::X);
        assert_eq!(rect_out.normal, Vec2::NEG_X);
        assert!((circle_out.penetration - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_concentric_circles_contact() {
        let a = ball("a", Vec2::ZERO, 3.0);
        let b = ball("b", Vec2::ZERO, 4.0);
        let c = contact(&a, &b).unwrap();
        assert_eq!(c.normal, Vec2::X);
        assert!((c.penetration - 7.0).abs() < 1e-6);
    }
}
