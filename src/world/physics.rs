use glam::Vec2;

use super::body::Shape;
use super::composite::World;

/// Downward gravity in px/s^2.
pub const GRAVITY: f32 = 980.0;

const POSITION_SLOP: f32 = 0.5;
const POSITION_CORRECTION: f32 = 0.4;
// Resting contacts leave a residual speed of about gravity * dt per step,
// so the sleep threshold sits above that and the wake threshold well above.
const SLEEP_SPEED: f32 = 6.0;
const SLEEP_DELAY: f32 = 0.8;
const WAKE_SPEED: f32 = 30.0;
const ANGULAR_DAMPING: f32 = 0.98;

#[derive(Debug, Clone, Copy)]
struct Contact {
    /// Unit normal pointing from body A toward body B.
    normal: Vec2,
    depth: f32,
    point: Vec2,
}

/// Fixed-step impulse solver over the world's body arena.
///
/// Rectangles collide as axis-aligned boxes; rotation is driven by contact
/// torque and is visual, which is all the falling-poster board needs.
#[derive(Debug, Clone)]
pub struct Physics {
    pub gravity: Vec2,
    pub timescale: f32,
}

impl Physics {
    pub fn new(timescale: f32) -> Self {
        Self {
            gravity: Vec2::new(0.0, GRAVITY),
            timescale,
        }
    }

    pub fn step(&self, world: &mut World, dt: f32) {
        let dt = dt * self.timescale;
        if dt <= 0.0 {
            return;
        }

        self.integrate(world, dt);
        self.resolve_contacts(world);
        self.update_sleep(world, dt);
    }

    fn integrate(&self, world: &mut World, dt: f32) {
        for id in world.all_ids() {
            let Some(body) = world.body_mut(id) else { continue };
            if body.is_static || body.sleeping {
                body.force = Vec2::ZERO;
                continue;
            }
            let accel = self.gravity + body.force * body.inv_mass;
            body.velocity += accel * dt;
            body.velocity /= 1.0 + body.friction_air;
            body.position += body.velocity * dt;
            body.angle += body.angular_velocity * dt;
            body.angular_velocity *= ANGULAR_DAMPING;
            body.force = Vec2::ZERO;
        }
    }

    fn resolve_contacts(&self, world: &mut World) {
        let ids = world.all_ids();
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                let contact = {
                    let (Some(a), Some(b)) = (world.body(ids[i]), world.body(ids[j]))
                    else {
                        continue;
                    };
                    if a.is_static && b.is_static {
                        continue;
                    }
                    if !a.filter.collides_with(&b.filter) {
                        continue;
                    }
                    collide(a, b)
                };
                if let Some(contact) = contact {
                    resolve(world, ids[i], ids[j], contact);
                }
            }
        }
    }

    fn update_sleep(&self, world: &mut World, dt: f32) {
        for id in world.all_ids() {
            let Some(body) = world.body_mut(id) else { continue };
            if body.is_static || body.sleeping {
                continue;
            }
            let motion = body.velocity.length() + body.angular_velocity.abs() * 10.0;
            if motion < SLEEP_SPEED {
                body.sleep_timer += dt;
                if body.sleep_timer > SLEEP_DELAY {
                    body.sleeping = true;
                    body.velocity = Vec2::ZERO;
                    body.angular_velocity = 0.0;
                }
            } else {
                body.sleep_timer = 0.0;
            }
        }
    }
}

fn collide(a: &super::body::Body, b: &super::body::Body) -> Option<Contact> {
    match (a.shape, b.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            let delta = b.position - a.position;
            let dist = delta.length();
            let reach = ra + rb;
            if dist >= reach {
                return None;
            }
            let normal = if dist > f32::EPSILON {
                delta / dist
            } else {
                Vec2::X
            };
            Some(Contact {
                normal,
                depth: reach - dist,
                point: a.position + normal * (ra - (reach - dist) / 2.0),
            })
        }
        (Shape::Rect { half: ha }, Shape::Rect { half: hb }) => {
            let delta = b.position - a.position;
            let overlap_x = ha.x + hb.x - delta.x.abs();
            let overlap_y = ha.y + hb.y - delta.y.abs();
            if overlap_x <= 0.0 || overlap_y <= 0.0 {
                return None;
            }
            let (normal, depth) = if overlap_x < overlap_y {
                (Vec2::new(delta.x.signum(), 0.0), overlap_x)
            } else {
                (Vec2::new(0.0, delta.y.signum()), overlap_y)
            };
            let point = Vec2::new(
                b.position.x.clamp(a.position.x - ha.x, a.position.x + ha.x),
                b.position.y.clamp(a.position.y - ha.y, a.position.y + ha.y),
            );
            Some(Contact {
                normal,
                depth,
                point,
            })
        }
        (Shape::Rect { half }, Shape::Circle { radius }) => {
            rect_circle(a.position, half, b.position, radius)
        }
        (Shape::Circle { radius }, Shape::Rect { half }) => {
            rect_circle(b.position, half, a.position, radius).map(|c| Contact {
                normal: -c.normal,
                ..c
            })
        }
    }
}

/// Contact with the normal pointing from the rectangle toward the circle.
fn rect_circle(rect_pos: Vec2, half: Vec2, center: Vec2, radius: f32) -> Option<Contact> {
    let closest = Vec2::new(
        center.x.clamp(rect_pos.x - half.x, rect_pos.x + half.x),
        center.y.clamp(rect_pos.y - half.y, rect_pos.y + half.y),
    );
    let delta = center - closest;
    let dist_sq = delta.length_squared();
    if dist_sq >= radius * radius {
        return None;
    }
    if dist_sq > f32::EPSILON {
        let dist = dist_sq.sqrt();
        Some(Contact {
            normal: delta / dist,
            depth: radius - dist,
            point: closest,
        })
    } else {
        // Center inside the rectangle: push out along the shallow axis
        let offset = center - rect_pos;
        let pen_x = half.x - offset.x.abs();
        let pen_y = half.y - offset.y.abs();
        let normal = if pen_x < pen_y {
            Vec2::new(offset.x.signum(), 0.0)
        } else {
            Vec2::new(0.0, offset.y.signum())
        };
        Some(Contact {
            normal,
            depth: radius + pen_x.min(pen_y),
            point: center,
        })
    }
}

fn resolve(world: &mut World, ia: super::body::BodyId, ib: super::body::BodyId, contact: Contact) {
    let (Some(a0), Some(b0)) = (world.body(ia), world.body(ib)) else {
        return;
    };
    let mut a = a0.clone();
    let mut b = b0.clone();

    let rel = b.velocity - a.velocity;
    let approach = -rel.dot(contact.normal);
    if approach > WAKE_SPEED {
        a.wake();
        b.wake();
    }

    // Sleeping bodies stay frozen through gentle contacts
    let inv_mass_a = if a.sleeping { 0.0 } else { a.inv_mass };
    let inv_mass_b = if b.sleeping { 0.0 } else { b.inv_mass };
    let inv_sum = inv_mass_a + inv_mass_b;
    if inv_sum <= 0.0 {
        return;
    }

    // Positional correction
    let push = (contact.depth - POSITION_SLOP).max(0.0) * POSITION_CORRECTION / inv_sum;
    a.position -= contact.normal * push * inv_mass_a;
    b.position += contact.normal * push * inv_mass_b;

    // Normal impulse
    let vn = rel.dot(contact.normal);
    if vn < 0.0 {
        let restitution = a.restitution.min(b.restitution);
        let jn = -(1.0 + restitution) * vn / inv_sum;
        let impulse = contact.normal * jn;
        a.velocity -= impulse * inv_mass_a;
        b.velocity += impulse * inv_mass_b;

        // Friction impulse, clamped by the normal impulse
        let tangent = rel - contact.normal * vn;
        let tangent_len = tangent.length();
        if tangent_len > f32::EPSILON {
            let tangent = tangent / tangent_len;
            let mu = (a.friction * b.friction).sqrt();
            let jt = (-rel.dot(tangent) / inv_sum).clamp(-jn * mu, jn * mu);
            let friction_impulse = tangent * jt;
            a.velocity -= friction_impulse * inv_mass_a;
            b.velocity += friction_impulse * inv_mass_b;

            // Off-center contacts induce spin
            let total = impulse + friction_impulse;
            if !a.sleeping && !a.is_static {
                let lever = contact.point - a.position;
                a.angular_velocity -= lever.perp_dot(total) * a.inv_inertia;
            }
            if !b.sleeping && !b.is_static {
                let lever = contact.point - b.position;
                b.angular_velocity += lever.perp_dot(total) * b.inv_inertia;
            }
        }
    }

    if let Some(slot) = world.body_mut(ia) {
        *slot = a;
    }
    if let Some(slot) = world.body_mut(ib) {
        *slot = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::body::{Body, BodyKind, Category};
    use crate::world::composite::Group;

    const DT: f32 = 1.0 / 60.0;

    fn world_with_ground(width: f32, height: f32) -> World {
        let mut world = World::new();
        world.add(
            Group::Boundaries,
            Body::rectangle(BodyKind::Boundary, width / 2.0, height, width, 20.0)
                .with_static(true)
                .with_filter(Category::GROUND, Category::COLLIDE_ALL),
        );
        world
    }

    #[test]
    fn dynamic_bodies_fall_under_gravity() {
        let mut world = World::new();
        let id = world.add(
            Group::Results,
            Body::rectangle(BodyKind::ResultItem, 0.0, 0.0, 10.0, 10.0),
        );
        let physics = Physics::new(1.0);
        for _ in 0..10 {
            physics.step(&mut world, DT);
        }
        assert!(world.body(id).unwrap().position.y > 0.0);
    }

    #[test]
    fn static_bodies_never_move() {
        let mut world = world_with_ground(800.0, 500.0);
        let id = world.ids_in(Group::Boundaries)[0];
        let before = world.body(id).unwrap().position;
        let physics = Physics::new(1.0);
        for _ in 0..60 {
            physics.step(&mut world, DT);
        }
        assert_eq!(world.body(id).unwrap().position, before);
    }

    #[test]
    fn body_lands_on_ground() {
        let mut world = world_with_ground(800.0, 500.0);
        let id = world.add(
            Group::Results,
            Body::rectangle(BodyKind::ResultItem, 400.0, 300.0, 40.0, 40.0),
        );
        let physics = Physics::new(1.0);
        for _ in 0..600 {
            physics.step(&mut world, DT);
        }
        let body = world.body(id).unwrap();
        // Resting on the slab top (height - 10 - 20)
        assert!(body.position.y < 500.0, "fell through: {}", body.position.y);
        assert!(body.position.y > 400.0, "never fell: {}", body.position.y);
    }

    #[test]
    fn zero_mask_falls_through_ground() {
        let mut world = world_with_ground(800.0, 500.0);
        let id = world.add(
            Group::Results,
            Body::rectangle(BodyKind::ResultItem, 400.0, 300.0, 40.0, 40.0)
                .with_filter(Category::RESULT_ITEM, Category::empty()),
        );
        let physics = Physics::new(1.0);
        for _ in 0..600 {
            physics.step(&mut world, DT);
        }
        assert!(world.body(id).unwrap().position.y > 1000.0);
    }

    #[test]
    fn destructor_passes_boundary_but_hits_items() {
        let mut world = world_with_ground(800.0, 500.0);
        // Resting item just above the slab
        let item = world.add(
            Group::Results,
            Body::rectangle(BodyKind::ResultItem, 400.0, 460.0, 40.0, 40.0),
        );
        let ball = world.add(
            Group::Loose,
            Body::circle(BodyKind::Destructor, 400.0, 700.0, 100.0)
                .with_friction(0.0)
                .with_friction_air(0.0)
                .with_filter(Category::DESTRUCTOR, Category::RESULT_ITEM),
        );
        world.body_mut(ball).unwrap().apply_impulse(Vec2::new(0.0, -1500.0));

        let physics = Physics::new(1.0);
        for _ in 0..120 {
            physics.step(&mut world, DT);
        }
        // Ball went up through the slab and knocked the item away
        let item_body = world.body(item).unwrap();
        assert!(item_body.velocity.length() > 1.0 || item_body.position.y < 400.0);
    }

    #[test]
    fn settled_body_falls_asleep() {
        let mut world = world_with_ground(800.0, 500.0);
        let id = world.add(
            Group::Results,
            Body::rectangle(BodyKind::ResultItem, 400.0, 470.0, 40.0, 40.0),
        );
        let physics = Physics::new(1.0);
        for _ in 0..600 {
            physics.step(&mut world, DT);
        }
        assert!(world.body(id).unwrap().sleeping);
    }

    #[test]
    fn impulse_wakes_sleeping_body() {
        let mut world = World::new();
        let id = world.add(
            Group::Results,
            Body::rectangle(BodyKind::ResultItem, 0.0, 0.0, 10.0, 10.0),
        );
        let body = world.body_mut(id).unwrap();
        body.sleeping = true;
        body.apply_impulse(Vec2::new(50.0, 0.0));
        assert!(!body.sleeping);
    }
}
