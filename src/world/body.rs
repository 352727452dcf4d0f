use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Collision category bits.
    ///
    /// Boundaries and result items default to colliding with everything;
    /// destructor bodies collide with result items only, and invalidated
    /// result items get an empty mask so they fall through the floor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Category: u16 {
        const GROUND = 0x0001;
        const WALLS = 0x0010;
        const RESULT_ITEM = 0x0100;
        const DESTRUCTOR = 0x1000;

        const BOUNDARY = Self::GROUND.bits() | Self::WALLS.bits();
        const COLLIDE_ALL = Self::BOUNDARY.bits()
            | Self::RESULT_ITEM.bits()
            | Self::DESTRUCTOR.bits();
    }
}

/// Stable handle to a body in the world arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

/// Closed set of body roles on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Boundary,
    ResultItem,
    Placeholder,
    Destructor,
    NoResults,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle, stored as half extents.
    Rect { half: Vec2 },
    Circle { radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionFilter {
    pub category: Category,
    pub mask: Category,
}

impl CollisionFilter {
    pub fn new(category: Category, mask: Category) -> Self {
        Self { category, mask }
    }

    /// Both masks must accept the other's category for a pair to interact.
    pub fn collides_with(&self, other: &CollisionFilter) -> bool {
        self.mask.intersects(other.category) && other.mask.intersects(self.category)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub kind: BodyKind,
    pub position: Vec2,
    pub angle: f32,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub shape: Shape,
    pub is_static: bool,
    pub friction: f32,
    pub friction_air: f32,
    pub restitution: f32,
    pub filter: CollisionFilter,
    pub sleeping: bool,
    pub(crate) force: Vec2,
    pub(crate) sleep_timer: f32,
    pub(crate) inv_mass: f32,
    pub(crate) inv_inertia: f32,
}

impl Body {
    pub fn rectangle(kind: BodyKind, x: f32, y: f32, width: f32, height: f32) -> Self {
        let mass = 1.0;
        // Thin-plate inertia, normalized to unit mass
        let inertia = mass * (width * width + height * height) / 12.0;
        Self {
            kind,
            position: Vec2::new(x, y),
            angle: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            shape: Shape::Rect {
                half: Vec2::new(width / 2.0, height / 2.0),
            },
            is_static: false,
            friction: 0.1,
            friction_air: 0.01,
            restitution: 0.0,
            filter: CollisionFilter::new(Category::RESULT_ITEM, Category::COLLIDE_ALL),
            sleeping: false,
            force: Vec2::ZERO,
            sleep_timer: 0.0,
            inv_mass: 1.0 / mass,
            inv_inertia: 1.0 / inertia,
        }
    }

    pub fn circle(kind: BodyKind, x: f32, y: f32, radius: f32) -> Self {
        let mass = 1.0;
        let inertia = mass * radius * radius / 2.0;
        Self {
            kind,
            position: Vec2::new(x, y),
            angle: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            shape: Shape::Circle { radius },
            is_static: false,
            friction: 0.1,
            friction_air: 0.01,
            restitution: 0.0,
            filter: CollisionFilter::new(Category::RESULT_ITEM, Category::COLLIDE_ALL),
            sleeping: false,
            force: Vec2::ZERO,
            sleep_timer: 0.0,
            inv_mass: 1.0 / mass,
            inv_inertia: 1.0 / inertia,
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        if is_static {
            self.inv_mass = 0.0;
            self.inv_inertia = 0.0;
        }
        self
    }

    pub fn with_filter(mut self, category: Category, mask: Category) -> Self {
        self.filter = CollisionFilter::new(category, mask);
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_friction_air(mut self, friction_air: f32) -> Self {
        self.friction_air = friction_air;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Accumulate a force for the next step. Wakes the body.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
        self.wake();
    }

    /// Immediate mass-normalized velocity change. Wakes the body.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inv_mass;
        self.wake();
    }

    pub fn wake(&mut self) {
        self.sleeping = false;
        self.sleep_timer = 0.0;
    }

    /// Axis-aligned bounds; rect rotation is visual only.
    pub fn aabb(&self) -> (Vec2, Vec2) {
        let half = match self.shape {
            Shape::Rect { half } => half,
            Shape::Circle { radius } => Vec2::splat(radius),
        };
        (self.position - half, self.position + half)
    }
}
