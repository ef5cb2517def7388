use tuio_shared::{elapsed_seconds, Motion, Path, Point, Rate, SessionId, TimeValue, TuioState};

/// Position, orientation and motion state shared by every TUIO 2.0 component
///
/// A component refers to the object that carries it by session id only;
/// look the object up through the client when it is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    session_id: SessionId,
    start_time: TimeValue,
    current_time: TimeValue,
    x: f32,
    y: f32,
    angle: f32,
    motion: Motion,
    rotation: Rate,
    state: TuioState,
    path: Path,
}

impl Component {
    pub(crate) fn new(
        time: TimeValue,
        session_id: SessionId,
        (x, y, angle): (f32, f32, f32),
        motion: Motion,
        rotation: Rate,
        max_path_length: usize,
    ) -> Self {
        Self {
            session_id,
            start_time: time,
            current_time: time,
            x,
            y,
            angle,
            motion,
            rotation,
            state: TuioState::Added,
            path: Path::with_capacity(Point::new(time, x, y), max_path_length),
        }
    }

    /// Session id of the object carrying this component
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn start_time(&self) -> TimeValue {
        self.start_time
    }

    pub fn current_time(&self) -> TimeValue {
        self.current_time
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn position(&self) -> Point {
        Point::new(self.current_time, self.x, self.y)
    }

    /// Radians
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angle_degrees(&self) -> f32 {
        self.angle.to_degrees()
    }

    pub fn x_velocity(&self) -> f32 {
        self.motion.x_speed
    }

    pub fn y_velocity(&self) -> f32 {
        self.motion.y_speed
    }

    pub fn motion_speed(&self) -> f32 {
        self.motion.motion_speed
    }

    pub fn motion_accel(&self) -> f32 {
        self.motion.motion_accel
    }

    pub fn angular_velocity(&self) -> f32 {
        self.rotation.speed
    }

    pub fn rotation_accel(&self) -> f32 {
        self.rotation.accel
    }

    pub fn state(&self) -> TuioState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        matches!(
            self.state,
            TuioState::Accelerating | TuioState::Decelerating | TuioState::Rotating
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Crate-public

    pub(crate) fn elapsed(&self, time: TimeValue) -> f32 {
        elapsed_seconds(&self.path, time)
    }

    pub(crate) fn differs(
        &self,
        (x, y, angle): (f32, f32, f32),
        motion: &Motion,
        rotation: &Rate,
    ) -> bool {
        self.x != x
            || self.y != y
            || self.angle != angle
            || self.motion.x_speed != motion.x_speed
            || self.motion.y_speed != motion.y_speed
            || self.motion.motion_accel != motion.motion_accel
            || self.rotation != *rotation
    }

    pub(crate) fn update(
        &mut self,
        time: TimeValue,
        dt: f32,
        (x, y, angle): (f32, f32, f32),
        motion: Motion,
        rotation: Rate,
    ) {
        self.motion = self.motion.next(dt, (self.x, self.y), (x, y), motion);
        self.rotation = self.rotation.next_angular(dt, self.angle, angle, rotation);
        self.x = x;
        self.y = y;
        self.angle = angle;
        self.current_time = time;
        self.path.push(Point::new(time, x, y));
        self.state = TuioState::classify_tuio20(self.motion.motion_accel, self.rotation.accel);
    }

    pub(crate) fn remove(&mut self, time: TimeValue) {
        self.current_time = time;
        self.state = TuioState::Removed;
    }
}
