use tuio_shared::{elapsed_seconds, Motion, Path, Point, SessionId, TimeValue, TuioState};

/// Session, position and motion state shared by every TUIO 1.1 entity
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    session_id: SessionId,
    start_time: TimeValue,
    current_time: TimeValue,
    x: f32,
    y: f32,
    motion: Motion,
    state: TuioState,
    path: Path,
}

impl Container {
    pub(crate) fn new(
        time: TimeValue,
        session_id: SessionId,
        x: f32,
        y: f32,
        motion: Motion,
        max_path_length: usize,
    ) -> Self {
        Self {
            session_id,
            start_time: time,
            current_time: time,
            x,
            y,
            motion,
            state: TuioState::Added,
            path: Path::with_capacity(Point::new(time, x, y), max_path_length),
        }
    }

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

    pub fn x_speed(&self) -> f32 {
        self.motion.x_speed
    }

    pub fn y_speed(&self) -> f32 {
        self.motion.y_speed
    }

    pub fn motion_speed(&self) -> f32 {
        self.motion.motion_speed
    }

    pub fn motion_accel(&self) -> f32 {
        self.motion.motion_accel
    }

    pub fn state(&self) -> TuioState {
        self.state
    }

    /// Accelerating, decelerating or rotating
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

    /// Seconds since the newest path sample
    pub(crate) fn elapsed(&self, time: TimeValue) -> f32 {
        elapsed_seconds(&self.path, time)
    }

    pub(crate) fn differs(&self, x: f32, y: f32, explicit: &Motion) -> bool {
        self.x != x
            || self.y != y
            || self.motion.x_speed != explicit.x_speed
            || self.motion.y_speed != explicit.y_speed
            || self.motion.motion_accel != explicit.motion_accel
    }

    /// Moves to `(x, y)` and reclassifies the motion state. `rotation_accel`
    /// is zero for entities without an angle.
    pub(crate) fn move_to(
        &mut self,
        time: TimeValue,
        dt: f32,
        x: f32,
        y: f32,
        explicit: Motion,
        rotation_accel: f32,
    ) {
        self.motion = self.motion.next(dt, (self.x, self.y), (x, y), explicit);
        self.x = x;
        self.y = y;
        self.current_time = time;
        self.path.push(Point::new(time, x, y));
        self.state = TuioState::classify_tuio11(self.state, self.motion.motion_accel, rotation_accel);
    }

    pub(crate) fn remove(&mut self, time: TimeValue) {
        self.current_time = time;
        self.state = TuioState::Removed;
    }
}
