use tuio_serde::{OscMessage, OscTime, OscType};

use crate::{
    constants::{
        TUIO20_ALIVE_ADDRESS, TUIO20_BOUNDS_ADDRESS, TUIO20_FRAME_ADDRESS,
        TUIO20_POINTER_ADDRESS, TUIO20_SYMBOL_ADDRESS, TUIO20_TOKEN_ADDRESS,
    },
    protocol::{
        arg_reader::{check_address, check_layout, ArgReader},
        error::ProtocolViolation,
        TuioRecord,
    },
    types::{FrameId, SessionId},
};

/// `/tuio2/frm f_id time [dim source]`
///
/// The sensor dimension travels packed into one int32, width in the high
/// 16 bits and height in the low 16 bits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameRecord {
    pub frame_id: FrameId,
    pub time: OscTime,
    pub dimension: (u16, u16),
    pub source: String,
}

impl FrameRecord {
    pub const ADDRESS: &'static str = TUIO20_FRAME_ADDRESS;

    pub fn read(message: &OscMessage) -> Result<Self, ProtocolViolation> {
        check_address(message, Self::ADDRESS)?;
        let described = check_layout(message, 0, 2, 2, "2 or 4 arguments")?;
        let mut reader = ArgReader::new(message);
        let mut record = Self {
            frame_id: reader.id("frame_id")?,
            time: reader.time("time")?,
            ..Self::default()
        };
        if described {
            record.dimension = unpack_dimension(reader.id("dimension")?);
            record.source = reader.string("source")?.to_owned();
        }
        Ok(record)
    }

    pub fn to_message(&self) -> OscMessage {
        OscMessage::new(
            Self::ADDRESS,
            vec![
                OscType::Int(self.frame_id as i32),
                self.time.into(),
                OscType::Int(pack_dimension(self.dimension) as i32),
                self.source.as_str().into(),
            ],
        )
    }
}

pub fn pack_dimension((width, height): (u16, u16)) -> u32 {
    (u32::from(width) << 16) | u32::from(height)
}

pub fn unpack_dimension(packed: u32) -> (u16, u16) {
    ((packed >> 16) as u16, (packed & 0xFFFF) as u16)
}

/// `/tuio2/alv s*`, the sessions alive at the end of a frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliveRecord(pub Vec<SessionId>);

impl AliveRecord {
    pub const ADDRESS: &'static str = TUIO20_ALIVE_ADDRESS;

    pub fn read(message: &OscMessage) -> Result<Self, ProtocolViolation> {
        check_address(message, Self::ADDRESS)?;
        ArgReader::new(message).ids("session_id").map(Self)
    }

    pub fn to_message(&self) -> OscMessage {
        OscMessage::new(
            Self::ADDRESS,
            self.0.iter().map(|id| OscType::Int(*id as i32)).collect(),
        )
    }

    pub fn session_ids(&self) -> &[SessionId] {
        &self.0
    }
}

/// `/tuio2/tok s tu c x y a [X Y A m r]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TokenRecord {
    pub session_id: SessionId,
    pub type_user_id: u32,
    pub component_id: u32,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub x_velocity: f32,
    pub y_velocity: f32,
    pub angular_velocity: f32,
    pub motion_accel: f32,
    pub rotation_accel: f32,
}

impl TuioRecord for TokenRecord {
    const ADDRESS: &'static str = TUIO20_TOKEN_ADDRESS;

    fn read(message: &OscMessage) -> Result<Self, ProtocolViolation> {
        check_address(message, Self::ADDRESS)?;
        let kinematic = check_layout(message, 0, 6, 5, "6 or 11 arguments")?;
        let mut reader = ArgReader::new(message);
        let mut record = Self {
            session_id: reader.id("session_id")?,
            type_user_id: reader.id("type_user_id")?,
            component_id: reader.id("component_id")?,
            x: reader.float("x")?,
            y: reader.float("y")?,
            angle: reader.float("angle")?,
            ..Self::default()
        };
        if kinematic {
            record.x_velocity = reader.float("x_velocity")?;
            record.y_velocity = reader.float("y_velocity")?;
            record.angular_velocity = reader.float("angular_velocity")?;
            record.motion_accel = reader.float("motion_accel")?;
            record.rotation_accel = reader.float("rotation_accel")?;
        }
        Ok(record)
    }

    fn to_message(&self) -> OscMessage {
        OscMessage::new(
            Self::ADDRESS,
            vec![
                OscType::Int(self.session_id as i32),
                OscType::Int(self.type_user_id as i32),
                OscType::Int(self.component_id as i32),
                self.x.into(),
                self.y.into(),
                self.angle.into(),
                self.x_velocity.into(),
                self.y_velocity.into(),
                self.angular_velocity.into(),
                self.motion_accel.into(),
                self.rotation_accel.into(),
            ],
        )
    }

    fn session_id(&self) -> SessionId {
        self.session_id
    }
}

/// `/tuio2/ptr s tu c x y a shear radius press [X Y P m p]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerRecord {
    pub session_id: SessionId,
    pub type_user_id: u32,
    pub component_id: u32,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub shear: f32,
    pub radius: f32,
    pub pressure: f32,
    pub x_velocity: f32,
    pub y_velocity: f32,
    pub pressure_velocity: f32,
    pub motion_accel: f32,
    pub pressure_accel: f32,
}

impl TuioRecord for PointerRecord {
    const ADDRESS: &'static str = TUIO20_POINTER_ADDRESS;

    fn read(message: &OscMessage) -> Result<Self, ProtocolViolation> {
        check_address(message, Self::ADDRESS)?;
        let kinematic = check_layout(message, 0, 9, 5, "9 or 14 arguments")?;
        let mut reader = ArgReader::new(message);
        let mut record = Self {
            session_id: reader.id("session_id")?,
            type_user_id: reader.id("type_user_id")?,
            component_id: reader.id("component_id")?,
            x: reader.float("x")?,
            y: reader.float("y")?,
            angle: reader.float("angle")?,
            shear: reader.float("shear")?,
            radius: reader.float("radius")?,
            pressure: reader.float("pressure")?,
            ..Self::default()
        };
        if kinematic {
            record.x_velocity = reader.float("x_velocity")?;
            record.y_velocity = reader.float("y_velocity")?;
            record.pressure_velocity = reader.float("pressure_velocity")?;
            record.motion_accel = reader.float("motion_accel")?;
            record.pressure_accel = reader.float("pressure_accel")?;
        }
        Ok(record)
    }

    fn to_message(&self) -> OscMessage {
        OscMessage::new(
            Self::ADDRESS,
            vec![
                OscType::Int(self.session_id as i32),
                OscType::Int(self.type_user_id as i32),
                OscType::Int(self.component_id as i32),
                self.x.into(),
                self.y.into(),
                self.angle.into(),
                self.shear.into(),
                self.radius.into(),
                self.pressure.into(),
                self.x_velocity.into(),
                self.y_velocity.into(),
                self.pressure_velocity.into(),
                self.motion_accel.into(),
                self.pressure_accel.into(),
            ],
        )
    }

    fn session_id(&self) -> SessionId {
        self.session_id
    }
}

/// `/tuio2/bnd s x y a w h f [X Y A m r]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundsRecord {
    pub session_id: SessionId,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub width: f32,
    pub height: f32,
    pub area: f32,
    pub x_velocity: f32,
    pub y_velocity: f32,
    pub angular_velocity: f32,
    pub motion_accel: f32,
    pub rotation_accel: f32,
}

impl TuioRecord for BoundsRecord {
    const ADDRESS: &'static str = TUIO20_BOUNDS_ADDRESS;

    fn read(message: &OscMessage) -> Result<Self, ProtocolViolation> {
        check_address(message, Self::ADDRESS)?;
        let kinematic = check_layout(message, 0, 7, 5, "7 or 12 arguments")?;
        let mut reader = ArgReader::new(message);
        let mut record = Self {
            session_id: reader.id("session_id")?,
            x: reader.float("x")?,
            y: reader.float("y")?,
            angle: reader.float("angle")?,
            width: reader.float("width")?,
            height: reader.float("height")?,
            area: reader.float("area")?,
            ..Self::default()
        };
        if kinematic {
            record.x_velocity = reader.float("x_velocity")?;
            record.y_velocity = reader.float("y_velocity")?;
            record.angular_velocity = reader.float("angular_velocity")?;
            record.motion_accel = reader.float("motion_accel")?;
            record.rotation_accel = reader.float("rotation_accel")?;
        }
        Ok(record)
    }

    fn to_message(&self) -> OscMessage {
        OscMessage::new(
            Self::ADDRESS,
            vec![
                OscType::Int(self.session_id as i32),
                self.x.into(),
                self.y.into(),
                self.angle.into(),
                self.width.into(),
                self.height.into(),
                self.area.into(),
                self.x_velocity.into(),
                self.y_velocity.into(),
                self.angular_velocity.into(),
                self.motion_accel.into(),
                self.rotation_accel.into(),
            ],
        )
    }

    fn session_id(&self) -> SessionId {
        self.session_id
    }
}

/// `/tuio2/sym s tu c group data`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolRecord {
    pub session_id: SessionId,
    pub type_user_id: u32,
    pub component_id: u32,
    pub group: String,
    pub data: String,
}

impl TuioRecord for SymbolRecord {
    const ADDRESS: &'static str = TUIO20_SYMBOL_ADDRESS;

    fn read(message: &OscMessage) -> Result<Self, ProtocolViolation> {
        check_address(message, Self::ADDRESS)?;
        check_layout(message, 0, 5, 0, "5 arguments")?;
        let mut reader = ArgReader::new(message);
        Ok(Self {
            session_id: reader.id("session_id")?,
            type_user_id: reader.id("type_user_id")?,
            component_id: reader.id("component_id")?,
            group: reader.string("group")?.to_owned(),
            data: reader.string("data")?.to_owned(),
        })
    }

    fn to_message(&self) -> OscMessage {
        OscMessage::new(
            Self::ADDRESS,
            vec![
                OscType::Int(self.session_id as i32),
                OscType::Int(self.type_user_id as i32),
                OscType::Int(self.component_id as i32),
                self.group.as_str().into(),
                self.data.as_str().into(),
            ],
        )
    }

    fn session_id(&self) -> SessionId {
        self.session_id
    }
}
