use tuio_serde::{OscMessage, OscType};

use crate::{
    constants::{
        TUIO11_ALIVE, TUIO11_BLOB_ADDRESS, TUIO11_CURSOR_ADDRESS, TUIO11_FSEQ,
        TUIO11_OBJECT_ADDRESS, TUIO11_SET, TUIO11_SOURCE,
    },
    protocol::{
        arg_reader::{check_address, check_layout, ArgReader},
        error::ProtocolViolation,
        TuioRecord,
    },
    types::{FrameId, SessionId, SymbolId},
};

/// The command carried as the first argument of every TUIO 1.1 profile message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tuio11Command {
    Set,
    Alive(Vec<SessionId>),
    Fseq(FrameId),
    Source(String),
    Unknown(String),
}

impl Tuio11Command {
    pub fn read(message: &OscMessage) -> Result<Self, ProtocolViolation> {
        let command = read_command(message)?;
        let mut reader = ArgReader::starting_at(message, 1);
        Ok(match command {
            TUIO11_SET => Self::Set,
            TUIO11_ALIVE => Self::Alive(reader.ids("session_id")?),
            TUIO11_FSEQ => Self::Fseq(reader.id("frame_id")?),
            TUIO11_SOURCE => Self::Source(reader.string("source")?.to_owned()),
            other => Self::Unknown(other.to_owned()),
        })
    }

    pub fn to_message(&self, address: &str) -> OscMessage {
        let mut message = OscMessage::new(address, Vec::new());
        match self {
            Self::Set => message.push_arg(TUIO11_SET),
            Self::Alive(ids) => {
                message.push_arg(TUIO11_ALIVE);
                for id in ids {
                    message.push_arg(*id as i32);
                }
            }
            Self::Fseq(frame_id) => {
                message.push_arg(TUIO11_FSEQ);
                message.push_arg(*frame_id as i32);
            }
            Self::Source(source) => {
                message.push_arg(TUIO11_SOURCE);
                message.push_arg(source.as_str());
            }
            Self::Unknown(command) => message.push_arg(command.as_str()),
        }
        message
    }
}

fn read_command(message: &OscMessage) -> Result<&str, ProtocolViolation> {
    message
        .arg(0)
        .and_then(OscType::string)
        .ok_or_else(|| ProtocolViolation::MissingCommand {
            address: message.address().to_owned(),
        })
}

fn read_set(message: &OscMessage, address: &'static str) -> Result<(), ProtocolViolation> {
    check_address(message, address)?;
    let command = read_command(message)?;
    if command != TUIO11_SET {
        return Err(ProtocolViolation::UnexpectedCommand {
            address: message.address().to_owned(),
            expected: TUIO11_SET,
            found: command.to_owned(),
        });
    }
    Ok(())
}

/// `/tuio/2Dcur set s x y [X Y m]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorSet {
    pub session_id: SessionId,
    pub x: f32,
    pub y: f32,
    pub x_speed: f32,
    pub y_speed: f32,
    pub motion_accel: f32,
}

impl TuioRecord for CursorSet {
    const ADDRESS: &'static str = TUIO11_CURSOR_ADDRESS;

    fn read(message: &OscMessage) -> Result<Self, ProtocolViolation> {
        read_set(message, Self::ADDRESS)?;
        let kinematic = check_layout(message, 1, 3, 3, "3 or 6 fields after \"set\"")?;
        let mut reader = ArgReader::starting_at(message, 1);
        let mut record = Self {
            session_id: reader.id("session_id")?,
            x: reader.float("x")?,
            y: reader.float("y")?,
            ..Self::default()
        };
        if kinematic {
            record.x_speed = reader.float("x_speed")?;
            record.y_speed = reader.float("y_speed")?;
            record.motion_accel = reader.float("motion_accel")?;
        }
        Ok(record)
    }

    fn to_message(&self) -> OscMessage {
        OscMessage::new(
            Self::ADDRESS,
            vec![
                TUIO11_SET.into(),
                OscType::Int(self.session_id as i32),
                self.x.into(),
                self.y.into(),
                self.x_speed.into(),
                self.y_speed.into(),
                self.motion_accel.into(),
            ],
        )
    }

    fn session_id(&self) -> SessionId {
        self.session_id
    }
}

/// `/tuio/2Dobj set s i x y a [X Y A m r]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObjectSet {
    pub session_id: SessionId,
    pub symbol_id: SymbolId,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub x_speed: f32,
    pub y_speed: f32,
    pub rotation_speed: f32,
    pub motion_accel: f32,
    pub rotation_accel: f32,
}

impl TuioRecord for ObjectSet {
    const ADDRESS: &'static str = TUIO11_OBJECT_ADDRESS;

    fn read(message: &OscMessage) -> Result<Self, ProtocolViolation> {
        read_set(message, Self::ADDRESS)?;
        let kinematic = check_layout(message, 1, 5, 5, "5 or 10 fields after \"set\"")?;
        let mut reader = ArgReader::starting_at(message, 1);
        let mut record = Self {
            session_id: reader.id("session_id")?,
            symbol_id: reader.id("symbol_id")?,
            x: reader.float("x")?,
            y: reader.float("y")?,
            angle: reader.float("angle")?,
            ..Self::default()
        };
        if kinematic {
            record.x_speed = reader.float("x_speed")?;
            record.y_speed = reader.float("y_speed")?;
            record.rotation_speed = reader.float("rotation_speed")?;
            record.motion_accel = reader.float("motion_accel")?;
            record.rotation_accel = reader.float("rotation_accel")?;
        }
        Ok(record)
    }

    fn to_message(&self) -> OscMessage {
        OscMessage::new(
            Self::ADDRESS,
            vec![
                TUIO11_SET.into(),
                OscType::Int(self.session_id as i32),
                OscType::Int(self.symbol_id as i32),
                self.x.into(),
                self.y.into(),
                self.angle.into(),
                self.x_speed.into(),
                self.y_speed.into(),
                self.rotation_speed.into(),
                self.motion_accel.into(),
                self.rotation_accel.into(),
            ],
        )
    }

    fn session_id(&self) -> SessionId {
        self.session_id
    }
}

/// `/tuio/2Dblb set s x y a w h f [X Y A m r]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlobSet {
    pub session_id: SessionId,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub width: f32,
    pub height: f32,
    pub area: f32,
    pub x_speed: f32,
    pub y_speed: f32,
    pub rotation_speed: f32,
    pub motion_accel: f32,
    pub rotation_accel: f32,
}

impl TuioRecord for BlobSet {
    const ADDRESS: &'static str = TUIO11_BLOB_ADDRESS;

    fn read(message: &OscMessage) -> Result<Self, ProtocolViolation> {
        read_set(message, Self::ADDRESS)?;
        let kinematic = check_layout(message, 1, 7, 5, "7 or 12 fields after \"set\"")?;
        let mut reader = ArgReader::starting_at(message, 1);
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
            record.x_speed = reader.float("x_speed")?;
            record.y_speed = reader.float("y_speed")?;
            record.rotation_speed = reader.float("rotation_speed")?;
            record.motion_accel = reader.float("motion_accel")?;
            record.rotation_accel = reader.float("rotation_accel")?;
        }
        Ok(record)
    }

    fn to_message(&self) -> OscMessage {
        OscMessage::new(
            Self::ADDRESS,
            vec![
                TUIO11_SET.into(),
                OscType::Int(self.session_id as i32),
                self.x.into(),
                self.y.into(),
                self.angle.into(),
                self.width.into(),
                self.height.into(),
                self.area.into(),
                self.x_speed.into(),
                self.y_speed.into(),
                self.rotation_speed.into(),
                self.motion_accel.into(),
                self.rotation_accel.into(),
            ],
        )
    }

    fn session_id(&self) -> SessionId {
        self.session_id
    }
}
