use tuio_shared::{
    AliveRecord, FrameRecord, OscBundle, OscMessage, OscPacket, OscTime, SessionId,
    TimeValue, Tuio11Command, TuioRecord,
};

/// Hand-assembles one TUIO 1.1 profile frame, including malformed or
/// out-of-order ones a well-behaved server would never produce
pub struct Tuio11FrameBuilder {
    address: &'static str,
    messages: Vec<OscMessage>,
}

impl Tuio11FrameBuilder {
    pub fn new(address: &'static str) -> Self {
        Self {
            address,
            messages: Vec::new(),
        }
    }

    pub fn set(mut self, record: impl TuioRecord) -> Self {
        self.messages.push(record.to_message());
        self
    }

    pub fn message(mut self, message: OscMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn alive(mut self, session_ids: &[SessionId]) -> Self {
        self.messages
            .push(Tuio11Command::Alive(session_ids.to_vec()).to_message(self.address));
        self
    }

    /// Closes the frame with `fseq` and packs the messages in the order they
    /// were added
    pub fn fseq(mut self, frame_id: u32) -> Vec<u8> {
        self.messages
            .push(Tuio11Command::Fseq(frame_id).to_message(self.address));
        let elements = self.messages.into_iter().map(OscPacket::from).collect();
        OscBundle::new(OscTime::IMMEDIATELY, elements).pack()
    }
}

/// Hand-assembles one TUIO 2.0 frame
pub struct Tuio20FrameBuilder {
    frame: FrameRecord,
    messages: Vec<OscMessage>,
}

impl Tuio20FrameBuilder {
    pub fn new(frame_id: u32, time: TimeValue) -> Self {
        Self {
            frame: FrameRecord {
                frame_id,
                time: time.to_osc_time(),
                dimension: (640, 480),
                source: String::new(),
            },
            messages: Vec::new(),
        }
    }

    pub fn component(mut self, record: impl TuioRecord) -> Self {
        self.messages.push(record.to_message());
        self
    }

    pub fn alive(self, session_ids: &[SessionId]) -> Vec<u8> {
        let time = self.frame.time;
        let mut elements = vec![OscPacket::from(self.frame.to_message())];
        elements.extend(self.messages.into_iter().map(OscPacket::from));
        elements.push(AliveRecord(session_ids.to_vec()).to_message().into());
        OscBundle::new(time, elements).pack()
    }
}
