// libt4t-rs/libt4t/src/tag/emulator.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::constants::{
    CC_LEN, INS_READ_BINARY, INS_SELECT, INS_UPDATE_BINARY, SELECT_BY_FILE_ID, SELECT_BY_NAME,
    SELECT_FILE_MIN_LEN,
};
use crate::ndef::{NdefMessage, TextRecord};
use crate::protocol::{CommandApdu, ResponseApdu};
use crate::tag::builder::TagBuilder;
use crate::tag::files::read_range;
use crate::tag::reassembly::Progress;
use crate::tag::session::{Session, SessionSnapshot};
use crate::trace::{TraceEvent, TraceSink};
use crate::types::{Aid, DeactivationReason, FileId};
use crate::{Error, Result};

/// Most recent message that completed reassembly and decoded.
#[derive(Debug, Clone)]
struct Received {
    message: NdefMessage,
    texts: Vec<String>,
}

/// Type 4 Tag emulator.
///
/// Answers raw command APDUs with raw response APDUs. All mutable state sits
/// behind one lock, so a `Tag` can be shared between the thread delivering
/// commands and the one delivering deactivations.
pub struct Tag {
    cc: [u8; CC_LEN],
    ndef_file_id: FileId,
    aids: Vec<Aid>,
    session: Mutex<Session>,
    received: Mutex<Option<Received>>,
    sink: Arc<dyn TraceSink>,
}

impl Tag {
    /// Tag with the default AIDs, CC and a 4096-byte NDEF file, tracing to
    /// the `log` facade.
    pub fn new() -> Self {
        Self::from_parts(
            crate::constants::DEFAULT_AIDS.to_vec(),
            crate::tag::CapabilityContainer::default(),
            crate::constants::NDEF_FILE_CAPACITY,
            Arc::new(crate::trace::LogSink),
        )
    }

    pub fn builder() -> TagBuilder {
        TagBuilder::new()
    }

    pub(crate) fn from_parts(
        aids: Vec<Aid>,
        cc: crate::tag::CapabilityContainer,
        ndef_capacity: usize,
        sink: Arc<dyn TraceSink>,
    ) -> Self {
        Self {
            cc: cc.encode(),
            ndef_file_id: cc.ndef_file_id,
            aids,
            session: Mutex::new(Session::new(cc.ndef_file_id, ndef_capacity)),
            received: Mutex::new(None),
            sink,
        }
    }

    /// Handle one command APDU and return the response bytes. Never fails:
    /// every error becomes a status word.
    pub fn process_command(&self, raw: &[u8]) -> Vec<u8> {
        self.trace(TraceEvent::CommandReceived(raw.to_vec()));

        let response = match self.dispatch(raw) {
            Ok(response) => response,
            Err(err) => ResponseApdu::from(err),
        };

        let bytes = response.to_bytes();
        self.trace(TraceEvent::ResponseSent(bytes.clone()));
        bytes
    }

    /// The reader went away. Clears selection and reassembly, keeps the
    /// file content.
    pub fn on_deactivated(&self, reason: i32) {
        self.lock_session().reset();
        self.trace(TraceEvent::Deactivated(DeactivationReason::from(reason)));
    }

    /// AIDs answered by SELECT by name.
    pub fn aids(&self) -> &[Aid] {
        &self.aids
    }

    pub fn capability_container(&self) -> &[u8; CC_LEN] {
        &self.cc
    }

    pub fn session(&self) -> SessionSnapshot {
        self.lock_session().snapshot()
    }

    /// Copy of the current NDEF file content, NLEN prefix included.
    pub fn ndef_file(&self) -> Vec<u8> {
        self.lock_session().ndef().as_bytes().to_vec()
    }

    /// Last message that completed reassembly and decoded successfully.
    pub fn last_message(&self) -> Option<NdefMessage> {
        self.lock_received().as_ref().map(|r| r.message.clone())
    }

    /// Texts of the well-formed text records in [`Tag::last_message`].
    pub fn last_texts(&self) -> Vec<String> {
        self.lock_received()
            .as_ref()
            .map(|r| r.texts.clone())
            .unwrap_or_default()
    }

    fn dispatch(&self, raw: &[u8]) -> Result<ResponseApdu> {
        let apdu = match CommandApdu::decode(raw) {
            Ok(apdu) => apdu,
            Err(err) => {
                self.trace(TraceEvent::NotApdu { length: raw.len() });
                return Err(err);
            }
        };
        self.trace(TraceEvent::Header {
            cla: apdu.cla,
            ins: apdu.ins,
            p1: apdu.p1,
            p2: apdu.p2,
        });

        match apdu.ins {
            INS_SELECT => match apdu.p1 {
                SELECT_BY_NAME => self.select_by_aid(&apdu),
                SELECT_BY_FILE_ID => self.select_by_file_id(&apdu),
                p1 => {
                    self.trace(TraceEvent::UnknownSelectMode(p1));
                    Err(Error::UnsupportedSelect(p1))
                }
            },
            INS_READ_BINARY => self.read_binary(&apdu),
            INS_UPDATE_BINARY => self.update_binary(&apdu),
            ins => {
                self.trace(TraceEvent::UnknownInstruction(ins));
                Err(Error::UnsupportedInstruction(ins))
            }
        }
    }

    fn select_by_aid(&self, apdu: &CommandApdu<'_>) -> Result<ResponseApdu> {
        let aid = self.command_data(apdu)?;
        self.trace(TraceEvent::AidReceived(aid.to_vec()));

        if !self.aids.iter().any(|known| known.matches(aid)) {
            self.trace(TraceEvent::AidRejected);
            return Err(Error::UnknownAid);
        }

        self.lock_session().reset();
        self.trace(TraceEvent::AidMatched);
        Ok(ResponseApdu::success(Vec::new()))
    }

    fn select_by_file_id(&self, apdu: &CommandApdu<'_>) -> Result<ResponseApdu> {
        let raw_id = self.command_data(apdu)?;
        if apdu.len() < SELECT_FILE_MIN_LEN {
            return Err(self.malformed(SELECT_FILE_MIN_LEN, apdu.len()));
        }
        self.trace(TraceEvent::FileIdReceived(raw_id.to_vec()));

        // The Lc-delimited data field is the id; any other length never matches
        let id = match FileId::try_from(raw_id) {
            Ok(id) if id == FileId::CAPABILITY_CONTAINER || id == self.ndef_file_id => id,
            _ => {
                self.trace(TraceEvent::FileNotFound);
                return Err(Error::FileNotFound(raw_id.to_vec()));
            }
        };

        self.lock_session().select(id);
        self.trace(TraceEvent::FileSelected(id));
        Ok(ResponseApdu::success(Vec::new()))
    }

    fn read_binary(&self, apdu: &CommandApdu<'_>) -> Result<ResponseApdu> {
        let offset = apdu.offset() as usize;
        let len = apdu.expected_length();

        let read = {
            let session = self.lock_session();
            let selected = session.selected_file();
            match selected {
                None => None,
                Some(id) if id == self.ndef_file_id => {
                    Some(session.ndef().read(offset, len).map(<[u8]>::to_vec))
                }
                // CC is immutable, no need to hold the guard
                Some(_) => {
                    drop(session);
                    Some(read_range(&self.cc, offset, len).map(<[u8]>::to_vec))
                }
            }
        };

        match read {
            None => {
                self.trace(TraceEvent::NoFileSelected);
                Err(Error::NotAllowed("no file selected"))
            }
            Some(Ok(data)) => {
                self.trace(TraceEvent::ReadData(data.clone()));
                Ok(ResponseApdu::success(data))
            }
            Some(Err(err)) => {
                if let Error::OutOfBounds {
                    offset,
                    length,
                    size,
                } = err
                {
                    self.trace(TraceEvent::ReadOutOfBounds {
                        offset,
                        length,
                        size,
                    });
                }
                Err(err)
            }
        }
    }

    fn update_binary(&self, apdu: &CommandApdu<'_>) -> Result<ResponseApdu> {
        let offset = apdu.offset() as usize;

        let outcome = {
            let mut session = self.lock_session();
            if !session.is_ndef_selected() {
                Err(Error::NotAllowed("NDEF file not selected"))
            } else {
                match apdu.data_or_empty() {
                    Ok(data) => session.write(offset, data).map(|p| (data.len(), p)),
                    Err(err) => Err(err),
                }
            }
        };

        match outcome {
            Ok((length, progress)) => {
                self.trace(TraceEvent::BytesWritten { length, offset });
                self.handle_progress(progress);
                Ok(ResponseApdu::success(Vec::new()))
            }
            Err(err) => {
                match &err {
                    Error::NotAllowed(_) => self.trace(TraceEvent::WriteNotAllowed),
                    Error::InvalidLength { expected, actual } => {
                        self.trace(TraceEvent::MalformedLength {
                            expected: *expected,
                            actual: *actual,
                        })
                    }
                    Error::OutOfBounds {
                        offset,
                        length,
                        size,
                    } => self.trace(TraceEvent::WriteOutOfBounds {
                        offset: *offset,
                        length: *length,
                        capacity: *size,
                    }),
                    _ => {}
                }
                Err(err)
            }
        }
    }

    fn handle_progress(&self, progress: Progress) {
        match progress {
            Progress::AlreadyReassembled | Progress::AwaitingLength => {}
            Progress::EmptyLength => self.trace(TraceEvent::EmptyMessageLength),
            Progress::Incomplete {
                declared,
                have,
                need,
            } => {
                self.trace(TraceEvent::MessageLength(declared));
                self.trace(TraceEvent::AwaitingData { have, need });
            }
            Progress::Complete { declared, message } => {
                self.trace(TraceEvent::MessageLength(declared));
                self.decode_message(&message);
            }
        }
    }

    /// Decode a reassembled message body. Failures are traced and never
    /// reach the reader.
    fn decode_message(&self, body: &[u8]) {
        let message = match NdefMessage::parse(body) {
            Ok(message) => message,
            Err(err) => {
                self.trace(TraceEvent::MessageDecodeFailed(detail(err)));
                return;
            }
        };
        self.trace(TraceEvent::MessageDecoded {
            records: message.len(),
        });

        let mut texts = Vec::new();
        for record in message.records() {
            if !record.is_text() {
                self.trace(TraceEvent::UnknownRecordType);
                continue;
            }
            match TextRecord::try_from(record) {
                Ok(text) => {
                    self.trace(TraceEvent::TextDecoded(text.text.clone()));
                    texts.push(text.text);
                }
                Err(err) => self.trace(TraceEvent::TextRecordError(detail(err))),
            }
        }

        *self.lock_received() = Some(Received { message, texts });
    }

    fn command_data<'a>(&self, apdu: &CommandApdu<'a>) -> Result<&'a [u8]> {
        apdu.data().map_err(|err| match err {
            Error::InvalidLength { expected, actual } => self.malformed(expected, actual),
            other => other,
        })
    }

    fn malformed(&self, expected: usize, actual: usize) -> Error {
        self.trace(TraceEvent::MalformedLength { expected, actual });
        Error::InvalidLength { expected, actual }
    }

    fn trace(&self, event: TraceEvent) {
        self.sink.emit(&event);
    }

    fn lock_session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_received(&self) -> MutexGuard<'_, Option<Received>> {
        self.received.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tag")
            .field("ndef_file_id", &self.ndef_file_id)
            .field("aids", &self.aids)
            .field("session", &self.session())
            .finish_non_exhaustive()
    }
}

/// Inner message of a decode error, without the variant prefix.
fn detail(err: Error) -> String {
    match err {
        Error::NdefFormat(msg) | Error::TextRecord(msg) => msg,
        other => other.to_string(),
    }
}
