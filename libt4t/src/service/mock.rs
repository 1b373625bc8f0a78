// libt4t-rs/libt4t/src/service/mock.rs

use crate::constants::NLEN_SIZE;
use crate::ndef::NdefMessage;
use crate::protocol::{Command, ResponseApdu};
use crate::service::traits::ApduService;
use crate::tag::CapabilityContainer;
use crate::types::{Aid, FileId};
use crate::{Error, Result};

/// Largest data field of a short APDU.
const SHORT_APDU_MAX: usize = 0xFF;

/// Scripted reader for tests. It drives an [`ApduService`] with encoded
/// commands and records every command/response pair.
pub struct MockReader<'a, S: ApduService + ?Sized> {
    service: &'a S,
    /// Recorded exchanges: (command, response)
    pub exchanges: Vec<(Vec<u8>, Vec<u8>)>,
    cc: Option<CapabilityContainer>,
}

impl<'a, S: ApduService + ?Sized> MockReader<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self {
            service,
            exchanges: Vec::new(),
            cc: None,
        }
    }

    /// Send raw bytes, bypassing the command encoder.
    pub fn transceive_raw(&mut self, raw: &[u8]) -> Vec<u8> {
        let response = self.service.process_command(raw);
        self.exchanges.push((raw.to_vec(), response.clone()));
        response
    }

    /// Send `command`; anything but 90 00 becomes [`Error::Status`].
    pub fn transceive(&mut self, command: &Command) -> Result<ResponseApdu> {
        let raw = self.transceive_raw(&command.encode());
        let response = ResponseApdu::decode(&raw)?;
        if !response.is_success() {
            return Err(Error::Status(response.status));
        }
        Ok(response)
    }

    pub fn select_application(&mut self, aid: Aid) -> Result<()> {
        self.transceive(&Command::select_aid(aid)).map(|_| ())
    }

    /// NDEF Tag Application select: mapping 2.0 AID first, then 1.0.
    pub fn select_ndef_application(&mut self) -> Result<()> {
        match self.select_application(Aid::NDEF_TAG_V2) {
            Err(Error::Status(_)) => self.select_application(Aid::NDEF_TAG_V1),
            other => other,
        }
    }

    pub fn select_file(&mut self, id: FileId) -> Result<()> {
        self.transceive(&Command::select_file(id)).map(|_| ())
    }

    pub fn read_binary(&mut self, offset: u16, le: u8) -> Result<Vec<u8>> {
        self.transceive(&Command::ReadBinary { offset, le })
            .map(|r| r.payload)
    }

    pub fn update_binary(&mut self, offset: u16, data: &[u8]) -> Result<()> {
        self.transceive(&Command::UpdateBinary {
            offset,
            data: data.to_vec(),
        })
        .map(|_| ())
    }

    /// NDEF detection: select the application, then read the CC file.
    pub fn detect(&mut self) -> Result<CapabilityContainer> {
        self.select_ndef_application()?;
        self.select_file(FileId::CAPABILITY_CONTAINER)?;
        let len = crate::constants::CC_LEN as u8;
        let cc = CapabilityContainer::decode(&self.read_binary(0, len)?)?;
        self.cc = Some(cc);
        Ok(cc)
    }

    /// CC from the last successful [`MockReader::detect`].
    pub fn capability_container(&self) -> Option<CapabilityContainer> {
        self.cc
    }

    /// NDEF update procedure: NLEN = 0, body in MLc-sized chunks, then the
    /// real NLEN.
    pub fn write_ndef(&mut self, message: &NdefMessage) -> Result<()> {
        let cc = self.detect()?;
        let body = message.to_bytes()?;
        let max = cc.max_ndef_size as usize;
        if body.len() + NLEN_SIZE > max {
            return Err(Error::OutOfBounds {
                offset: NLEN_SIZE,
                length: body.len(),
                size: max,
            });
        }
        let nlen = body.len() as u16;

        self.select_file(cc.ndef_file_id)?;
        self.update_binary(0, &[0x00, 0x00])?;
        let chunk = chunk_size(cc.max_write_len);
        for (i, part) in body.chunks(chunk).enumerate() {
            let offset = NLEN_SIZE + i * chunk;
            self.update_binary(offset as u16, part)?;
        }
        self.update_binary(0, &nlen.to_be_bytes())
    }

    /// NDEF read procedure: NLEN, then the body in MLe-sized chunks.
    pub fn read_ndef(&mut self) -> Result<NdefMessage> {
        let body = self.read_ndef_bytes()?;
        NdefMessage::parse(&body)
    }

    /// Raw message body, without the NLEN prefix.
    pub fn read_ndef_bytes(&mut self) -> Result<Vec<u8>> {
        let cc = self.detect()?;
        self.select_file(cc.ndef_file_id)?;
        let prefix = self.read_binary(0, NLEN_SIZE as u8)?;
        let nlen = crate::protocol::parser::be_u16_at(&prefix, 0)? as usize;

        let chunk = chunk_size(cc.max_read_len);
        let mut body = Vec::with_capacity(nlen);
        while body.len() < nlen {
            let want = chunk.min(nlen - body.len());
            let offset = NLEN_SIZE + body.len();
            let offset = u16::try_from(offset).map_err(|_| Error::OutOfBounds {
                offset,
                length: want,
                size: cc.max_ndef_size as usize,
            })?;
            body.extend(self.read_binary(offset, want as u8)?);
        }
        Ok(body)
    }

    pub fn deactivate(&mut self, reason: i32) {
        self.service.on_deactivated(reason);
    }

    /// Commands sent so far, in order.
    pub fn commands(&self) -> Vec<Vec<u8>> {
        self.exchanges.iter().map(|(c, _)| c.clone()).collect()
    }
}

/// MLe/MLc clamped to what a short APDU can carry.
fn chunk_size(limit: u16) -> usize {
    (limit as usize).clamp(1, SHORT_APDU_MAX)
}
