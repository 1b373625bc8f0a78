// libt4t-rs/libt4t/src/tag/builder.rs

use std::sync::Arc;

use crate::constants::{DEFAULT_AIDS, NDEF_FILE_CAPACITY, NDEF_FILE_MAX_CAPACITY, NLEN_SIZE};
use crate::tag::{CapabilityContainer, Tag};
use crate::trace::{LogSink, TraceSink};
use crate::types::{Aid, FileId};
use crate::{Error, Result};

/// Helper to construct a Tag with optional configuration.
pub struct TagBuilder {
    aids: Vec<Aid>,
    cc: CapabilityContainer,
    ndef_capacity: usize,
    sink: Option<Arc<dyn TraceSink>>,
}

impl TagBuilder {
    pub fn new() -> Self {
        Self {
            aids: DEFAULT_AIDS.to_vec(),
            cc: CapabilityContainer::default(),
            ndef_capacity: NDEF_FILE_CAPACITY,
            sink: None,
        }
    }

    /// Replace the AID set answered by SELECT by name.
    pub fn aids<I>(mut self, aids: I) -> Self
    where
        I: IntoIterator<Item = Aid>,
    {
        self.aids = aids.into_iter().collect();
        self
    }

    pub fn add_aid(mut self, aid: Aid) -> Self {
        if !self.aids.contains(&aid) {
            self.aids.push(aid);
        }
        self
    }

    /// Size of the NDEF file including the 2-byte NLEN prefix.
    pub fn ndef_capacity(mut self, capacity: usize) -> Self {
        self.ndef_capacity = capacity;
        self
    }

    pub fn capability_container(mut self, cc: CapabilityContainer) -> Self {
        self.cc = cc;
        self
    }

    /// Where trace events go. Defaults to [`LogSink`].
    pub fn sink(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate the configuration and build the tag.
    pub fn build(self) -> Result<Tag> {
        if self.aids.is_empty() {
            return Err(Error::InvalidConfig("at least one AID is required".into()));
        }
        if !(NLEN_SIZE..=NDEF_FILE_MAX_CAPACITY).contains(&self.ndef_capacity) {
            return Err(Error::InvalidConfig(format!(
                "NDEF capacity {} outside {}..={}",
                self.ndef_capacity, NLEN_SIZE, NDEF_FILE_MAX_CAPACITY
            )));
        }
        if self.cc.max_ndef_size as usize > self.ndef_capacity {
            return Err(Error::InvalidConfig(format!(
                "CC advertises {} bytes of NDEF file, capacity is {}",
                self.cc.max_ndef_size, self.ndef_capacity
            )));
        }
        if self.cc.ndef_file_id == FileId::CAPABILITY_CONTAINER {
            return Err(Error::InvalidConfig(
                "NDEF file id collides with the capability container".into(),
            ));
        }

        let sink = self.sink.unwrap_or_else(|| Arc::new(LogSink));
        Ok(Tag::from_parts(self.aids, self.cc, self.ndef_capacity, sink))
    }
}

impl Default for TagBuilder {
    fn default() -> Self {
        Self::new()
    }
}
