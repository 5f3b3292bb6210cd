//! Versioned binary transfer.
//!
//! One contract serves three operations: saving state to bytes, loading it
//! back, and folding it into a CRC for desync detection between networked
//! simulation peers. Implementors of [`Snapshot`] call the same `xfer_*`
//! methods in the same order for all three; the active [`Xfer`]
//! implementation decides whether bytes are written, read, or hashed.
//!
//! There is no self-describing schema. Records begin with a version byte;
//! fields added in later versions are guarded by `if version >= N` checks
//! so older save data loads into newer code. A version newer than the
//! running code is corruption and fails hard.

use crate::frames::Frame;

/// Alias for `Result<T, XferError>`.
pub type XferResult<T> = Result<T, XferError>;

/// Errors raised by transfer operations.
#[derive(Debug, thiserror::Error)]
pub enum XferError {
    /// The stream carries a version newer than the running code supports.
    #[error("save data version {found} is newer than supported version {current}")]
    UnknownVersion {
        /// Version found in the stream.
        found: u8,
        /// Newest version the running code knows.
        current: u8,
    },

    /// The stream ended before the requested bytes could be read.
    #[error("unexpected end of save data")]
    EndOfData,

    /// A collection that must start empty before loading contained data.
    #[error("collection expected to be empty before load")]
    NonEmptyCollection,

    /// A saved string did not decode as UTF-8.
    #[error("saved string is not valid UTF-8")]
    BadString,

    /// A saved name no longer resolves against the catalog.
    #[error("unknown name in save data: \"{0}\"")]
    UnknownName(String),
}

/// Which operation the active [`Xfer`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XferMode {
    /// Writing state out to bytes.
    Save,
    /// Reading state back from bytes.
    Load,
    /// Folding state into a CRC without moving bytes.
    Crc,
}

/// The transfer byte contract. All scalar helpers are built on
/// [`Xfer::xfer_bytes`], which saves, loads, or hashes a little-endian
/// field image depending on the implementation.
pub trait Xfer {
    /// The operation this transfer performs.
    fn mode(&self) -> XferMode;

    /// Transfer a raw field image. In save and CRC modes the buffer is
    /// consumed; in load mode it is overwritten.
    fn xfer_bytes(&mut self, data: &mut [u8]) -> XferResult<()>;

    /// Transfer a `u8`.
    fn xfer_u8(&mut self, value: &mut u8) -> XferResult<()> {
        let mut buf = [*value];
        self.xfer_bytes(&mut buf)?;
        *value = buf[0];
        Ok(())
    }

    /// Transfer a `bool` as a single byte.
    fn xfer_bool(&mut self, value: &mut bool) -> XferResult<()> {
        let mut byte = u8::from(*value);
        self.xfer_bytes(std::slice::from_mut(&mut byte))?;
        *value = byte != 0;
        Ok(())
    }

    /// Transfer a `u16`.
    fn xfer_u16(&mut self, value: &mut u16) -> XferResult<()> {
        let mut buf = value.to_le_bytes();
        self.xfer_bytes(&mut buf)?;
        *value = u16::from_le_bytes(buf);
        Ok(())
    }

    /// Transfer a `u32`.
    fn xfer_u32(&mut self, value: &mut u32) -> XferResult<()> {
        let mut buf = value.to_le_bytes();
        self.xfer_bytes(&mut buf)?;
        *value = u32::from_le_bytes(buf);
        Ok(())
    }

    /// Transfer an `i32`.
    fn xfer_i32(&mut self, value: &mut i32) -> XferResult<()> {
        let mut buf = value.to_le_bytes();
        self.xfer_bytes(&mut buf)?;
        *value = i32::from_le_bytes(buf);
        Ok(())
    }

    /// Transfer a `u64`.
    fn xfer_u64(&mut self, value: &mut u64) -> XferResult<()> {
        let mut buf = value.to_le_bytes();
        self.xfer_bytes(&mut buf)?;
        *value = u64::from_le_bytes(buf);
        Ok(())
    }

    /// Transfer an `f32` by bit image.
    fn xfer_f32(&mut self, value: &mut f32) -> XferResult<()> {
        let mut buf = value.to_le_bytes();
        self.xfer_bytes(&mut buf)?;
        *value = f32::from_le_bytes(buf);
        Ok(())
    }

    /// Transfer a frame number.
    fn xfer_frame(&mut self, value: &mut Frame) -> XferResult<()> {
        self.xfer_u32(value)
    }

    /// Transfer a string as a `u16` length followed by UTF-8 bytes.
    fn xfer_string(&mut self, value: &mut String) -> XferResult<()> {
        let mut len = value.len() as u16;
        self.xfer_u16(&mut len)?;
        if self.mode() == XferMode::Load {
            let mut buf = vec![0u8; usize::from(len)];
            self.xfer_bytes(&mut buf)?;
            *value = String::from_utf8(buf).map_err(|_| XferError::BadString)?;
        } else {
            let mut buf = value.clone().into_bytes();
            self.xfer_bytes(&mut buf)?;
        }
        Ok(())
    }

    /// Transfer a record version byte. In load mode, the stream version
    /// replaces `version` and must not exceed `current`.
    fn xfer_version(&mut self, version: &mut u8, current: u8) -> XferResult<()> {
        self.xfer_u8(version)?;
        if *version > current {
            return Err(XferError::UnknownVersion {
                found: *version,
                current,
            });
        }
        Ok(())
    }
}

/// Transfer a collection count: writes `len` when saving, returns the
/// stream count when loading. Callers are responsible for verifying that a
/// collection required to start empty actually is.
pub fn xfer_count(xfer: &mut dyn Xfer, len: usize) -> XferResult<usize> {
    let mut count = len as u16;
    xfer.xfer_u16(&mut count)?;
    Ok(usize::from(count))
}

/// A unit of state that participates in save/load and CRC.
///
/// Implementations must transfer fields in a fixed order, and any type that
/// wraps another snapshot must delegate to it *first* — the reader can only
/// match the writer's order by construction.
pub trait Snapshot {
    /// Save, load, or hash this unit's full state.
    fn xfer(&mut self, xfer: &mut dyn Xfer) -> XferResult<()>;

    /// Contribution to the desync CRC. Defaults to the full state; override
    /// to hash a reduced field set.
    fn crc(&mut self, xfer: &mut dyn Xfer) -> XferResult<()> {
        self.xfer(xfer)
    }

    /// Hook run after a load completes, for state derived from loaded
    /// fields.
    fn load_post_process(&mut self) -> XferResult<()> {
        Ok(())
    }
}

/// Save-mode transfer: appends field images to a byte buffer.
#[derive(Debug, Default)]
pub struct XferSave {
    data: Vec<u8>,
}

impl XferSave {
    /// Create an empty save buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bytes written so far.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the transfer and take the written bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl Xfer for XferSave {
    fn mode(&self) -> XferMode {
        XferMode::Save
    }

    fn xfer_bytes(&mut self, data: &mut [u8]) -> XferResult<()> {
        self.data.extend_from_slice(data);
        Ok(())
    }
}

/// Load-mode transfer: reads field images back from a byte buffer.
#[derive(Debug)]
pub struct XferLoad {
    data: Vec<u8>,
    pos: usize,
}

impl XferLoad {
    /// Create a load transfer over saved bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }

    /// True once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos == self.data.len()
    }
}

impl Xfer for XferLoad {
    fn mode(&self) -> XferMode {
        XferMode::Load
    }

    fn xfer_bytes(&mut self, data: &mut [u8]) -> XferResult<()> {
        let end = self.pos + data.len();
        if end > self.data.len() {
            return Err(XferError::EndOfData);
        }
        data.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(())
    }
}

/// CRC-mode transfer: folds field images into a 32-bit rolling checksum.
/// The fold is a rotate-then-add over little-endian words, so field order
/// matters — which is the point.
#[derive(Debug, Default)]
pub struct XferCrc {
    crc: u32,
}

impl XferCrc {
    /// Create a CRC transfer with a zeroed accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated checksum.
    pub fn crc(&self) -> u32 {
        self.crc
    }
}

impl Xfer for XferCrc {
    fn mode(&self) -> XferMode {
        XferMode::Crc
    }

    fn xfer_bytes(&mut self, data: &mut [u8]) -> XferResult<()> {
        for chunk in data.chunks(4) {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            self.crc = self
                .crc
                .rotate_left(1)
                .wrapping_add(u32::from_le_bytes(word));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Sample {
        count: u32,
        ratio: f32,
        label: String,
        armed: bool,
    }

    const SAMPLE_VERSION: u8 = 1;

    impl Snapshot for Sample {
        fn xfer(&mut self, xfer: &mut dyn Xfer) -> XferResult<()> {
            let mut version = SAMPLE_VERSION;
            xfer.xfer_version(&mut version, SAMPLE_VERSION)?;
            xfer.xfer_u32(&mut self.count)?;
            xfer.xfer_f32(&mut self.ratio)?;
            xfer.xfer_string(&mut self.label)?;
            xfer.xfer_bool(&mut self.armed)?;
            Ok(())
        }
    }

    fn sample() -> Sample {
        Sample {
            count: 42,
            ratio: 0.5,
            label: "bravo".to_string(),
            armed: true,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut original = sample();
        let mut save = XferSave::new();
        original.xfer(&mut save).unwrap();

        let mut load = XferLoad::new(save.into_data());
        let mut restored = Sample::default();
        restored.xfer(&mut load).unwrap();

        assert_eq!(restored, original);
        assert!(load.is_at_end());
    }

    #[test]
    fn version_newer_than_current_is_fatal() {
        let mut save = XferSave::new();
        let mut version = 9u8;
        save.xfer_u8(&mut version).unwrap();

        let mut load = XferLoad::new(save.into_data());
        let mut found = SAMPLE_VERSION;
        let err = load.xfer_version(&mut found, SAMPLE_VERSION).unwrap_err();
        assert!(matches!(
            err,
            XferError::UnknownVersion {
                found: 9,
                current: SAMPLE_VERSION
            }
        ));
    }

    #[test]
    fn truncated_stream_errors() {
        let mut load = XferLoad::new(vec![1, 2]);
        let mut value = 0u32;
        assert!(matches!(
            load.xfer_u32(&mut value),
            Err(XferError::EndOfData)
        ));
    }

    #[test]
    fn crc_is_deterministic_and_order_sensitive() {
        let mut crc_a = XferCrc::new();
        sample().xfer(&mut crc_a).unwrap();
        let mut crc_b = XferCrc::new();
        sample().xfer(&mut crc_b).unwrap();
        assert_eq!(crc_a.crc(), crc_b.crc());

        let mut crc_c = XferCrc::new();
        let mut changed = sample();
        changed.count = 43;
        changed.xfer(&mut crc_c).unwrap();
        assert_ne!(crc_a.crc(), crc_c.crc());
    }

    #[test]
    fn xfer_count_writes_and_reads() {
        let mut save = XferSave::new();
        assert_eq!(xfer_count(&mut save, 3).unwrap(), 3);
        let mut load = XferLoad::new(save.into_data());
        assert_eq!(xfer_count(&mut load, 0).unwrap(), 3);
    }
}
