//! The line reader, tokenizer, and generic block-body driver.
//!
//! One [`Ini`] instance reads one file. Parsing is line-oriented: the reader
//! owns a single line buffer and a cursor, and field actions pull value
//! tokens from that buffer through the `next_*` converters. Tokens past the
//! cursor when a field action returns are simply never consumed; the next
//! `read_line` discards them.

use std::io::{BufRead, Cursor};
use std::path::{Path, PathBuf};

use rampart_core::{
    Catalog, Coord3D, KindFlags, LoadType, RgbColor,
    frames::{
        self, Frame, deg_per_sec_to_rad_per_frame, degrees_to_radians, msec_to_frames_ceil,
        per_sec_to_per_frame, per_sec2_to_per_frame2,
    },
    xfer::{Xfer, XferCrc},
};

use crate::error::{IniError, IniErrorKind, IniResult};
use crate::field::{FieldParse, MultiFieldParse};
use crate::scan;

/// Maximum raw length of one physical line, including the newline. Lines
/// past this are data errors, not a cue to grow the buffer.
pub const MAX_LINE_LEN: usize = 1028;

/// The token that closes every block.
pub const BLOCK_END_TOKEN: &str = "End";

/// Named separator sets for the tokenizer. Which set applies depends on the
/// field being parsed, because value syntaxes legitimately embed different
/// delimiter characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seps {
    /// Whitespace and `=`: the default field syntax.
    Normal,
    /// Normal plus `%`, for percentage values like `50%`.
    Percent,
    /// Normal plus `:`, for `Tag:Value` sub-token pairs.
    Colon,
    /// Quote, newline, and `=`: spaces survive inside quoted strings.
    Quote,
}

impl Seps {
    fn chars(self) -> &'static str {
        match self {
            Seps::Normal => " \t\n\r=",
            Seps::Percent => " \t\n\r=%",
            Seps::Colon => " \t\n\r=:",
            Seps::Quote => "\"\n=",
        }
    }
}

/// A declarative-config reader over one file.
///
/// The lifetime covers the underlying byte source and the optional CRC
/// accumulator that fingerprints the configuration text.
pub struct Ini<'a> {
    source: Box<dyn BufRead + 'a>,
    filename: PathBuf,
    load_type: LoadType,
    buffer: String,
    cursor: usize,
    line_num: u32,
    end_of_file: bool,
    crc: Option<&'a mut XferCrc>,
}

impl std::fmt::Debug for Ini<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ini")
            .field("filename", &self.filename)
            .field("load_type", &self.load_type)
            .field("buffer", &self.buffer)
            .field("cursor", &self.cursor)
            .field("line_num", &self.line_num)
            .field("end_of_file", &self.end_of_file)
            .finish_non_exhaustive()
    }
}

impl<'a> Ini<'a> {
    /// Create a reader over an arbitrary byte source.
    pub fn from_reader(source: impl BufRead + 'a, filename: &Path, load_type: LoadType) -> Self {
        Self {
            source: Box::new(source),
            filename: filename.to_path_buf(),
            load_type,
            buffer: String::new(),
            cursor: 0,
            line_num: 0,
            end_of_file: false,
            crc: None,
        }
    }

    /// Open a file for reading.
    pub fn open(path: &Path, load_type: LoadType) -> IniResult<Self> {
        let file = std::fs::File::open(path).map_err(|err| {
            IniError::at_file(IniErrorKind::CannotOpenFile(err.to_string()), path)
        })?;
        Ok(Self::from_reader(
            std::io::BufReader::new(file),
            path,
            load_type,
        ))
    }

    /// Create a reader over in-memory text, under [`LoadType::Overwrite`].
    pub fn for_str(text: &str) -> Self {
        Self::from_reader(
            Cursor::new(text.to_string()),
            Path::new("<memory>"),
            LoadType::Overwrite,
        )
    }

    /// Accumulate every parsed line into a configuration checksum.
    /// Networked peers compare these to catch mismatched data files before
    /// the simulation can desync.
    pub fn set_crc(&mut self, crc: &'a mut XferCrc) {
        self.crc = Some(crc);
    }

    /// The file being read.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// One-based number of the line currently in the buffer.
    pub fn line_num(&self) -> u32 {
        self.line_num
    }

    /// The load semantics this reader applies to its blocks.
    pub fn load_type(&self) -> LoadType {
        self.load_type
    }

    /// True once the source is exhausted.
    pub fn end_of_file(&self) -> bool {
        self.end_of_file
    }

    /// Wrap a failure kind with this reader's positional context.
    pub fn error(&self, kind: IniErrorKind) -> IniError {
        IniError::new(kind, &self.filename, self.line_num, &self.buffer)
    }

    /// Read the next physical line into the buffer. Strips `;` comments,
    /// normalizes control characters to spaces, and resets the token
    /// cursor. Returns `false` at end of file.
    pub fn read_line(&mut self) -> IniResult<bool> {
        self.buffer.clear();
        self.cursor = 0;
        let mut raw = String::new();
        let read = self
            .source
            .read_line(&mut raw)
            .map_err(|err| self.error(IniErrorKind::CannotOpenFile(err.to_string())))?;
        if read == 0 {
            self.end_of_file = true;
            return Ok(false);
        }
        self.line_num += 1;
        if raw.len() > MAX_LINE_LEN {
            return Err(self.error(IniErrorKind::BufferTooSmall));
        }
        let content = match raw.find(';') {
            Some(pos) => &raw[..pos],
            None => raw.as_str(),
        };
        self.buffer = content
            .chars()
            .map(|ch| if ch.is_control() { ' ' } else { ch })
            .collect();
        if self.crc.is_some() {
            let mut bytes = self.buffer.clone().into_bytes();
            let folded = self.crc.as_deref_mut().map(|crc| crc.xfer_bytes(&mut bytes));
            if let Some(Err(err)) = folded {
                return Err(self.error(IniErrorKind::Bug(err.to_string())));
            }
        }
        Ok(true)
    }

    /// Take the next token from the buffer, or `None` if the rest of the
    /// line is separators.
    pub fn next_token_opt(&mut self, seps: Seps) -> Option<String> {
        let sep_chars = seps.chars();
        let rest = &self.buffer[self.cursor..];
        let start = rest
            .char_indices()
            .find(|(_, ch)| !sep_chars.contains(*ch))
            .map(|(idx, _)| idx)?;
        let tail = &rest[start..];
        let end = tail
            .char_indices()
            .find(|(_, ch)| sep_chars.contains(*ch))
            .map_or(tail.len(), |(idx, _)| idx);
        let token = tail[..end].to_string();
        self.cursor += start + end;
        Some(token)
    }

    /// Take the next token, failing if the line has none left.
    pub fn next_token(&mut self, seps: Seps) -> IniResult<String> {
        self.next_token_opt(seps).ok_or_else(|| {
            self.error(IniErrorKind::InvalidData("missing value token".to_string()))
        })
    }

    /// Take the value of a `Tag:Value` pair, verifying the tag.
    pub fn next_sub_token(&mut self, expected: &str) -> IniResult<String> {
        let found = self.next_token(Seps::Colon)?;
        if !found.eq_ignore_ascii_case(expected) {
            return Err(self.error(IniErrorKind::InvalidSubToken {
                expected: expected.to_string(),
                found,
            }));
        }
        self.next_token(Seps::Colon)
    }

    /// Take a possibly-quoted string. Quoted content keeps its spaces and
    /// may be empty; an unquoted value falls back to a normal token.
    pub fn next_quoted(&mut self) -> IniResult<String> {
        let rest = &self.buffer[self.cursor..];
        let Some((start, ch)) = rest
            .char_indices()
            .find(|(_, c)| !Seps::Normal.chars().contains(*c))
        else {
            return Err(self.error(IniErrorKind::InvalidData(
                "missing value token".to_string(),
            )));
        };
        if ch != '"' {
            return self.next_token(Seps::Normal);
        }
        self.cursor += start + 1;
        if self.buffer[self.cursor..].starts_with('"') {
            self.cursor += 1;
            return Ok(String::new());
        }
        let token = self.next_token_opt(Seps::Quote).ok_or_else(|| {
            self.error(IniErrorKind::InvalidData(
                "unterminated quoted string".to_string(),
            ))
        })?;
        if !self.buffer[self.cursor..].starts_with('"') {
            return Err(self.error(IniErrorKind::InvalidData(
                "unterminated quoted string".to_string(),
            )));
        }
        self.cursor += 1;
        Ok(token)
    }

    /// Take a signed integer value.
    pub fn next_int(&mut self) -> IniResult<i32> {
        let token = self.next_token(Seps::Normal)?;
        scan::scan_int(&token).map_err(|kind| self.error(kind))
    }

    /// Take an unsigned integer value.
    pub fn next_unsigned(&mut self) -> IniResult<u32> {
        let token = self.next_token(Seps::Normal)?;
        scan::scan_unsigned(&token).map_err(|kind| self.error(kind))
    }

    /// Take a real value.
    pub fn next_real(&mut self) -> IniResult<f32> {
        let token = self.next_token(Seps::Normal)?;
        scan::scan_real(&token).map_err(|kind| self.error(kind))
    }

    /// Take a `Yes`/`No` value.
    pub fn next_bool(&mut self) -> IniResult<bool> {
        let token = self.next_token(Seps::Normal)?;
        scan::scan_bool(&token).map_err(|kind| self.error(kind))
    }

    /// Take a percentage value (`50%`) as a multiplier (`0.5`).
    pub fn next_percent(&mut self) -> IniResult<f32> {
        let token = self.next_token(Seps::Percent)?;
        scan::scan_percent_to_real(&token).map_err(|kind| self.error(kind))
    }

    /// Take an authored duration in milliseconds as a whole frame count,
    /// rounded up.
    pub fn next_duration_frames(&mut self) -> IniResult<Frame> {
        Ok(msec_to_frames_ceil(self.next_real()?))
    }

    /// Take an authored duration in milliseconds as a fractional frame
    /// count.
    pub fn next_duration_real(&mut self) -> IniResult<f32> {
        Ok(frames::msec_to_frames(self.next_real()?))
    }

    /// Take an authored velocity (units per second) as units per frame.
    pub fn next_velocity(&mut self) -> IniResult<f32> {
        Ok(per_sec_to_per_frame(self.next_real()?))
    }

    /// Take an authored acceleration (units per second squared) as units
    /// per frame squared.
    pub fn next_acceleration(&mut self) -> IniResult<f32> {
        Ok(per_sec2_to_per_frame2(self.next_real()?))
    }

    /// Take an authored angle in degrees as radians.
    pub fn next_angle(&mut self) -> IniResult<f32> {
        Ok(degrees_to_radians(self.next_real()?))
    }

    /// Take an authored angular velocity (degrees per second) as radians
    /// per frame.
    pub fn next_angular_velocity(&mut self) -> IniResult<f32> {
        Ok(deg_per_sec_to_rad_per_frame(self.next_real()?))
    }

    /// Resolve a name token against an index list, case-insensitive.
    pub fn next_index(&mut self, names: &[&str]) -> IniResult<u32> {
        let token = self.next_token(Seps::Normal)?;
        scan::scan_index(&token, names).map_err(|kind| self.error(kind))
    }

    /// Take an `R:n G:n B:n` triple of byte components as a color.
    pub fn next_rgb_color(&mut self) -> IniResult<RgbColor> {
        let red = self.next_color_component("R")?;
        let green = self.next_color_component("G")?;
        let blue = self.next_color_component("B")?;
        Ok(RgbColor::from_bytes(red, green, blue))
    }

    fn next_color_component(&mut self, tag: &str) -> IniResult<u8> {
        let token = self.next_sub_token(tag)?;
        let value = scan::scan_unsigned(&token).map_err(|kind| self.error(kind))?;
        if value > 255 {
            return Err(self.error(IniErrorKind::InvalidData(format!(
                "color component {value} exceeds 255"
            ))));
        }
        Ok(value as u8)
    }

    /// Take an `X:n Y:n Z:n` triple as a world position.
    pub fn next_coord3d(&mut self) -> IniResult<Coord3D> {
        let x = self.next_coord_component("X")?;
        let y = self.next_coord_component("Y")?;
        let z = self.next_coord_component("Z")?;
        Ok(Coord3D { x, y, z })
    }

    fn next_coord_component(&mut self, tag: &str) -> IniResult<f32> {
        let token = self.next_sub_token(tag)?;
        scan::scan_real(&token).map_err(|kind| self.error(kind))
    }

    /// Take a bit-flag list into `flags`.
    ///
    /// Three authored forms: `NONE` alone clears the set; a plain name list
    /// replaces the set; `+NAME`/`-NAME` tokens adjust the existing set.
    /// Plain names and adjustments must not be mixed on one line.
    pub fn next_bit_flags(&mut self, flags: &mut KindFlags, names: &[&str]) -> IniResult<()> {
        let mut staged = KindFlags::NONE;
        let mut saw_plain = false;
        let mut saw_adjust = false;
        let mut first = true;
        while let Some(token) = self.next_token_opt(Seps::Normal) {
            if token.eq_ignore_ascii_case("NONE") {
                if !first || self.next_token_opt(Seps::Normal).is_some() {
                    return Err(self.error(IniErrorKind::InvalidData(
                        "NONE must be the only flag token".to_string(),
                    )));
                }
                *flags = KindFlags::NONE;
                return Ok(());
            }
            if let Some(name) = token.strip_prefix('+') {
                saw_adjust = true;
                let index = scan::scan_index(name, names).map_err(|kind| self.error(kind))?;
                flags.set(index);
            } else if let Some(name) = token.strip_prefix('-') {
                saw_adjust = true;
                let index = scan::scan_index(name, names).map_err(|kind| self.error(kind))?;
                flags.clear(index);
            } else {
                saw_plain = true;
                let index = scan::scan_index(&token, names).map_err(|kind| self.error(kind))?;
                staged.set(index);
            }
            if saw_plain && saw_adjust {
                return Err(self.error(IniErrorKind::InvalidData(
                    "cannot mix +/- adjustments with plain flag names".to_string(),
                )));
            }
            first = false;
        }
        if first {
            return Err(self.error(IniErrorKind::InvalidData(
                "missing flag tokens".to_string(),
            )));
        }
        if saw_plain {
            *flags = staged;
        }
        Ok(())
    }

    /// Take every remaining token on the line.
    pub fn next_string_vec(&mut self) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(token) = self.next_token_opt(Seps::Normal) {
            out.push(token);
        }
        out
    }

    /// Drive a block body against one field table.
    pub fn init_from_ini<T>(
        &mut self,
        target: &mut T,
        catalog: &Catalog,
        table: &'static [FieldParse<T>],
    ) -> IniResult<()> {
        self.init_from_ini_multi(target, catalog, |multi| multi.add(table))
    }

    /// Drive a block body against a composed set of field tables. Reads
    /// lines until the block's `End` token; every non-blank line must
    /// begin with a key some table knows.
    pub fn init_from_ini_multi<T: 'static>(
        &mut self,
        target: &mut T,
        catalog: &Catalog,
        build: impl FnOnce(&mut MultiFieldParse<T>) -> IniResult<()>,
    ) -> IniResult<()> {
        let mut multi = MultiFieldParse::new();
        build(&mut multi)?;
        loop {
            if !self.read_line()? {
                return Err(self.error(IniErrorKind::MissingEndToken));
            }
            let Some(token) = self.next_token_opt(Seps::Normal) else {
                continue;
            };
            if token.eq_ignore_ascii_case(BLOCK_END_TOKEN) {
                return Ok(());
            }
            match multi.apply(&token, self, target, catalog) {
                Some(result) => result?,
                None => return Err(self.error(IniErrorKind::UnknownField(token))),
            }
        }
    }

    /// Parse every block in the file into the catalog.
    pub fn load(&mut self, catalog: &mut Catalog) -> IniResult<()> {
        while self.read_line()? {
            let Some(token) = self.next_token_opt(Seps::Normal) else {
                continue;
            };
            match crate::blocks::find_block(&token) {
                Some(parse) => parse(self, catalog)?,
                None => return Err(self.error(IniErrorKind::UnknownBlock(token))),
            }
        }
        Ok(())
    }
}

/// Load every `.ini` file in a directory, optionally recursing into
/// subdirectories after the directory's own files.
///
/// Files load in sorted name order. Peers in a networked game must observe
/// identical load order or their configuration CRCs will disagree, so the
/// filesystem's enumeration order cannot be trusted.
pub fn load_directory(
    dir: &Path,
    recurse: bool,
    load_type: LoadType,
    catalog: &mut Catalog,
) -> IniResult<()> {
    let entries = std::fs::read_dir(dir).map_err(|err| {
        IniError::at_file(IniErrorKind::InvalidDirectory(err.to_string()), dir)
    })?;
    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| {
            IniError::at_file(IniErrorKind::InvalidDirectory(err.to_string()), dir)
        })?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ini"))
        {
            files.push(path);
        }
    }
    files.sort();
    subdirs.sort();
    for path in files {
        let mut ini = Ini::open(&path, load_type)?;
        ini.load(catalog)?;
    }
    if recurse {
        for sub in subdirs {
            load_directory(&sub, true, load_type, catalog)?;
        }
    }
    Ok(())
}

/// True if the line declares the named block of the given type.
pub fn is_declaration_of_type(block_type: &str, block_name: &str, line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    tokens
        .next()
        .is_some_and(|token| token.eq_ignore_ascii_case(block_type))
        && tokens
            .next()
            .is_some_and(|token| token.eq_ignore_ascii_case(block_name))
}

/// True if the line is a block-closing `End`.
pub fn is_end_of_block(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(BLOCK_END_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(text: &str) -> Ini<'static> {
        let mut ini = Ini::for_str(text);
        assert!(ini.read_line().unwrap());
        ini
    }

    #[test]
    fn tokens_split_on_whitespace_and_equals() {
        let mut ini = reader("  Health = 100 extra\n");
        assert_eq!(ini.next_token_opt(Seps::Normal).unwrap(), "Health");
        assert_eq!(ini.next_token_opt(Seps::Normal).unwrap(), "100");
        assert_eq!(ini.next_token_opt(Seps::Normal).unwrap(), "extra");
        assert!(ini.next_token_opt(Seps::Normal).is_none());
    }

    #[test]
    fn comments_are_stripped() {
        let mut ini = reader("Speed = 30 ; units per second\n");
        ini.next_token_opt(Seps::Normal);
        assert!((ini.next_velocity().unwrap() - 1.0).abs() < f32::EPSILON);
        assert!(ini.next_token_opt(Seps::Normal).is_none());
    }

    #[test]
    fn percent_separator_consumes_the_sign() {
        let mut ini = reader("Armor = 50%\n");
        ini.next_token_opt(Seps::Percent);
        assert!((ini.next_percent().unwrap() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn sub_token_verifies_its_tag() {
        let mut ini = reader("Color = R:100 G:200 B:255\n");
        ini.next_token_opt(Seps::Normal);
        let color = ini.next_rgb_color().unwrap();
        assert!((color.red - 100.0 / 255.0).abs() < 1.0e-6);
        assert!((color.blue - 1.0).abs() < f32::EPSILON);

        let mut bad = reader("Color = G:100\n");
        bad.next_token_opt(Seps::Normal);
        let err = bad.next_rgb_color().unwrap_err();
        assert!(matches!(err.kind, IniErrorKind::InvalidSubToken { .. }));
    }

    #[test]
    fn coord_reads_xyz() {
        let mut ini = reader("Position = X:1.5 Y:-2 Z:0\n");
        ini.next_token_opt(Seps::Normal);
        let coord = ini.next_coord3d().unwrap();
        assert!((coord.x - 1.5).abs() < f32::EPSILON);
        assert!((coord.y + 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn quoted_strings_keep_spaces() {
        let mut ini = reader("Sound = \"Heal Pulse Loop\"\n");
        ini.next_token_opt(Seps::Normal);
        assert_eq!(ini.next_quoted().unwrap(), "Heal Pulse Loop");

        let mut empty = reader("Sound = \"\"\n");
        empty.next_token_opt(Seps::Normal);
        assert_eq!(empty.next_quoted().unwrap(), "");

        let mut bare = reader("Sound = Click\n");
        bare.next_token_opt(Seps::Normal);
        assert_eq!(bare.next_quoted().unwrap(), "Click");

        let mut open = reader("Sound = \"Never Ends\n");
        open.next_token_opt(Seps::Normal);
        assert!(open.next_quoted().is_err());
    }

    #[test]
    fn durations_round_up_to_whole_frames() {
        let mut ini = reader("Delay = 1000 Short = 34\n");
        ini.next_token_opt(Seps::Normal);
        assert_eq!(ini.next_duration_frames().unwrap(), 30);
        ini.next_token_opt(Seps::Normal);
        assert_eq!(ini.next_duration_frames().unwrap(), 2);
    }

    #[test]
    fn bit_flags_plain_list_replaces() {
        let names = ["ALPHA", "BETA", "GAMMA"];
        let mut flags = KindFlags::NONE;
        flags.set(2);
        let mut ini = reader("KindOf = ALPHA beta\n");
        ini.next_token_opt(Seps::Normal);
        ini.next_bit_flags(&mut flags, &names).unwrap();
        assert!(flags.test(0));
        assert!(flags.test(1));
        assert!(!flags.test(2));
    }

    #[test]
    fn bit_flags_adjust_existing_set() {
        let names = ["ALPHA", "BETA", "GAMMA"];
        let mut flags = KindFlags::NONE;
        flags.set(0);
        let mut ini = reader("KindOf = +GAMMA -ALPHA\n");
        ini.next_token_opt(Seps::Normal);
        ini.next_bit_flags(&mut flags, &names).unwrap();
        assert!(!flags.test(0));
        assert!(flags.test(2));
    }

    #[test]
    fn bit_flags_none_and_mixing_rules() {
        let names = ["ALPHA", "BETA"];
        let mut flags = KindFlags::NONE;
        flags.set(1);
        let mut ini = reader("KindOf = NONE\n");
        ini.next_token_opt(Seps::Normal);
        ini.next_bit_flags(&mut flags, &names).unwrap();
        assert!(flags.is_empty());

        let mut mixed = reader("KindOf = ALPHA +BETA\n");
        mixed.next_token_opt(Seps::Normal);
        assert!(mixed.next_bit_flags(&mut flags, &names).is_err());

        let mut trailing = reader("KindOf = NONE ALPHA\n");
        trailing.next_token_opt(Seps::Normal);
        assert!(trailing.next_bit_flags(&mut flags, &names).is_err());
    }

    #[test]
    fn overlong_line_is_rejected() {
        let long = format!("Name = {}\n", "x".repeat(MAX_LINE_LEN));
        let mut ini = Ini::for_str(&long);
        let err = ini.read_line().unwrap_err();
        assert_eq!(err.kind, IniErrorKind::BufferTooSmall);
    }

    #[test]
    fn line_numbers_count_physical_lines() {
        let mut ini = Ini::for_str("one\ntwo\nthree\n");
        for expected in 1..=3 {
            assert!(ini.read_line().unwrap());
            assert_eq!(ini.line_num(), expected);
        }
        assert!(!ini.read_line().unwrap());
        assert!(ini.end_of_file());
    }

    #[test]
    fn crc_fingerprints_configuration_text() {
        let mut crc_a = XferCrc::new();
        {
            let mut ini = Ini::for_str("Health = 100\n");
            ini.set_crc(&mut crc_a);
            ini.read_line().unwrap();
        }
        let mut crc_b = XferCrc::new();
        {
            let mut ini = Ini::for_str("Health = 200\n");
            ini.set_crc(&mut crc_b);
            ini.read_line().unwrap();
        }
        assert_ne!(crc_a.crc(), crc_b.crc());
    }

    #[test]
    fn declaration_and_end_predicates() {
        assert!(is_declaration_of_type(
            "Object",
            "AmericaTank",
            "Object AmericaTank"
        ));
        assert!(is_declaration_of_type(
            "object",
            "americatank",
            "  OBJECT AmericaTank"
        ));
        assert!(!is_declaration_of_type(
            "Object",
            "AmericaTank",
            "Weapon TankCannon"
        ));
        assert!(!is_declaration_of_type(
            "Object",
            "ChinaTank",
            "Object AmericaTank"
        ));
        assert!(is_end_of_block("  End  "));
        assert!(!is_end_of_block("EndFrame"));
    }

    #[test]
    fn open_missing_file_reports_path() {
        let err = Ini::open(Path::new("/no/such/file.ini"), LoadType::Overwrite).unwrap_err();
        assert!(matches!(err.kind, IniErrorKind::CannotOpenFile(_)));
        assert!(err.to_string().contains("file.ini"));
    }
}
