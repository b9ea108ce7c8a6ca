//! Fixed-offset decoding of the FAT32 boot parameter block.

use std::io;
use std::io::prelude::*;
use std::io::SeekFrom;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::Result;

pub trait ReadSeek: Read + Seek {}
impl<T> ReadSeek for T where T: Read + Seek {}

// Byte offsets into the first sector, absolute from the start of the image.
const BYTES_PER_SECTOR_OFFSET: u64 = 11;
const SECTORS_PER_CLUSTER_OFFSET: u64 = 13;
const RESERVED_SECTORS_OFFSET: u64 = 14;
const FATS_OFFSET: u64 = 16;
const SECTORS_PER_FAT_32_OFFSET: u64 = 36;

/// The subset of the boot parameter block reported by `info`.
///
/// Multi-byte fields are little-endian on disk. The widths match the
/// on-disk layout but keep the signed interpretation the report format
/// was defined on, so a raw byte of 0xF8 in `sectors_per_cluster`
/// decodes as -8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiosParameterBlock {
    pub bytes_per_sector: i16,
    pub sectors_per_cluster: i8,
    pub reserved_sectors: i16,
    pub fats: i8,
    pub sectors_per_fat_32: i32,
}

impl BiosParameterBlock {
    /// Reads the block from `rdr`, seeking to each field's absolute
    /// offset first; the stream's prior position does not matter.
    pub fn read<T: ReadSeek>(rdr: &mut T) -> Result<Self> {
        rdr.seek(SeekFrom::Start(BYTES_PER_SECTOR_OFFSET))?;
        let bytes_per_sector = rdr.read_i16::<LittleEndian>()?;
        rdr.seek(SeekFrom::Start(SECTORS_PER_CLUSTER_OFFSET))?;
        let sectors_per_cluster = rdr.read_i8()?;
        rdr.seek(SeekFrom::Start(RESERVED_SECTORS_OFFSET))?;
        let reserved_sectors = rdr.read_i16::<LittleEndian>()?;
        rdr.seek(SeekFrom::Start(FATS_OFFSET))?;
        let fats = rdr.read_i8()?;
        rdr.seek(SeekFrom::Start(SECTORS_PER_FAT_32_OFFSET))?;
        let sectors_per_fat_32 = rdr.read_i32::<LittleEndian>()?;

        Ok(BiosParameterBlock {
            bytes_per_sector,
            sectors_per_cluster,
            reserved_sectors,
            fats,
            sectors_per_fat_32,
        })
    }

    /// Writes one line per field, decimal then unpadded lowercase hex.
    /// Hex widens to 32 bits first, so negative narrow fields print
    /// sign-extended.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "BPB_BytesPerSec: {}, {:x}", self.bytes_per_sector, hex(self.bytes_per_sector.into()))?;
        writeln!(out, "BPB_SecPerClus: {}, {:x}", self.sectors_per_cluster, hex(self.sectors_per_cluster.into()))?;
        writeln!(out, "BPB_RsvdSecCnt: {}, {:x}", self.reserved_sectors, hex(self.reserved_sectors.into()))?;
        writeln!(out, "BPB_NumFats: {}, {:x}", self.fats, hex(self.fats.into()))?;
        writeln!(out, "BPB_FATSz32: {}, {:x}", self.sectors_per_fat_32, hex(self.sectors_per_fat_32))
    }
}

fn hex(value: i32) -> u32 {
    value as u32
}
