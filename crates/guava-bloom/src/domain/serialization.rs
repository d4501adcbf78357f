//! Wire format shared with Guava's `BloomFilter.writeTo` / `readFrom`
//!
//! All fields are big-endian:
//!
//! | Offset | Size          | Field                                   |
//! |--------|---------------|-----------------------------------------|
//! | 0      | 1             | strategy ordinal                        |
//! | 1      | 1             | number of hash functions (unsigned)     |
//! | 2      | 4             | number of 64-bit blocks (unsigned)      |
//! | 6      | 8 * blocks    | bit array blocks, lowest index first    |
//!
//! There is no magic number or version byte.

use std::io::{self, Cursor, Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, BE};
use tracing::{debug, warn};

use crate::error::DecodeError;

use super::bit_vector::BitVector;
use super::bloom_filter::BloomFilter;
use super::strategy::{HashStrategy, Strategy};

/// Size of the fixed header in bytes
pub const HEADER_BYTES: usize = 6;

/// Upper bound on blocks reserved up front while reading, so a corrupt block count
/// cannot trigger a huge allocation before the data runs out.
const MAX_PREALLOCATED_BLOCKS: usize = 1 << 16;

/// Serialized size of a filter in bytes
pub fn serialized_size(filter: &BloomFilter) -> usize {
    HEADER_BYTES + filter.bits().block_count() * 8
}

/// Write a filter to a stream
pub fn write_filter<W: Write>(filter: &BloomFilter, writer: &mut W) -> io::Result<()> {
    let bits = filter.bits();
    writer.write_u8(filter.strategy().ordinal())?;
    writer.write_u8(filter.num_hash_functions())?;
    // Construction and decoding both cap the block count at u32::MAX.
    writer.write_u32::<BE>(bits.block_count() as u32)?;
    for block in bits.blocks() {
        writer.write_u64::<BE>(block)?;
    }
    Ok(())
}

/// Serialize a filter into a fresh buffer
pub fn encode(filter: &BloomFilter) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(serialized_size(filter));
    let written = write_filter(filter, &mut bytes);
    // `impl Write for Vec<u8>` never returns an error.
    debug_assert!(written.is_ok(), "writing into a Vec failed: {written:?}");
    bytes
}

/// Read a filter from a stream, consuming exactly one serialized filter
pub fn read_filter<R: Read>(reader: &mut R) -> Result<BloomFilter, DecodeError> {
    let result = read_filter_inner(reader);
    match &result {
        Ok(filter) => debug!(
            strategy = filter.strategy().name(),
            num_hash_functions = filter.num_hash_functions(),
            bit_size = filter.bit_size(),
            "Deserialized bloom filter"
        ),
        Err(e) => warn!(error = %e, "Failed to deserialize bloom filter"),
    }
    result
}

/// Deserialize a filter from a byte slice holding exactly one serialized filter
pub fn decode(bytes: &[u8]) -> Result<BloomFilter, DecodeError> {
    let mut cursor = Cursor::new(bytes);
    let filter = read_filter(&mut cursor)?;

    let remaining = bytes.len() - cursor.position() as usize;
    if remaining > 0 {
        warn!(remaining, "Trailing bytes after serialized bloom filter");
        return Err(DecodeError::TrailingBytes { remaining });
    }
    Ok(filter)
}

fn read_filter_inner<R: Read>(reader: &mut R) -> Result<BloomFilter, DecodeError> {
    fn make_error(field: &'static str) -> impl FnOnce(io::Error) -> DecodeError {
        move |e| match e.kind() {
            io::ErrorKind::UnexpectedEof => DecodeError::Truncated { field },
            _ => DecodeError::Io(e),
        }
    }

    let ordinal = reader.read_u8().map_err(make_error("strategy ordinal"))?;
    let strategy =
        Strategy::from_ordinal(ordinal).ok_or(DecodeError::UnknownStrategy { ordinal })?;

    let num_hash_functions = reader
        .read_u8()
        .map_err(make_error("number of hash functions"))?;
    if num_hash_functions == 0 {
        return Err(DecodeError::ZeroHashFunctions);
    }

    let block_count = reader.read_u32::<BE>().map_err(make_error("block count"))? as usize;
    if block_count == 0 {
        return Err(DecodeError::EmptyBitArray);
    }

    let mut blocks = Vec::with_capacity(block_count.min(MAX_PREALLOCATED_BLOCKS));
    for _ in 0..block_count {
        blocks.push(reader.read_u64::<BE>().map_err(make_error("bit blocks"))?);
    }

    Ok(BloomFilter::from_parts(
        strategy,
        num_hash_functions,
        BitVector::from_blocks(blocks),
    ))
}
