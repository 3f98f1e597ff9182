//! RIFF header emission and output sinks.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{WaveError, WaveResult};
use crate::format::WaveFormat;
use crate::quantize::Quantized;

/// Size of the canonical header in bytes.
pub const HEADER_SIZE: usize = 44;

/// ChunkSize minus the data size: "WAVE" + fmt chunk + data chunk header.
pub const RIFF_OVERHEAD: u32 = 36;

/// Size of the PCM fmt chunk body.
pub const FMT_CHUNK_SIZE: u32 = 16;

/// AudioFormat tag for linear PCM.
pub const PCM_FORMAT_TAG: u16 = 1;

/// Writes the 44-byte canonical header.
///
/// # Arguments
/// * `out` - Buffer to append to
/// * `format` - Format parameters
/// * `data_size` - Size of the data chunk in bytes
pub fn write_header(out: &mut Vec<u8>, format: &WaveFormat, data_size: u32) {
    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(RIFF_OVERHEAD + data_size).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
    out.extend_from_slice(&PCM_FORMAT_TAG.to_le_bytes());
    out.extend_from_slice(&format.num_channels().to_le_bytes());
    out.extend_from_slice(&format.sample_rate().to_le_bytes());
    out.extend_from_slice(&format.byte_rate().to_le_bytes());
    out.extend_from_slice(&format.block_align().to_le_bytes());
    out.extend_from_slice(&format.bits_per_sample().to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
}

/// Builds the complete file image for already quantized samples.
///
/// # Errors
/// `DataTooLarge` if the data chunk cannot be described by the u32 size fields.
pub fn encode_to_vec(format: &WaveFormat, quantized: &Quantized) -> WaveResult<Vec<u8>> {
    let data_size = format.data_size(quantized.len())?;
    let mut buffer = Vec::with_capacity(HEADER_SIZE + data_size as usize);
    write_header(&mut buffer, format, data_size);
    quantized.write_frames(format.num_channels(), &mut buffer);
    debug_assert_eq!(buffer.len(), HEADER_SIZE + data_size as usize);
    Ok(buffer)
}

/// Hands a finished file image to a writer in one call and flushes it.
pub fn write_all_to<W: Write>(writer: &mut W, bytes: &[u8]) -> WaveResult<()> {
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}

/// Writes a finished file image to `path`.
///
/// The bytes go to a temporary file next to the destination, which is then
/// renamed over it. On any error the temporary file is removed and `path`
/// is left as it was.
pub fn persist_to_path(path: &Path, bytes: &[u8]) -> WaveResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| WaveError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
