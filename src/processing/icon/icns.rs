//! Apple icon image (ICNS) container.
//!
//! Layout, all integers big-endian:
//!
//! ```text
//! "icns" u32 total_len
//! ( OSType u32 element_len payload )*
//! ```
//!
//! `element_len` and `total_len` include their own 8-byte headers. Payloads
//! here are always PNG streams.

use crate::utils::{ConvertError, ConvertResult, icns_type_for};

const MAGIC: &[u8; 4] = b"icns";
const HEADER_LEN: usize = 8;

/// One element read back from an ICNS file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcnsElement {
    pub os_type: [u8; 4],
    pub data: Vec<u8>,
}

/// Packs PNG payloads keyed by edge length into an ICNS file.
pub fn pack_icns(images: &[(u32, Vec<u8>)]) -> ConvertResult<Vec<u8>> {
    let body_len: usize = images.iter().map(|(_, png)| png.len() + HEADER_LEN).sum();
    let mut out = Vec::with_capacity(HEADER_LEN + body_len);

    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&to_u32_len(HEADER_LEN + body_len)?.to_be_bytes());

    for (size, png) in images {
        let os_type = icns_type_for(*size)
            .ok_or_else(|| ConvertError::format(format!("No ICNS type for {size}×{size} icons")))?;
        out.extend_from_slice(&os_type);
        out.extend_from_slice(&to_u32_len(png.len() + HEADER_LEN)?.to_be_bytes());
        out.extend_from_slice(png);
    }

    Ok(out)
}

/// Splits an ICNS file into its elements.
pub fn parse_icns(bytes: &[u8]) -> ConvertResult<Vec<IcnsElement>> {
    let (magic, total) = read_header(bytes, 0)?;
    if &magic != MAGIC {
        return Err(ConvertError::format("Not an ICNS file"));
    }
    if total != bytes.len() {
        return Err(ConvertError::format(format!(
            "ICNS length field says {total} bytes, file has {}",
            bytes.len()
        )));
    }

    let mut elements = Vec::new();
    let mut offset = HEADER_LEN;
    while offset < bytes.len() {
        let (os_type, len) = read_header(bytes, offset)?;
        if len < HEADER_LEN || offset + len > bytes.len() {
            return Err(ConvertError::format(format!("Truncated ICNS element at offset {offset}")));
        }
        elements.push(IcnsElement {
            os_type,
            data: bytes[offset + HEADER_LEN..offset + len].to_vec(),
        });
        offset += len;
    }
    Ok(elements)
}

fn read_header(bytes: &[u8], offset: usize) -> ConvertResult<([u8; 4], usize)> {
    let header = bytes
        .get(offset..offset + HEADER_LEN)
        .ok_or_else(|| ConvertError::format(format!("Truncated ICNS header at offset {offset}")))?;
    let mut tag = [0u8; 4];
    tag.copy_from_slice(&header[..4]);
    let mut len = [0u8; 4];
    len.copy_from_slice(&header[4..]);
    Ok((tag, u32::from_be_bytes(len) as usize))
}

fn to_u32_len(len: usize) -> ConvertResult<u32> {
    u32::try_from(len).map_err(|_| ConvertError::format("ICNS data exceeds 4 GiB"))
}
