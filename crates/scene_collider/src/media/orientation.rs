//! EXIF orientation lookup for uploaded JPEG photos
//!
//! Walks the JPEG marker segments to the APP1 `Exif` block and reads tag
//! `0x0112` from the first image file directory.

const JPEG_SOI: u16 = 0xFFD8;
const APP1_MARKER: u16 = 0xFFE1;
const EXIF_SIGNATURE: u32 = 0x4578_6966;
const LITTLE_ENDIAN_TAG: u16 = 0x4949;
const ORIENTATION_TAG: u16 = 0x0112;
const IFD_ENTRY_SIZE: usize = 12;

/// Errors from orientation lookup
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationError {
    /// Data does not start with a JPEG start-of-image marker
    #[error("Not a JPEG image")]
    NotJpeg,
    /// No orientation tag present
    #[error("No EXIF orientation tag found")]
    NotFound,
    /// A segment points past the end of the data
    #[error("JPEG data truncated at offset {0}")]
    Truncated(usize),
}

/// Raw EXIF orientation value (1-8 for valid images)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExifOrientation(pub u16);

impl ExifOrientation {
    /// Raw tag value
    pub fn value(self) -> u16 {
        self.0
    }

    /// Clockwise rotation needed to display the image upright
    pub fn rotation_degrees(self) -> u16 {
        match self.0 {
            3 | 4 => 180,
            5 | 6 => 90,
            7 | 8 => 270,
            _ => 0,
        }
    }

    /// Whether the image is stored mirrored
    pub fn is_mirrored(self) -> bool {
        matches!(self.0, 2 | 4 | 5 | 7)
    }
}

/// Bounds-checked reads over the raw bytes
struct ByteView<'a> {
    bytes: &'a [u8],
}

impl ByteView<'_> {
    fn read<const N: usize>(&self, offset: usize) -> Result<[u8; N], OrientationError> {
        offset
            .checked_add(N)
            .and_then(|end| self.bytes.get(offset..end))
            .and_then(|slice| slice.try_into().ok())
            .ok_or(OrientationError::Truncated(offset))
    }

    fn u16(&self, offset: usize, little: bool) -> Result<u16, OrientationError> {
        let raw = self.read::<2>(offset)?;
        Ok(if little { u16::from_le_bytes(raw) } else { u16::from_be_bytes(raw) })
    }

    fn u32(&self, offset: usize, little: bool) -> Result<u32, OrientationError> {
        let raw = self.read::<4>(offset)?;
        Ok(if little { u32::from_le_bytes(raw) } else { u32::from_be_bytes(raw) })
    }
}

/// Read the EXIF orientation from JPEG bytes
pub fn read_jpeg_orientation(bytes: &[u8]) -> Result<ExifOrientation, OrientationError> {
    let view = ByteView { bytes };

    if bytes.len() < 2 || view.u16(0, false)? != JPEG_SOI {
        return Err(OrientationError::NotJpeg);
    }

    let mut offset = 2;
    while offset < bytes.len() {
        // Segment length field follows the two marker bytes
        if view.u16(offset + 2, false)? <= 8 {
            return Err(OrientationError::NotFound);
        }
        let marker = view.u16(offset, false)?;
        offset += 2;

        if marker == APP1_MARKER {
            offset += 2;
            if view.u32(offset, false)? != EXIF_SIGNATURE {
                return Err(OrientationError::NotFound);
            }

            // Skip "Exif\0\0" to the TIFF header
            offset += 6;
            let little = view.u16(offset, false)? == LITTLE_ENDIAN_TAG;
            offset = offset.saturating_add(view.u32(offset + 4, little)? as usize);

            let tags = usize::from(view.u16(offset, little)?);
            offset += 2;
            for entry in (0..tags).map(|i| offset + i * IFD_ENTRY_SIZE) {
                if view.u16(entry, little)? == ORIENTATION_TAG {
                    return view.u16(entry + 8, little).map(ExifOrientation);
                }
            }
            return Err(OrientationError::NotFound);
        } else if marker & 0xFF00 != 0xFF00 {
            break;
        }

        offset += usize::from(view.u16(offset, false)?);
    }

    Err(OrientationError::NotFound)
}
