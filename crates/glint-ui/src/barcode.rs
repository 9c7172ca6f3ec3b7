//! Barcode image synthesis.
//!
//! Encoding a payload into a module matrix is the job of an external
//! [`BarcodeEncoder`]; this module owns the filter pipeline that turns the
//! matrix into a presentable image: rasterize at a fixed module scale,
//! invert, convert black to transparent, and tint with a constant color.
//! The result is a tinted code on a fully transparent background.

use glint_ui_graphics::Color;
use thiserror::Error;

/// Symbologies the image pipeline knows how to request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarcodeKind {
    Qr,
    Code128,
    Pdf417,
    Aztec,
}

/// QR error-correction level. Codes generated here default to [`High`]
/// so they stay scannable when overlaid or tinted against busy backdrops.
///
/// [`High`]: QrCorrection::High
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QrCorrection {
    Low,
    Medium,
    Quartile,
    #[default]
    High,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BarcodeError {
    #[error("encoder does not support {0:?}")]
    UnsupportedSymbology(BarcodeKind),
    #[error("payload cannot be represented as {0:?}")]
    InvalidPayload(BarcodeKind),
}

/// A single encode request handed to the external encoder.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest<'a> {
    pub kind: BarcodeKind,
    pub payload: &'a [u8],
    /// Only meaningful for [`BarcodeKind::Qr`]; other symbologies ignore it.
    pub correction: QrCorrection,
}

/// Module matrix produced by an encoder; `true` is a dark module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleBitmap {
    width: usize,
    height: usize,
    modules: Vec<bool>,
}

impl ModuleBitmap {
    /// `modules` is row-major and must hold `width * height` entries.
    pub fn new(width: usize, height: usize, modules: Vec<bool>) -> Self {
        debug_assert_eq!(modules.len(), width * height);
        Self {
            width,
            height,
            modules,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }
}

/// External collaborator that encodes payloads into module matrices.
pub trait BarcodeEncoder {
    fn encode(&self, request: &EncodeRequest<'_>) -> Result<ModuleBitmap, BarcodeError>;
}

/// RGBA bitmap with straight (non-premultiplied) 8-bit channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 4]>,
}

impl Pixmap {
    fn with_pixels(width: usize, height: usize, pixels: Vec<[u8; 4]>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        self.pixels[y * self.width + x]
    }

    fn map(&self, f: impl Fn([u8; 4]) -> [u8; 4]) -> Pixmap {
        Pixmap::with_pixels(
            self.width,
            self.height,
            self.pixels.iter().copied().map(f).collect(),
        )
    }

    /// Color inversion: each RGB channel is flipped, alpha is kept.
    pub fn inverted(&self) -> Pixmap {
        self.map(|[r, g, b, a]| [255 - r, 255 - g, 255 - b, a])
    }

    /// Mask-to-alpha: luminance becomes the alpha channel and the color is
    /// forced to white, so black pixels turn fully transparent.
    pub fn black_transparent(&self) -> Pixmap {
        self.map(|[r, g, b, _]| {
            let luminance = (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32)
                .round()
                .clamp(0.0, 255.0) as u8;
            [255, 255, 255, luminance]
        })
    }

    /// Invert then mask-to-alpha: dark content becomes opaque white on a
    /// transparent background.
    pub fn transparent(&self) -> Pixmap {
        self.inverted().black_transparent()
    }

    /// Multiply-composites a constant `color` over the transparent variant
    /// of this bitmap, leaving the content in `color` and the background
    /// untouched (transparent).
    pub fn tinted(&self, color: Color) -> Pixmap {
        let tint = color.to_rgba8();
        let multiply =
            |channel: u8, by: u8| ((channel as u16 * by as u16 + 127) / 255) as u8;
        self.transparent().map(|[r, g, b, a]| {
            [
                multiply(r, tint[0]),
                multiply(g, tint[1]),
                multiply(b, tint[2]),
                multiply(a, tint[3]),
            ]
        })
    }
}

/// Scale factor between encoder modules and output pixels.
pub const MODULE_SCALE: usize = 10;

/// Rasterizes a module matrix: dark modules become opaque black pixels,
/// light modules opaque white, each module `scale` pixels on a side.
pub fn rasterize(bitmap: &ModuleBitmap, scale: usize) -> Pixmap {
    let width = bitmap.width() * scale;
    let height = bitmap.height() * scale;
    let mut pixels = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let dark = bitmap.is_dark(x / scale, y / scale);
            pixels.push(if dark {
                [0, 0, 0, 255]
            } else {
                [255, 255, 255, 255]
            });
        }
    }

    Pixmap::with_pixels(width, height, pixels)
}

/// Runs the full pipeline: encode `code`, rasterize at [`MODULE_SCALE`],
/// and tint. QR requests carry high error correction.
pub fn barcode_image(
    encoder: &dyn BarcodeEncoder,
    kind: BarcodeKind,
    code: &str,
    color: Color,
) -> Result<Pixmap, BarcodeError> {
    let request = EncodeRequest {
        kind,
        payload: code.as_bytes(),
        correction: QrCorrection::High,
    };

    let modules = encoder.encode(&request)?;
    log::debug!(
        "encoded {kind:?} code into {}x{} modules",
        modules.width(),
        modules.height()
    );

    Ok(rasterize(&modules, MODULE_SCALE).tinted(color))
}
