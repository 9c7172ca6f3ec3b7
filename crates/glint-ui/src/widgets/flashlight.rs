//! Flashlight (torch) toggle.
//!
//! The torch hardware is an external collaborator behind the [`Torch`]
//! trait. The toggle flips its own state first and drives the device to
//! match; device failures revert the flip and are swallowed, so the control
//! never ends up showing a torch state the hardware refused.

use glint_ui_graphics::Color;
use thiserror::Error;

/// Torch brightness used when toggled on.
pub const FULL_TORCH_LEVEL: f32 = 1.0;

/// Glyph size as a fraction of the button diameter.
pub const GLYPH_RATIO: f32 = 0.5;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TorchError {
    #[error("torch hardware is unavailable")]
    Unavailable,
    #[error("torch configuration is locked by another client")]
    Locked,
}

/// External torch device.
pub trait Torch {
    /// Whether the device has a torch that can currently be used.
    fn is_available(&self) -> bool;

    fn set_on(&mut self, level: f32) -> Result<(), TorchError>;

    fn set_off(&mut self) -> Result<(), TorchError>;
}

/// Visual state of the toggle button for the host to render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlashlightVisuals {
    pub fill: Color,
    pub glyph: Color,
    pub glyph_ratio: f32,
}

/// Toggle controller for the torch.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlashlightToggle {
    is_on: bool,
}

impl FlashlightToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Whether the control should be shown at all.
    pub fn is_usable(&self, torch: &dyn Torch) -> bool {
        torch.is_available()
    }

    /// Flips the toggle and drives `torch` to the new state. Returns the
    /// resulting state; a device error reverts the flip.
    pub fn toggle(&mut self, torch: &mut dyn Torch) -> bool {
        if !torch.is_available() {
            return self.is_on;
        }

        self.is_on = !self.is_on;
        let driven = if self.is_on {
            torch.set_on(FULL_TORCH_LEVEL)
        } else {
            torch.set_off()
        };

        if let Err(error) = driven {
            log::trace!("torch refused {}: {error}", if self.is_on { "on" } else { "off" });
            self.is_on = !self.is_on;
        }

        self.is_on
    }

    /// On: bright button with an indigo glyph. Off: translucent button with
    /// a white glyph.
    pub fn visuals(&self) -> FlashlightVisuals {
        if self.is_on {
            FlashlightVisuals {
                fill: Color::WHITE.with_alpha(0.85),
                glyph: Color::INDIGO,
                glyph_ratio: GLYPH_RATIO,
            }
        } else {
            FlashlightVisuals {
                fill: Color::WHITE.with_alpha(0.15),
                glyph: Color::WHITE,
                glyph_ratio: GLYPH_RATIO,
            }
        }
    }
}
