use std::fmt;

use serde::{Deserialize, Serialize};

use super::artboard::{ArtboardDescriptor, Responsiveness};

/// Inclusive range of whole pixels. `max: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRange {
    pub min: u32,
    pub max: Option<u32>,
}

/// Container widths at which an artboard is the one displayed.
pub type VisibilityRange = PixelRange;

/// Widths an artboard may render at.
pub type WidthRange = PixelRange;

impl PixelRange {
    pub const UNBOUNDED: PixelRange = PixelRange { min: 0, max: None };

    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    pub fn contains(&self, width: u32) -> bool {
        width >= self.min && self.max.is_none_or(|max| width <= max)
    }
}

impl fmt::Display for PixelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "[{}, {max}]", self.min),
            None => write!(f, "[{}, ∞)", self.min),
        }
    }
}

/// Range of container widths in which `target` should be shown.
///
/// The narrowest artboard starts at 0, the widest never ends, and each
/// artboard ends one pixel before the next wider one starts. Ranges for all
/// members of a group therefore cover every width exactly once.
pub fn visibility_range(
    target: &ArtboardDescriptor,
    group: &[ArtboardDescriptor],
) -> VisibilityRange {
    let width = target.effective_width;
    let narrowest = group
        .iter()
        .map(|artboard| artboard.effective_width)
        .min()
        .unwrap_or(width);
    let next = group
        .iter()
        .map(|artboard| artboard.effective_width)
        .filter(|&w| w > width)
        .min();

    PixelRange {
        min: if width <= narrowest { 0 } else { width },
        max: next.map(|next| next - 1),
    }
}

/// Range of widths `target` may render at. Fixed artboards stay at their own
/// width, though the narrowest still reports no lower bound.
pub fn width_range(target: &ArtboardDescriptor, group: &[ArtboardDescriptor]) -> WidthRange {
    let visible = visibility_range(target, group);
    match target.responsiveness {
        Responsiveness::Fixed => {
            let width = target.effective_width;
            PixelRange {
                min: if visible.min == 0 { 0 } else { width },
                max: Some(width),
            }
        }
        Responsiveness::Dynamic => visible,
    }
}
