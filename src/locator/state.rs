//! Declarative lighting-controller states and the pure builders that produce them.
//!
//! A [`LocatorState`] serializes to the controller's JSON state protocol
//! (`{"on": .., "bri": .., "seg": [..]}`). Pushing one replaces whatever the
//! controller was showing.

use crate::rack::{RackError, RackLayout};
use serde::Serialize;

/// An `[r, g, b]` triple.
pub type Rgb = [u8; 3];

/// Color of the highlighted box.
pub const HIGHLIGHT_COLOR: Rgb = [255, 180, 0];
pub const HIGHLIGHT_BRIGHTNESS: u8 = 255;
/// Color of every box that is not highlighted.
pub const DIM_COLOR: Rgb = [20, 20, 20];
pub const DIM_BRIGHTNESS: u8 = 30;
/// Whole-rack brightness in standby (40% of full scale).
pub const STANDBY_BRIGHTNESS: u8 = 102;
pub const STANDBY_PALETTE: [Rgb; 3] = [[255, 180, 0], [0, 255, 128], [128, 0, 255]];
/// Controller effect id of the ambient rainbow animation.
pub const STANDBY_EFFECT: u8 = 9;

/// One controller segment: an inclusive range of light units and how to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub id: usize,
    pub start: u32,
    pub stop: u32,
    pub col: Vec<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bri: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fx: Option<u8>,
}

/// A complete controller state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatorState {
    pub on: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bri: Option<u8>,
    pub seg: Vec<Segment>,
}

impl LocatorState {
    /// Per-box state with at most one box lit.
    ///
    /// Every box `0..N` gets a segment in index order covering its light range.
    /// The segment at `highlight` uses [`HIGHLIGHT_COLOR`] at
    /// [`HIGHLIGHT_BRIGHTNESS`]; all others use [`DIM_COLOR`] at
    /// [`DIM_BRIGHTNESS`]. `None` dims every box, which is how the rack is reset.
    pub fn highlight(layout: &RackLayout, highlight: Option<usize>) -> Result<Self, RackError> {
        if let Some(index) = highlight {
            layout.to_coordinate(index)?;
        }
        let seg = (0..layout.box_count())
            .map(|index| {
                let range = layout.light_range(index)?;
                let (color, bri) = if Some(index) == highlight {
                    (HIGHLIGHT_COLOR, HIGHLIGHT_BRIGHTNESS)
                } else {
                    (DIM_COLOR, DIM_BRIGHTNESS)
                };
                Ok(Segment {
                    id: index,
                    start: range.start,
                    stop: range.stop,
                    col: vec![color],
                    bri: Some(bri),
                    fx: None,
                })
            })
            .collect::<Result<Vec<_>, RackError>>()?;
        Ok(Self {
            on: true,
            bri: None,
            seg,
        })
    }

    /// Whole-rack ambient state: one segment over every light unit running
    /// [`STANDBY_EFFECT`] at [`STANDBY_BRIGHTNESS`].
    pub fn standby(layout: &RackLayout) -> Self {
        Self {
            on: true,
            bri: Some(STANDBY_BRIGHTNESS),
            seg: vec![Segment {
                id: 0,
                start: 0,
                stop: layout.total_units() - 1,
                col: STANDBY_PALETTE.to_vec(),
                bri: None,
                fx: Some(STANDBY_EFFECT),
            }],
        }
    }

    /// The box rendered in the highlight color, if any.
    pub fn highlighted_box(&self) -> Option<usize> {
        if self.is_standby() {
            return None;
        }
        self.seg
            .iter()
            .find(|s| s.bri == Some(HIGHLIGHT_BRIGHTNESS) && s.col == [HIGHLIGHT_COLOR])
            .map(|s| s.id)
    }

    pub fn is_standby(&self) -> bool {
        self.seg.iter().any(|s| s.fx.is_some())
    }
}
