/// Fraction of a turn the arc covers at full drag progress (~288 degrees).
pub const MAX_PROGRESS_ARC: f64 = 0.8;

/// Fraction of the trigger distance that is dead travel before the arc and
/// arrow start growing.
pub const RAMP_START: f64 = 0.4;

/// Turns of rotation accumulated by the time the drag reaches the trigger.
pub const ROTATION_AT_TRIGGER: f64 = 0.2;

/// Overshoot past the trigger stops adding tension beyond this many
/// trigger distances.
pub const TENSION_CAP: f64 = 2.0;

/// Arc-drawing parameters for one frame of the pull gesture.
///
/// Trims and rotation are fractions of a full turn; the renderer applies
/// the fixed 12 o'clock phase so `rotation` stays in `[0, 1]`. `offset` is
/// the glyph's vertical translation in pixels, resting at `-height`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Slingshot {
    pub offset: f64,
    pub start_trim: f64,
    pub end_trim: f64,
    pub rotation: f64,
    pub arrow_scale: f64,
}

/// Maps a drag offset to arc-drawing parameters.
///
/// `offset_y` is the drag distance so far, `max_offset_y` the trigger
/// distance, `height` the pixel height of the indicator's bounding box.
/// Negative offsets count as zero progress, and a non-positive trigger
/// makes progress zero instead of dividing by it. Pure: identical inputs
/// always produce identical outputs.
pub fn calculate_slingshot(offset_y: f64, max_offset_y: f64, height: f64) -> Slingshot {
    let progress = if max_offset_y > 0.0 {
        (offset_y / max_offset_y).clamp(0.0, 1.0)
    } else {
        0.0
    };

    // arc and arrow only grow over the last 60% of the drag
    let adjusted = ((progress - RAMP_START) / (1.0 - RAMP_START)).clamp(0.0, 1.0);

    // overshoot past the trigger, damped so the spin has diminishing
    // returns and saturates at TENSION_CAP trigger distances
    let tension = if max_offset_y > 0.0 {
        let extra = (offset_y - max_offset_y).max(0.0);
        let t = extra.min(TENSION_CAP * max_offset_y) / max_offset_y;
        2.0 * (t / 4.0 - (t / 4.0).powi(2))
    } else {
        0.0
    };

    let extra_move = 2.0 * max_offset_y * tension;

    Slingshot {
        offset: max_offset_y * progress + extra_move - height,
        start_trim: 0.0,
        end_trim: MAX_PROGRESS_ARC * adjusted,
        rotation: ROTATION_AT_TRIGGER * adjusted + tension,
        arrow_scale: adjusted,
    }
}
