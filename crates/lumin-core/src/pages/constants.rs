//! Layout constants shared by the watch pages

use crate::layout::FACE_RADIUS_PX;
use crate::ui::{DISPLAY_CENTER, DISPLAY_HEIGHT_PX};

const CY: i32 = DISPLAY_CENTER.y;

// ============================================================================
// App Pages
// ============================================================================

/// Top of the app title
pub(super) const TITLE_Y_PX: i32 = DISPLAY_HEIGHT_PX as i32 * 32 / 100;

/// Top of the main readout (timer, stopwatch, BPM)
pub(super) const READOUT_Y_PX: i32 = CY;

/// Top of the OS version label on the settings page
pub(super) const VERSION_Y_PX: i32 = CY + 90;

/// Left inset of the settings toggle labels
pub(super) const TOGGLE_LABEL_INSET_PX: u32 = 10;

// ============================================================================
// Lock Screen
// ============================================================================

/// Top of the digital time under the face center
pub(super) const LOCK_DIGITAL_Y_PX: i32 = DISPLAY_HEIGHT_PX as i32 * 68 / 100;

/// Top of the unlock hint
pub(super) const LOCK_HINT_Y_PX: i32 = DISPLAY_HEIGHT_PX as i32 * 86 / 100;

pub(super) const HOUR_HAND_LENGTH_PX: f32 = FACE_RADIUS_PX * 0.5;
pub(super) const MINUTE_HAND_LENGTH_PX: f32 = FACE_RADIUS_PX * 0.7;
pub(super) const SECOND_HAND_LENGTH_PX: f32 = FACE_RADIUS_PX * 0.8;

pub(super) const HOUR_HAND_WIDTH_PX: u32 = 6;
pub(super) const MINUTE_HAND_WIDTH_PX: u32 = 4;
pub(super) const SECOND_HAND_WIDTH_PX: u32 = 2;

// ============================================================================
// Launcher
// ============================================================================

/// Icon scale at the start of the entrance fade
pub(super) const ICON_START_SCALE: f32 = 0.5;

// ============================================================================
// Status Bar
// ============================================================================

pub(super) const STATUS_TOP_PX: i32 = 10;
pub(super) const STATUS_RIGHT_PADDING_PX: i32 = 10;
pub(super) const STATUS_GAP_PX: i32 = 10;
pub(super) const BATTERY_WIDTH_PX: u32 = 50;
pub(super) const BATTERY_HEIGHT_PX: u32 = 20;
