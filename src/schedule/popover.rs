//! Popover placement: keep the detail box inside the viewport.
//!
//! Pure geometry over egui's math types. The caller lays the box's text
//! out first (its height depends on reflow), then asks for a corrected
//! position — measure, then correct, all within one frame.

use egui::{Pos2, Rect, Vec2};

/// Detail box width on desktop-width viewports.
pub const POPOVER_WIDTH: f32 = 250.0;
/// Viewports at or below this width get the mobile rules.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Gap between the trigger block and the box.
const GAP: f32 = 5.0;
/// Horizontal nudge off the trigger's left edge on desktop.
const POINTER_NUDGE: f32 = 10.0;
/// Clearance kept from the viewport's right edge after a clamp.
const EDGE_MARGIN: f32 = 10.0;
/// Clearance kept from the top/bottom edges in the touch variant.
const TOUCH_INSET: f32 = 8.0;

/// Final viewport-relative position for one popover instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverPlacement {
    pub top: f32,
    pub left: f32,
    pub width: f32,
}

impl PopoverPlacement {
    pub fn pos(&self) -> Pos2 {
        Pos2::new(self.left, self.top)
    }
}

pub fn is_mobile_width(viewport: Rect) -> bool {
    viewport.width() <= MOBILE_BREAKPOINT
}

/// Width the caller should measure its text at before asking for a
/// corrected position: fixed on desktop, the trigger's own width on
/// mobile-width viewports.
pub fn box_width_for(trigger: Rect, viewport: Rect) -> f32 {
    if is_mobile_width(viewport) {
        trigger.width()
    } else {
        POPOVER_WIDTH
    }
}

/// Place the box for a hover interaction.
///
/// Candidate below the trigger; flip above when the bottom would leave the
/// viewport; clamp the right edge on desktop. A degenerate trigger or an
/// unmeasured box yields the raw candidate — a block that is not laid out
/// yet must not panic the placement pass.
pub fn place_for_pointer(trigger: Rect, box_size: Vec2, viewport: Rect) -> PopoverPlacement {
    let mobile = is_mobile_width(viewport);
    let width = box_size.x;
    let mut left = if mobile {
        trigger.left()
    } else {
        trigger.left() + POINTER_NUDGE
    };
    let mut top = trigger.bottom() + GAP;

    if trigger.width() <= 0.0 || trigger.height() <= 0.0 || box_size.y <= 0.0 {
        return PopoverPlacement { top, left, width };
    }

    if top + box_size.y > viewport.height() {
        top = trigger.top() - box_size.y - GAP;
    }
    if !mobile && left + width > viewport.width() {
        left = viewport.width() - width - EDGE_MARGIN;
    }

    PopoverPlacement {
        top: top.max(0.0),
        left: left.max(0.0),
        width,
    }
}

/// Place the box for a touch interaction: vertically centered on the touch
/// point and clamped — never flipped — into the viewport. Touch targets are
/// full-width, so only the left edge needs a horizontal clamp.
pub fn place_for_touch(
    touch: Pos2,
    trigger: Rect,
    box_size: Vec2,
    viewport: Rect,
) -> PopoverPlacement {
    let width = box_size.x;
    let left = trigger.left().max(0.0);
    let mut top = touch.y - box_size.y / 2.0;

    if box_size.y > 0.0 {
        top = top.min(viewport.height() - box_size.y - TOUCH_INSET);
        top = top.max(TOUCH_INSET);
    }

    PopoverPlacement { top, left, width }
}

/// Identity of the block a popover is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockId {
    pub week: usize,
    pub day: usize,
    pub slot: usize,
}

/// How the visible popover was summoned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Pointer,
    Touch(Pos2),
}

/// Visibility state machine: `Hidden ⇄ Visible`.
///
/// At most one popover exists process-wide. Showing another block's box
/// replaces the current one with no intermediate transition, and hiding is
/// unconditional (pointer-leave, touch-end, or any scroll).
#[derive(Debug, Default)]
pub struct PopoverState {
    active: Option<(BlockId, Anchor)>,
}

impl PopoverState {
    pub fn show(&mut self, block: BlockId, anchor: Anchor) {
        self.active = Some((block, anchor));
    }

    pub fn hide(&mut self) {
        self.active = None;
    }

    pub fn visible(&self) -> Option<(BlockId, Anchor)> {
        self.active
    }
}
