//! Compiled-in catalog of entity ids, animation kinds, and frame layouts.
//!
//! The batch driver is driven entirely by this table; nothing here is
//! externally configurable.

use crate::frame::FrameBox;

/// Entity identifiers whose sprite directories are processed.
pub const ENEMY_IDS: &[&str] = &["2", "3"];

/// Uniform strip parameters: per-frame width, left margin before frame 0,
/// and gap between consecutive frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    pub frame_width: u32,
    pub offset_x: u32,
    pub spacing: u32,
}

/// How frame bounding boxes are resolved for an animation kind.
///
/// `Explicit` lists author-supplied boxes for irregular geometry; indices
/// past the list fall back to the strip computation. `Uniform` computes
/// every box from the strip parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLayout {
    Explicit {
        frames: &'static [FrameBox],
        strip: StripLayout,
    },
    Uniform(StripLayout),
}

impl FrameLayout {
    pub fn strip(&self) -> StripLayout {
        match self {
            FrameLayout::Explicit { strip, .. } => *strip,
            FrameLayout::Uniform(strip) => *strip,
        }
    }

    /// The author-supplied box list, if this layout has one.
    pub fn explicit_frames(&self) -> Option<&'static [FrameBox]> {
        match self {
            FrameLayout::Explicit { frames, .. } => Some(frames),
            FrameLayout::Uniform(_) => None,
        }
    }
}

const STRIP_42: StripLayout = StripLayout {
    frame_width: 42,
    offset_x: 0,
    spacing: 0,
};

// 42px frames on a 252px strip, as authored in the source sheets.
const FRAMES_42_X6: &[FrameBox] = &[
    FrameBox::new(0, 0, 42, 42),
    FrameBox::new(42, 0, 84, 42),
    FrameBox::new(84, 0, 126, 42),
    FrameBox::new(126, 0, 168, 42),
    FrameBox::new(168, 0, 210, 42),
    FrameBox::new(210, 0, 252, 42),
];

const FRAMES_42_X3: &[FrameBox] = &[
    FrameBox::new(0, 0, 42, 42),
    FrameBox::new(42, 0, 84, 42),
    FrameBox::new(84, 0, 126, 42),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Idle,
    Walk,
    Run,
    Attack,
    Hurt,
    Death,
    Jump,
}

impl AnimationKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "idle" => Some(AnimationKind::Idle),
            "walk" => Some(AnimationKind::Walk),
            "run" => Some(AnimationKind::Run),
            "attack" => Some(AnimationKind::Attack),
            "hurt" => Some(AnimationKind::Hurt),
            "death" => Some(AnimationKind::Death),
            "jump" => Some(AnimationKind::Jump),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationKind::Idle => "idle",
            AnimationKind::Walk => "walk",
            AnimationKind::Run => "run",
            AnimationKind::Attack => "attack",
            AnimationKind::Hurt => "hurt",
            AnimationKind::Death => "death",
            AnimationKind::Jump => "jump",
        }
    }

    pub fn layout(self) -> &'static FrameLayout {
        static EXPLICIT_X6: FrameLayout = FrameLayout::Explicit {
            frames: FRAMES_42_X6,
            strip: STRIP_42,
        };
        static EXPLICIT_X3: FrameLayout = FrameLayout::Explicit {
            frames: FRAMES_42_X3,
            strip: STRIP_42,
        };
        static UNIFORM_42: FrameLayout = FrameLayout::Uniform(STRIP_42);

        match self {
            AnimationKind::Idle | AnimationKind::Death | AnimationKind::Jump => &EXPLICIT_X6,
            AnimationKind::Walk | AnimationKind::Run | AnimationKind::Attack => &UNIFORM_42,
            AnimationKind::Hurt => &EXPLICIT_X3,
        }
    }
}

/// One batch-driver work item: which sheet file to read, where the frames
/// go, how many there are, and which layout resolves them.
#[derive(Debug, Clone, Copy)]
pub struct AnimationSpec {
    /// Sheet file name without extension, as shipped (`Attack1.png` etc).
    pub sheet_name: &'static str,
    /// Output directory name. Lowercased sheet name, except `Attack1`
    /// which the original assets map to plain `attack`.
    pub output_name: &'static str,
    pub frames: u32,
    pub kind: AnimationKind,
}

pub const ANIMATIONS: &[AnimationSpec] = &[
    AnimationSpec {
        sheet_name: "Idle",
        output_name: "idle",
        frames: 6,
        kind: AnimationKind::Idle,
    },
    AnimationSpec {
        sheet_name: "Walk",
        output_name: "walk",
        frames: 6,
        kind: AnimationKind::Walk,
    },
    AnimationSpec {
        sheet_name: "Attack1",
        output_name: "attack",
        frames: 6,
        kind: AnimationKind::Attack,
    },
    AnimationSpec {
        sheet_name: "Hurt",
        output_name: "hurt",
        frames: 3,
        kind: AnimationKind::Hurt,
    },
    AnimationSpec {
        sheet_name: "Death",
        output_name: "death",
        frames: 6,
        kind: AnimationKind::Death,
    },
    AnimationSpec {
        sheet_name: "Run",
        output_name: "run",
        frames: 6,
        kind: AnimationKind::Run,
    },
    AnimationSpec {
        sheet_name: "Jump",
        output_name: "jump",
        frames: 6,
        kind: AnimationKind::Jump,
    },
];
