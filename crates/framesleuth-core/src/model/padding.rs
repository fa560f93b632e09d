/// Frame padding specs, displayed in printf style (`%04d`).
use super::frame::FrameNumber;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Padding {
    /// Single-file "sequence"; there is no frame to format.
    #[default]
    None,
    /// Plain integer (`%d`).
    Unpadded,
    /// Zero-filled to a fixed width (`%0Nd`).
    Zeroed(usize),
}

impl Padding {
    /// Padding implied by the character width of a frame's digit run.
    /// Widths below 2 are never zero-filled.
    pub fn from_width(width: usize) -> Self {
        if width < 2 {
            Self::Unpadded
        } else {
            Self::Zeroed(width)
        }
    }

    /// Minimum rendered width; 0 when no zero-filling applies.
    pub fn width(self) -> usize {
        match self {
            Self::Zeroed(w) => w,
            Self::None | Self::Unpadded => 0,
        }
    }

    /// Render `frame` the way a member filename would spell it.
    pub fn format_frame(self, frame: &FrameNumber) -> String {
        frame.padded(self.width())
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Unpadded => f.write_str("%d"),
            Self::Zeroed(w) => write!(f, "%0{w}d"),
        }
    }
}

impl Serialize for Padding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_below_two_is_unpadded() {
        assert_eq!(Padding::from_width(0), Padding::Unpadded);
        assert_eq!(Padding::from_width(1), Padding::Unpadded);
        assert_eq!(Padding::from_width(2), Padding::Zeroed(2));
    }

    #[test]
    fn displays_printf_spec() {
        assert_eq!(Padding::None.to_string(), "");
        assert_eq!(Padding::Unpadded.to_string(), "%d");
        assert_eq!(Padding::Zeroed(4).to_string(), "%04d");
        assert_eq!(Padding::Zeroed(12).to_string(), "%012d");
    }

    #[test]
    fn formats_frames() {
        let seven = FrameNumber::from(7);
        assert_eq!(Padding::Zeroed(4).format_frame(&seven), "0007");
        assert_eq!(Padding::Unpadded.format_frame(&seven), "7");
        assert_eq!(Padding::Zeroed(2).format_frame(&FrameNumber::from(123)), "123");
    }
}
