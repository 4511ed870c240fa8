//! Axis-aligned integer rectangles used for ship regions and buffer zones.
//!
//! Coordinates follow the screen convention: `x` grows to the right and `y`
//! grows downwards. `right` and `bottom` are exclusive, so a rectangle at
//! `(x, y)` with size `w×h` covers cells `x..x + w` by `y..y + h`.

use core::fmt;

/// Errors returned when a rectangle would have a non-positive dimension
/// or leave the `i32` coordinate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectError {
    /// Width must be strictly positive.
    InvalidWidth(i32),
    /// Height must be strictly positive.
    InvalidHeight(i32),
    /// Inflating would overflow the coordinate range.
    Overflow,
}

impl fmt::Display for RectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RectError::InvalidWidth(w) => write!(f, "InvalidWidth: width={} must be > 0", w),
            RectError::InvalidHeight(h) => write!(f, "InvalidHeight: height={} must be > 0", h),
            RectError::Overflow => write!(f, "Overflow: rectangle exceeds the i32 range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RectError {}

/// Rectangle with a strictly positive width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rect {
    /// Fallible constructor: rejects `width <= 0` or `height <= 0`.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, RectError> {
        check_width(width)?;
        check_height(height)?;
        Ok(Rect {
            x,
            y,
            width,
            height,
        })
    }

    /// Constructor for callers that already hold positive dimensions.
    pub(crate) const fn from_positive(x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Top edge.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Width in cells, always positive.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells, always positive.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Exclusive right edge, `x + width`, saturating at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, `y + height`, saturating at `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Moves the left edge, keeping the size.
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    /// Moves the top edge, keeping the size.
    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    /// Moves the top-left corner, keeping the size.
    pub fn set_location(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Sets the width; the rectangle is unchanged on error.
    pub fn set_width(&mut self, width: i32) -> Result<(), RectError> {
        check_width(width)?;
        self.width = width;
        Ok(())
    }

    /// Sets the height; the rectangle is unchanged on error.
    pub fn set_height(&mut self, height: i32) -> Result<(), RectError> {
        check_height(height)?;
        self.height = height;
        Ok(())
    }

    /// Returns `true` if `inner` lies entirely within `self`.
    /// Shared edges count as contained.
    pub fn contains(&self, inner: &Rect) -> bool {
        inner.x >= self.x
            && inner.y >= self.y
            && inner.right() <= self.right()
            && inner.bottom() <= self.bottom()
    }

    /// Returns `true` if the cell `(x, y)` is covered by the rectangle.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns `true` if the two rectangles share at least one cell.
    /// Touching edges do not intersect.
    pub fn intersects_with(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Grows the rectangle by `dx` on the left and right and by `dy` on the
    /// top and bottom. Negative amounts shrink it; a shrink that would leave
    /// a non-positive dimension fails and leaves the rectangle unchanged.
    pub fn inflate(&mut self, dx: i32, dy: i32) -> Result<(), RectError> {
        let grow = |len: i32, d: i32| d.checked_mul(2).and_then(|d2| len.checked_add(d2));
        let width = grow(self.width, dx).ok_or(RectError::Overflow)?;
        let height = grow(self.height, dy).ok_or(RectError::Overflow)?;
        check_width(width)?;
        check_height(height)?;
        let x = self.x.checked_sub(dx).ok_or(RectError::Overflow)?;
        let y = self.y.checked_sub(dy).ok_or(RectError::Overflow)?;
        *self = Rect {
            x,
            y,
            width,
            height,
        };
        Ok(())
    }

    /// Copy of the rectangle inflated by `(dx, dy)`.
    pub fn inflated(mut self, dx: i32, dy: i32) -> Result<Self, RectError> {
        self.inflate(dx, dy)?;
        Ok(self)
    }

    /// Iterate covered cells as `(x, y)`, row by row. Cells past
    /// `i32::MAX` are not yielded.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x, right) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |cy| (x..right).map(move |cx| (cx, cy)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}

fn check_width(width: i32) -> Result<(), RectError> {
    if width <= 0 {
        return Err(RectError::InvalidWidth(width));
    }
    Ok(())
}

fn check_height(height: i32) -> Result<(), RectError> {
    if height <= 0 {
        return Err(RectError::InvalidHeight(height));
    }
    Ok(())
}
