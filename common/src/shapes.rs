use rand::Rng;

/// Axis-aligned rectangle in integer world units.
///
/// `(x, y)` is the top-left corner. The right and bottom edges are exclusive,
/// so two rectangles that only share an edge do not intersect.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    /// Saturates at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn half_width(&self) -> i32 {
        self.width / 2
    }

    pub fn half_height(&self) -> i32 {
        self.height / 2
    }

    /// Both extents strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Right and bottom edges are representable without saturating.
    pub fn edges_fit(&self) -> bool {
        self.x.checked_add(self.width).is_some() && self.y.checked_add(self.height).is_some()
    }

    // Check that `inner` lies fully inside self, touching edges allowed
    pub fn contains(&self, inner: &Rectangle) -> bool {
        self.x <= inner.x
            && self.right() >= inner.right()
            && self.y <= inner.y
            && self.bottom() >= inner.bottom()
    }

    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Grow outward by `amount` on every side, saturating at the `i32` range.
    pub fn inflate(&self, amount: i32) -> Rectangle {
        let twice = amount.saturating_mul(2);
        Rectangle {
            x: self.x.saturating_sub(amount),
            y: self.y.saturating_sub(amount),
            width: self.width.saturating_add(twice),
            height: self.height.saturating_add(twice),
        }
    }

    /// Same extents, moved by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> Rectangle {
        Rectangle {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Splits into top-left, top-right, bottom-left and bottom-right quadrants.
    ///
    /// On odd extents the right column and bottom row take the extra unit, so
    /// the four quadrants tile self exactly.
    pub fn quadrants(&self) -> [Rectangle; 4] {
        let half_w = self.half_width();
        let half_h = self.half_height();
        let rest_w = self.width - half_w;
        let rest_h = self.height - half_h;
        [
            Rectangle::new(self.x, self.y, half_w, half_h),
            Rectangle::new(self.x + half_w, self.y, rest_w, half_h),
            Rectangle::new(self.x, self.y + half_h, half_w, rest_h),
            Rectangle::new(self.x + half_w, self.y + half_h, rest_w, rest_h),
        ]
    }

    /// Splits into a 3x3 grid in row-major order. The last row and column
    /// absorb any remainder.
    pub fn grid3x3(&self) -> [Rectangle; 9] {
        let third_w = self.width / 3;
        let third_h = self.height / 3;
        let col_x = [self.x, self.x + third_w, self.x + third_w * 2];
        let col_w = [third_w, third_w, self.width - third_w * 2];
        let row_y = [self.y, self.y + third_h, self.y + third_h * 2];
        let row_h = [third_h, third_h, self.height - third_h * 2];

        let mut cells = [Rectangle::default(); 9];
        for row in 0..3 {
            for col in 0..3 {
                cells[row * 3 + col] = Rectangle::new(col_x[col], row_y[row], col_w[col], row_h[row]);
            }
        }
        cells
    }

    /// Random rectangle of at most `max_size` per side, placed fully inside self.
    pub fn get_random_rect_inside<R: Rng>(&self, max_size: (i32, i32), rng: &mut R) -> Rectangle {
        let width = rng.gen_range(1..=max_size.0.clamp(1, self.width.max(1)));
        let height = rng.gen_range(1..=max_size.1.clamp(1, self.height.max(1)));
        Rectangle::new(
            Self::safe_rand_i32(rng, self.left(), self.right() - width),
            Self::safe_rand_i32(rng, self.top(), self.bottom() - height),
            width,
            height,
        )
    }

    fn safe_rand_i32<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}
