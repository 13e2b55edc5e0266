//! The static frame drawn every loop iteration.

/// An RGBA colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Create a colour from all four components.
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Components as an array, in RGBA order.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// An axis-aligned rectangle in world coordinates (y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum x.
    pub left: f32,
    /// Minimum y.
    pub bottom: f32,
    /// Maximum x.
    pub right: f32,
    /// Maximum y.
    pub top: f32,
}

impl Rect {
    /// Create a rectangle from two opposite corners.
    #[must_use]
    pub const fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Bounds as `[left, bottom, right, top]`.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.left, self.bottom, self.right, self.top]
    }
}

/// A 4x4 column-major projection matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    columns: [[f32; 4]; 4],
}

impl Projection {
    /// The identity projection.
    pub const IDENTITY: Self = Self {
        columns: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Orthographic projection mapping the given box onto the `[-1, 1]` cube.
    ///
    /// Matches the classic `glOrtho` convention: `near` and `far` are distances along
    /// the negative z axis, so z is flipped.
    #[must_use]
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Self {
            columns: [
                [2.0 / width, 0.0, 0.0, 0.0],
                [0.0, 2.0 / height, 0.0, 0.0],
                [0.0, 0.0, -2.0 / depth, 0.0],
                [
                    -(right + left) / width,
                    -(top + bottom) / height,
                    -(far + near) / depth,
                    1.0,
                ],
            ],
        }
    }

    /// The matrix columns.
    #[must_use]
    pub const fn columns(&self) -> [[f32; 4]; 4] {
        self.columns
    }

    /// Project a point, returning normalized device coordinates.
    #[must_use]
    pub fn transform(&self, point: [f32; 3]) -> [f32; 3] {
        let input = [point[0], point[1], point[2], 1.0];
        let mut out = [0.0_f32; 4];
        for (column, value) in self.columns.iter().zip(input) {
            for (row, cell) in out.iter_mut().enumerate() {
                *cell += column[row] * value;
            }
        }
        [out[0] / out[3], out[1] / out[3], out[2] / out[3]]
    }
}

/// What each frame shows: a cleared background and one filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    /// Background colour.
    pub clear_color: Color,
    /// Fill colour of the rectangle.
    pub rect_color: Color,
    /// The rectangle, in world coordinates.
    pub rect: Rect,
    /// Projection from world coordinates to the window.
    pub projection: Projection,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            clear_color: Color::rgba(0.5, 0.5, 0.5, 0.0),
            rect_color: Color::rgb(0.8, 0.2, 0.4),
            rect: Rect::new(-0.5, -0.5, 0.5, 0.5),
            projection: Projection::ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0),
        }
    }
}
