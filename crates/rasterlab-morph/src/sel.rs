//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element is a square boolean mask with an odd side length.
//! Its origin is the central cell; `true` cells ("hits") are the neighbours
//! that take part in the min/max reduction.

use crate::{MorphError, MorphResult};
use std::fmt;
use std::str::FromStr;

const SQUARE3: &[&str] = &["xxx", "xxx", "xxx"];
const SQUARE5: &[&str] = &["xxxxx", "xxxxx", "xxxxx", "xxxxx", "xxxxx"];
const DISK5: &[&str] = &[".xxx.", "xxxxx", "xxxxx", "xxxxx", ".xxx."];
const CROSS5: &[&str] = &["..x..", "..x..", "xxxxx", "..x..", "..x.."];

/// Structuring Element (SEL)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    size: u32,
    data: Vec<bool>,
    name: Option<String>,
}

fn check_sel_size(size: u32) -> MorphResult<()> {
    if size == 0 || size % 2 == 0 {
        return Err(MorphError::InvalidSel(format!(
            "size must be odd and >= 1, got {size}"
        )));
    }
    Ok(())
}

impl Sel {
    /// Create a structuring element with no active cells
    pub fn new(size: u32) -> MorphResult<Self> {
        check_sel_size(size)?;
        Ok(Sel {
            size,
            data: vec![false; (size as usize) * (size as usize)],
            name: None,
        })
    }

    /// Create a `size x size` square with every cell active
    pub fn create_square(size: u32) -> MorphResult<Self> {
        let mut sel = Self::new(size)?;
        sel.data.fill(true);
        sel.name = Some(format!("square{size}"));
        Ok(sel)
    }

    /// Create a plus-shaped element: the central row and column are active
    pub fn create_cross(size: u32) -> MorphResult<Self> {
        let mut sel = Self::new(size)?;
        let c = size / 2;
        for i in 0..size {
            sel.set(i, c, true);
            sel.set(c, i, true);
        }
        sel.name = Some(format!("cross{size}"));
        Ok(sel)
    }

    /// Create a disk of the given radius
    ///
    /// The side length is `2 * radius + 1`. A cell at offset `(dx, dy)` is
    /// active when `dx² + dy² <= radius * (radius + 1)`, so radius 1 is the
    /// full 3x3 square and radius 2 is the 5x5 square with its four corners
    /// cleared.
    pub fn create_disk(radius: u32) -> MorphResult<Self> {
        let size = radius
            .checked_mul(2)
            .and_then(|d| d.checked_add(1))
            .ok_or_else(|| MorphError::InvalidSel(format!("disk radius {radius} too large")))?;
        let mut sel = Self::new(size)?;
        let r = radius as i64;
        let limit = r * (r + 1);
        for y in 0..size {
            for x in 0..size {
                let dx = x as i64 - r;
                let dy = y as i64 - r;
                sel.set(x, y, dx * dx + dy * dy <= limit);
            }
        }
        sel.name = Some(format!("disk{radius}"));
        Ok(sel)
    }

    /// Create the 1x1 element whose only cell is its origin
    pub fn identity() -> Self {
        Sel {
            size: 1,
            data: vec![true],
            name: Some("identity".to_string()),
        }
    }

    /// Create a structuring element from a text pattern
    ///
    /// # Arguments
    ///
    /// * `pattern` - Rows separated by newlines; `x` marks an active cell,
    ///   `.` or `o` an inactive one. Blank lines and surrounding whitespace
    ///   are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] if the pattern is not a square
    /// with an odd side, or contains any other character.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterlab_morph::Sel;
    ///
    /// let sel = Sel::from_string(".x.\nxxx\n.x.").unwrap();
    /// assert_eq!(sel, Sel::create_cross(3).unwrap().with_name(None));
    /// ```
    pub fn from_string(pattern: &str) -> MorphResult<Self> {
        let rows: Vec<&str> = pattern
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let size = rows.len() as u32;
        check_sel_size(size)?;

        let mut sel = Self::new(size)?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != size as usize {
                return Err(MorphError::InvalidSel(format!(
                    "row {y} has {} cells, expected {size}",
                    row.chars().count()
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                let hit = match ch {
                    'x' | 'X' => true,
                    '.' | 'o' | 'O' => false,
                    other => {
                        return Err(MorphError::InvalidSel(format!(
                            "unexpected character {other:?} at ({x}, {y})"
                        )));
                    }
                };
                sel.set(x as u32, y as u32, hit);
            }
        }
        Ok(sel)
    }

    /// Create the element for a built-in shape
    pub fn from_shape(shape: StructShape) -> Self {
        let (size, pattern) = match shape {
            StructShape::Square3 => (3, SQUARE3),
            StructShape::Square5 => (5, SQUARE5),
            StructShape::Disk => (5, DISK5),
            StructShape::Cross => (5, CROSS5),
        };
        let data = pattern
            .iter()
            .flat_map(|row| row.bytes().map(|b| b == b'x'))
            .collect();
        Sel {
            size,
            data,
            name: Some(shape.name().to_string()),
        }
    }

    /// Get the side length
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get the origin, which is the central cell (`size / 2`, `size / 2`)
    #[inline]
    pub fn origin(&self) -> (u32, u32) {
        (self.size / 2, self.size / 2)
    }

    /// Get the name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replace the name
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Check whether the cell at (x, y) is active
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x < self.size && y < self.size {
            Some(self.data[(y * self.size + x) as usize])
        } else {
            None
        }
    }

    /// Set the cell at (x, y). Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, hit: bool) {
        if x < self.size && y < self.size {
            self.data[(y * self.size + x) as usize] = hit;
        }
    }

    /// Get the mask in row-major order
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Count active cells
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&hit| hit).count()
    }

    /// Iterate over active positions relative to the origin
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let c = (self.size / 2) as i32;
        let size = self.size;

        self.data
            .iter()
            .enumerate()
            .filter_map(move |(idx, &hit)| {
                if hit {
                    let x = (idx as u32 % size) as i32;
                    let y = (idx as u32 / size) as i32;
                    Some((x - c, y - c))
                } else {
                    None
                }
            })
    }
}

impl fmt::Display for Sel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.data.chunks(self.size as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &hit in row {
                f.write_str(if hit { "x" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Built-in structuring element shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StructShape {
    /// 3x3, all cells active
    #[default]
    Square3,
    /// 5x5, all cells active
    Square5,
    /// 5x5 with the four corner cells cleared
    Disk,
    /// 5x5 plus sign (central row and column)
    Cross,
}

impl StructShape {
    /// All built-in shapes, in menu order.
    pub const ALL: [StructShape; 4] = [
        StructShape::Square3,
        StructShape::Square5,
        StructShape::Disk,
        StructShape::Cross,
    ];

    /// Get the canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            StructShape::Square3 => "square3",
            StructShape::Square5 => "square5",
            StructShape::Disk => "disk",
            StructShape::Cross => "cross",
        }
    }

    /// Build the mask for this shape.
    pub fn to_sel(self) -> Sel {
        Sel::from_shape(self)
    }

    /// Parse a shape name, falling back to [`StructShape::Square3`].
    ///
    /// Unrecognised names are not an error here: they select the 3x3
    /// square and log a warning. Use [`str::parse`] for strict parsing.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(shape = name, "unknown structuring element, using square3");
            StructShape::Square3
        })
    }
}

impl fmt::Display for StructShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StructShape {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square3" | "square-3x3" | "3x3" => Ok(StructShape::Square3),
            "square5" | "square-5x5" | "5x5" => Ok(StructShape::Square5),
            "disk" | "circle" => Ok(StructShape::Disk),
            "cross" | "plus" => Ok(StructShape::Cross),
            _ => Err(MorphError::UnsupportedShape(s.to_string())),
        }
    }
}
