#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn ease_toward(self, target: Point, divisor: f64) -> Point {
        Point::new(
            self.x + (target.x - self.x) / divisor,
            self.y + (target.y - self.y) / divisor,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub center: Point,
    pub diameter: f64,
    pub opacity: f64,
}

impl ShapeStyle {
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn is_hidden(&self) -> bool {
        self.opacity <= 0.0
    }
}
