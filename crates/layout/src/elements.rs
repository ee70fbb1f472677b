use tilebg_style::ClassSet;
use tilebg_types::{Path, Point};

/// One positioned, styled path of the finished grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedPath {
    path: Path,
    classes: ClassSet,
}

impl PlacedPath {
    pub fn new(path: Path, classes: ClassSet) -> Self {
        Self { path, classes }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    pub fn points(&self) -> &[Point] {
        self.path.points()
    }

    pub fn is_closed(&self) -> bool {
        self.path.is_closed()
    }
}
