use chrono::{DateTime, Utc};
use image::DynamicImage;

/// Which physical camera is active. Controls the mirroring correction
/// applied to captured frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceFacing {
    Front,
    Back,
}

impl DeviceFacing {
    pub fn toggled(self) -> Self {
        match self {
            DeviceFacing::Front => DeviceFacing::Back,
            DeviceFacing::Back => DeviceFacing::Front,
        }
    }
}

/// The 8 EXIF-style orientation tags. The tag describes the transform that
/// must be applied to the stored pixels to display the image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Up,
    UpMirrored,
    Down,
    DownMirrored,
    Left,
    LeftMirrored,
    Right,
    RightMirrored,
}

impl Orientation {
    /// Fixed lookup keyed by facing mode. The front sensor is mirrored, so
    /// it gets the mirrored-left correction; the back sensor gets
    /// mirrored-down.
    pub fn correction_for(facing: DeviceFacing) -> Orientation {
        match facing {
            DeviceFacing::Front => Orientation::LeftMirrored,
            DeviceFacing::Back => Orientation::DownMirrored,
        }
    }

    /// Apply this tag to the pixels, producing an upright image.
    pub fn apply(self, image: &DynamicImage) -> DynamicImage {
        match self {
            Orientation::Up => image.clone(),
            Orientation::UpMirrored => image.fliph(),
            Orientation::Down => image.rotate180(),
            Orientation::DownMirrored => image.flipv(),
            Orientation::Left => image.rotate270(),
            Orientation::LeftMirrored => image.rotate90().fliph(),
            Orientation::Right => image.rotate90(),
            Orientation::RightMirrored => image.rotate270().fliph(),
        }
    }
}

/// One captured image plus its orientation and facing metadata. Immutable
/// once captured; dropped after classification.
#[derive(Clone)]
pub struct Frame {
    pub image: DynamicImage,
    pub orientation: Orientation,
    pub facing: DeviceFacing,
    pub captured_at: DateTime<Utc>,
}

impl Frame {
    pub fn new(image: DynamicImage, facing: DeviceFacing) -> Self {
        Self {
            image,
            orientation: Orientation::Up,
            facing,
            captured_at: Utc::now(),
        }
    }

    /// Re-tag the frame with the orientation correction for the given
    /// facing mode. Pure; the pixels are untouched until `to_upright`.
    pub fn normalized(mut self, facing: DeviceFacing) -> Self {
        self.orientation = Orientation::correction_for(facing);
        self.facing = facing;
        self
    }

    /// Bake the orientation tag into the pixels.
    pub fn to_upright(&self) -> DynamicImage {
        self.orientation.apply(&self.image)
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("orientation", &self.orientation)
            .field("facing", &self.facing)
            .field("captured_at", &self.captured_at)
            .finish()
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation
            && self.facing == other.facing
            && self.captured_at == other.captured_at
            && self.image.as_bytes() == other.image.as_bytes()
    }
}
