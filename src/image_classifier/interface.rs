use image::DynamicImage;

/// A (label, confidence) pair produced by the classifier. Confidence is in
/// 0.0..=1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// One opaque inference call per frame. Results are ordered by descending
/// confidence.
pub trait ImageClassifier: Send + Sync {
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}
