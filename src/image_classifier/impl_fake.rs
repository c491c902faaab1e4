use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        _image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Classifying image...")?;

        let objects = [
            "dog", "cat", "person", "car", "chair", "table", "bird", "tree", "bicycle", "book",
            "laptop", "phone", "cup", "bottle", "keyboard", "mouse", "plant", "clock",
        ];

        let mut rng = rand::rng();

        // Roughly one frame in eight yields nothing, so the fallback path
        // gets exercised too
        let miss_dist = Uniform::new(0, 8)?;
        if miss_dist.sample(&mut rng) == 0 {
            return Ok(vec![]);
        }

        let index_dist = Uniform::new(0, objects.len())?;
        let confidence_dist = Uniform::new(0.0f32, 1.0)?;

        let classification = Classification {
            label: objects[index_dist.sample(&mut rng)].to_string(),
            confidence: confidence_dist.sample(&mut rng),
        };

        Ok(vec![classification])
    }
}
