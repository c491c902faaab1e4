use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use image::DynamicImage;
use tract_onnx::prelude::*;

/// ONNX-backed classifier. The model is loaded once at construction and
/// treated as a black box mapping an image to ranked class scores.
pub struct ImageClassifierTract {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
    labels: Vec<String>,
}

impl ImageClassifierTract {
    pub fn new(config: ModelConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)?
            .into_optimized()?
            .into_runnable()?;

        let labels = match &config.labels_path {
            Some(path) => std::fs::read_to_string(path)?
                .lines()
                .map(|line| line.trim().to_string())
                .collect(),
            None => vec![],
        };

        Ok(Self {
            model,
            config,
            labels,
        })
    }

    fn label_for(&self, index: usize) -> String {
        self.labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("class {}", index))
    }
}

impl ImageClassifier for ImageClassifierTract {
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let (height, width) = self.config.input_shape;
        let input = resize_image_to_tensor(image, width, height)?;

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let output = outputs[0].to_array_view::<f32>()?;

        let mut predictions: Vec<(usize, f32)> = Vec::new();

        // Expects a [1, num_classes] score vector
        let shape = output.shape();
        if shape.len() >= 2 {
            for i in 0..shape[1] {
                if let Some(&score) = output.get([0, i]) {
                    if score > 0.1 {
                        predictions.push((i, score));
                    }
                }
            }
        }

        predictions.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        predictions.truncate(5);

        let classifications = predictions
            .into_iter()
            .map(|(class_idx, confidence)| Classification {
                label: self.label_for(class_idx),
                confidence,
            })
            .collect();

        Ok(classifications)
    }
}
