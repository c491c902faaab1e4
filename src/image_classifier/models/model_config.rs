#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    /// Optional text file with one class label per line, indexed by class id.
    pub labels_path: Option<String>,
    /// (height, width) expected by the model input.
    pub input_shape: (u32, u32),
}
